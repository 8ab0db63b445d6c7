//! Number <-> display text conversion
//!
//! The display holds text, operands are `f64`. Conversion follows the
//! browser's `String(n)` and `Number(s)` so results read the same as they
//! did on the web page: `10` not `10.0`, `0.30000000000000004`, `1e+21`.

use std::iter;

/// Largest decimal exponent (exclusive) written without exponent form
const MAX_PLAIN_EXPONENT: i32 = 21;
/// Smallest decimal exponent (exclusive) written without exponent form
const MIN_PLAIN_EXPONENT: i32 = -6;

/// Formats a value for the display
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        // covers -0 as well
        return "0".to_string();
    }

    // `{:e}` yields the shortest round-trip digits, e.g. "1.2345e3"
    let scientific = format!("{:e}", value.abs());
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let exponent: i32 = exponent.parse().unwrap_or(0);

    let k = digits.len() as i32;
    let n = exponent + 1;

    let mut out = String::with_capacity(digits.len() + 8);
    if value < 0.0 {
        out.push('-');
    }

    if k <= n && n <= MAX_PLAIN_EXPONENT {
        out.push_str(&digits);
        out.extend(iter::repeat('0').take((n - k) as usize));
    } else if 0 < n && n <= MAX_PLAIN_EXPONENT {
        let (int_part, frac_part) = digits.split_at(n as usize);
        out.push_str(int_part);
        out.push('.');
        out.push_str(frac_part);
    } else if MIN_PLAIN_EXPONENT < n && n <= 0 {
        out.push_str("0.");
        out.extend(iter::repeat('0').take((-n) as usize));
        out.push_str(&digits);
    } else {
        let (lead, rest) = digits.split_at(1);
        out.push_str(lead);
        if !rest.is_empty() {
            out.push('.');
            out.push_str(rest);
        }
        out.push('e');
        out.push(if n > 0 { '+' } else { '-' });
        out.push_str(&(n - 1).abs().to_string());
    }
    out
}

/// Reads display text as an operand
///
/// Blank text is `0`; text that is not a number (the error marker) is NaN.
#[must_use]
pub fn parse_operand(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// True when `text` reads as a number (NaN included, since `"NaN"` is a
/// legitimate result)
#[must_use]
pub fn is_numeric(text: &str) -> bool {
    let trimmed = text.trim();
    !trimmed.is_empty() && trimmed.parse::<f64>().is_ok()
}
