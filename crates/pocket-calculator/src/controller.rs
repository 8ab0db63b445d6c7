//! The input state machine
//!
//! [`Calculator`] owns the [`Session`] and handles one [`InputEvent`] at a
//! time, to completion. Every handled event ends with the display text
//! being rendered to the [`DisplaySurface`].
//!
//! ```text
//! Fresh --op--> AwaitingOperand --digit/.--> TypingSecondOperand
//!   ^                                           |
//!   +------------- equals/op ok ----------------+
//!                                               |
//! Error <----------- equals/op failed ---------+
//!   |
//!   +--clear--> Fresh
//! ```

use tracing::{debug, trace};

use crate::config::CalculatorConfig;
use crate::core::number::{format_number, is_numeric, parse_operand};
use crate::core::session::INITIAL_DISPLAY;
use crate::core::{CalcError, Operator, Phase, Session};
use crate::input::InputEvent;
use crate::surface::{DiagnosticSink, DisplaySurface, EvaluationSite, TracingSink};

/// Button-driven calculator over a display surface and diagnostic sink
#[derive(Debug)]
pub struct Calculator<D, S = TracingSink> {
    session: Session,
    config: CalculatorConfig,
    display: D,
    sink: S,
}

impl<D: DisplaySurface> Calculator<D> {
    /// Creates a calculator with the default config, logging failures
    /// through `tracing`
    pub fn new(display: D) -> Self {
        Self::with_parts(CalculatorConfig::default(), display, TracingSink)
    }
}

impl<D: DisplaySurface, S: DiagnosticSink> Calculator<D, S> {
    /// Creates a calculator from its parts and renders the initial display
    pub fn with_parts(config: CalculatorConfig, display: D, sink: S) -> Self {
        let mut calculator = Self {
            session: Session::new(),
            config,
            display,
            sink,
        };
        calculator.refresh();
        calculator
    }

    /// Handles one input event, then refreshes the display
    pub fn handle(&mut self, event: InputEvent) {
        trace!(?event, "input");
        let before = self.phase();

        match event {
            InputEvent::Digit(digit) => self.input_digit(digit),
            InputEvent::Decimal => self.input_decimal(),
            InputEvent::Operator(op) => self.input_operator(op),
            InputEvent::Equals => self.input_equals(),
            InputEvent::Clear => self.session.reset(),
            InputEvent::Delete => self.input_delete(),
        }

        let after = self.phase();
        if before != after {
            debug!(?before, ?after, display = %self.session.display, "phase change");
        }
        self.refresh();
    }

    /// Handles a sequence of events in order
    pub fn handle_all<I>(&mut self, events: I)
    where
        I: IntoIterator<Item = InputEvent>,
    {
        for event in events {
            self.handle(event);
        }
    }

    /// Digit button (0-9); other values are ignored
    pub fn press_digit(&mut self, digit: u8) {
        self.handle(InputEvent::Digit(digit));
    }

    /// Decimal point button
    pub fn press_decimal(&mut self) {
        self.handle(InputEvent::Decimal);
    }

    /// Operator button
    pub fn press_operator(&mut self, op: Operator) {
        self.handle(InputEvent::Operator(op));
    }

    /// Equals button
    pub fn press_equals(&mut self) {
        self.handle(InputEvent::Equals);
    }

    /// Clear button
    pub fn press_clear(&mut self) {
        self.handle(InputEvent::Clear);
    }

    /// Delete button
    pub fn press_delete(&mut self) {
        self.handle(InputEvent::Delete);
    }

    /// The session record
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Current display text
    #[must_use]
    pub fn display_text(&self) -> &str {
        &self.session.display
    }

    /// Current phase of the session
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.session.phase(&self.config.error_marker)
    }

    /// Configuration in use
    #[must_use]
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// The display surface
    #[must_use]
    pub fn surface(&self) -> &D {
        &self.display
    }

    /// The display surface, mutably
    pub fn surface_mut(&mut self) -> &mut D {
        &mut self.display
    }

    /// The diagnostic sink
    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// The diagnostic sink, mutably
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Splits the calculator into its surface and sink
    pub fn into_parts(self) -> (D, S) {
        (self.display, self.sink)
    }

    fn input_digit(&mut self, digit: u8) {
        let Some(ch) = char::from_digit(u32::from(digit), 10) else {
            debug!(digit, "ignoring digit outside 0-9");
            return;
        };

        let session = &mut self.session;
        if session.awaiting_fresh_operand {
            session.display = ch.to_string();
            session.awaiting_fresh_operand = false;
        } else if replaces_on_digit(&session.display, &self.config.error_marker) {
            session.display = ch.to_string();
        } else {
            session.display.push(ch);
        }
    }

    fn input_decimal(&mut self) {
        let session = &mut self.session;
        if session.awaiting_fresh_operand || session.shows_error(&self.config.error_marker) {
            session.display = "0.".to_string();
            session.awaiting_fresh_operand = false;
        } else if accepts_decimal_point(&session.display) {
            session.display.push('.');
        }
    }

    fn input_operator(&mut self, next: Operator) {
        let Some((operand, pending_op)) = self.session.pending() else {
            // first operator of an operation
            self.session.pending_operand = Some(parse_operand(&self.session.display));
            self.session.pending_operator = Some(next);
            self.session.awaiting_fresh_operand = true;
            return;
        };

        if self.session.awaiting_fresh_operand {
            trace!(from = %pending_op, to = %next, "operator substituted");
            self.session.pending_operator = Some(next);
            return;
        }

        let rhs = parse_operand(&self.session.display);
        match pending_op.apply(operand, rhs) {
            Ok(result) => {
                debug!(lhs = operand, op = %pending_op, rhs, result, "chained");
                self.session.display = format_number(result);
                self.session.pending_operand = Some(result);
                self.session.pending_operator = Some(next);
                self.session.awaiting_fresh_operand = true;
            }
            Err(err) => self.enter_error(EvaluationSite::Chaining, &err),
        }
    }

    fn input_equals(&mut self) {
        let Some((operand, op)) = self.session.pending() else {
            trace!("equals with nothing pending");
            return;
        };

        let rhs = parse_operand(&self.session.display);
        match op.apply(operand, rhs) {
            Ok(result) => {
                debug!(lhs = operand, %op, rhs, result, "evaluated");
                self.session.display = format_number(result);
                self.session.clear_pending();
            }
            Err(err) => self.enter_error(EvaluationSite::Equals, &err),
        }
    }

    fn input_delete(&mut self) {
        let session = &mut self.session;
        if session.awaiting_fresh_operand || session.shows_error(&self.config.error_marker) {
            return;
        }

        session.display.pop();
        if !is_numeric(&session.display) {
            // emptied, or left as a lone sign / partial exponent
            session.display = INITIAL_DISPLAY.to_string();
        }
    }

    fn enter_error(&mut self, site: EvaluationSite, error: &CalcError) {
        self.session.display = self.config.error_marker.clone();
        self.session.clear_pending();
        self.sink.report(site, error);
    }

    fn refresh(&mut self) {
        self.display.render(&self.session.display);
    }
}

/// A digit replaces rather than extends this display text
fn replaces_on_digit(display: &str, error_marker: &str) -> bool {
    display == INITIAL_DISPLAY || display == error_marker || !parse_operand(display).is_finite()
}

/// A decimal point may be appended to this display text
fn accepts_decimal_point(display: &str) -> bool {
    !display.contains(|c: char| c == '.' || c == 'e') && parse_operand(display).is_finite()
}
