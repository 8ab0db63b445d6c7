//! Runs the shared interaction scenarios on every driver
//!
//! Failures go through `tracing`; install a test-writer subscriber so they
//! show up in captured test output.

#![allow(clippy::unwrap_used)]

use pocket_calculator::config::CalculatorConfig;
use pocket_calculator::driver::{run_all_scenarios, CalculatorDriver, DirectDriver};
use pocket_calculator::wasm::WasmDriver;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("pocket_calculator=debug"))
        .with_test_writer()
        .try_init();
}

fn marker_config() -> CalculatorConfig {
    CalculatorConfig::builder()
        .error_marker("Cannot divide")
        .clear_id("all-clear")
        .delete_id("backspace")
        .build()
        .unwrap()
}

#[test]
fn direct_driver_all_scenarios() {
    init_tracing();
    run_all_scenarios(&mut DirectDriver::new());
}

#[test]
fn wasm_driver_all_scenarios() {
    init_tracing();
    run_all_scenarios(&mut WasmDriver::new());
}

#[test]
fn drivers_with_custom_config() {
    init_tracing();
    run_all_scenarios(&mut DirectDriver::with_config(marker_config()));
    run_all_scenarios(&mut WasmDriver::with_config(marker_config()));
}

#[test]
fn same_session_on_both_drivers() {
    init_tracing();
    let script = "1 2 . 5 × 4 - 8 ÷ 2 = DEL 7 + . 2 5 =";
    let mut direct = DirectDriver::new();
    let mut wasm = WasmDriver::new();
    assert!(direct.press_all(script));
    assert!(wasm.press_all(script));

    // (12.5 * 4 - 8) / 2 = 21, DEL leaves 2, 7 makes 27, then + 0.25
    assert_eq!(direct.display(), "27.25");
    assert_eq!(wasm.display(), direct.display());
    assert_eq!(wasm.session(), direct.session());
}

#[test]
fn error_recovery_on_both_drivers() {
    init_tracing();
    let mut drivers: Vec<Box<dyn CalculatorDriver>> =
        vec![Box::new(DirectDriver::new()), Box::new(WasmDriver::new())];
    for driver in &mut drivers {
        driver.press_all("8 ÷ 0 = 3 + 4 =");
        assert_eq!(driver.display(), "7");
        assert_eq!(driver.diagnostics().len(), 1);
    }
}
