//! Keypad Session Demo
//!
//! Clicks through the mock page with the WasmDriver, then runs the shared
//! scenarios on both drivers.
//!
//! Run with: RUST_LOG=pocket_calculator=debug cargo run --example keypad_session

#![allow(clippy::unwrap_used)]

use pocket_calculator::config::CalculatorConfig;
use pocket_calculator::driver::{run_all_scenarios, CalculatorDriver, DirectDriver};
use pocket_calculator::wasm::WasmDriver;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║             Pocket Calculator - Mock Page Session            ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    let config = CalculatorConfig::default();
    println!("📦 Configuration:");
    println!("{}", config.to_json().unwrap());
    println!();

    let mut driver = WasmDriver::with_config(config);

    println!("🧮 Clicking buttons:");
    for id in ["btn-1", "btn-2", "btn-plus", "btn-3", "btn-0", "btn-equals"] {
        let event = driver.click(id);
        println!(
            "   {id:<12} -> {:<28} display = {}",
            format!("{event:?}"),
            driver.display()
        );
    }

    println!("\n⌨️  Typing on the keyboard: 9 / 0 Enter");
    for key in ["9", "/", "0", "Enter"] {
        driver.press_key(key);
    }
    println!("   display = {}", driver.display());
    println!("   phase   = {:?}", driver.phase());
    println!("   errors  = {:?}", driver.diagnostics());

    println!("\n🧹 Escape clears:");
    driver.press_key("Escape");
    println!("   display = {}", driver.display());

    println!("\n📜 DOM event history:");
    for (i, event) in driver.dom().event_history().iter().enumerate() {
        println!("   [{i:>2}] {event:?}");
    }

    println!("\n✅ Shared scenarios:");
    run_all_scenarios(&mut DirectDriver::new());
    println!("   DirectDriver passed");
    run_all_scenarios(&mut WasmDriver::new());
    println!("   WasmDriver passed");
}
