//! Web front end
//!
//! The mock page, keypad and driver are always compiled so the DOM wiring
//! is testable natively; the wasm-bindgen bindings need the `wasm` feature.

#[cfg(feature = "wasm")]
mod browser;
mod dom;
mod driver;
mod keypad;

#[cfg(feature = "wasm")]
pub use browser::{BrowserCalculator, ConsoleSink, ElementDisplay};
pub use dom::{DomDisplay, DomElement, DomEvent, MockDom};
pub use driver::WasmDriver;
pub use keypad::{ButtonClass, KeypadButtonDef, MockDomKeypadExt, WasmKeypad, KEYPAD_ID};
