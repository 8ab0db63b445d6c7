//! WASM driver
//!
//! Runs the calculator against the mock page: clicks go through the DOM,
//! get resolved by the keypad, and the display element is what tests read.

use super::dom::{DomDisplay, DomEvent, MockDom};
use super::keypad::{MockDomKeypadExt, WasmKeypad};
use crate::config::CalculatorConfig;
use crate::controller::Calculator;
use crate::core::{CalcError, Session};
use crate::driver::CalculatorDriver;
use crate::input::InputEvent;
use crate::surface::RecordingSink;

/// WASM driver wrapping the calculator, its page and keypad
#[derive(Debug)]
pub struct WasmDriver {
    calculator: Calculator<DomDisplay, RecordingSink>,
    keypad: WasmKeypad,
}

impl Default for WasmDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl WasmDriver {
    /// Creates a driver on the default page
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(CalculatorConfig::default())
    }

    /// Creates a driver whose page is laid out per `config`
    #[must_use]
    pub fn with_config(config: CalculatorConfig) -> Self {
        let keypad = WasmKeypad::with_config(&config);
        let dom = MockDom::calculator(&config, &keypad);
        let display = DomDisplay::new(dom, &config.display_id);
        Self {
            calculator: Calculator::with_parts(config, display, RecordingSink::new()),
            keypad,
        }
    }

    /// Returns a reference to the calculator
    #[must_use]
    pub fn calculator(&self) -> &Calculator<DomDisplay, RecordingSink> {
        &self.calculator
    }

    /// Returns the keypad
    #[must_use]
    pub fn keypad(&self) -> &WasmKeypad {
        &self.keypad
    }

    /// Returns a reference to the DOM
    #[must_use]
    pub fn dom(&self) -> &MockDom {
        self.calculator.surface().dom()
    }

    /// Returns a mutable reference to the DOM
    pub fn dom_mut(&mut self) -> &mut MockDom {
        self.calculator.surface_mut().dom_mut()
    }

    /// Simulates a click on `element_id`; returns the event it produced,
    /// if any
    pub fn click(&mut self, element_id: &str) -> Option<InputEvent> {
        self.dom_mut().dispatch_event(DomEvent::click(element_id));
        let event = self.keypad.resolve_click(self.dom(), element_id)?;
        self.calculator.handle(event);
        Some(event)
    }

    /// Clicks the button labelled `label`
    pub fn click_label(&mut self, label: &str) -> Option<InputEvent> {
        let event = InputEvent::from_button_label(label)?;
        let id = self.keypad.find_button_by_event(event)?.id.clone();
        self.click(&id)
    }

    /// Simulates a key press on the document; ignored when keyboard input
    /// is disabled
    pub fn press_key(&mut self, key: &str) -> Option<InputEvent> {
        self.dom_mut().dispatch_event(DomEvent::key_down(key));
        if !self.calculator.config().keyboard {
            return None;
        }
        let event = WasmKeypad::key_to_event(key)?;
        self.calculator.handle(event);
        Some(event)
    }

    /// Gets the display element's text
    #[must_use]
    pub fn display_element_text(&self) -> Option<&str> {
        self.calculator.surface().text()
    }
}

impl CalculatorDriver for WasmDriver {
    fn press(&mut self, label: &str) -> bool {
        self.click_label(label).is_some()
    }

    fn display(&self) -> String {
        self.display_element_text().unwrap_or_default().to_string()
    }

    fn session(&self) -> Session {
        self.calculator.session().clone()
    }

    fn diagnostics(&self) -> Vec<CalcError> {
        self.calculator.sink().errors()
    }

    fn config(&self) -> &CalculatorConfig {
        self.calculator.config()
    }
}
