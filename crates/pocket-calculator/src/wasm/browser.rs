//! Browser bindings
//!
//! Binds the calculator to the live page through wasm-bindgen: the display
//! renders into the configured element and evaluation failures go to the
//! browser console.

use wasm_bindgen::prelude::*;
use web_sys::{console, Document, Element};

use crate::config::CalculatorConfig;
use crate::controller::Calculator;
use crate::core::CalcError;
use crate::input::InputEvent;
use crate::surface::{DiagnosticSink, DisplaySurface, EvaluationSite, TracingSink};
use crate::wasm::keypad::WasmKeypad;

/// Display surface backed by a page element's text content
#[derive(Debug)]
pub struct ElementDisplay {
    element: Element,
}

impl DisplaySurface for ElementDisplay {
    fn render(&mut self, text: &str) {
        self.element.set_text_content(Some(text));
    }
}

/// Sink writing failures to the browser console
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl DiagnosticSink for ConsoleSink {
    fn report(&mut self, site: EvaluationSite, error: &CalcError) {
        TracingSink.report(site, error);
        console::error_1(&format!("{site}: {error}").into());
    }
}

/// Browser calculator, the page's WASM entry point
#[derive(Debug)]
#[wasm_bindgen]
pub struct BrowserCalculator {
    calculator: Calculator<ElementDisplay, ConsoleSink>,
    keypad: WasmKeypad,
    document: Document,
}

#[wasm_bindgen]
impl BrowserCalculator {
    /// Binds to the page with the default configuration
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<BrowserCalculator, JsValue> {
        Self::with_config(CalculatorConfig::default())
    }

    /// Binds to the page with a JSON configuration
    #[wasm_bindgen(js_name = fromConfigJson)]
    pub fn from_config_json(json: &str) -> Result<BrowserCalculator, JsValue> {
        let config =
            CalculatorConfig::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Self::with_config(config)
    }

    /// Handles a click on the element with `element_id`; returns the new
    /// display text when the element is a calculator button
    #[wasm_bindgen(js_name = handleButton)]
    pub fn handle_button(&mut self, element_id: &str) -> Option<String> {
        let event = self.keypad.control_event(element_id).or_else(|| {
            let element = self.document.get_element_by_id(element_id)?;
            WasmKeypad::resolve_button(
                element.class_name().split_whitespace(),
                &element.text_content().unwrap_or_default(),
            )
        })?;
        Some(self.apply(event))
    }

    /// Handles a `keydown` key value; returns the new display text when the
    /// key maps to a button
    #[wasm_bindgen(js_name = handleKey)]
    pub fn handle_key(&mut self, key: &str) -> Option<String> {
        if !self.calculator.config().keyboard {
            return None;
        }
        let event = WasmKeypad::key_to_event(key)?;
        Some(self.apply(event))
    }

    /// Clear button
    #[wasm_bindgen(js_name = pressClear)]
    pub fn press_clear(&mut self) -> String {
        self.apply(InputEvent::Clear)
    }

    /// Delete button
    #[wasm_bindgen(js_name = pressDelete)]
    pub fn press_delete(&mut self) -> String {
        self.apply(InputEvent::Delete)
    }

    /// Current display text
    #[wasm_bindgen(getter)]
    pub fn display(&self) -> String {
        self.calculator.display_text().to_string()
    }

    /// Session record as JSON
    #[wasm_bindgen(js_name = stateJson)]
    pub fn state_json(&self) -> String {
        self.calculator
            .session()
            .to_json()
            .unwrap_or_else(|_| "{}".to_string())
    }
}

impl BrowserCalculator {
    fn with_config(config: CalculatorConfig) -> Result<Self, JsValue> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| JsValue::from_str("no document available"))?;
        let element = document
            .get_element_by_id(&config.display_id)
            .ok_or_else(|| {
                JsValue::from_str(&format!("display element #{} not found", config.display_id))
            })?;

        let keypad = WasmKeypad::with_config(&config);
        let calculator = Calculator::with_parts(config, ElementDisplay { element }, ConsoleSink);
        Ok(Self {
            calculator,
            keypad,
            document,
        })
    }

    fn apply(&mut self, event: InputEvent) -> String {
        self.calculator.handle(event);
        self.display()
    }
}

/// Initialize the calculator in the browser
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console::log_1(&"Calculator WASM initialized".into());
}
