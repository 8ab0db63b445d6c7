//! Calculator keypad
//!
//! Layout of the page's buttons and the wiring from a clicked element to
//! an [`InputEvent`]. Digit and operator buttons are recognized by their
//! class and read by their label; clear and delete are addressed by id.

use super::dom::{DomElement, MockDom};
use crate::config::CalculatorConfig;
use crate::core::Operator;
use crate::input::InputEvent;

/// Id of the element holding the keypad buttons
pub const KEYPAD_ID: &str = "calc-keypad";

/// Button groups, each with its own CSS class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonClass {
    /// Digits and the decimal point
    Number,
    /// Operators and equals
    Operator,
    /// Clear and delete
    Control,
}

impl ButtonClass {
    /// CSS class carried by buttons of this group
    #[must_use]
    pub const fn css_class(&self) -> &'static str {
        match self {
            Self::Number => "btnNumber",
            Self::Operator => "btnOperator",
            Self::Control => "btnControl",
        }
    }

    /// Group a button for `event` belongs to
    #[must_use]
    pub const fn of(event: InputEvent) -> Self {
        match event {
            InputEvent::Digit(_) | InputEvent::Decimal => Self::Number,
            InputEvent::Operator(_) | InputEvent::Equals => Self::Operator,
            InputEvent::Clear | InputEvent::Delete => Self::Control,
        }
    }
}

/// A single keypad button definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButtonDef {
    /// The event this button produces
    pub event: InputEvent,
    /// The DOM element ID for this button
    pub id: String,
    /// Button group
    pub class: ButtonClass,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
}

impl KeypadButtonDef {
    /// Creates a new button definition; clear/delete ids come from `config`
    #[must_use]
    pub fn new(event: InputEvent, row: usize, col: usize, config: &CalculatorConfig) -> Self {
        let id = match event {
            InputEvent::Digit(d) => format!("btn-{d}"),
            InputEvent::Decimal => "btn-decimal".to_string(),
            InputEvent::Operator(op) => format!("btn-{}", op_name(op)),
            InputEvent::Equals => "btn-equals".to_string(),
            InputEvent::Clear => config.clear_id.clone(),
            InputEvent::Delete => config.delete_id.clone(),
        };
        Self {
            event,
            id,
            class: ButtonClass::of(event),
            row,
            col,
        }
    }

    /// Label drawn on the button
    #[must_use]
    pub fn label(&self) -> String {
        self.event.label()
    }

    /// Builds the button element
    #[must_use]
    pub fn to_element(&self) -> DomElement {
        DomElement::new("button")
            .with_id(&self.id)
            .with_text(&self.label())
            .with_class(self.class.css_class())
            .with_attr("data-row", &self.row.to_string())
            .with_attr("data-col", &self.col.to_string())
    }
}

/// Name of an operator in element IDs
fn op_name(op: Operator) -> &'static str {
    match op {
        Operator::Add => "plus",
        Operator::Subtract => "minus",
        Operator::Multiply => "times",
        Operator::Divide => "divide",
    }
}

/// Keypad layout
///
/// ```text
/// [ AC ] [DEL ] [ ÷ ] [ × ]
/// [ 7  ] [ 8  ] [ 9 ] [ - ]
/// [ 4  ] [ 5  ] [ 6 ] [ + ]
/// [ 1  ] [ 2  ] [ 3 ] [ = ]
/// [ 0  ] [ .  ]
/// ```
#[derive(Debug, Clone)]
pub struct WasmKeypad {
    buttons: Vec<KeypadButtonDef>,
    cols: usize,
    rows: usize,
    clear_id: String,
    delete_id: String,
}

impl Default for WasmKeypad {
    fn default() -> Self {
        Self::new()
    }
}

impl WasmKeypad {
    /// Creates the keypad with default element ids
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&CalculatorConfig::default())
    }

    /// Creates the keypad using the clear/delete ids of `config`
    #[must_use]
    pub fn with_config(config: &CalculatorConfig) -> Self {
        use InputEvent::{Clear, Decimal, Delete, Digit, Equals};
        let op = InputEvent::Operator;

        let layout: [&[InputEvent]; 5] = [
            &[Clear, Delete, op(Operator::Divide), op(Operator::Multiply)],
            &[Digit(7), Digit(8), Digit(9), op(Operator::Subtract)],
            &[Digit(4), Digit(5), Digit(6), op(Operator::Add)],
            &[Digit(1), Digit(2), Digit(3), Equals],
            &[Digit(0), Decimal],
        ];

        let buttons = layout
            .iter()
            .enumerate()
            .flat_map(|(row, events)| {
                events
                    .iter()
                    .enumerate()
                    .map(move |(col, event)| KeypadButtonDef::new(*event, row, col, config))
            })
            .collect();

        Self {
            buttons,
            cols: 4,
            rows: layout.len(),
            clear_id: config.clear_id.clone(),
            delete_id: config.delete_id.clone(),
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets all button definitions
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButtonDef] {
        &self.buttons
    }

    /// Gets a button by row and column
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.row == row && b.col == col)
    }

    /// Finds a button by element ID
    #[must_use]
    pub fn find_button_by_id(&self, id: &str) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Finds the button producing `event`
    #[must_use]
    pub fn find_button_by_event(&self, event: InputEvent) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.event == event)
    }

    /// Creates the keypad container element with all buttons
    #[must_use]
    pub fn create_keypad_element(&self) -> DomElement {
        self.buttons.iter().fold(
            DomElement::new("div").with_id(KEYPAD_ID).with_class("keypad"),
            |keypad, btn| keypad.with_child(btn.to_element()),
        )
    }

    /// Resolves a click on `element_id` to an input event
    ///
    /// Clear and delete match by id. Any other element must be a number or
    /// operator button; its trimmed text decides the event.
    #[must_use]
    pub fn resolve_click(&self, dom: &MockDom, element_id: &str) -> Option<InputEvent> {
        if let Some(event) = self.control_event(element_id) {
            return Some(event);
        }
        let element = dom.get_element(element_id)?;
        Self::resolve_button(
            element.classes.iter().map(String::as_str),
            &element.text_content,
        )
    }

    /// Clear or delete, when `element_id` is one of their ids
    #[must_use]
    pub fn control_event(&self, element_id: &str) -> Option<InputEvent> {
        if element_id == self.clear_id {
            Some(InputEvent::Clear)
        } else if element_id == self.delete_id {
            Some(InputEvent::Delete)
        } else {
            None
        }
    }

    /// Resolves an element with `classes` showing `text`; only number and
    /// operator buttons produce an event
    #[must_use]
    pub fn resolve_button<'a>(
        classes: impl IntoIterator<Item = &'a str>,
        text: &str,
    ) -> Option<InputEvent> {
        let is_button = classes.into_iter().any(|class| {
            class == ButtonClass::Number.css_class() || class == ButtonClass::Operator.css_class()
        });
        if is_button {
            InputEvent::from_button_label(text)
        } else {
            None
        }
    }

    /// Maps a keyboard key to an input event
    #[must_use]
    pub fn key_to_event(key: &str) -> Option<InputEvent> {
        InputEvent::from_key(key)
    }
}

/// Extension trait for MockDom to add the calculator page
pub trait MockDomKeypadExt {
    /// Adds the keypad buttons
    fn add_keypad(&mut self, keypad: &WasmKeypad);

    /// Builds the calculator page: display element plus keypad
    fn calculator(config: &CalculatorConfig, keypad: &WasmKeypad) -> Self;
}

impl MockDomKeypadExt for MockDom {
    fn add_keypad(&mut self, keypad: &WasmKeypad) {
        self.register_element(keypad.create_keypad_element());
    }

    fn calculator(config: &CalculatorConfig, keypad: &WasmKeypad) -> Self {
        let mut dom = MockDom::new();
        dom.register_element(
            DomElement::new("div")
                .with_id(&config.display_id)
                .with_class("display")
                .with_text("0"),
        );
        dom.add_keypad(keypad);
        dom
    }
}
