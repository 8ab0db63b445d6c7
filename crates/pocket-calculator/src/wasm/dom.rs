//! Mock DOM
//!
//! Just enough of a document to host the calculator page without a
//! browser: elements addressable by id, text content, classes, and a log
//! of dispatched events. [`DomDisplay`] renders the display into it.

use std::collections::HashMap;

use crate::surface::DisplaySurface;

/// A DOM element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomElement {
    /// Element ID
    pub id: String,
    /// Element tag name
    pub tag: String,
    /// Text content
    pub text_content: String,
    /// Element attributes
    pub attributes: HashMap<String, String>,
    /// CSS classes
    pub classes: Vec<String>,
    /// Child elements
    pub children: Vec<DomElement>,
}

impl Default for DomElement {
    fn default() -> Self {
        Self::new("div")
    }
}

impl DomElement {
    /// Creates a new DOM element with the given tag
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            id: String::new(),
            tag: tag.to_string(),
            text_content: String::new(),
            attributes: HashMap::new(),
            classes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Sets the ID
    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    /// Sets the text content
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text_content = text.to_string();
        self
    }

    /// Adds a class
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    /// Sets an attribute
    #[must_use]
    pub fn with_attr(mut self, key: &str, value: &str) -> Self {
        self.attributes.insert(key.to_string(), value.to_string());
        self
    }

    /// Adds a child element
    #[must_use]
    pub fn with_child(mut self, child: DomElement) -> Self {
        self.children.push(child);
        self
    }

    /// Sets text content
    pub fn set_text(&mut self, text: &str) {
        self.text_content.clear();
        self.text_content.push_str(text);
    }

    /// Adds a class if not already present
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    /// Checks if element has a class
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// Events the page reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomEvent {
    /// Click on an element
    Click {
        /// The ID of the clicked element
        element_id: String,
    },
    /// Key press on the document
    KeyDown {
        /// `KeyboardEvent.key` value
        key: String,
    },
}

impl DomEvent {
    /// Creates a click event
    #[must_use]
    pub fn click(element_id: &str) -> Self {
        Self::Click {
            element_id: element_id.to_string(),
        }
    }

    /// Creates a key press event
    #[must_use]
    pub fn key_down(key: &str) -> Self {
        Self::KeyDown {
            key: key.to_string(),
        }
    }
}

/// In-memory document
#[derive(Debug, Default)]
pub struct MockDom {
    /// Elements by ID
    elements: HashMap<String, DomElement>,
    /// IDs in registration order
    order: Vec<String>,
    /// Event history for verification
    event_history: Vec<DomEvent>,
}

impl MockDom {
    /// Creates an empty document
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an element (and its children) for ID lookup; elements
    /// without an ID are skipped
    pub fn register_element(&mut self, element: DomElement) {
        for child in &element.children {
            self.register_element(child.clone());
        }
        if element.id.is_empty() {
            return;
        }
        if !self.elements.contains_key(&element.id) {
            self.order.push(element.id.clone());
        }
        self.elements.insert(element.id.clone(), element);
    }

    /// Gets an element by ID
    #[must_use]
    pub fn get_element(&self, id: &str) -> Option<&DomElement> {
        self.elements.get(id)
    }

    /// Gets a mutable element by ID
    pub fn get_element_mut(&mut self, id: &str) -> Option<&mut DomElement> {
        self.elements.get_mut(id)
    }

    /// Elements carrying `class`, in registration order
    #[must_use]
    pub fn elements_with_class(&self, class: &str) -> Vec<&DomElement> {
        self.order
            .iter()
            .filter_map(|id| self.elements.get(id))
            .filter(|e| e.has_class(class))
            .collect()
    }

    /// Records an event
    pub fn dispatch_event(&mut self, event: DomEvent) {
        self.event_history.push(event);
    }

    /// Gets the event history
    #[must_use]
    pub fn event_history(&self) -> &[DomEvent] {
        &self.event_history
    }

    /// Updates element text by ID; returns false when no such element
    pub fn set_element_text(&mut self, id: &str, text: &str) -> bool {
        match self.elements.get_mut(id) {
            Some(elem) => {
                elem.set_text(text);
                true
            }
            None => false,
        }
    }

    /// Gets element text by ID
    #[must_use]
    pub fn get_element_text(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|e| e.text_content.as_str())
    }
}

/// Display surface writing into one element of a [`MockDom`]
#[derive(Debug)]
pub struct DomDisplay {
    dom: MockDom,
    element_id: String,
}

impl DomDisplay {
    /// Renders into `element_id` of `dom`
    #[must_use]
    pub fn new(dom: MockDom, element_id: &str) -> Self {
        Self {
            dom,
            element_id: element_id.to_string(),
        }
    }

    /// The document
    #[must_use]
    pub fn dom(&self) -> &MockDom {
        &self.dom
    }

    /// The document, mutably
    pub fn dom_mut(&mut self) -> &mut MockDom {
        &mut self.dom
    }

    /// Id of the display element
    #[must_use]
    pub fn element_id(&self) -> &str {
        &self.element_id
    }

    /// Text currently shown in the display element
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.dom.get_element_text(&self.element_id)
    }
}

impl DisplaySurface for DomDisplay {
    fn render(&mut self, text: &str) {
        if !self.dom.set_element_text(&self.element_id, text) {
            tracing::warn!(element_id = %self.element_id, "display element missing");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== DomElement tests =====

    #[test]
    fn test_dom_element_new() {
        let elem = DomElement::new("span");
        assert_eq!(elem.tag, "span");
        assert!(elem.id.is_empty());
        assert!(elem.text_content.is_empty());
    }

    #[test]
    fn test_dom_element_default() {
        assert_eq!(DomElement::default().tag, "div");
    }

    #[test]
    fn test_dom_element_builders() {
        let elem = DomElement::new("button")
            .with_id("btn-7")
            .with_text("7")
            .with_class("btnNumber")
            .with_attr("type", "button");
        assert_eq!(elem.id, "btn-7");
        assert_eq!(elem.text_content, "7");
        assert!(elem.has_class("btnNumber"));
        assert_eq!(elem.attributes.get("type").map(String::as_str), Some("button"));
        assert!(!elem.attributes.contains_key("missing"));
    }

    #[test]
    fn test_dom_element_add_class_dedupes() {
        let mut elem = DomElement::new("div");
        elem.add_class("foo");
        elem.add_class("bar");
        elem.add_class("foo");
        assert_eq!(elem.classes.len(), 2);
    }

    // ===== DomEvent tests =====

    #[test]
    fn test_dom_event_constructors() {
        assert!(matches!(DomEvent::click("btn"), DomEvent::Click { element_id } if element_id == "btn"));
        assert!(matches!(DomEvent::key_down("Enter"), DomEvent::KeyDown { key } if key == "Enter"));
    }

    // ===== MockDom tests =====

    #[test]
    fn test_mock_dom_register_with_children() {
        let mut dom = MockDom::new();
        let parent = DomElement::new("div")
            .with_id("keys")
            .with_child(DomElement::new("button").with_id("btn-1").with_text("1"))
            .with_child(DomElement::new("button").with_text("no id"));
        dom.register_element(parent);
        assert!(dom.get_element("keys").is_some());
        assert_eq!(dom.get_element_text("btn-1"), Some("1"));
        assert_eq!(dom.elements.len(), 2);
    }

    #[test]
    fn test_mock_dom_register_element_no_id() {
        let mut dom = MockDom::new();
        dom.register_element(DomElement::new("span"));
        assert!(dom.elements.is_empty());
    }

    #[test]
    fn test_mock_dom_elements_with_class_keeps_order() {
        let mut dom = MockDom::new();
        for id in ["b", "a", "c"] {
            dom.register_element(DomElement::new("button").with_id(id).with_class("k"));
        }
        dom.register_element(DomElement::new("div").with_id("x"));
        let ids: Vec<&str> = dom
            .elements_with_class("k")
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_mock_dom_event_history() {
        let mut dom = MockDom::new();
        dom.dispatch_event(DomEvent::click("btn-1"));
        dom.dispatch_event(DomEvent::key_down("2"));
        assert_eq!(
            dom.event_history(),
            &[DomEvent::click("btn-1"), DomEvent::key_down("2")]
        );
    }

    #[test]
    fn test_mock_dom_set_element_text() {
        let mut dom = MockDom::new();
        dom.register_element(DomElement::new("div").with_id("out"));
        assert!(dom.set_element_text("out", "100"));
        assert_eq!(dom.get_element_text("out"), Some("100"));
        assert!(!dom.set_element_text("nope", "1"));
        assert_eq!(dom.get_element_text("nope"), None);
    }

    #[test]
    fn test_mock_dom_get_element_mut() {
        let mut dom = MockDom::new();
        dom.register_element(DomElement::new("div").with_id("out"));
        if let Some(elem) = dom.get_element_mut("out") {
            elem.add_class("error");
        }
        assert!(dom.get_element("out").unwrap().has_class("error"));
    }

    // ===== DomDisplay tests =====

    #[test]
    fn test_dom_display_renders_into_element() {
        let mut dom = MockDom::new();
        dom.register_element(DomElement::new("div").with_id("displayValue"));
        let mut display = DomDisplay::new(dom, "displayValue");
        display.render("42");
        assert_eq!(display.text(), Some("42"));
        assert_eq!(display.element_id(), "displayValue");
    }

    #[test]
    fn test_dom_display_missing_element() {
        let mut display = DomDisplay::new(MockDom::new(), "displayValue");
        display.render("1");
        assert_eq!(display.text(), None);
    }
}
