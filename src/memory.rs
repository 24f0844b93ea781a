//! In-memory element tree.
//!
//! [`MemoryElement`] and [`MemoryDocument`] implement the host traits
//! without a browser, so the layout can be exercised from tests and from
//! the command-line tool.  Style values follow the CSSOM convention that
//! assigning an empty string removes the property.

use crate::style::StyleProperty;
use crate::traits::{Document, LayoutContainer};
use std::collections::BTreeMap;
use std::fmt;

/// Errors produced by the in-memory tree.
#[derive(Debug, thiserror::Error)]
pub enum MemoryHostError {
    #[error("child index {index} out of range ({len} children)")]
    NoSuchChild { index: usize, len: usize },
}

/// An element with an optional identifier, an inline style and children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryElement {
    id: Option<String>,
    style: BTreeMap<StyleProperty, String>,
    children: Vec<MemoryElement>,
}

impl MemoryElement {
    /// Create an element without identifier or children.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an element carrying identifier `id`.
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    /// Create an element with identifier `id` and `count` empty children.
    pub fn with_children(id: impl Into<String>, count: usize) -> Self {
        let mut element = Self::with_id(id);
        element.children = vec![MemoryElement::new(); count];
        element
    }

    /// The element's identifier, if any.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Append `child` and return its index.
    pub fn push_child(&mut self, child: MemoryElement) -> usize {
        self.children.push(child);
        self.children.len() - 1
    }

    /// The element's children, in order.
    pub fn children(&self) -> &[MemoryElement] {
        &self.children
    }

    /// Current value of `property`, or `None` if unset.
    pub fn style(&self, property: StyleProperty) -> Option<&str> {
        self.style.get(&property).map(String::as_str)
    }

    /// The inline style as it would appear in a `style` attribute,
    /// e.g. `display: grid; grid-template-rows: auto`.
    pub fn style_attribute(&self) -> String {
        self.style
            .iter()
            .map(|(property, value)| format!("{}: {}", property, value))
            .collect::<Vec<_>>()
            .join("; ")
    }

    fn assign(&mut self, property: StyleProperty, value: Option<&str>) {
        match value {
            Some(v) if !v.is_empty() => {
                self.style.insert(property, v.to_string());
            }
            _ => {
                self.style.remove(&property);
            }
        }
    }

    fn find_mut(&mut self, id: &str) -> Option<&mut MemoryElement> {
        if self.id.as_deref() == Some(id) {
            return Some(self);
        }
        self.children.iter_mut().find_map(|child| child.find_mut(id))
    }
}

impl LayoutContainer for MemoryElement {
    type Error = MemoryHostError;

    fn set_style(&mut self, property: StyleProperty, value: &str) -> Result<(), MemoryHostError> {
        self.assign(property, Some(value));
        Ok(())
    }

    fn child_count(&self) -> usize {
        self.children.len()
    }

    fn set_child_style(
        &mut self,
        index: usize,
        property: StyleProperty,
        value: Option<&str>,
    ) -> Result<(), MemoryHostError> {
        let len = self.children.len();
        let child = self
            .children
            .get_mut(index)
            .ok_or(MemoryHostError::NoSuchChild { index, len })?;
        child.assign(property, value);
        Ok(())
    }
}

impl fmt::Display for MemoryElement {
    /// One line per element, children indented below their parent.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn write_element(f: &mut fmt::Formatter<'_>, el: &MemoryElement, depth: usize) -> fmt::Result {
            write!(f, "{:indent$}", "", indent = depth * 2)?;
            match el.id() {
                Some(id) => write!(f, "#{}", id)?,
                None => write!(f, "-")?,
            }
            let style = el.style_attribute();
            if style.is_empty() {
                writeln!(f, " {{}}")?;
            } else {
                writeln!(f, " {{ {} }}", style)?;
            }
            for child in &el.children {
                write_element(f, child, depth + 1)?;
            }
            Ok(())
        }
        write_element(f, self, 0)
    }
}

/// A forest of [`MemoryElement`]s searchable by identifier.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    roots: Vec<MemoryElement>,
}

impl MemoryDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a top-level element.
    pub fn push(&mut self, element: MemoryElement) {
        self.roots.push(element);
    }

    /// Top-level elements, in insertion order.
    pub fn roots(&self) -> &[MemoryElement] {
        &self.roots
    }
}

impl Document for MemoryDocument {
    type Container = MemoryElement;

    /// Depth-first search; the first element carrying `id` wins.
    fn element_by_id(&mut self, id: &str) -> Option<&mut MemoryElement> {
        self.roots.iter_mut().find_map(|root| root.find_mut(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutParams;
    use crate::layout::{GridLayoutModule, LayoutError, DEFAULT_CONTAINER_ID};

    fn document(children: usize) -> MemoryDocument {
        let mut doc = MemoryDocument::new();
        let mut body = MemoryElement::with_id("body");
        body.push_child(MemoryElement::with_children(DEFAULT_CONTAINER_ID, children));
        doc.push(body);
        doc
    }

    #[test]
    fn empty_value_removes_property() {
        let mut el = MemoryElement::new();
        el.set_style(StyleProperty::GridTemplateRows, "auto").unwrap();
        assert_eq!(el.style(StyleProperty::GridTemplateRows), Some("auto"));
        el.set_style(StyleProperty::GridTemplateRows, "").unwrap();
        assert_eq!(el.style(StyleProperty::GridTemplateRows), None);
    }

    #[test]
    fn out_of_range_child_is_an_error() {
        let mut el = MemoryElement::with_children("c", 1);
        let err = el
            .set_child_style(3, StyleProperty::GridArea, Some("x"))
            .unwrap_err();
        assert!(matches!(err, MemoryHostError::NoSuchChild { index: 3, len: 1 }));
    }

    #[test]
    fn element_by_id_searches_nested_elements() {
        let mut doc = document(2);
        let found = doc.element_by_id(DEFAULT_CONTAINER_ID).unwrap();
        assert_eq!(found.child_count(), 2);
        assert!(doc.element_by_id("missing").is_none());
    }

    #[test]
    fn style_attribute_lists_properties_in_order() {
        let mut el = MemoryElement::new();
        el.set_style(StyleProperty::GridTemplateRows, "auto").unwrap();
        el.set_style(StyleProperty::Display, "grid").unwrap();
        assert_eq!(el.style_attribute(), "display: grid; grid-template-rows: auto");
    }

    #[test]
    fn header_body_example() {
        let mut doc = document(2);
        let params = LayoutParams::new("1fr 1fr", "auto", ["header", "body"]);
        let mut module = GridLayoutModule::attach(&mut doc, DEFAULT_CONTAINER_ID, params).unwrap();
        module.render(None).unwrap();

        let container = module.container();
        assert_eq!(container.style(StyleProperty::Display), Some("grid"));
        assert_eq!(container.style(StyleProperty::GridTemplateRows), Some("auto"));
        assert_eq!(
            container.style(StyleProperty::GridTemplateColumns),
            Some("1fr 1fr")
        );
        assert_eq!(container.children()[0].style(StyleProperty::GridArea), Some("header"));
        assert_eq!(container.children()[1].style(StyleProperty::GridArea), Some("body"));
    }

    #[test]
    fn third_child_left_unset() {
        let mut doc = document(3);
        let params = LayoutParams::new("1fr 1fr", "auto", ["header", "body"]);
        let mut module = GridLayoutModule::attach(&mut doc, DEFAULT_CONTAINER_ID, params).unwrap();
        module.render(None).unwrap();
        assert_eq!(module.container().children()[2].style(StyleProperty::GridArea), None);
    }

    #[test]
    fn missing_container_is_not_found() {
        let mut doc = MemoryDocument::new();
        let err = GridLayoutModule::attach(&mut doc, DEFAULT_CONTAINER_ID, LayoutParams::default())
            .unwrap_err();
        assert!(matches!(err, LayoutError::ContainerNotFound(_)));
    }

    #[test]
    fn display_renders_tree() {
        let mut el = MemoryElement::with_children("grid", 1);
        el.set_style(StyleProperty::Display, "grid").unwrap();
        el.set_child_style(0, StyleProperty::GridArea, Some("main")).unwrap();
        assert_eq!(el.to_string(), "#grid { display: grid }\n  - { grid-area: main }\n");
    }

    #[test]
    fn display_renders_unstyled_element_as_empty_braces() {
        let el = MemoryElement::with_children("grid", 1);
        assert_eq!(el.to_string(), "#grid {}\n  - {}\n");
    }
}
