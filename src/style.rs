//! Style vocabulary shared by the layout module and its hosts.
//!
//! Only the handful of properties the grid layout touches are modelled.
//! Values are opaque strings: track-sizing specifications and area names
//! are passed through to the host without validation.

use std::fmt;

/// A style property the layout module may set on an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StyleProperty {
    /// Layout mode of the element (`display`).
    Display,
    /// Column-track specification of a grid container.
    GridTemplateColumns,
    /// Row-track specification of a grid container.
    GridTemplateRows,
    /// Named area a grid child occupies.
    GridArea,
}

impl StyleProperty {
    /// The CSS spelling of the property.
    pub fn css_name(self) -> &'static str {
        match self {
            StyleProperty::Display => "display",
            StyleProperty::GridTemplateColumns => "grid-template-columns",
            StyleProperty::GridTemplateRows => "grid-template-rows",
            StyleProperty::GridArea => "grid-area",
        }
    }
}

impl fmt::Display for StyleProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_name())
    }
}

/// Value of [`StyleProperty::Display`] that switches an element to grid
/// layout.
pub const GRID_DISPLAY: &str = "grid";
