//! Core traits that decouple the layout module from any specific element
//! tree.
//!
//! A browser binding, the in-memory tree in [`memory`](crate::memory), or a
//! test harness each implement these traits.  The
//! [`GridLayoutModule`](crate::layout::GridLayoutModule) only depends on the
//! abstractions below.

use crate::style::StyleProperty;

/// Abstraction over the container element whose children are laid out.
///
/// The container is owned by the host; implementations only expose the
/// three primitives the layout needs: a style bag on the container, an
/// ordered list of children, and a style bag on each child.
pub trait LayoutContainer {
    /// The error type produced when the host refuses a mutation.
    type Error: std::error::Error + Send + 'static;

    /// Set `property` on the container itself.
    fn set_style(&mut self, property: StyleProperty, value: &str) -> Result<(), Self::Error>;

    /// Number of child elements, in document order.
    fn child_count(&self) -> usize;

    /// Set `property` on the child at `index`, or clear it when `value` is
    /// `None`.
    ///
    /// Callers only pass indices below [`child_count`](Self::child_count).
    fn set_child_style(
        &mut self,
        index: usize,
        property: StyleProperty,
        value: Option<&str>,
    ) -> Result<(), Self::Error>;
}

impl<C: LayoutContainer + ?Sized> LayoutContainer for &mut C {
    type Error = C::Error;

    fn set_style(&mut self, property: StyleProperty, value: &str) -> Result<(), Self::Error> {
        (**self).set_style(property, value)
    }

    fn child_count(&self) -> usize {
        (**self).child_count()
    }

    fn set_child_style(
        &mut self,
        index: usize,
        property: StyleProperty,
        value: Option<&str>,
    ) -> Result<(), Self::Error> {
        (**self).set_child_style(index, property, value)
    }
}

/// An element tree that can look containers up by identifier.
pub trait Document {
    /// The container handle type this document hands out.
    type Container: LayoutContainer;

    /// Return the element with identifier `id`, or `None` if the tree has
    /// no such element.
    fn element_by_id(&mut self, id: &str) -> Option<&mut Self::Container>;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A test double that records every call made to it.
    #[derive(Debug, Default)]
    struct MockContainer {
        children: usize,
        log: Vec<String>,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("mock error")]
    struct MockError;

    impl LayoutContainer for MockContainer {
        type Error = MockError;

        fn set_style(&mut self, property: StyleProperty, value: &str) -> Result<(), MockError> {
            self.log.push(format!("{}={}", property, value));
            Ok(())
        }

        fn child_count(&self) -> usize {
            self.children
        }

        fn set_child_style(
            &mut self,
            index: usize,
            property: StyleProperty,
            value: Option<&str>,
        ) -> Result<(), MockError> {
            self.log.push(format!("{}.{}={:?}", index, property, value));
            Ok(())
        }
    }

    fn drive<C: LayoutContainer>(mut container: C) -> usize {
        container.set_style(StyleProperty::Display, "grid").unwrap();
        container
            .set_child_style(1, StyleProperty::GridArea, Some("body"))
            .unwrap();
        container.child_count()
    }

    #[test]
    fn mutable_reference_forwards_calls() {
        let mut container = MockContainer {
            children: 2,
            ..Default::default()
        };
        assert_eq!(drive(&mut container), 2);
        let log = &container.log;
        assert_eq!(log.len(), 2);
        assert_eq!(log[0], "display=grid");
        assert_eq!(log[1], "1.grid-area=Some(\"body\")");
    }
}
