//! The grid layout module.
//!
//! [`GridLayoutModule`] switches a container to grid layout when it is
//! built, then on every [`render`](GridLayoutModule::render) assigns the
//! configured area names to the container's children by position.

use crate::config::LayoutParams;
use crate::style::{StyleProperty, GRID_DISPLAY};
use crate::traits::{Document, LayoutContainer};
use log::{debug, info};

/// Identifier of the container the page-side module has always used.
pub const DEFAULT_CONTAINER_ID: &str = "elements";

/// Possible errors from the layout module.
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    /// No element with the requested identifier exists in the document.
    #[error("container not found: {0}")]
    ContainerNotFound(String),
    /// The host refused a style mutation.
    #[error("host error: {0}")]
    Host(String),
}

fn host_err<E: std::error::Error>(e: E) -> LayoutError {
    LayoutError::Host(e.to_string())
}

/// Configures a container for grid layout and places its children.
///
/// The module holds no state besides its parameters and the container
/// handle.  It is generic over any [`LayoutContainer`], so it can drive a
/// real element tree or the in-memory one from [`memory`](crate::memory).
///
/// # Typical usage
///
/// ```ignore
/// let params = LayoutParams::new("1fr 1fr", "auto", ["header", "body"]);
/// let mut module = GridLayoutModule::attach(&mut doc, DEFAULT_CONTAINER_ID, params)?;
/// module.render(None)?;
/// ```
#[derive(Debug)]
pub struct GridLayoutModule<C: LayoutContainer> {
    container: C,
    params: LayoutParams,
}

impl<C: LayoutContainer> GridLayoutModule<C> {
    /// Switch `container` to grid layout and apply the track specifications.
    ///
    /// The track fields are cross-assigned: `template_rows` becomes the
    /// container's `grid-template-columns` and `template_cols` becomes its
    /// `grid-template-rows`.  Existing parameter files rely on this, so it
    /// is applied as-is.
    pub fn new(mut container: C, params: LayoutParams) -> Result<Self, LayoutError> {
        container
            .set_style(StyleProperty::Display, GRID_DISPLAY)
            .map_err(host_err)?;
        container
            .set_style(StyleProperty::GridTemplateColumns, &params.template_rows)
            .map_err(host_err)?;
        container
            .set_style(StyleProperty::GridTemplateRows, &params.template_cols)
            .map_err(host_err)?;
        info!(
            "grid layout applied (columns {:?}, rows {:?}, {} area(s))",
            params.template_rows,
            params.template_cols,
            params.grid_areas.len()
        );
        Ok(Self { container, params })
    }

    /// Assign `grid_areas[i]` to child `i` for every child of the container.
    ///
    /// `_data` is accepted for interface compatibility with the other
    /// visualization modules and is not consulted; placement is purely
    /// positional.  Children beyond the end of the area list have their
    /// area cleared.
    pub fn render(&mut self, _data: Option<&serde_json::Value>) -> Result<(), LayoutError> {
        let children = self.container.child_count();
        if children != self.params.grid_areas.len() {
            debug!(
                "{} child(ren) but {} area name(s)",
                children,
                self.params.grid_areas.len()
            );
        }
        for index in 0..children {
            let area = self.params.area_for(index);
            self.container
                .set_child_style(index, StyleProperty::GridArea, area)
                .map_err(host_err)?;
        }
        Ok(())
    }

    /// Does nothing.
    ///
    /// Kept so callers that reset every visualization module between runs
    /// can treat this one uniformly.  The container and its children are
    /// never touched.
    pub fn reset(&mut self) {}

    /// The parameters this module was built with.
    pub fn params(&self) -> &LayoutParams {
        &self.params
    }

    /// Shared access to the container.
    pub fn container(&self) -> &C {
        &self.container
    }

    /// Exclusive access to the container, e.g. to add children before the
    /// next render.
    pub fn container_mut(&mut self) -> &mut C {
        &mut self.container
    }

    /// Give the container back.
    pub fn into_container(self) -> C {
        self.container
    }
}

impl<'a, C: LayoutContainer> GridLayoutModule<&'a mut C> {
    /// Look up the container with identifier `id` in `document` and build a
    /// module on it.
    ///
    /// Fails with [`LayoutError::ContainerNotFound`] if the document has no
    /// such element.
    pub fn attach<D>(document: &'a mut D, id: &str, params: LayoutParams) -> Result<Self, LayoutError>
    where
        D: Document<Container = C>,
    {
        let container = document
            .element_by_id(id)
            .ok_or_else(|| LayoutError::ContainerNotFound(id.to_string()))?;
        Self::new(container, params)
    }
}

//  Tests
