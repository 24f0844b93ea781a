//! Layout parameters.
//!
//! The parameters are plain JSON using the camelCase keys the page-side
//! module has always accepted, so the same object can be handed to the
//! browser unchanged (see [`script`](crate::script)).
//!
//! # Example
//!
//! ```json
//! {
//!   "templateRows": "1fr 1fr",
//!   "templateCols": "auto",
//!   "gridAreas": ["header", "body"]
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Parameters for a [`GridLayoutModule`](crate::layout::GridLayoutModule).
///
/// Every field is optional: a missing track specification becomes the empty
/// string and a missing area list becomes empty.  Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutParams {
    /// Track-sizing specification.  Applied to the container's
    /// **column** tracks.
    pub template_rows: String,
    /// Track-sizing specification.  Applied to the container's
    /// **row** tracks.
    pub template_cols: String,
    /// One area name per child, index-aligned with the container's children.
    pub grid_areas: Vec<String>,
}

impl LayoutParams {
    /// Build parameters from the three fields.
    pub fn new(
        template_rows: impl Into<String>,
        template_cols: impl Into<String>,
        grid_areas: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            template_rows: template_rows.into(),
            template_cols: template_cols.into(),
            grid_areas: grid_areas.into_iter().map(Into::into).collect(),
        }
    }

    /// Area name for the child at `index`, or `None` past the end of the list.
    pub fn area_for(&self, index: usize) -> Option<&str> {
        self.grid_areas.get(index).map(String::as_str)
    }

    /// Parse parameters from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError(format!("failed to parse params: {}", e)))
    }

    /// Load parameters from a JSON file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError(format!("failed to read {}: {}", path.display(), e)))?;
        let params: Self = serde_json::from_str(&contents)
            .map_err(|e| ConfigError(format!("failed to parse {}: {}", path.display(), e)))?;
        Ok(params)
    }
}

/// Error from loading or parsing layout parameters.
#[derive(Debug, thiserror::Error)]
#[error("config error: {0}")]
pub struct ConfigError(String);
