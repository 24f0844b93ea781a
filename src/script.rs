//! Page bootstrap line for the browser-side module.
//!
//! A visualization page keeps a global `elements` array of modules and
//! calls `render`/`reset` on each in order.  The server registers the grid
//! layout by emitting one line of script containing the parameters as JSON.
//! It has to be registered before every other module so the container is
//! already a grid when they render.
//!
//! The page must also load [`MODULE_INCLUDE`], which defines
//! [`MODULE_CONSTRUCTOR`].

use crate::config::LayoutParams;

/// Name of the page-side constructor.
pub const MODULE_CONSTRUCTOR: &str = "GridLayoutModule";

/// Script the page includes to define [`MODULE_CONSTRUCTOR`], relative to
/// the server's local include directory.
pub const MODULE_INCLUDE: &str = "visualizers/GridLayoutModule.js";

/// Build `elements.push(new GridLayoutModule({...}));` for `params`.
///
/// The line is meant to sit inside a `<script>` element, so every `<` in
/// the JSON is written as `\u003c`.  A `<` can only occur inside a JSON
/// string, where the escape decodes back to the same character.
pub fn bootstrap_script(params: &LayoutParams) -> Result<String, serde_json::Error> {
    let json = serde_json::to_string(params)?.replace('<', "\\u003c");
    Ok(format!("elements.push(new {}({}));", MODULE_CONSTRUCTOR, json))
}
