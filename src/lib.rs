//! **gridarea** — grid layout for a container of visualization elements.
//!
//! A [`GridLayoutModule`](layout::GridLayoutModule) switches one container
//! element to grid layout, applies two track specifications, and on each
//! render assigns a named grid area to every child by position.
//!
//! # Architecture
//!
//! The crate is organised around two traits in [`traits`]:
//!
//! * [`traits::LayoutContainer`] — the container element: a style bag,
//!   an ordered child list, and a style bag per child.
//! * [`traits::Document`] — lookup of a container by identifier.
//!
//! [`memory`] implements both without a browser.  [`config`] loads the
//! layout parameters and [`script`] produces the line that registers the
//! module on a page.

pub mod config;
pub mod layout;
pub mod memory;
pub mod script;
pub mod style;
pub mod traits;
