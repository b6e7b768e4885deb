//! Geometry resolver for declarative UI layout trees
//!
//! This module turns an attribute source tree into absolute pixel
//! rectangles: a root `Layout` wraps the document root and a viewport
//! rectangle, and `Elements` walks the tree lazily, resolving every node
//! against its immediate parent at the moment of visitation.

pub mod element;
pub mod error;
pub mod iter;
pub mod units;

pub use element::{Control, Element, Kind, Layout, Rect};
pub use error::LayoutError;
pub use iter::Elements;
pub use units::resolve;
