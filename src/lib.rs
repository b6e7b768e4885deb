//! uiwarp - pixel geometry for declaratively described UI layouts
//!
//! A layout document is a tree of containers (`grid`, `table`) and leaf
//! `control`s whose position and size are written as mixed-unit length
//! expressions (`px`, `%`, table cells, negative far-edge offsets). This
//! crate parses such documents, resolves every element to an absolute pixel
//! rectangle relative to a caller-supplied viewport, and exposes the tree as
//! a lazy, depth-first sequence of positioned elements.
//!
//! # Example
//!
//! ```rust
//! use uiwarp::{markup, Layout, Rect};
//!
//! let doc = markup::parse(r#"
//!     grid {
//!         control [id: "ok", x: "25%", width: "50%", height: "100%"]
//!     }
//! "#).unwrap();
//!
//! let root = Layout::new(&doc.root, Rect::new(0, 0, 800, 600)).unwrap();
//! let control = root.find_control("ok").unwrap().unwrap();
//! assert_eq!(control.rect, Rect::new(200, 0, 400, 600));
//! ```

pub mod error;
pub mod layout;
pub mod markup;
pub mod source;
pub mod viewport;

pub use error::ParseError;
pub use layout::{Control, Element, Elements, Kind, Layout, LayoutError, Rect};
pub use markup::{parse, Document, Node};
pub use source::{AttributeSource, AttributeValue};
pub use viewport::{Viewport, ViewportError};

use std::fmt::Write as _;

use thiserror::Error;

/// Errors that can occur in the parse-then-resolve pipeline
#[derive(Debug, Error)]
pub enum Error {
    /// Error during parsing
    #[error("parse errors: {}", format_parse_errors(.0))]
    Parse(Vec<ParseError>),

    /// Error during geometry resolution
    #[error("layout error: {0}")]
    Layout(#[from] LayoutError),
}

impl From<Vec<ParseError>> for Error {
    fn from(errors: Vec<ParseError>) -> Self {
        Error::Parse(errors)
    }
}

fn format_parse_errors(errors: &[ParseError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Parse a markup document and dump every resolved element, one per line, in
/// document order.
///
/// This is the library face of the CLI output (and of the original preview
/// tool's console dump): containers by id and kind, controls by id, each with
/// absolute position and size.
pub fn outline(source: &str, viewport: Rect) -> Result<String, Error> {
    let doc = markup::parse(source)?;
    let root = Layout::new(&doc.root, viewport)?;

    let mut out = String::new();
    for element in root.elements() {
        let element = element?;
        if !out.is_empty() {
            out.push('\n');
        }
        let rect = element.rect();
        match &element {
            Element::Container(layout) => {
                let _ = write!(
                    out,
                    "Layout {}: {} pos({},{}) size({},{})",
                    layout.attribute("id", String::new()),
                    layout.kind(),
                    rect.x,
                    rect.y,
                    rect.w,
                    rect.h
                );
            }
            Element::Control(control) => {
                let _ = write!(
                    out,
                    "Control {}: {} pos({},{}) size({},{})",
                    control.id,
                    control.kind(),
                    rect.x,
                    rect.y,
                    rect.w,
                    rect.h
                );
            }
        }
    }
    Ok(out)
}
