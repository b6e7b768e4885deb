//! Attribute source abstraction consumed by the layout core
//!
//! The layout tree never owns document nodes. It holds cheap `Copy` handles
//! into an externally owned document (the built-in markup tree, or any other
//! document model) and reads kind names, raw attributes and ordered children
//! through this trait. The document must outlive every layout object built
//! from it, which the borrow checker enforces for the built-in implementation.

use crate::markup::Node;

/// A scalar that can be read out of a raw attribute string.
///
/// The set is closed: integers, floats, booleans and strings, mirroring the
/// typed accessors of the usual XML attribute APIs. Unparseable text reads as
/// `None` so the caller's default applies.
pub trait AttributeValue: Sized {
    fn from_raw(raw: &str) -> Option<Self>;
}

impl AttributeValue for i32 {
    fn from_raw(raw: &str) -> Option<Self> {
        raw.trim().parse().ok()
    }
}

impl AttributeValue for f64 {
    fn from_raw(raw: &str) -> Option<Self> {
        raw.trim().parse().ok()
    }
}

impl AttributeValue for bool {
    fn from_raw(raw: &str) -> Option<Self> {
        match raw.trim() {
            "true" | "yes" | "1" => Some(true),
            "false" | "no" | "0" => Some(false),
            _ => None,
        }
    }
}

impl AttributeValue for String {
    fn from_raw(raw: &str) -> Option<Self> {
        Some(raw.to_string())
    }
}

/// One node of an externally owned layout document.
pub trait AttributeSource: Copy {
    /// Ordered cursor over this node's children, document order
    type Children: Iterator<Item = Self>;

    /// Node kind name, e.g. `grid`, `table` or `control`
    fn kind_name(&self) -> &str;

    /// Raw text of an attribute, `None` when absent
    fn raw_attribute(&self, name: &str) -> Option<&str>;

    /// Children of this node in document order
    fn children(&self) -> Self::Children;

    /// Typed attribute lookup. A missing or unparseable attribute yields the
    /// supplied default, never a failure.
    fn attribute<T: AttributeValue>(&self, name: &str, default: T) -> T {
        self.raw_attribute(name)
            .and_then(T::from_raw)
            .unwrap_or(default)
    }
}

impl<'a> AttributeSource for &'a Node {
    type Children = std::slice::Iter<'a, Node>;

    fn kind_name(&self) -> &str {
        &self.kind
    }

    fn raw_attribute(&self, name: &str) -> Option<&str> {
        Node::raw_attribute(self, name)
    }

    fn children(&self) -> Self::Children {
        self.children.iter()
    }
}
