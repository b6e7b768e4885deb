//! Element model: rectangles, node kinds, controls and container layouts
//!
//! Geometry flows strictly top-down. A node's rectangle is resolved against
//! its immediate parent's already resolved rectangle at the moment the node
//! is visited, never against an ancestor further up, and never cached:
//! controls and child layouts are transient view objects, reconstructable at
//! any time from the attribute source plus the parent rectangle.

use crate::source::{AttributeSource, AttributeValue};

use super::error::LayoutError;
use super::iter::Elements;
use super::units;

/// Resolved pixel rectangle. `x`/`y` are absolute (the parent origin is
/// already folded in during resolution).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Right edge x-coordinate
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    /// Bottom edge y-coordinate
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Check if this rectangle contains a point
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

/// Closed set of recognized node kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Grid,
    Table,
    Control,
}

impl Kind {
    /// Map a node kind name to its tag, `None` for unrecognized names
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "grid" => Some(Kind::Grid),
            "table" => Some(Kind::Table),
            "control" => Some(Kind::Control),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Grid => "grid",
            Kind::Table => "table",
            Kind::Control => "control",
        }
    }

    pub fn is_container(self) -> bool {
        matches!(self, Kind::Grid | Kind::Table)
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Layout axis, used to pick the parent extent and cell-count attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    fn extent(self, rect: Rect) -> i32 {
        match self {
            Axis::Horizontal => rect.w,
            Axis::Vertical => rect.h,
        }
    }

    fn cell_attribute(self) -> &'static str {
        match self {
            Axis::Horizontal => "width-cell",
            Axis::Vertical => "height-cell",
        }
    }
}

/// A container node with a resolved rectangle.
///
/// The root layout is built once per session from an explicit rectangle and
/// the document root; child layouts are manufactured on demand during
/// traversal. `S` is a cheap node handle, so `Layout` itself is `Copy`.
#[derive(Debug, Clone, Copy)]
pub struct Layout<S: AttributeSource> {
    source: S,
    rect: Rect,
    kind: Kind,
}

impl<S: AttributeSource> Layout<S> {
    /// Build the root layout from an explicit rectangle.
    ///
    /// The root's own position attributes are ignored; its rectangle is the
    /// caller's viewport and only `set_rect` ever changes it.
    pub fn new(source: S, rect: Rect) -> Result<Self, LayoutError> {
        let kind = container_kind(&source)?;
        Ok(Self { source, rect, kind })
    }

    /// Build a child container, resolving its rectangle against the parent
    pub(crate) fn from_parent(source: S, parent: &Layout<S>) -> Result<Self, LayoutError> {
        let kind = match Kind::parse(source.kind_name()) {
            Some(kind) if kind.is_container() => kind,
            Some(kind) => return Err(LayoutError::unknown_kind(kind.as_str())),
            None => return Err(LayoutError::unknown_kind(source.kind_name())),
        };
        let rect = resolve_rect(&source, parent)?;
        Ok(Self { source, rect, kind })
    }

    /// Rebind this layout to a freshly parsed document.
    ///
    /// Only the content linkage changes: the resolved rectangle survives a
    /// reload, so a tree that was resized keeps its viewport. Traversals
    /// started before the reload must be discarded.
    pub fn load(&mut self, source: S) -> Result<(), LayoutError> {
        self.kind = container_kind(&source)?;
        self.source = source;
        Ok(())
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Override the resolved rectangle, e.g. on viewport resize. Descendants
    /// pick the new geometry up on the next traversal; elements already
    /// materialized keep their old rectangles.
    pub fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Typed attribute lookup delegating to the attribute source
    pub fn attribute<T: AttributeValue>(&self, name: &str, default: T) -> T {
        self.source.attribute(name, default)
    }

    pub(crate) fn source(&self) -> S {
        self.source
    }

    /// Start a fresh depth-first traversal over every descendant element.
    ///
    /// Each call rebuilds the frame stack from the current source and the
    /// current rectangle; traversals are independent of each other.
    pub fn elements(&self) -> Elements<S> {
        Elements::new(self)
    }

    /// Linear search for the first control with a matching id.
    ///
    /// Ids are not guaranteed unique; the first match in document order wins.
    /// A miss is an absence, not a failure.
    pub fn find_control(&self, id: &str) -> Result<Option<Control<S>>, LayoutError> {
        for element in self.elements() {
            if let Element::Control(control) = element? {
                if control.id == id {
                    return Ok(Some(control));
                }
            }
        }
        Ok(None)
    }

    /// Cell count for resolving `c` units in children, `None` off tables
    fn cell_count(&self, axis: Axis) -> Option<i32> {
        if self.kind == Kind::Table {
            Some(self.attribute(axis.cell_attribute(), 0))
        } else {
            None
        }
    }
}

fn container_kind<S: AttributeSource>(source: &S) -> Result<Kind, LayoutError> {
    match Kind::parse(source.kind_name()) {
        Some(kind) if kind.is_container() => Ok(kind),
        _ => Err(LayoutError::RootNotContainer {
            kind: source.kind_name().to_string(),
        }),
    }
}

/// Resolve a node's rectangle against its immediate parent.
///
/// Width and height are resolved alongside position, so by the time this
/// node's own children are visited its full extent is known.
fn resolve_rect<S: AttributeSource>(source: &S, parent: &Layout<S>) -> Result<Rect, LayoutError> {
    let parent_rect = parent.rect();
    let cells_x = parent.cell_count(Axis::Horizontal);
    let cells_y = parent.cell_count(Axis::Vertical);

    let length = |name: &str| source.attribute(name, String::new());

    Ok(Rect {
        x: parent_rect.x
            + units::resolve(&length("x"), Axis::Horizontal.extent(parent_rect), cells_x)?,
        y: parent_rect.y
            + units::resolve(&length("y"), Axis::Vertical.extent(parent_rect), cells_y)?,
        w: units::resolve(&length("width"), Axis::Horizontal.extent(parent_rect), cells_x)?,
        h: units::resolve(&length("height"), Axis::Vertical.extent(parent_rect), cells_y)?,
    })
}

/// A terminal leaf element. Immutable once constructed.
#[derive(Debug, Clone)]
pub struct Control<S: AttributeSource> {
    source: S,
    pub rect: Rect,
    pub id: String,
    pub data: String,
}

impl<S: AttributeSource> Control<S> {
    pub(crate) fn new(source: S, parent: &Layout<S>) -> Result<Self, LayoutError> {
        match Kind::parse(source.kind_name()) {
            Some(Kind::Control) => {}
            _ => return Err(LayoutError::unknown_kind(source.kind_name())),
        }
        let rect = resolve_rect(&source, parent)?;
        Ok(Self {
            source,
            rect,
            id: source.attribute("id", String::new()),
            data: source.attribute("data", String::new()),
        })
    }

    pub fn kind(&self) -> Kind {
        Kind::Control
    }

    /// Typed attribute lookup delegating to the attribute source
    pub fn attribute<T: AttributeValue>(&self, name: &str, default: T) -> T {
        self.source.attribute(name, default)
    }
}

/// One yielded traversal element: either a container or a leaf control
#[derive(Debug, Clone)]
pub enum Element<S: AttributeSource> {
    Container(Layout<S>),
    Control(Control<S>),
}

impl<S: AttributeSource> Element<S> {
    pub fn is_control(&self) -> bool {
        matches!(self, Element::Control(_))
    }

    pub fn rect(&self) -> Rect {
        match self {
            Element::Container(layout) => layout.rect(),
            Element::Control(control) => control.rect,
        }
    }

    pub fn kind(&self) -> Kind {
        match self {
            Element::Container(layout) => layout.kind(),
            Element::Control(control) => control.kind(),
        }
    }

    pub fn as_container(&self) -> Option<&Layout<S>> {
        match self {
            Element::Container(layout) => Some(layout),
            Element::Control(_) => None,
        }
    }

    pub fn as_control(&self) -> Option<&Control<S>> {
        match self {
            Element::Control(control) => Some(control),
            Element::Container(_) => None,
        }
    }
}
