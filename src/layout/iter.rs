//! Lazy depth-first traversal over a layout tree
//!
//! The traversal is an explicit stack of frames, one per container currently
//! being walked. Each frame carries the container's resolved layout (the
//! parent context for its children), a cursor over the remaining children
//! and the child currently under the cursor. The stack invariant: every
//! frame on the stack has a current child; an empty stack means exhausted.
//!
//! Nothing is computed ahead of the cursor and nothing is cached behind it.
//! `peek` re-resolves the current element from the same inputs every call,
//! so peeking is idempotent; `next` yields pre-order document order, every
//! descendant exactly once, containers before their own subtree.

use crate::source::AttributeSource;

use super::element::{Control, Element, Kind, Layout};
use super::error::LayoutError;

struct Frame<S: AttributeSource> {
    parent: Layout<S>,
    cursor: S::Children,
    current: S,
}

impl<S: AttributeSource> Frame<S> {
    /// Open a frame over a container's children, `None` if it has none
    fn open(parent: Layout<S>) -> Option<Self> {
        let mut cursor = parent.source().children();
        let current = cursor.next()?;
        Some(Self {
            parent,
            cursor,
            current,
        })
    }
}

/// Iterator over every descendant element of a layout tree.
///
/// Yields `Err` exactly once on the first contract violation and is
/// exhausted afterwards; dropping it mid-walk is the only cancellation
/// needed, the frames hold no external resources.
pub struct Elements<S: AttributeSource> {
    stack: Vec<Frame<S>>,
}

impl<S: AttributeSource> Elements<S> {
    pub(crate) fn new(root: &Layout<S>) -> Self {
        Self {
            stack: Frame::open(*root).into_iter().collect(),
        }
    }

    /// Resolve the element under the cursor without moving it.
    ///
    /// Repeated calls recompute the same geometry from the same parent
    /// rectangle and attribute source; there is no memoization to
    /// invalidate.
    pub fn peek(&self) -> Option<Result<Element<S>, LayoutError>> {
        let frame = self.stack.last()?;
        Some(materialize(frame.current, &frame.parent))
    }

    /// Move past the current element: descend into containers, step over
    /// controls, and pop-and-advance through exhausted frames.
    fn advance(&mut self) -> Result<(), LayoutError> {
        let Some(frame) = self.stack.last() else {
            return Ok(());
        };
        let source = frame.current;

        if Kind::parse(source.kind_name()).is_some_and(Kind::is_container) {
            let child = Layout::from_parent(source, &frame.parent)?;
            if let Some(opened) = Frame::open(child) {
                // Descend; the cursor at this level stays on the container
                // until the subtree is exhausted.
                self.stack.push(opened);
                return Ok(());
            }
            // Childless container: nothing to descend into, step over it
        }

        self.step_past_current();
        Ok(())
    }

    /// Advance the top cursor, popping every frame it exhausts
    fn step_past_current(&mut self) {
        while let Some(frame) = self.stack.last_mut() {
            match frame.cursor.next() {
                Some(next) => {
                    frame.current = next;
                    return;
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

fn materialize<S: AttributeSource>(
    source: S,
    parent: &Layout<S>,
) -> Result<Element<S>, LayoutError> {
    match Kind::parse(source.kind_name()) {
        Some(kind) if kind.is_container() => {
            Layout::from_parent(source, parent).map(Element::Container)
        }
        _ => Control::new(source, parent).map(Element::Control),
    }
}

impl<S: AttributeSource> Iterator for Elements<S> {
    type Item = Result<Element<S>, LayoutError>;

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.peek()?;
        if element.is_err() {
            // Contract violation: abort the traversal
            self.stack.clear();
            return Some(element);
        }
        if let Err(err) = self.advance() {
            self.stack.clear();
            return Some(Err(err));
        }
        Some(element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Rect;
    use crate::markup::parse;

    fn label<S: AttributeSource>(element: &Element<S>) -> String {
        match element {
            Element::Container(layout) => {
                format!("{}:{}", layout.kind(), layout.attribute("id", String::new()))
            }
            Element::Control(control) => format!("control:{}", control.id),
        }
    }

    #[test]
    fn test_preorder_document_order() {
        let doc = parse(
            r#"
            grid {
                grid [id: "left", width: "50%", height: "100%"] {
                    control [id: "a"]
                    control [id: "b"]
                }
                control [id: "c"]
                grid [id: "right", x: "50%", width: "50%", height: "100%"] {
                    control [id: "d"]
                }
            }
        "#,
        )
        .unwrap();
        let root = Layout::new(&doc.root, Rect::new(0, 0, 800, 600)).unwrap();

        let visited: Vec<String> = root
            .elements()
            .map(|e| label(&e.unwrap()))
            .collect();

        assert_eq!(
            visited,
            vec![
                "grid:left",
                "control:a",
                "control:b",
                "control:c",
                "grid:right",
                "control:d",
            ]
        );
    }

    #[test]
    fn test_completeness_excludes_root() {
        let doc = parse(
            r#"
            grid {
                grid [width: "100%", height: "50%"] {
                    control
                    control
                }
                control
            }
        "#,
        )
        .unwrap();
        let root = Layout::new(&doc.root, Rect::new(0, 0, 100, 100)).unwrap();
        let yielded = root.elements().count();
        assert_eq!(yielded, doc.root.subtree_len() - 1);
    }

    #[test]
    fn test_childless_root_is_exhausted() {
        let doc = parse("grid").unwrap();
        let root = Layout::new(&doc.root, Rect::new(0, 0, 100, 100)).unwrap();
        assert!(root.elements().next().is_none());
    }

    #[test]
    fn test_empty_container_yielded_once() {
        let doc = parse(
            r#"
            grid {
                grid [id: "empty", width: "10px", height: "10px"]
                control [id: "after"]
            }
        "#,
        )
        .unwrap();
        let root = Layout::new(&doc.root, Rect::new(0, 0, 100, 100)).unwrap();
        let visited: Vec<String> = root
            .elements()
            .map(|e| label(&e.unwrap()))
            .collect();
        assert_eq!(visited, vec!["grid:empty", "control:after"]);
    }

    #[test]
    fn test_peek_is_idempotent() {
        let doc = parse(r#"grid { control [x: "25%", width: "50%", height: "100%"] }"#).unwrap();
        let root = Layout::new(&doc.root, Rect::new(0, 0, 400, 200)).unwrap();
        let walk = root.elements();

        let first = walk.peek().unwrap().unwrap().rect();
        let second = walk.peek().unwrap().unwrap().rect();
        assert_eq!(first, Rect::new(100, 0, 200, 200));
        assert_eq!(first, second);
    }

    #[test]
    fn test_traversals_are_independent() {
        let doc = parse(r#"grid { control control }"#).unwrap();
        let root = Layout::new(&doc.root, Rect::new(0, 0, 100, 100)).unwrap();

        let mut first = root.elements();
        first.next();
        // A fresh traversal starts from the beginning regardless
        assert_eq!(root.elements().count(), 2);
        assert_eq!(first.count(), 1);
    }

    #[test]
    fn test_unknown_kind_aborts_traversal() {
        let doc = parse(r#"grid { widget control }"#).unwrap();
        let root = Layout::new(&doc.root, Rect::new(0, 0, 100, 100)).unwrap();

        let mut walk = root.elements();
        assert!(matches!(
            walk.next(),
            Some(Err(LayoutError::UnknownKind { .. }))
        ));
        // Aborted: nothing after the failure
        assert!(walk.next().is_none());
    }
}
