//! Document tree produced by the markup parser

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// A single raw attribute. The value is kept as source text; conversion to
/// scalar types happens through the `AttributeSource` accessor family.
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
    pub span: Span,
}

/// One element of the markup document: a kind name, its attributes and its
/// children in document order.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub kind: String,
    pub attributes: Vec<Attribute>,
    pub children: Vec<Node>,
    pub span: Span,
}

impl Node {
    /// Raw text of an attribute, if present
    pub fn raw_attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// Total number of elements in this subtree, the node itself included
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(Node::subtree_len).sum::<usize>()
    }
}

/// Root of a parsed markup document
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub root: Node,
}
