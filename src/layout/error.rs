//! Error types for geometry resolution
//!
//! Every variant here is an authoring error in the layout document, not a
//! runtime condition to recover from. Resolution aborts on the first one: a
//! node with undecidable geometry must not produce best-effort pixels.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LayoutError {
    /// Unparseable magnitude, unknown unit suffix or broken term structure
    #[error("malformed length expression '{expr}'")]
    MalformedLength { expr: String },

    /// `c` units are only meaningful under a table parent
    #[error("cell unit in '{expr}' used outside a table container")]
    CellOutsideTable { expr: String },

    /// A `c` unit was used but the table declares no usable cell count
    #[error("cell unit in '{expr}' but the table declares a cell count of {count}")]
    InvalidCellCount { expr: String, count: i32 },

    /// Node kind is not `grid`, `table` or `control`
    #[error("unrecognized element kind '{kind}'")]
    UnknownKind { kind: String },

    /// The root of a layout tree must itself be a container
    #[error("root element kind '{kind}' is not a container")]
    RootNotContainer { kind: String },
}

impl LayoutError {
    /// Create a malformed length expression error
    pub fn malformed(expr: impl Into<String>) -> Self {
        Self::MalformedLength { expr: expr.into() }
    }

    /// Create a cell-outside-table error
    pub fn cell_outside_table(expr: impl Into<String>) -> Self {
        Self::CellOutsideTable { expr: expr.into() }
    }

    /// Create an unknown kind error
    pub fn unknown_kind(kind: impl Into<String>) -> Self {
        Self::UnknownKind { kind: kind.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_display() {
        let err = LayoutError::malformed("10qq");
        assert!(err.to_string().contains("10qq"));
    }

    #[test]
    fn test_cell_outside_table_display() {
        let err = LayoutError::cell_outside_table("1c");
        assert!(err.to_string().contains("table"));
    }

    #[test]
    fn test_unknown_kind_display() {
        let err = LayoutError::unknown_kind("widget");
        assert!(err.to_string().contains("widget"));
    }
}
