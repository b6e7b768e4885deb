//! Markup front end for uiwarp layout documents
//!
//! The layout core only consumes the `AttributeSource` trait; this module
//! provides the built-in document format behind it. An element is written as
//! `kind [attr: value, ...] { children }`:
//!
//! ```text
//! grid {
//!     table [width-cell: 4, height-cell: 1, width: "100%", height: "100%"] {
//!         control [id: "ok", x: "1c", width: "2c", height: "100%"]
//!     }
//! }
//! ```

pub mod ast;
mod grammar;
pub mod lexer;

pub use ast::*;
pub use grammar::parse;
