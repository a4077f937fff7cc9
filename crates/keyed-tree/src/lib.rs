//! Keyed tree nodes and a vertical pretty printer for them.
//!
//! Ported from the TypeScript `keyed-node` helper: a tree node carries a
//! displayable key, optional data and an optional ordered list of child
//! slots, and [`pretty_print`] renders it one line per node.
//!
//! # Example
//!
//! ```
//! use keyed_tree::{pretty_print, KeyedNode};
//!
//! let tree: KeyedNode<(), &str> = KeyedNode::new("A")
//!     .child(KeyedNode::new("B").child(KeyedNode::new("D")))
//!     .empty_child()
//!     .child(KeyedNode::new("C"));
//!
//! assert_eq!(pretty_print(&tree, None, None), "↳ A\n  ↳ B\n    ↳ D\n  ↳ C");
//! assert_eq!(
//!     pretty_print(&tree, Some(true), None),
//!     "↳ A\n  ↳ B\n    ↳ D\n  ↳ ()\n  ↳ C"
//! );
//! ```

pub mod keyed_node;
pub mod print;

pub use keyed_node::{ChildSlot, KeyedNode};
pub use print::{
    format_line, pretty_lines, pretty_print, pretty_print_with, prettyPrint, PrettyLines,
    PrettyPrintOptions, Printable, DEFAULT_NULL_SYMBOL, INDENT, MARKER,
};
