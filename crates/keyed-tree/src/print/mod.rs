//! Mirrors upstream `prettyPrint` plus the `tree-dump` printable shape.

pub mod pretty_print;
pub mod types;

pub use pretty_print::{
    format_line, pretty_lines, pretty_print, pretty_print_with, prettyPrint, PrettyLines,
    PrettyPrintOptions, DEFAULT_NULL_SYMBOL, INDENT, MARKER,
};
pub use types::Printable;
