use std::fmt::Display;

use super::pretty_print::{pretty_lines, PrettyPrintOptions};
use crate::keyed_node::KeyedNode;

/// Mirrors upstream `tree-dump/lib/types` export shape.
///
/// `tab` is the prefix of the column the value is printed in; every line
/// after the first is prefixed with it so the output nests under a parent.
pub trait Printable {
    fn to_string_with_tab(&self, tab: Option<&str>) -> String;
}

impl<D, K: Display> Printable for KeyedNode<D, K> {
    fn to_string_with_tab(&self, tab: Option<&str>) -> String {
        let tab = tab.unwrap_or("");
        let options = PrettyPrintOptions::default();
        let mut out = String::new();
        for (i, line) in pretty_lines(self, &options).enumerate() {
            if i > 0 {
                out.push('\n');
                out.push_str(tab);
            }
            out.push_str(&line);
        }
        out
    }
}
