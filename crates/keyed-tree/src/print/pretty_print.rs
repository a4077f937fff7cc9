use std::fmt::{self, Display};
use std::iter::FusedIterator;

use crate::keyed_node::{ChildSlot, KeyedNode};

/// Key text shown for an empty child slot when placeholders are enabled.
pub const DEFAULT_NULL_SYMBOL: &str = "()";
/// Glyph placed before every key, at every depth.
pub const MARKER: &str = "↳";
/// Indentation unit, repeated once per depth level.
pub const INDENT: &str = "  ";

/// Options for [`pretty_print_with`] and [`pretty_lines`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrettyPrintOptions {
    /// If true, every empty child slot gets a placeholder line.
    /// If false, empty slots are skipped and consume no line.
    pub print_null_nodes: bool,
    /// Key text of a placeholder line.
    pub null_symbol: String,
}

impl Default for PrettyPrintOptions {
    fn default() -> Self {
        Self {
            print_null_nodes: false,
            null_symbol: DEFAULT_NULL_SYMBOL.to_string(),
        }
    }
}

impl PrettyPrintOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn print_null_nodes(mut self, print_null_nodes: bool) -> Self {
        self.print_null_nodes = print_null_nodes;
        self
    }

    pub fn null_symbol(mut self, null_symbol: impl Into<String>) -> Self {
        self.null_symbol = null_symbol.into();
        self
    }
}

/// Formats one output line: `INDENT` x `depth`, then `MARKER`, a space and `key`.
pub fn format_line<T: Display + ?Sized>(key: &T, depth: usize) -> String {
    format!("{}{MARKER} {key}", INDENT.repeat(depth))
}

enum Pending<'a, D, K> {
    Node(&'a KeyedNode<D, K>, usize),
    Placeholder(usize),
}

/// Lazy pre-order line iterator returned by [`pretty_lines`].
///
/// Uses an explicit stack, so very deep trees do not grow the call stack.
pub struct PrettyLines<'a, D, K> {
    stack: Vec<Pending<'a, D, K>>,
    print_null_nodes: bool,
    null_symbol: &'a str,
}

impl<'a, D, K: Display> Iterator for PrettyLines<'a, D, K> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        match self.stack.pop()? {
            Pending::Placeholder(depth) => Some(format_line(self.null_symbol, depth)),
            Pending::Node(node, depth) => {
                if let Some(children) = &node.children {
                    // Reversed so the first child is popped first.
                    for slot in children.iter().rev() {
                        match slot {
                            ChildSlot::Node(child) => {
                                self.stack.push(Pending::Node(child, depth + 1))
                            }
                            ChildSlot::Empty if self.print_null_nodes => {
                                self.stack.push(Pending::Placeholder(depth + 1))
                            }
                            ChildSlot::Empty => {}
                        }
                    }
                }
                Some(format_line(&node.key, depth))
            }
        }
    }
}

impl<D, K: Display> FusedIterator for PrettyLines<'_, D, K> {}

/// Lines of the pretty output, generated depth-first on demand.
pub fn pretty_lines<'a, D, K: Display>(
    tree: &'a KeyedNode<D, K>,
    options: &'a PrettyPrintOptions,
) -> PrettyLines<'a, D, K> {
    PrettyLines {
        stack: vec![Pending::Node(tree, 0)],
        print_null_nodes: options.print_null_nodes,
        null_symbol: &options.null_symbol,
    }
}

/// Joins [`pretty_lines`] with `\n`; no trailing newline.
pub fn pretty_print_with<D, K: Display>(
    tree: &KeyedNode<D, K>,
    options: &PrettyPrintOptions,
) -> String {
    let mut out = String::new();
    for (i, line) in pretty_lines(tree, options).enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&line);
    }
    out
}

/// Mirrors upstream `prettyPrint` from `keyed-node.ts`.
///
/// `None` selects the defaults: empty slots skipped, placeholder `"()"`.
pub fn pretty_print<D, K: Display>(
    tree: &KeyedNode<D, K>,
    print_null_nodes: Option<bool>,
    null_symbol: Option<&str>,
) -> String {
    let options = PrettyPrintOptions {
        print_null_nodes: print_null_nodes.unwrap_or(false),
        null_symbol: null_symbol.unwrap_or(DEFAULT_NULL_SYMBOL).to_string(),
    };
    pretty_print_with(tree, &options)
}

#[allow(non_snake_case)]
pub fn prettyPrint<D, K: Display>(
    tree: &KeyedNode<D, K>,
    print_null_nodes: Option<bool>,
    null_symbol: Option<&str>,
) -> String {
    pretty_print(tree, print_null_nodes, null_symbol)
}

impl<D, K: Display> Display for KeyedNode<D, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let options = PrettyPrintOptions::default();
        for (i, line) in pretty_lines(self, &options).enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(&line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> KeyedNode<(), &'static str> {
        KeyedNode::new("root")
            .child(KeyedNode::new("a").empty_child().child(KeyedNode::new("a1")))
            .empty_child()
            .child(KeyedNode::new("b"))
    }

    #[test]
    fn format_line_indents_two_spaces_per_level() {
        assert_eq!(format_line("k", 0), "↳ k");
        assert_eq!(format_line(&42, 3), "      ↳ 42");
    }

    #[test]
    fn options_default() {
        let options = PrettyPrintOptions::default();
        assert!(!options.print_null_nodes);
        assert_eq!(options.null_symbol, "()");
        assert_eq!(PrettyPrintOptions::new(), options);
    }

    #[test]
    fn options_builder() {
        let options = PrettyPrintOptions::new()
            .print_null_nodes(true)
            .null_symbol("∅");
        assert!(options.print_null_nodes);
        assert_eq!(options.null_symbol, "∅");
    }

    #[test]
    fn lines_skip_empty_slots_by_default() {
        let tree = sample();
        let options = PrettyPrintOptions::default();
        let lines: Vec<String> = pretty_lines(&tree, &options).collect();
        assert_eq!(lines, vec!["↳ root", "  ↳ a", "    ↳ a1", "  ↳ b"]);
    }

    #[test]
    fn lines_emit_placeholders_when_enabled() {
        let tree = sample();
        let options = PrettyPrintOptions::new().print_null_nodes(true);
        let lines: Vec<String> = pretty_lines(&tree, &options).collect();
        assert_eq!(
            lines,
            vec!["↳ root", "  ↳ a", "    ↳ ()", "    ↳ a1", "  ↳ ()", "  ↳ b"]
        );
    }

    #[test]
    fn lines_are_fused() {
        let tree: KeyedNode<(), &str> = KeyedNode::new("x");
        let options = PrettyPrintOptions::default();
        let mut lines = pretty_lines(&tree, &options);
        assert_eq!(lines.next().as_deref(), Some("↳ x"));
        assert_eq!(lines.next(), None);
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn display_matches_default_print() {
        let tree = sample();
        assert_eq!(tree.to_string(), pretty_print(&tree, None, None));
    }

    #[test]
    fn camel_case_alias() {
        let tree = sample();
        assert_eq!(
            prettyPrint(&tree, Some(true), Some("-")),
            pretty_print(&tree, Some(true), Some("-"))
        );
    }
}
