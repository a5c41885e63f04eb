//! Renders trees as text for diagnostics and debugging.
//!
//! Every node has two renderings. The block form spreads a node over several
//! lines, one child per line, each child padded in proportion to its depth.
//! The inline form fits a node on one line and is what a parent uses when a
//! child appears as a sub-expression.
//!
//! Output is built into a single buffer owned by a [`Printer`]. Each payload
//! type describes itself as a head (its kind name) followed by a list of
//! [`Entry`]s, and the printer lays those out the same way for every kind:
//!
//! ```text
//! List [
//!   Int { 3 }
//!   Int { 5 }]
//! ```
//!
//! A rendering never starts with padding and never ends with a newline. The
//! caller positions the first line; the closing delimiter follows the last
//! entry directly.

use std::borrow::Cow;

use crate::ast::{Node, NodeKind};
use crate::config::RenderConfig;

mod nodes;


/* Public Interface */

/// Renders `node` with the default [`RenderConfig`].
///
/// `indent` is the depth the node sits at; it does not pad the first line but
/// shifts every line below it.
pub fn render(node: &Node, indent: usize, inline: bool) -> String {
    render_with(node, indent, inline, &RenderConfig::default())
}

pub fn render_with(node: &Node, indent: usize, inline: bool, config: &RenderConfig) -> String {
    tracing::trace!(kind = %node.kind(), indent, inline, "render");

    let mut printer = Printer::new(config);
    printer.child(node, indent, inline);
    printer.finish()
}

impl Node {
    /// See [`render`].
    pub fn render(&self, indent: usize, inline: bool) -> String {
        render(self, indent, inline)
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render(0, false))
    }
}

/// Anything that can write itself into a [`Printer`].
///
/// Implemented by [`Node`] and by the payload types that appear as typed
/// children (identifiers, integer indices, ranges, blocks, ...).
pub trait Render {
    fn write(&self, printer: &mut Printer<'_>, depth: usize, inline: bool);
}

/* Printer */

/// The opening and closing delimiters around a node's entries, and what goes
/// between entries in the inline form.
#[derive(Debug, Clone, Copy)]
pub struct Delims {
    open: &'static str,
    close: &'static str,
    separator: &'static str,
}

impl Delims {
    /// `[a, b]`: lists and other sequences.
    pub const SEQUENCE: Delims = Delims { open: "[", close: "]", separator: ", " };
    /// `(a, b)`: tuples and parameter-like groups.
    pub const TUPLE: Delims = Delims { open: "(", close: ")", separator: ", " };
    /// `{a, b}`: a node wrapping unlabeled children.
    pub const GROUP: Delims = Delims { open: "{", close: "}", separator: ", " };
    /// `{a; b}`: records of labeled fields and statement sequences.
    pub const RECORD: Delims = Delims { open: "{", close: "}", separator: "; " };
}

/// One line of a node's block form, or one separated item of its inline form.
pub struct Entry<'a> {
    label: Option<&'static str>,
    value: Value<'a>,
}

enum Value<'a> {
    Node(&'a dyn Render),
    Text(Cow<'a, str>),
    Seq(Delims, Vec<Entry<'a>>),
}

impl<'a> Entry<'a> {
    pub fn child(node: &'a impl Render) -> Entry<'a> {
        Entry { label: None, value: Value::Node(node) }
    }

    pub fn field(label: &'static str, node: &'a impl Render) -> Entry<'a> {
        Entry { label: Some(label), value: Value::Node(node) }
    }

    pub fn text(text: impl Into<Cow<'a, str>>) -> Entry<'a> {
        Entry { label: None, value: Value::Text(text.into()) }
    }

    pub fn field_text(label: &'static str, text: impl Into<Cow<'a, str>>) -> Entry<'a> {
        Entry { label: Some(label), value: Value::Text(text.into()) }
    }

    pub fn field_seq(label: &'static str, delims: Delims, entries: Vec<Entry<'a>>) -> Entry<'a> {
        Entry { label: Some(label), value: Value::Seq(delims, entries) }
    }
}

/// Padding stops growing at this many columns, however deep the node or wide the indent.
pub const MAX_PADDING: usize = 1 << 16;

const COLOR_HEAD: &str = "\x1b[1;36m";
const COLOR_RESET: &str = "\x1b[0m";

/// Accumulates the rendering of one tree.
pub struct Printer<'c> {
    config: &'c RenderConfig,
    out: String,
}

impl<'c> Printer<'c> {
    pub fn new(config: &'c RenderConfig) -> Printer<'c> {
        Printer { config, out: String::new() }
    }

    pub fn finish(self) -> String {
        self.out
    }

    /// Writes a child at `depth`.
    pub fn child(&mut self, node: &dyn Render, depth: usize, inline: bool) {
        // Prevent stack overflow on deeply nested trees by allocating additional stack as required.
        stacker::maybe_grow(32 * 1024, 1024 * 1024, || node.write(self, depth, inline));
    }

    pub fn text(&mut self, text: &str) {
        self.out.push_str(text);
    }

    /// Writes the kind name, followed by ` (detail)` when present.
    pub fn head(&mut self, kind: NodeKind, detail: Option<&str>) {
        if self.config.colorful {
            self.out.push_str(COLOR_HEAD);
            self.out.push_str(kind.name());
            self.out.push_str(COLOR_RESET);
        } else {
            self.out.push_str(kind.name());
        }

        if let Some(detail) = detail {
            self.out.push_str(" (");
            self.out.push_str(detail);
            self.out.push(')');
        }
    }

    /// Writes a leaf: `Kind { value }` in block form, `inline_text` in inline form.
    ///
    /// Leaves without a short inline spelling pass `None` and render the same in both forms.
    pub fn leaf(&mut self, kind: NodeKind, value: Option<&str>, inline_text: Option<&str>, inline: bool) {
        if let (true, Some(short)) = (inline, inline_text) {
            self.text(short);
            return;
        }

        self.head(kind, None);
        match value {
            Some(value) => {
                self.text(" { ");
                self.text(value);
                self.text(" }");
            }
            None => self.text(" { }"),
        }
    }

    /// Writes the delimited entries that follow a head, starting with a space.
    pub fn body(&mut self, delims: Delims, entries: &[Entry<'_>], depth: usize, inline: bool) {
        if entries.is_empty() {
            self.text(" ");
            self.text(delims.open);
            self.text(" ");
            self.text(delims.close);
            return;
        }

        if inline {
            self.text(" ");
            self.text(delims.open);
            self.text(" ");
            for (i, entry) in entries.iter().enumerate() {
                if i > 0 {
                    self.text(delims.separator);
                }
                self.entry(entry, depth, true);
            }
            self.text(" ");
            self.text(delims.close);
        } else {
            self.text(" ");
            self.text(delims.open);
            let inner = depth.saturating_add(1);
            for entry in entries {
                self.out.push('\n');
                self.pad(inner);
                self.entry(entry, inner, false);
            }
            self.text(delims.close);
        }
    }

    fn entry(&mut self, entry: &Entry<'_>, depth: usize, inline: bool) {
        if let Some(label) = entry.label {
            self.text(label);
            self.text(":");
        }

        match &entry.value {
            Value::Node(node) => {
                if entry.label.is_some() {
                    self.text(" ");
                }
                self.child(*node, depth, inline);
            }
            Value::Text(text) => {
                if entry.label.is_some() {
                    self.text(" ");
                }
                self.text(text);
            }
            // The body supplies its own leading space.
            Value::Seq(delims, entries) => self.body(*delims, entries, depth, inline),
        }
    }

    fn pad(&mut self, depth: usize) {
        let width = self.config.indent_width.saturating_mul(depth).min(MAX_PADDING);
        self.out.extend(std::iter::repeat(' ').take(width));
    }
}
