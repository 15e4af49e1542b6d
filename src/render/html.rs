//! HTML text backend.

use std::fmt::Write;

use super::{ClickAction, Node, RenderBackend};
use crate::error::Result;

/// Serializes the board to static HTML.
///
/// Click targets become `data-href` attributes so the output can be
/// inspected or wired up by a page script.
#[derive(Debug, Default)]
pub struct HtmlBackend {
    html: String,
}

impl HtmlBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Markup of the last mounted tree
    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn into_html(self) -> String {
        self.html
    }
}

impl RenderBackend for HtmlBackend {
    fn mount(&mut self, root: &Node) -> Result<()> {
        self.html = to_html(root);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "html"
    }
}

/// Serialize a tree to HTML
pub fn to_html(node: &Node) -> String {
    let mut out = String::new();
    write_node(&mut out, node);
    out
}

fn write_node(out: &mut String, node: &Node) {
    out.push('<');
    out.push_str(node.tag);
    if let Some(class) = &node.class {
        write_attr(out, "class", class);
    }
    if !node.style.is_empty() {
        write_attr(out, "style", &node.style_text());
    }
    for (name, value) in &node.attrs {
        write_attr(out, name, value);
    }
    if let Some(ClickAction::Navigate(target)) = &node.on_click {
        write_attr(out, "data-href", target);
    }
    out.push('>');
    if let Some(text) = &node.text {
        out.push_str(&escape(text));
    }
    for child in &node.children {
        write_node(out, child);
    }
    let _ = write!(out, "</{}>", node.tag);
}

fn write_attr(out: &mut String, name: &str, value: &str) {
    let _ = write!(out, " {name}=\"{}\"", escape(value));
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
