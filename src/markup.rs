//! Markup tree for the preview and its HTML serialization.
//! No script, no inline event handlers; only structure and attributes.

use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Tags serialized without a closing tag
const VOID_TAGS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

/// A node in the preview markup tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    pub fn text(s: impl Into<String>) -> Self {
        Node::Text(s.into())
    }

    /// Serialize the subtree to HTML with all text and attribute values escaped
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = write_node(self, &mut out);
        out
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

/// An element with ordered attributes and children
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub tag: String,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Append an attribute. Attributes are serialized in append order.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    pub fn id(self, value: impl Into<String>) -> Self {
        self.attr("id", value)
    }

    pub fn class(self, value: impl Into<String>) -> Self {
        self.attr("class", value)
    }

    /// Append a child node
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Append a text child
    pub fn text(self, s: impl Into<String>) -> Self {
        self.child(Node::Text(s.into()))
    }
}

fn write_node(node: &Node, out: &mut String) -> std::fmt::Result {
    match node {
        Node::Text(text) => out.write_str(&escape_html(text)),
        Node::Element(el) => {
            write!(out, "<{}", el.tag)?;
            for (name, value) in &el.attrs {
                write!(out, " {}=\"{}\"", name, escape_html(value))?;
            }
            out.write_str(">")?;
            if VOID_TAGS.contains(&el.tag.as_str()) {
                return Ok(());
            }
            for child in &el.children {
                write_node(child, out)?;
            }
            write!(out, "</{}>", el.tag)
        }
    }
}

pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
