// ## File: `src/document/types.rs`

//! document/types.rs
//! Document tree, its packed form and document errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::crypto::protected::ProtectedBuffer;

/// Text content of a node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Text {
    Plain(String),
    /// Value routed through the inner random stream when packed.
    Protected(ProtectedBuffer),
}

impl Text {
    pub fn is_protected(&self) -> bool {
        matches!(self, Text::Protected(_))
    }
}

/// In-memory document node.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Node {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub text: Option<Text>,
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Self::default() }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(Text::Plain(text.into()));
        self
    }

    pub fn with_protected(mut self, text: &str) -> Self {
        self.text = Some(Text::Protected(ProtectedBuffer::from_text(text)));
        self
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// First child named `name`.
    pub fn child(&self, name: &str) -> Option<&Node> {
        self.children.iter().find(|c| c.name == name)
    }

    pub fn child_mut(&mut self, name: &str) -> Option<&mut Node> {
        self.children.iter_mut().find(|c| c.name == name)
    }

    /// Number of protected values in this subtree.
    pub fn protected_count(&self) -> usize {
        let own = usize::from(self.text.as_ref().is_some_and(Text::is_protected));
        own + self.children.iter().map(Node::protected_count).sum::<usize>()
    }
}

fn is_false(b: &bool) -> bool {
    !*b
}

/// Serialized node. When `protected` is set, `text` is the base64 of the
/// value XORed with the inner stream.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackedNode {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<(String, String)>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub protected: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<PackedNode>,
}

impl PackedNode {
    pub fn child(&self, name: &str) -> Option<&PackedNode> {
        self.children.iter().find(|c| c.name == name)
    }

    pub fn child_mut(&mut self, name: &str) -> Option<&mut PackedNode> {
        self.children.iter_mut().find(|c| c.name == name)
    }
}

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("{format} serialize failed: {msg}")]
    Serialize { format: &'static str, msg: String },

    #[error("{format} parse failed: {msg}")]
    Parse { format: &'static str, msg: String },

    /// Protected value is not valid base64.
    #[error("protected value of <{node}> is not valid base64")]
    ProtectedEncoding { node: String },

    #[error("protected flag on <{node}> without a text value")]
    ProtectedWithoutText { node: String },
}
