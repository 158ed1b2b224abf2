//! Minimal Atlassian Document Format (ADF) support.
//!
//! Descriptions are written as a single paragraph holding one text node and
//! read back by joining the text of every top-level paragraph.

use serde::{Deserialize, Serialize};

/// One ADF node. Documents, paragraphs and text runs share this shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdfNode {
    /// Node type, for example `doc`, `paragraph` or `text`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Schema version, present on the root document only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
    /// Child nodes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub content: Vec<AdfNode>,
    /// Text of a text node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl AdfNode {
    /// Wraps plain text in a one-paragraph document.
    #[must_use]
    pub fn document(text: &str) -> Self {
        let run = Self {
            kind: "text".to_owned(),
            version: None,
            content: Vec::new(),
            text: Some(text.to_owned()),
        };
        let paragraph = Self {
            kind: "paragraph".to_owned(),
            version: None,
            content: vec![run],
            text: None,
        };
        Self {
            kind: "doc".to_owned(),
            version: Some(1),
            content: vec![paragraph],
            text: None,
        }
    }

    /// Flattens the text runs of top-level paragraphs, separated by spaces.
    ///
    /// Non-paragraph blocks and non-text inline nodes are skipped.
    #[must_use]
    pub fn plain_text(&self) -> String {
        self.content
            .iter()
            .filter(|block| block.kind == "paragraph")
            .flat_map(|paragraph| paragraph.content.iter())
            .filter(|inline| inline.kind == "text")
            .map(|inline| inline.text.as_deref().unwrap_or_default())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
