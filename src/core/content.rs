//! Tool response content model.

use serde::{Deserialize, Serialize};

/// One item of a tool response. Only text is produced by the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentItem {
    Text { text: String },
}

impl ContentItem {
    pub fn text(text: impl Into<String>) -> Self {
        ContentItem::Text { text: text.into() }
    }

    pub fn as_text(&self) -> &str {
        match self {
            ContentItem::Text { text } => text,
        }
    }
}

/// Ordered content returned for a tool call; never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolResponse {
    pub content: Vec<ContentItem>,
}

impl ToolResponse {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ContentItem::text(text)],
        }
    }

    /// Text of the first item.
    pub fn first_text(&self) -> &str {
        self.content.first().map(ContentItem::as_text).unwrap_or("")
    }
}

impl From<ContentItem> for rmcp::model::Content {
    fn from(item: ContentItem) -> Self {
        match item {
            ContentItem::Text { text } => rmcp::model::Content::text(text),
        }
    }
}
