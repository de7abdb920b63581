//! Typed model of the serialized Lexical document tree.
//!
//! A persisted rich-text field holds an editor state: a `root` node whose
//! `children` form a tree of typed nodes. Each node carries a `"type"`
//! discriminator plus kind-specific fields; anything this model does not
//! know about deserializes to [`DocumentNode::Unknown`] and is skipped by
//! the renderer rather than failing the whole document.

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::format::TextFormat;

/// Errors produced while loading a persisted editor state.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to parse editor state: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A complete persisted editor state, as stored by the CMS.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorState {
    pub root: RootNode,
}

impl EditorState {
    /// Parse a persisted editor state from its JSON serialization.
    pub fn from_json(input: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(input)?)
    }
}

/// The document root. Only its children matter for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RootNode {
    #[serde(default, deserialize_with = "non_null_nodes")]
    pub children: Vec<DocumentNode>,
}

/// One node in the serialized rich-text tree.
///
/// `children` sequences may contain `null` entries in the wire format;
/// those are dropped during deserialization, so every element in a parsed
/// `children` vec is a real node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum DocumentNode {
    Text {
        #[serde(default)]
        text: String,
        /// Inline formatting bit-mask; see [`TextFormat`].
        #[serde(default)]
        format: TextFormat,
    },
    Paragraph {
        /// Text-alignment hint ("left", "center", ...); empty means unset.
        #[serde(default)]
        format: Option<String>,
        #[serde(default, deserialize_with = "non_null_nodes")]
        children: Vec<DocumentNode>,
    },
    Heading {
        #[serde(default)]
        tag: HeadingTag,
        #[serde(default)]
        format: Option<String>,
        #[serde(default, deserialize_with = "non_null_nodes")]
        children: Vec<DocumentNode>,
    },
    Label {
        #[serde(default, deserialize_with = "non_null_nodes")]
        children: Vec<DocumentNode>,
    },
    LargeBody {
        #[serde(default, deserialize_with = "non_null_nodes")]
        children: Vec<DocumentNode>,
    },
    List {
        #[serde(default)]
        tag: ListTag,
        /// Style hint from the editor: "check", "bullet", "number".
        #[serde(default, rename = "listType")]
        list_type: String,
        #[serde(default, deserialize_with = "non_null_nodes")]
        children: Vec<DocumentNode>,
    },
    #[serde(rename = "listitem")]
    ListItem {
        /// Tri-state: `Some(_)` marks a checkbox item, absent means plain.
        #[serde(default)]
        checked: Option<bool>,
        /// Ordinal position within the parent list.
        #[serde(default)]
        value: Option<u32>,
        #[serde(default, deserialize_with = "non_null_nodes")]
        children: Vec<DocumentNode>,
    },
    Quote {
        #[serde(default, deserialize_with = "non_null_nodes")]
        children: Vec<DocumentNode>,
    },
    Link {
        #[serde(default)]
        fields: LinkFields,
        #[serde(default, deserialize_with = "non_null_nodes")]
        children: Vec<DocumentNode>,
    },
    /// Any node kind this renderer does not handle. Renders nothing.
    #[serde(other)]
    Unknown,
}

/// Heading level, `h1` through `h6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadingTag {
    H1,
    #[default]
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl HeadingTag {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::H4 => "h4",
            Self::H5 => "h5",
            Self::H6 => "h6",
        }
    }
}

/// List container kind: ordered or unordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListTag {
    Ol,
    #[default]
    Ul,
}

impl ListTag {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ol => "ol",
            Self::Ul => "ul",
        }
    }
}

/// Target metadata on a link node.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkFields {
    #[serde(default)]
    pub link_type: LinkType,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub new_tab: bool,
}

/// How a link resolves. Only `custom` links carry a renderable URL; internal
/// links point at other CMS documents and need a resolver this crate does
/// not provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkType {
    Custom,
    #[default]
    Internal,
    #[serde(other)]
    Other,
}

/// Deserialize a node sequence, dropping `null` entries instead of failing.
fn non_null_nodes<'de, D>(deserializer: D) -> Result<Vec<DocumentNode>, D::Error>
where
    D: Deserializer<'de>,
{
    let nodes = Vec::<Option<DocumentNode>>::deserialize(deserializer)?;
    Ok(nodes.into_iter().flatten().collect())
}
