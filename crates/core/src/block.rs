//! Content block type system.
//!
//! A content block is a typed unit of resource content. The discriminator
//! ([`BlockType`]) is stored next to the payload, and the payload itself is a
//! JSON document whose shape depends on the discriminator. [`BlockContent`]
//! is the sum type over all payload shapes; the API boundary parses incoming
//! payloads through it so a block can never be stored with a payload that
//! does not match its declared type.
//!
//! Parsing is validation-only: the raw JSON is what gets persisted, so
//! payloads round-trip byte-for-byte (clients may include extra keys, which
//! are tolerated and preserved).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length for a block title in characters (VARCHAR(255)).
pub const MAX_BLOCK_TITLE_LEN: usize = 255;

// ---------------------------------------------------------------------------
// Block type discriminator
// ---------------------------------------------------------------------------

/// The eight supported content block types.
///
/// Wire names are camelCase (`"copyableText"`, `"fileDownload"`, ...), both
/// in JSON bodies and in the `block_type` database column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BlockType {
    Checklist,
    Alert,
    Text,
    CopyableText,
    FileDownload,
    Link,
    Video,
    Custom,
}

impl BlockType {
    /// All block types, in declaration order.
    pub const ALL: [BlockType; 8] = [
        BlockType::Checklist,
        BlockType::Alert,
        BlockType::Text,
        BlockType::CopyableText,
        BlockType::FileDownload,
        BlockType::Link,
        BlockType::Video,
        BlockType::Custom,
    ];

    /// The wire/database name of this block type.
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockType::Checklist => "checklist",
            BlockType::Alert => "alert",
            BlockType::Text => "text",
            BlockType::CopyableText => "copyableText",
            BlockType::FileDownload => "fileDownload",
            BlockType::Link => "link",
            BlockType::Video => "video",
            BlockType::Custom => "custom",
        }
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BlockType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BlockType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| {
                let valid: Vec<&str> = BlockType::ALL.iter().map(|t| t.as_str()).collect();
                CoreError::Validation(format!(
                    "Invalid block type '{s}'. Must be one of: {}",
                    valid.join(", ")
                ))
            })
    }
}

// ---------------------------------------------------------------------------
// Payload shapes, one struct per block type
// ---------------------------------------------------------------------------

/// One entry of a checklist payload. Item ids are client-assigned strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistContent {
    pub items: Vec<ChecklistItem>,
}

/// Severity of an alert block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Warning,
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertContent {
    pub content: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<AlertKind>,
}

/// Payload for both `text` and `copyableText` blocks (identical shape).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextContent {
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileDownloadContent {
    pub filename: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filesize: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkItem {
    pub url: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkContent {
    pub links: Vec<LinkItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct VideoContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embed_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomContent {
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<bool>,
}

// ---------------------------------------------------------------------------
// The tagged union
// ---------------------------------------------------------------------------

/// A content block payload, keyed by [`BlockType`].
///
/// The discriminator lives outside the payload (separate column / field), so
/// this enum is constructed via [`BlockContent::parse`] rather than derived
/// tagged deserialization.
#[derive(Debug, Clone, PartialEq)]
pub enum BlockContent {
    Checklist(ChecklistContent),
    Alert(AlertContent),
    Text(TextContent),
    CopyableText(TextContent),
    FileDownload(FileDownloadContent),
    Link(LinkContent),
    Video(VideoContent),
    Custom(CustomContent),
}

impl BlockContent {
    /// Parse a raw JSON payload against the schema selected by `block_type`.
    ///
    /// Unknown keys are tolerated (and preserved, since callers persist the
    /// raw JSON); missing required keys or wrongly-typed values fail with
    /// [`CoreError::Validation`].
    pub fn parse(
        block_type: BlockType,
        content: &serde_json::Value,
    ) -> Result<BlockContent, CoreError> {
        fn typed<T: serde::de::DeserializeOwned>(
            block_type: BlockType,
            content: &serde_json::Value,
        ) -> Result<T, CoreError> {
            serde_json::from_value(content.clone()).map_err(|e| {
                CoreError::Validation(format!("Invalid {block_type} block content: {e}"))
            })
        }

        Ok(match block_type {
            BlockType::Checklist => BlockContent::Checklist(typed(block_type, content)?),
            BlockType::Alert => BlockContent::Alert(typed(block_type, content)?),
            BlockType::Text => BlockContent::Text(typed(block_type, content)?),
            BlockType::CopyableText => BlockContent::CopyableText(typed(block_type, content)?),
            BlockType::FileDownload => BlockContent::FileDownload(typed(block_type, content)?),
            BlockType::Link => BlockContent::Link(typed(block_type, content)?),
            BlockType::Video => BlockContent::Video(typed(block_type, content)?),
            BlockType::Custom => BlockContent::Custom(typed(block_type, content)?),
        })
    }

    /// The block type this payload belongs to.
    pub fn block_type(&self) -> BlockType {
        match self {
            BlockContent::Checklist(_) => BlockType::Checklist,
            BlockContent::Alert(_) => BlockType::Alert,
            BlockContent::Text(_) => BlockType::Text,
            BlockContent::CopyableText(_) => BlockType::CopyableText,
            BlockContent::FileDownload(_) => BlockType::FileDownload,
            BlockContent::Link(_) => BlockType::Link,
            BlockContent::Video(_) => BlockType::Video,
            BlockContent::Custom(_) => BlockType::Custom,
        }
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a `block_type` string from the wire.
pub fn validate_block_type(s: &str) -> Result<BlockType, CoreError> {
    s.parse()
}

/// Validate a raw payload against the given block type.
pub fn validate_content(
    block_type: BlockType,
    content: &serde_json::Value,
) -> Result<(), CoreError> {
    BlockContent::parse(block_type, content).map(|_| ())
}

/// Validate an optional block title: length limit only (titles may be absent).
pub fn validate_title(title: Option<&str>) -> Result<(), CoreError> {
    if let Some(t) = title {
        if t.len() > MAX_BLOCK_TITLE_LEN {
            return Err(CoreError::Validation(format!(
                "Block title too long: {} chars (max {MAX_BLOCK_TITLE_LEN})",
                t.len()
            )));
        }
    }
    Ok(())
}
