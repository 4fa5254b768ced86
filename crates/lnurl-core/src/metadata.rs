//! # LNURL-pay Metadata
//!
//! The `metadata` field of an LNURL-pay response is a JSON string encoding
//! an array of `[mimeType, content]` pairs, e.g.
//! `'[["text/plain","A coffee"],["image/png;base64","iVBOR..."]]'`.
//!
//! The relay cares about two entries: the optional embedded PNG icon and
//! the plain-text description. Everything else is ignored.

use serde::{Deserialize, Serialize};

/// Mime type of an embedded PNG icon entry
pub const ICON_MIME: &str = "image/png;base64";

/// Mime type of the plain-text description entry
pub const TEXT_MIME: &str = "text/plain";

/// Parsed LNURL-pay metadata array
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayMetadata {
    entries: Vec<(String, String)>,
}

impl PayMetadata {
    /// Parse the raw JSON string carried in the `metadata` field.
    ///
    /// The field is advisory; callers typically treat a parse failure as
    /// "no metadata" rather than failing the resolution.
    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        let entries: Vec<(String, String)> = serde_json::from_str(raw)?;
        Ok(Self { entries })
    }

    /// All `[mimeType, content]` pairs in declaration order
    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    /// Content of the first entry with the given mime type
    pub fn first(&self, mime: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(m, _)| m == mime)
            .map(|(_, content)| content.as_str())
    }

    /// The embedded PNG icon as a `data:` URI, if present
    pub fn icon_data_uri(&self) -> Option<String> {
        self.first(ICON_MIME)
            .filter(|content| !content.is_empty())
            .map(|content| format!("data:{ICON_MIME},{content}"))
    }

    /// The plain-text description, if present
    pub fn text_plain(&self) -> Option<&str> {
        self.first(TEXT_MIME)
    }
}
