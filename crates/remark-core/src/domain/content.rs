//! Comment ingestion: payload normalization, validation and HTML-entity
//! encoding.
//!
//! Every comment body reaches storage through [`SanitizedContent::ingest`].
//! Stored content is already encoded, so readers render it as-is and must
//! never encode it again.

use serde_json::Value;

use crate::error::ValidationError;

/// Longest accepted comment in UTF-16 code units, measured after trimming.
/// Characters outside the BMP count twice, as they do for browser clients.
pub const MAX_CONTENT_CHARS: usize = 500;

/// Whitespace as stripped by JavaScript `String.prototype.trim`, which also
/// removes the byte order mark.
pub(crate) fn is_js_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// A comment body as delivered by the transport.
#[derive(Debug, Clone, PartialEq)]
pub enum CommentPayload {
    /// Legacy plain-text body.
    Text(String),
    /// Structured body carrying a `content` string.
    Json(Value),
}

impl CommentPayload {
    /// Collapse both payload shapes into one candidate string.
    ///
    /// Returns `None` for any shape that does not carry a string: objects
    /// without `content`, non-string `content`, arrays, numbers and null.
    /// A top-level JSON string is treated like a plain-text body.
    pub fn into_content(self) -> Option<String> {
        match self {
            Self::Text(text) | Self::Json(Value::String(text)) => Some(text),
            Self::Json(Value::Object(mut fields)) => match fields.remove("content") {
                Some(Value::String(text)) => Some(text),
                _ => None,
            },
            Self::Json(_) => None,
        }
    }
}

impl From<String> for CommentPayload {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for CommentPayload {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<Value> for CommentPayload {
    fn from(value: Value) -> Self {
        Self::Json(value)
    }
}

/// Comment text that has been trimmed, length-checked and HTML-entity
/// encoded exactly once.
///
/// The only constructor is [`SanitizedContent::ingest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizedContent(String);

impl SanitizedContent {
    /// Run the ingestion pipeline: normalize, trim, validate, encode.
    pub fn ingest(payload: impl Into<CommentPayload>) -> Result<Self, ValidationError> {
        let raw = payload
            .into()
            .into_content()
            .ok_or(ValidationError::ContentRequired)?;

        let trimmed = raw.trim_matches(is_js_whitespace);
        if trimmed.is_empty() {
            return Err(ValidationError::ContentRequired);
        }
        if trimmed.encode_utf16().count() > MAX_CONTENT_CHARS {
            return Err(ValidationError::ContentTooLong);
        }

        Ok(Self(encode_html(trimmed)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Replace `& < > " '` with `&amp; &lt; &gt; &quot; &#x27;`.
///
/// Single pass, so the output matches replacing `&` first and the other four
/// afterwards. Not idempotent: `&lt;` becomes `&amp;lt;`.
pub fn encode_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}
