//! Paste wire types and representation formats.

use serde::{Deserialize, Serialize};

/// Request payload for creating a paste.
#[derive(Debug, Deserialize)]
pub struct CreatePasteRequest {
    /// Submitted content. An absent field is treated like empty text so both
    /// cases produce the same validation error.
    #[serde(default)]
    pub text: String,
    pub output_format: Option<String>,
}

/// Default JSON response for a created paste.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasteResponse {
    pub id: String,
    pub url: String,
    pub plain_url: String,
    pub json_url: String,
    pub file_url: String,
}

/// Paste content returned by `format=json` retrieval.
#[derive(Debug, Serialize)]
pub struct PasteData {
    pub id: String,
    pub text: String,
}

/// Query parameters for retrieving a paste.
#[derive(Debug, Deserialize)]
pub struct GetPasteQuery {
    pub format: Option<String>,
}

/// Create-response representation selected by `output_format`.
///
/// Unrecognized values intentionally fall through to the default rather
/// than being rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Url,
    PlainUrl,
    FileUrl,
}

impl OutputFormat {
    /// Parse a wire value; absent or unrecognized values select the default.
    ///
    /// # Arguments
    /// - `value`: Raw `output_format` field, if any.
    ///
    /// # Returns
    /// The matching variant, or [`OutputFormat::Json`] as the fallback.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("url") => Self::Url,
            Some("plain_url") => Self::PlainUrl,
            Some("file_url") => Self::FileUrl,
            _ => Self::Json,
        }
    }
}

/// Retrieval representation selected by the `format` query parameter.
///
/// Unrecognized values intentionally fall through to the default rather
/// than being rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PasteFormat {
    #[default]
    File,
    Plain,
    Json,
}

impl PasteFormat {
    /// Parse a wire value; absent or unrecognized values select the default.
    ///
    /// # Arguments
    /// - `value`: Raw `format` query value, if any.
    ///
    /// # Returns
    /// The matching variant, or [`PasteFormat::File`] as the fallback.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("plain") => Self::Plain,
            Some("json") => Self::Json,
            _ => Self::File,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{OutputFormat, PasteFormat};

    #[test]
    fn output_format_parses_known_values() {
        assert_eq!(OutputFormat::parse(Some("json")), OutputFormat::Json);
        assert_eq!(OutputFormat::parse(Some("url")), OutputFormat::Url);
        assert_eq!(OutputFormat::parse(Some("plain_url")), OutputFormat::PlainUrl);
        assert_eq!(OutputFormat::parse(Some("file_url")), OutputFormat::FileUrl);
    }

    #[test]
    fn output_format_falls_back_to_json() {
        assert_eq!(OutputFormat::parse(None), OutputFormat::Json);
        assert_eq!(OutputFormat::parse(Some("yaml")), OutputFormat::Json);
        assert_eq!(OutputFormat::parse(Some("")), OutputFormat::Json);
        assert_eq!(OutputFormat::parse(Some("URL")), OutputFormat::Json);
    }

    #[test]
    fn paste_format_parses_known_values() {
        assert_eq!(PasteFormat::parse(Some("file")), PasteFormat::File);
        assert_eq!(PasteFormat::parse(Some("plain")), PasteFormat::Plain);
        assert_eq!(PasteFormat::parse(Some("json")), PasteFormat::Json);
    }

    #[test]
    fn paste_format_falls_back_to_file() {
        assert_eq!(PasteFormat::parse(None), PasteFormat::File);
        assert_eq!(PasteFormat::parse(Some("html")), PasteFormat::File);
        assert_eq!(PasteFormat::parse(Some("")), PasteFormat::File);
    }
}
