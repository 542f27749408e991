//! Data models for API requests and responses.

/// Paste wire types and representation formats.
pub mod paste;
