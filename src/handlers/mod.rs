//! HTTP handlers for the paste API.

/// Paste creation, retrieval, and the service banner.
pub mod paste;
