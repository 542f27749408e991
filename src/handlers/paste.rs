//! Paste HTTP handlers.

use crate::error::AppError;
use crate::models::paste::{
    CreatePasteRequest, GetPasteQuery, OutputFormat, PasteData, PasteFormat, PasteResponse,
};
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Base retrieval URL for a paste, derived from the incoming request.
///
/// Scheme honors `X-Forwarded-Proto` when a proxy sets it, `http` otherwise;
/// host comes from the `Host` header with a loopback fallback for clients
/// that omit it.
fn paste_url(headers: &HeaderMap, id: &str) -> String {
    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("http");
    let host = headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("localhost");
    format!("{}://{}/paste/{}", scheme, host, id)
}

/// Create a new paste.
///
/// # Arguments
/// - `state`: Application state.
/// - `headers`: Request headers, used to derive the retrieval URL.
/// - `req`: Paste creation payload.
///
/// # Returns
/// The created paste's retrieval URLs, shaped per `output_format`.
///
/// # Errors
/// Returns `AppError::BadRequest` when the submitted text is empty.
pub async fn create_paste(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<CreatePasteRequest>,
) -> Result<Response, AppError> {
    if req.text.is_empty() {
        return Err(AppError::BadRequest("Text content is required".to_string()));
    }

    let id = state.store.create(req.text);
    let url = paste_url(&headers, &id);
    tracing::debug!(%id, "created paste");

    let response = match OutputFormat::parse(req.output_format.as_deref()) {
        OutputFormat::Url => url.into_response(),
        OutputFormat::PlainUrl => format!("{}?format=plain", url).into_response(),
        OutputFormat::FileUrl => format!("{}?format=file", url).into_response(),
        OutputFormat::Json => Json(PasteResponse {
            id,
            plain_url: format!("{}?format=plain", url),
            json_url: format!("{}?format=json", url),
            file_url: format!("{}?format=file", url),
            url,
        })
        .into_response(),
    };
    Ok(response)
}

/// Fetch a paste by id.
///
/// # Arguments
/// - `state`: Application state.
/// - `id`: Paste identifier from the path.
/// - `query`: Representation selection (`format=file|plain|json`).
///
/// # Returns
/// The stored text, shaped per `format`. The default `file` representation
/// serves the text as a `text/vtt` attachment named `{id}.vtt`.
///
/// # Errors
/// Returns `AppError::NotFound` when the id is unknown.
pub async fn get_paste(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<GetPasteQuery>,
) -> Result<Response, AppError> {
    let text = state.store.get(&id).ok_or(AppError::NotFound)?;

    let response = match PasteFormat::parse(query.format.as_deref()) {
        PasteFormat::Json => Json(PasteData { id, text }).into_response(),
        PasteFormat::Plain => text.into_response(),
        PasteFormat::File => {
            let headers = [
                (header::CONTENT_TYPE, "text/vtt".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}.vtt\"", id),
                ),
            ];
            (headers, text).into_response()
        }
    };
    Ok(response)
}

/// Service banner with usage hints.
///
/// # Returns
/// Static JSON describing the create and retrieve patterns.
pub async fn root() -> Json<serde_json::Value> {
    Json(json!({
        "message": "Quickpaste",
        "usage": {
            "post": "POST /paste with JSON body containing 'text' field",
            "get": "GET /paste/{id}?format=file|plain|json"
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::paste_url;
    use axum::http::{header, HeaderMap, HeaderValue};

    #[test]
    fn paste_url_uses_host_header() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("paste.example.com"));
        assert_eq!(
            paste_url(&headers, "abc"),
            "http://paste.example.com/paste/abc"
        );
    }

    #[test]
    fn paste_url_honors_forwarded_proto() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("paste.example.com"));
        headers.insert("x-forwarded-proto", HeaderValue::from_static("https"));
        assert_eq!(
            paste_url(&headers, "abc"),
            "https://paste.example.com/paste/abc"
        );
    }

    #[test]
    fn paste_url_falls_back_when_host_missing() {
        let headers = HeaderMap::new();
        assert_eq!(paste_url(&headers, "abc"), "http://localhost/paste/abc");
    }
}
