//! `POST /style`: decode a style request, run the transform, answer with JSON.
//!
//! Decoding never fails. Missing fields fall back to an empty text and the
//! pass-through style, and an unreadable body is treated as an empty request.

use axum::Json;
use axum::body::Bytes;
use axum::http::{HeaderMap, header};
use serde::{Deserialize, Serialize};
use unistyle_styles::{PASSTHROUGH_STYLE, Style, transform};

/// Incoming `text` + `style` pair.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StyleRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default = "passthrough_style")]
    pub style: String,
}

/// Outgoing styled text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleResponse {
    pub styled: String,
}

fn passthrough_style() -> String {
    PASSTHROUGH_STYLE.to_string()
}

impl Default for StyleRequest {
    fn default() -> Self {
        Self {
            text: String::new(),
            style: passthrough_style(),
        }
    }
}

/// True for `application/json`, ignoring parameters such as `charset`.
pub fn is_json_content_type(content_type: &str) -> bool {
    content_type
        .split(';')
        .next()
        .map(|media_type| media_type.trim().eq_ignore_ascii_case("application/json"))
        .unwrap_or(false)
}

impl StyleRequest {
    /// Decode a request body. JSON when the content type says so, form-encoded otherwise.
    pub fn from_body(content_type: Option<&str>, body: &[u8]) -> Self {
        if content_type.is_some_and(is_json_content_type) {
            Self::from_json(body)
        } else {
            Self::from_form(body)
        }
    }

    fn from_json(body: &[u8]) -> Self {
        match serde_json::from_slice(body) {
            Ok(request) => request,
            Err(e) => {
                log::warn!("Malformed JSON style request, treating as empty: {e}");
                Self::default()
            }
        }
    }

    /// The first non-blank value of each field wins; other keys are ignored.
    fn from_form(body: &[u8]) -> Self {
        let pairs: Vec<(String, String)> = match serde_urlencoded::from_bytes(body) {
            Ok(pairs) => pairs,
            Err(e) => {
                log::warn!("Malformed form style request, treating as empty: {e}");
                Vec::new()
            }
        };

        let mut text = None;
        let mut style = None;
        for (key, value) in pairs {
            if value.is_empty() {
                continue;
            }
            match key.as_str() {
                "text" if text.is_none() => text = Some(value),
                "style" if style.is_none() => style = Some(value),
                _ => {}
            }
        }

        Self {
            text: text.unwrap_or_default(),
            style: style.unwrap_or_else(passthrough_style),
        }
    }

    /// Run the transform.
    pub fn apply(&self) -> StyleResponse {
        StyleResponse {
            styled: transform(&self.text, &self.style),
        }
    }
}

pub async fn handle_style(headers: HeaderMap, body: Bytes) -> Json<StyleResponse> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok());
    let request = StyleRequest::from_body(content_type, &body);

    if Style::from_id(&request.style).is_none() {
        log::debug!("Style '{}' not recognized, passing text through", request.style);
    }
    log::debug!(
        "POST /style style={} chars={}",
        request.style,
        request.text.chars().count()
    );

    Json(request.apply())
}
