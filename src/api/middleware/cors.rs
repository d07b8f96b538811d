//! Cross-origin headers for every response

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, HeaderValue, Method, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

use anyhow::Context;

use crate::config::CorsConfig;

/// Pre-parsed CORS header values
#[derive(Debug, Clone)]
pub struct CorsHeaders {
    allow_origin: HeaderValue,
    allow_methods: HeaderValue,
    allow_headers: HeaderValue,
    max_age: HeaderValue,
}

impl CorsHeaders {
    /// Parse the configured values, rejecting anything that is not a valid header value
    pub fn from_config(config: &CorsConfig) -> anyhow::Result<Self> {
        Ok(Self {
            allow_origin: parse_value("allow_origin", &config.allow_origin)?,
            allow_methods: parse_value("allow_methods", &config.allow_methods)?,
            allow_headers: parse_value("allow_headers", &config.allow_headers)?,
            max_age: HeaderValue::from(config.max_age_secs),
        })
    }

    fn apply(&self, headers: &mut HeaderMap) {
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            self.allow_origin.clone(),
        );
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            self.allow_methods.clone(),
        );
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            self.allow_headers.clone(),
        );
        headers.insert(header::ACCESS_CONTROL_MAX_AGE, self.max_age.clone());
    }
}

impl Default for CorsHeaders {
    fn default() -> Self {
        Self {
            allow_origin: HeaderValue::from_static("*"),
            allow_methods: HeaderValue::from_static("POST, GET, PUT, OPTIONS, DELETE"),
            allow_headers: HeaderValue::from_static("*"),
            max_age: HeaderValue::from_static("3600"),
        }
    }
}

fn parse_value(field: &str, value: &str) -> anyhow::Result<HeaderValue> {
    HeaderValue::from_str(value).with_context(|| format!("Invalid CORS {}", field))
}

/// Middleware to add CORS headers to all responses and answer preflight requests
pub async fn cors_middleware(
    State(cors): State<Arc<CorsHeaders>>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let mut response = if request.method() == Method::OPTIONS {
        StatusCode::OK.into_response()
    } else {
        next.run(request).await
    };

    cors.apply(response.headers_mut());
    response
}
