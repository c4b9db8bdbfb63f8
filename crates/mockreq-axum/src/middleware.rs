//! The mock middleware.
//!
//! `MockRequests` is a cloneable handle to one registry. Attach it to a router
//! with [`MockRequests::attach`] or use [`mock_requests`] with
//! `axum::middleware::from_fn_with_state` directly.

use crate::body::read_body;
use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::{HeaderMap, HeaderName, HeaderValue, StatusCode};
use axum::middleware::{from_fn_with_state, Next};
use axum::response::{IntoResponse, Response};
use axum::Router;
use bytes::Bytes;
use mockreq_core::config::parser::load_options;
use mockreq_core::{
    ConfigError, ControlRequest, InboundRequest, MockOptions, MockResponse, Outcome,
    RequestHeaders, RequestRouter,
};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Handle to one mock registry and its options.
///
/// Clones share the registry; separately constructed handles do not.
#[derive(Debug, Clone)]
pub struct MockRequests {
    router: Arc<Mutex<RequestRouter>>,
}

impl MockRequests {
    pub fn new(options: MockOptions) -> Self {
        Self {
            router: Arc::new(Mutex::new(RequestRouter::new(options))),
        }
    }

    /// Build a handle from a YAML or JSON options file.
    pub async fn from_options_file(path: &str) -> Result<Self, ConfigError> {
        Ok(Self::new(load_options(path).await?))
    }

    /// Wrap `router` so every request goes through the mock middleware first.
    pub fn attach<S>(&self, router: Router<S>) -> Router<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        router.layer(from_fn_with_state(self.clone(), mock_requests))
    }

    /// Current plain-text listing, as served by the list endpoint.
    pub async fn summary(&self) -> String {
        self.router.lock().await.registry().format_summary()
    }

    /// Drop every registered mock.
    pub async fn reset(&self) {
        self.router.lock().await.reset_all();
    }
}

impl Default for MockRequests {
    fn default() -> Self {
        Self::new(MockOptions::default())
    }
}

/// Middleware entry point: answer control and mocked requests, pass the rest on.
pub async fn mock_requests(
    State(mocks): State<MockRequests>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().as_str().to_owned();
    let url = request
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_owned())
        .unwrap_or_else(|| request.uri().path().to_owned());

    let (control, max_body_bytes) = {
        let router = mocks.router.lock().await;
        (
            router.classify(&method, &url),
            router.options().max_body_bytes,
        )
    };

    if let ControlRequest::Register { path } = control {
        let (parts, body) = request.into_parts();
        let body = match read_body(body, max_body_bytes).await {
            Ok(body) => body,
            Err(err) => {
                tracing::warn!(%path, error = %err, "mock registration aborted");
                return err.into_response();
            }
        };
        let headers = request_headers(&parts.headers);
        let id = mocks.router.lock().await.register(&path, &headers, body);
        return (StatusCode::OK, id.to_string()).into_response();
    }

    let headers = request_headers(request.headers());
    let outcome = mocks.router.lock().await.handle(
        control,
        InboundRequest {
            method: &method,
            url: &url,
            headers: &headers,
            body: Bytes::new(),
        },
    );

    match outcome {
        Outcome::Respond(response) => into_http_response(response),
        Outcome::Passthrough => next.run(request).await,
    }
}

/// Header values that are not visible ASCII are skipped.
fn request_headers(headers: &HeaderMap) -> RequestHeaders {
    headers
        .iter()
        .filter_map(|(name, value)| match value.to_str() {
            Ok(value) => Some((name.as_str(), value)),
            Err(_) => {
                tracing::warn!(header = %name, "dropping non-ASCII request header");
                None
            }
        })
        .collect()
}

fn into_http_response(mock: MockResponse) -> Response {
    let status = StatusCode::from_u16(mock.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let mut response = Response::new(Body::from(mock.body));
    *response.status_mut() = status;

    for (name, value) in &mock.headers {
        match (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            (Ok(name), Ok(value)) => {
                response.headers_mut().append(name, value);
            }
            _ => tracing::warn!(header = %name, "dropping invalid mocked response header"),
        }
    }

    response
}
