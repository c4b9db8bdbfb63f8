//! Request routing for the mock middleware.
//!
//! `RequestRouter` classifies every inbound request into one of the control
//! operations (register, reset, list) or a serve attempt, and applies it to the
//! [`MockRegistry`]. It knows nothing about the HTTP stack: hosts describe a
//! request as method, URL, headers and a fully buffered body, and write back the
//! returned [`Outcome`].

pub mod headers;

use crate::config::options::MockOptions;
use crate::mocks::registry::MockRegistry;
use crate::types::entry::{MockEntry, MockResponse};
use crate::types::id::MockId;
use bytes::Bytes;
use headers::{RegistrationOverrides, RequestHeaders, CONTENT_TYPE};

/// Control operation an inbound request maps to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlRequest {
    /// Register a mock for `path`; needs the full request body
    Register { path: String },
    /// Drop the queue with the given raw id segment
    ResetOne { id: String },
    /// Drop every queue
    ResetAll,
    /// Plain-text listing of registered paths
    List,
    /// Try to answer from a registered mock
    Serve,
}

impl ControlRequest {
    pub fn needs_body(&self) -> bool {
        matches!(self, ControlRequest::Register { .. })
    }
}

/// Inbound request as seen by the router.
#[derive(Debug, Clone)]
pub struct InboundRequest<'a> {
    /// Request method, verbatim
    pub method: &'a str,
    /// Path plus query string, verbatim
    pub url: &'a str,
    pub headers: &'a RequestHeaders,
    /// Fully buffered body (empty unless registering)
    pub body: Bytes,
}

/// Result of routing one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Write this response
    Respond(MockResponse),
    /// Not mocked: hand the request to the next handler
    Passthrough,
}

/// Remainder of `url` after `prefix`, if `prefix` ends on a segment boundary.
fn strip_route_prefix<'a>(url: &'a str, prefix: &str) -> Option<&'a str> {
    let rest = url.strip_prefix(prefix)?;
    if rest.is_empty() || rest.starts_with('/') || rest.starts_with('?') {
        Some(rest)
    } else {
        None
    }
}

/// Router owning one registry instance.
#[derive(Debug, Clone, Default)]
pub struct RequestRouter {
    registry: MockRegistry,
    options: MockOptions,
}

impl RequestRouter {
    pub fn new(options: MockOptions) -> Self {
        Self {
            registry: MockRegistry::new(),
            options,
        }
    }

    pub fn options(&self) -> &MockOptions {
        &self.options
    }

    pub fn registry(&self) -> &MockRegistry {
        &self.registry
    }

    /// Classify a request by method and URL.
    ///
    /// Checked in order: registration, reset, list, serve.
    pub fn classify(&self, method: &str, url: &str) -> ControlRequest {
        classify(&self.options, method, url)
    }

    /// Classify and handle a request in one step.
    pub fn dispatch(&mut self, request: InboundRequest<'_>) -> Outcome {
        let control = self.classify(request.method, request.url);
        self.handle(control, request)
    }

    /// Apply an already classified request to the registry.
    pub fn handle(&mut self, control: ControlRequest, request: InboundRequest<'_>) -> Outcome {
        match control {
            ControlRequest::Register { path } => {
                let id = self.register(&path, request.headers, request.body);
                Outcome::Respond(MockResponse::new(200, Vec::new(), id.to_string()))
            }
            ControlRequest::ResetOne { id } => {
                match id.parse::<MockId>() {
                    Ok(id) => self.registry.remove_by_id(id),
                    Err(_) => tracing::debug!(id = %id, "reset of non-numeric mock id ignored"),
                }
                Outcome::Respond(MockResponse::ok())
            }
            ControlRequest::ResetAll => {
                self.reset_all();
                Outcome::Respond(MockResponse::ok())
            }
            ControlRequest::List => Outcome::Respond(MockResponse::new(
                200,
                vec![(CONTENT_TYPE.to_owned(), "text/plain".to_owned())],
                self.registry.format_summary(),
            )),
            ControlRequest::Serve => match self.registry.consume(request.method, request.url) {
                Some(response) => {
                    tracing::debug!(
                        method = request.method,
                        url = request.url,
                        status = response.status,
                        "serving mocked response"
                    );
                    Outcome::Respond(response)
                }
                None => Outcome::Passthrough,
            },
        }
    }

    pub fn reset_all(&mut self) {
        self.registry.reset_all();
    }

    /// Register `body` as a mock for `path`, reading overrides from `headers`.
    pub fn register(&mut self, path: &str, headers: &RequestHeaders, body: Bytes) -> MockId {
        let overrides = RegistrationOverrides::from_headers(headers, &self.options);
        let entry = MockEntry::new(
            MockResponse::new(overrides.status, overrides.headers, body),
            overrides.limit,
        );
        self.registry.register(&overrides.method, path, entry)
    }
}

/// Classify a request against the endpoint prefixes in `options`.
pub fn classify(options: &MockOptions, method: &str, url: &str) -> ControlRequest {
    if method == options.registration_method {
        if let Some(rest) = strip_route_prefix(url, &options.mock_prefix) {
            let path = if rest.starts_with('/') {
                rest.to_owned()
            } else {
                format!("/{}", rest)
            };
            return ControlRequest::Register { path };
        }
    }

    if let Some(rest) = strip_route_prefix(url, &options.reset_prefix) {
        let segment = rest
            .split('?')
            .next()
            .unwrap_or("")
            .trim_start_matches('/')
            .split('/')
            .next()
            .unwrap_or("");
        return if segment.is_empty() {
            ControlRequest::ResetAll
        } else {
            ControlRequest::ResetOne {
                id: segment.to_owned(),
            }
        };
    }

    if strip_route_prefix(url, &options.list_prefix).is_some() {
        return ControlRequest::List;
    }

    ControlRequest::Serve
}
