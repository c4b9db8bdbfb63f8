//! Core library for mockreq.
//!
//! Holds the in-memory registry of canned HTTP responses and the request router
//! that classifies inbound requests into control operations or mock serving.
//! Host bindings (see `mockreq-axum`) feed requests in and write responses out.

pub mod config;
pub mod mocks;
pub mod router;
pub mod types;

pub use config::error::ConfigError;
pub use config::options::MockOptions;
pub use mocks::registry::{MethodSummary, MockRegistry};
pub use router::headers::RequestHeaders;
pub use router::{ControlRequest, InboundRequest, Outcome, RequestRouter};
pub use types::entry::{MockEntry, MockResponse, UseLimit};
pub use types::id::MockId;
