//! Axum bindings for the mockreq registry.
//!
//! Exposes the core router as an axum middleware: control requests are answered
//! directly, mocked requests get their canned response, and everything else is
//! handed to the next handler.

mod body;
mod error;
mod middleware;

pub use error::MockError;
pub use middleware::{mock_requests, MockRequests};
pub use mockreq_core::{MockOptions, RequestHeaders};
