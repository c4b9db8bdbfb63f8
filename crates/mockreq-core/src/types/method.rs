//! HTTP method keys.
//!
//! Methods are opaque, case-sensitive strings. The registry is seeded with the
//! five well-known methods below and accepts any other verb as an extra key.

/// Well-known methods, in listing order.
pub const STANDARD_METHODS: [&str; 5] = ["GET", "PUT", "POST", "PATCH", "DELETE"];
