//! Core domain types for mock entries, ids, and methods.

pub mod entry;
pub mod id;
pub mod method;
