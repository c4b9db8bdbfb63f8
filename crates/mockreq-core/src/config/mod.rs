//! Middleware options and options-file loading.

pub mod error;
pub mod options;
pub mod parser;
