//! Mocks storage module.
//!
//! This module provides the storage for registered mocks:
//! - [`MockQueue`](queue::MockQueue): FIFO of entries for one (method, path) pair
//! - [`MockRegistry`](registry::MockRegistry): method -> path -> queue table plus
//!   the id -> (method, path) reverse index

pub mod queue;
pub mod registry;
