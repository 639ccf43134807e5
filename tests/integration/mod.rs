//! Integration tests
//!
//! End-to-end tests for walking, entry relations, formatting and
//! configuration.

pub mod bytes_format;
pub mod debug_string;
pub mod descendant_relation;
pub mod local_walk;
