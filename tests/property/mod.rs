//! Property-based tests for entry relations and byte formatting
