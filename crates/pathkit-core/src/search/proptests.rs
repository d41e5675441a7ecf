//! Property-based tests for the searches.
