//! Property-based tests for the container primitives.
