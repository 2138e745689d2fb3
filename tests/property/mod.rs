//! Property-based tests for the coverage walker
