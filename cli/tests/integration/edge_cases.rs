//! Edge case integration tests for bcp CLI.
//!
//! These tests cover:
//! - Sizes around the transfer buffer capacity
//! - Binary content that is not valid text
//! - Repeated copies onto the same destination


#[path = "edge_cases/repeated_copies.rs"]
mod repeated_copies;
