//! Markdown format tests
//!
//! Tests for bidirectional Markdown ↔ HTML conversion.

mod edge_cases;
mod lists;
mod roundtrip;
