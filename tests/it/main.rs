//! Single test binary entry point.
//!
//! All integration tests compile into one binary to keep linking cheap.
//!
//! Structure:
//! - helpers: Document builder and pointer-event shortcuts
//! - integration: Multi-component workflow tests
//! - unit: Single-component tests through the public API

mod helpers;
mod integration;
mod unit;
