//! Integration tests for the layout engine.
//!
//! These tests drive the editor through pointer events and check the
//! resulting document, or take documents through save, load and export.

mod navigation_tests;
