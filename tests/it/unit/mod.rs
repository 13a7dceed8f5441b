//! Unit tests for the layout engine.

mod document_tests;
mod hit_testing_tests;
mod perf_tests;
mod settings_tests;
mod snapshot_tests;
