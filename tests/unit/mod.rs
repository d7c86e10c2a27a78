//! Unit test modules.

#[path = "../fixtures/mod.rs"]
mod fixtures;

mod analyzer_test;
mod geometry_test;
