#![allow(dead_code)]
/// Shared test helpers
pub mod mocks;
