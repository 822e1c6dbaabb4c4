//! Shared test utilities

#![allow(dead_code)]

mod fixtures;
mod logging;

pub use fixtures::*;
pub use logging::*;
