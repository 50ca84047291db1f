//! Core types: errors and shared path utilities.

pub mod errors;
pub mod paths;
