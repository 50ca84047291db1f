//! Pattern Matcher: `.gitignore`-style pattern parsing, file walk, ignore report.

pub mod patterns;
pub mod scan;
pub mod walker;
