//! pare - minify hand-written static HTML pages
//!
//! This module exposes the pieces behind the `pare` binary for testing.

pub mod cli;
pub mod config;
pub mod error;
pub mod process;
pub mod report;
pub mod rewrite;
