//! Page cache tools.
//!
//! This module provides tools for inspecting the in-memory page cache.

pub mod stats;

pub use stats::stats_impl;
