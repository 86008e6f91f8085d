//! Shared geometric helpers used across the toolkit.

pub mod vectors;
