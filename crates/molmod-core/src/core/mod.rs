//! # Core Module
//!
//! This module provides the numerical foundation of the MolMod toolkit: the
//! routines that higher-level molecular-modelling code calls into when it needs
//! linear algebra that stays stable on poorly conditioned input, or elementary
//! vector geometry over atomic coordinates.
//!
//! ## Overview
//!
//! The module is organized into specialized submodules:
//!
//! - **Robust Linear Solving** ([`linalg`]) - Minimum-norm least-squares solving
//!   with rank truncation via singular value decomposition
//! - **Vector Utilities** ([`utils`]) - Angles, cosines, triangle normals, and
//!   random (orthonormal) unit vectors
//!
//! ## Design Constraints
//!
//! All entry points are stateless and deterministic given their inputs (random
//! sampling takes an explicit [`rand::Rng`]). Errors are surfaced through
//! per-module `thiserror` enums rather than panics, so callers embedded in
//! larger fitting loops can decide how to react to degenerate systems.

pub mod linalg;
pub mod utils;
