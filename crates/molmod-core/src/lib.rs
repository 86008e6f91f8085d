//! # MolMod Core Library
//!
//! A collection of numerical building blocks for molecular modelling tools,
//! providing the shared mathematics that geometry-fitting and structure-analysis
//! code is built on.
//!
//! ## Architectural Philosophy
//!
//! The library deliberately contains no molecular topology, force-field, or file
//! I/O logic; those live in higher-level crates that consume this one. What lives
//! here is the numerically sensitive core that such code depends on:
//!
//! - **[`core::linalg`]: Robust Linear Solving.** A rank-truncated least-squares
//!   solver (`safe_solve`) for the ill-conditioned and rank-deficient systems
//!   that arise when fitting geometries against internal-coordinate gradients.
//!
//! - **[`core::utils`]: Vector Geometry.** Small, pure helpers for angles,
//!   plane normals, and random unit vectors over 3-D coordinates.
//!
//! Every routine is a pure function over its inputs: no global state, no I/O,
//! no interior mutability. Concurrent callers may invoke any of them on
//! independent data without synchronization.

pub mod core;
