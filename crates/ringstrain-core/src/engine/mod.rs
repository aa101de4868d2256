//! # Engine Module
//!
//! This module implements the algorithmic core of ring-strain analysis: chain
//! assembly by transform composition, the RSU metric itself, and the
//! symmetry-equivalence closure used to deduplicate ring topologies.
//!
//! ## Overview
//!
//! The engine consumes the validated conformation model and unit geometry
//! from [`crate::core`] and produces the externally meaningful results: the
//! ordered ligand end poses of a chain, the scalar RSU of a ring, and the
//! equivalence class (with canonical representative) of a ring ID. All
//! operations are pure, deterministic, and synchronous; independent
//! evaluations over different IDs or angles may run in parallel without
//! coordination.
//!
//! ## Architecture
//!
//! - **Chain Assembly** ([`assembler`]) - Sequential left-to-right composition
//!   of ligand and connection transforms along a chain
//! - **Strain Metric** ([`rsu`]) - Ring-to-chain decomposition and the RSU
//!   scalar
//! - **Symmetry** ([`symmetry`]) - Equivalence classes and canonical
//!   representatives under the angle-dependent rule set

pub mod assembler;
pub mod rsu;
pub mod symmetry;
