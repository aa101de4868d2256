//! # Core Module
//!
//! This module provides the fundamental building blocks for ring-strain
//! analysis: the conformation-ID data model and the rigid-body geometry of the
//! individual structural units.
//!
//! ## Overview
//!
//! A ring or chain is described by a conformation ID, an ASCII string of
//! alternating ligand and connection tokens. The core module owns the closed
//! token alphabets, the string-parsing boundary, and the pure functions that
//! turn a single token plus an angle into a local displacement and rotation.
//! Everything here is an immutable value computed on demand; no state persists
//! across calls.
//!
//! ## Architecture
//!
//! - **Conformation Model** ([`conformer`]) - Token enums, ID parsing, and
//!   ring-to-chain decomposition
//! - **Unit Geometry** ([`geometry`]) - Ligand exit transforms, connection
//!   rotations, and the `Pose` value type
//! - **Error Handling** ([`error`]) - The single `InvalidInput` error kind
//!   shared by the whole library

pub mod conformer;
pub mod error;
pub mod geometry;
