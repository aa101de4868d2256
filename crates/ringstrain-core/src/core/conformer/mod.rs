//! # Conformation Model Module
//!
//! This module defines the string encoding used to describe a chain or ring of
//! ligands and the closed token alphabets it is built from.
//!
//! ## Overview
//!
//! A conformation ID is a flat ASCII string of 2-character tokens alternating
//! ligand/connection/ligand/…, e.g. `"RRFFLLBB"`. Connection tokens may be
//! wrapped in parentheses for display (`"RR(FF)LL(BB)"`); the parentheses are
//! decorative and are stripped before parsing. A ring of N ligands carries N
//! connection tokens (length 4N); a chain of N ligands carries N−1 (length
//! 4N−2).
//!
//! ## Key Components
//!
//! - [`tokens`] - The `LigandType` and `ConnectionType` enums and their
//!   sign conventions
//! - [`id`] - Parsing, validation, and ring-to-chain decomposition

pub mod id;
pub mod tokens;
