//! # Workflows Module
//!
//! This module provides the high-level, user-facing entry points that tie the
//! engine and core together into complete analyses.
//!
//! ## Overview
//!
//! Workflows answer the questions a cage chemist actually asks: which
//! physically distinct ring topologies exist for a given ring size, and which
//! of them are the least strained at a given pair of angles. They orchestrate
//! enumeration, canonicalization, and RSU scoring, and return plain
//! serializable values that external report or visualization layers can
//! consume directly.
//!
//! ## Architecture
//!
//! - **Enumeration** ([`enumerate`]) - Raw candidate generation and
//!   deduplication to distinct topologies
//! - **Ranking** ([`rank`]) - RSU scoring, top-N ranking, minimum search, and
//!   the per-theta minimum sweep

pub mod enumerate;
pub mod rank;
