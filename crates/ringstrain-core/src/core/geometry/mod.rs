//! # Unit Geometry Module
//!
//! This module holds the pure rigid-body geometry of the two structural
//! units: the exit transform of a single ligand and the joining rotation of a
//! metal-center connection.
//!
//! ## Overview
//!
//! Both computations are pure functions of a token and an angle. Rotations
//! are represented as composable [`nalgebra::Rotation3`] values and composed
//! strictly left-to-right; rotations do not commute, so the sequencing is
//! part of the contract.
//!
//! ## Key Components
//!
//! - [`pose`] - The immutable (position, rotation) value type
//! - [`ligand`] - Local exit displacement and rotation of one ligand
//! - [`connection`] - Joining rotation at one metal center

pub mod connection;
pub mod ligand;
pub mod pose;

use crate::core::error::InvalidInput;

pub(crate) fn check_theta(theta: f64) -> Result<(), InvalidInput> {
    if (0.0..=90.0).contains(&theta) {
        Ok(())
    } else {
        Err(InvalidInput::ThetaOutOfRange(theta))
    }
}

pub(crate) fn check_delta(delta: f64) -> Result<(), InvalidInput> {
    if delta > 0.0 && delta <= 180.0 {
        Ok(())
    } else {
        Err(InvalidInput::DeltaOutOfRange(delta))
    }
}
