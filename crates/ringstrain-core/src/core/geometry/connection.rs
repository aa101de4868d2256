use super::check_delta;
use crate::core::conformer::tokens::ConnectionType;
use crate::core::error::InvalidInput;
use nalgebra::{Rotation3, Vector3};

fn rot_y(angle_deg: f64) -> Rotation3<f64> {
    Rotation3::from_axis_angle(&Vector3::y_axis(), angle_deg.to_radians())
}

fn rot_z(angle_deg: f64) -> Rotation3<f64> {
    Rotation3::from_axis_angle(&Vector3::z_axis(), angle_deg.to_radians())
}

/// Computes the rotation from the exit frame of one ligand to the entry frame
/// of the next, across a metal-center connection.
///
/// The bite angle swing is `l·delta` about y, with `l` the sign of the first
/// letter. It is composed with a fixed 180° reorientation: about y for the
/// symmetric types `FF`/`BB`, about z for `FB`/`BF`. The reorientation keeps
/// the handedness convention of the entry frame consistent with the exit
/// frame it faces; altering it breaks the enantiomer and reversal symmetries
/// of the strain metric.
///
/// # Errors
///
/// Returns [`InvalidInput::DeltaOutOfRange`] if `delta` is outside `(0, 180]`
/// degrees.
pub fn connection_rotation(
    con_type: ConnectionType,
    delta: f64,
) -> Result<Rotation3<f64>, InvalidInput> {
    check_delta(delta)?;
    let l = con_type.first_sign();

    let swing = rot_y(l * delta);
    let flip = match con_type {
        ConnectionType::FF | ConnectionType::BB => rot_y(180.0),
        ConnectionType::FB | ConnectionType::BF => rot_z(180.0),
    };
    Ok(swing * flip)
}
