use crate::core::conformer::id::parse_tokens;
use crate::core::error::InvalidInput;
use crate::core::geometry::connection::connection_rotation;
use crate::core::geometry::ligand::ligand_end;
use crate::core::geometry::pose::Pose;
use crate::core::geometry::{check_delta, check_theta};

/// Assembles a chain by composing ligand and connection transforms in
/// traversal order, and returns one global end [`Pose`] per ligand.
///
/// The global frame is defined to coincide with the local frame of the first
/// ligand, so the first pose is that ligand's own exit transform. Every
/// subsequent ligand `i` with preceding accumulated pose `(x, rot)` and
/// connecting token `c` contributes
///
/// ```text
/// x_i   = x + (rot ∘ con_rot(c)) · dx_i
/// rot_i = rot ∘ con_rot(c) ∘ drot_i
/// ```
///
/// Composition is strictly left-to-right; rotations do not commute and the
/// order must be preserved exactly.
///
/// A trailing connection token (as in a full ring-block string) is accepted
/// and ignored, which makes the chain of a same-length ring string identical
/// to the chain obtained by dropping that final token.
///
/// # Errors
///
/// Returns [`InvalidInput`] for a malformed ID or an out-of-range angle. Both
/// angles are validated up front, even when a single-ligand chain would never
/// evaluate a connection.
pub fn assemble_chain(
    chain_id: &str,
    theta: f64,
    delta: f64,
) -> Result<Vec<Pose>, InvalidInput> {
    check_theta(theta)?;
    check_delta(delta)?;
    let (lig_types, con_types) = parse_tokens(chain_id)?;

    let (first_x, first_rot) = ligand_end(lig_types[0], theta)?;
    let mut poses = Vec::with_capacity(lig_types.len());
    poses.push(Pose::new(first_x, first_rot));

    let mut x_prev = first_x;
    let mut rot_prev = first_rot;
    for (&lig, &con) in lig_types[1..].iter().zip(con_types.iter()) {
        let con_rot = connection_rotation(con, delta)?;
        let (local_dx, local_drot) = ligand_end(lig, theta)?;

        let x = x_prev + (rot_prev * con_rot) * local_dx;
        let rot = rot_prev * con_rot * local_drot;
        poses.push(Pose::new(x, rot));

        x_prev = x;
        rot_prev = rot;
    }
    Ok(poses)
}

/// The global pose of the final ligand end of a chain.
pub fn chain_end(chain_id: &str, theta: f64, delta: f64) -> Result<Pose, InvalidInput> {
    let poses = assemble_chain(chain_id, theta, delta)?;
    Ok(*poses.last().expect("a parsed chain has at least one ligand"))
}

/// Euclidean distance from the global origin to the final ligand end of a
/// chain, i.e. the gap that would have to close for the chain to form a ring.
pub fn chain_end_distance(chain_id: &str, theta: f64, delta: f64) -> Result<f64, InvalidInput> {
    Ok(chain_end(chain_id, theta, delta)?.distance_from_origin())
}
