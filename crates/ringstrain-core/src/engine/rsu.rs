use crate::core::conformer::id::ring_to_chains;
use crate::core::error::InvalidInput;
use crate::engine::assembler::chain_end_distance;
use tracing::trace;

/// Computes the "Ring Strain per Unit" (RSU) of a ring topology.
///
/// The ring is cut open at each of its N metal centers, producing N chains
/// that each start at a different ligand. For every chain the distance from
/// the global origin to its far end is the gap the ring would have to close
/// at that cut point; the RSU is the average of those gaps divided once more
/// by N, normalizing the strain per ligand unit:
///
/// ```text
/// RSU = (Σ chain-end distance / N) / N
/// ```
///
/// This is the single externally meaningful scalar of the engine; ranking and
/// enumeration consume it unchanged.
///
/// # Errors
///
/// Returns [`InvalidInput`] if the ID is not a well-formed ring (length a
/// nonzero multiple of 4, all tokens recognized) or an angle is out of range.
pub fn calc_rsu(ring_id: &str, theta: f64, delta: f64) -> Result<f64, InvalidInput> {
    let chains = ring_to_chains(ring_id)?;
    let num_ligands = chains.len() as f64;

    let mut total_gap = 0.0;
    for chain in &chains {
        total_gap += chain_end_distance(chain, theta, delta)?;
    }

    let rsu = total_gap / num_ligands / num_ligands;
    trace!(ring_id, theta, delta, rsu, "Computed ring strain.");
    Ok(rsu)
}
