use crate::core::conformer::tokens::{ConnectionType, LigandType};
use crate::core::error::InvalidInput;
use crate::engine::symmetry::equivalent_ids;
use itertools::Itertools;
use std::collections::BTreeSet;
use tracing::{info, instrument};

/// Enumerates every raw ring conformation ID with the given number of
/// ligands, duplicates included.
///
/// A ring block is one ligand token followed by one connection token (16
/// combinations), so the result has `16^num_ligands` entries. No ring has
/// zero ligands; `num_ligands == 0` yields an empty list.
pub fn enumerate_ring_ids(num_ligands: usize) -> Vec<String> {
    if num_ligands == 0 {
        return Vec::new();
    }

    let blocks: Vec<String> = LigandType::ALL
        .iter()
        .cartesian_product(ConnectionType::ALL.iter())
        .map(|(lig, con)| format!("{lig}{con}"))
        .collect();

    (0..num_ligands)
        .map(|_| blocks.iter())
        .multi_cartesian_product()
        .map(|combo| combo.into_iter().map(String::as_str).collect())
        .collect()
}

/// Enumerates the physically distinct ring topologies with the given number
/// of ligands, as the set of canonical representatives.
///
/// Candidates are drained from a pool: one is drawn, its whole equivalence
/// class is computed, the class's canonical representative is recorded, and
/// every class member is removed from the pool. The tilt angle gates the
/// angle-dependent symmetry rules exactly as in
/// [`equivalent_ids`]; for intermediate angles the result is independent of
/// the specific value.
///
/// The pool grows as `16^num_ligands`; callers choosing large ring sizes must
/// size their own resource budget.
///
/// # Errors
///
/// Returns [`InvalidInput`] if `theta` is outside `[0, 90]`.
#[instrument]
pub fn enumerate_unique_rings(
    num_ligands: usize,
    theta: f64,
) -> Result<BTreeSet<String>, InvalidInput> {
    let mut pool: BTreeSet<String> = enumerate_ring_ids(num_ligands).into_iter().collect();
    let num_candidates = pool.len();

    let mut unique = BTreeSet::new();
    while let Some(id) = pool.pop_first() {
        let class = equivalent_ids(&id, theta)?;
        if let Some(canonical) = class.iter().next_back() {
            unique.insert(canonical.clone());
        }
        for member in &class {
            pool.remove(member);
        }
    }

    info!(
        num_ligands,
        num_candidates,
        num_unique = unique.len(),
        "Deduplicated ring topologies."
    );
    Ok(unique)
}
