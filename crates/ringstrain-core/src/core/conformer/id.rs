use super::tokens::{ConnectionType, LigandType};
use crate::core::error::InvalidInput;

/// Removes the decorative parentheses that may wrap connection tokens in a
/// displayed conformation ID, e.g. `"RR(FF)LL"` → `"RRFFLL"`.
pub fn strip_parentheses(conf_id: &str) -> String {
    conf_id.chars().filter(|c| !matches!(c, '(' | ')')).collect()
}

/// Parses a conformation ID into its ligand and connection tokens.
///
/// The (parenthesis-stripped) string is sliced into non-overlapping
/// 2-character runs: ligand tokens at offsets 0, 4, 8, … and connection
/// tokens at offsets 2, 6, 10, …. A ring ID of N ligands yields N tokens of
/// each kind; a chain ID yields N ligand tokens and N−1 connection tokens.
///
/// # Errors
///
/// Returns [`InvalidInput`] if the ID is empty, has odd length, or contains a
/// token outside its 4-element alphabet.
pub fn parse_tokens(
    conf_id: &str,
) -> Result<(Vec<LigandType>, Vec<ConnectionType>), InvalidInput> {
    let id = strip_parentheses(conf_id);
    if id.is_empty() {
        return Err(InvalidInput::EmptyId);
    }
    if id.len() % 2 != 0 {
        return Err(InvalidInput::OddLength(id.len()));
    }

    let mut lig_types = Vec::with_capacity(id.len() / 4 + 1);
    for i in (0..id.len()).step_by(4) {
        lig_types.push(id[i..i + 2].parse()?);
    }
    let mut con_types = Vec::with_capacity(id.len() / 4);
    for i in (2..id.len()).step_by(4) {
        con_types.push(id[i..i + 2].parse()?);
    }
    Ok((lig_types, con_types))
}

/// Decomposes a ring ID into the chain IDs obtained by cutting the ring open
/// at each of its N metal centers.
///
/// Each successive chain is produced by dropping the trailing connection
/// token of the current ring string and then rotating the ring by one
/// 4-character block (moving the final block to the front), so every chain
/// starts at a different ligand.
///
/// ```
/// use ringstrain::core::conformer::id::ring_to_chains;
///
/// assert_eq!(
///     ring_to_chains("RRFFRLFF").unwrap(),
///     vec!["RRFFRL".to_string(), "RLFFRR".to_string()],
/// );
/// ```
///
/// # Errors
///
/// Returns [`InvalidInput`] if the ID length is not a (nonzero) multiple of 4
/// or a token is unrecognized.
pub fn ring_to_chains(ring_id: &str) -> Result<Vec<String>, InvalidInput> {
    let ring = strip_parentheses(ring_id);
    if ring.len() % 4 != 0 {
        return Err(InvalidInput::RingLength(ring.len()));
    }
    parse_tokens(&ring)?;

    let num_ligands = ring.len() / 4;
    let mut chains = Vec::with_capacity(num_ligands);
    let mut cursor = ring;
    for _ in 0..num_ligands {
        chains.push(cursor[..cursor.len() - 2].to_string());
        let split = cursor.len() - 4;
        cursor = format!("{}{}", &cursor[split..], &cursor[..split]);
    }
    Ok(chains)
}
