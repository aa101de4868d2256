use crate::core::conformer::id::{parse_tokens, strip_parentheses};
use crate::core::conformer::tokens::LigandType;
use crate::core::error::InvalidInput;
use crate::core::geometry::check_theta;
use itertools::Itertools;
use std::collections::{BTreeSet, VecDeque};
use tracing::debug;

/// Computes the full symmetry-equivalence class of a ring ID: every
/// conformation ID that denotes the same physical ring.
///
/// The class is grown as a breadth-first closure with visited and frontier
/// sets: each frontier member is expanded through every applicable generator
/// and newly seen IDs join the frontier, until no expansion produces anything
/// new. The generators, in their fixed order:
///
/// 1. cut-point rotation (all cyclic rotations by 4-character blocks),
/// 2. reversal (reading the ring in the opposite direction, keeping the
///    encoding ligand-first),
/// 3. enantiomer (`R` and `L` swapped everywhere),
/// 4. ligand-connection pair transposition, applied **only when
///    `theta == 0`**,
/// 5. full ligand-letter substitution, applied **only when `theta == 90`**.
///
/// Rules 4 and 5 are mutually exclusive and both skipped for intermediate
/// tilt angles, where the ring's strain does not exhibit those extra
/// symmetries.
///
/// # Errors
///
/// Returns [`InvalidInput`] for a malformed ring ID or a `theta` outside
/// `[0, 90]`.
pub fn equivalent_ids(ring_id: &str, theta: f64) -> Result<BTreeSet<String>, InvalidInput> {
    check_theta(theta)?;
    let ring = strip_parentheses(ring_id);
    if ring.len() % 4 != 0 {
        return Err(InvalidInput::RingLength(ring.len()));
    }
    parse_tokens(&ring)?;

    let mut seen = BTreeSet::from([ring.clone()]);
    let mut frontier = VecDeque::from([ring]);
    while let Some(id) = frontier.pop_front() {
        let mut derived = cut_point_rotations(&id);
        derived.push(reversed(&id));
        derived.push(enantiomer(&id));
        if theta == 0.0 {
            derived.extend(pair_transpositions(&id));
        }
        if theta == 90.0 {
            derived.extend(ligand_substitutions(&id));
        }

        for candidate in derived {
            if seen.insert(candidate.clone()) {
                frontier.push_back(candidate);
            }
        }
    }

    debug!(
        class_size = seen.len(),
        "Closed equivalence class under symmetry generators."
    );
    Ok(seen)
}

/// The canonical representative of a ring's equivalence class: its
/// lexicographically maximum member under standard character ordering.
///
/// # Errors
///
/// Propagates the validation errors of [`equivalent_ids`].
pub fn canonical_id(ring_id: &str, theta: f64) -> Result<String, InvalidInput> {
    let class = equivalent_ids(ring_id, theta)?;
    Ok(class
        .into_iter()
        .next_back()
        .expect("an equivalence class always contains the input ID"))
}

/// All cyclic rotations of the ring string by whole 4-character blocks.
fn cut_point_rotations(id: &str) -> Vec<String> {
    (0..id.len())
        .step_by(4)
        .map(|i| format!("{}{}", &id[i..], &id[..i]))
        .collect()
}

/// Reads the ring in the opposite direction. The final 2-character token is
/// split off and both parts are reversed independently, so the result still
/// starts with a ligand token rather than a connection token.
fn reversed(id: &str) -> String {
    let (body, tail) = id.split_at(id.len() - 2);
    body.chars().rev().chain(tail.chars().rev()).collect()
}

/// Swaps `R` and `L` everywhere; connection letters are untouched.
fn enantiomer(id: &str) -> String {
    id.chars()
        .map(|c| match c {
            'R' => 'L',
            'L' => 'R',
            other => other,
        })
        .collect()
}

/// Swaps every letter with its partner within the transposition rule:
/// `R` ↔ `L` and `F` ↔ `B`.
fn transpose_letter(c: char) -> char {
    match c {
        'R' => 'L',
        'L' => 'R',
        'F' => 'B',
        'B' => 'F',
        other => other,
    }
}

/// The theta = 0 generator. Shifting the string left by one character makes
/// each ligand letter pair up with the connection letter that follows it; a
/// flat ring is unchanged when any such pair is replaced by its letter-swapped
/// partner. All `2^(len/2)` pair subsets are enumerated and the shift is
/// undone afterwards.
fn pair_transpositions(id: &str) -> Vec<String> {
    let mut shifted: Vec<char> = id.chars().collect();
    shifted.rotate_left(1);
    let num_pairs = shifted.len() / 2;

    let mut out = Vec::with_capacity(1 << num_pairs);
    for mask in 0u64..(1u64 << num_pairs) {
        let mut candidate = shifted.clone();
        for pair in 0..num_pairs {
            if mask & (1 << pair) != 0 {
                for c in &mut candidate[pair * 2..pair * 2 + 2] {
                    *c = transpose_letter(*c);
                }
            }
        }
        candidate.rotate_right(1);
        out.push(candidate.into_iter().collect());
    }
    out
}

/// The theta = 90 generator. With the ligand arms tilted fully out of plane
/// the strain no longer depends on the ligand conformations at all, so every
/// assignment of ligand tokens is equivalent while the connection sequence is
/// held fixed.
fn ligand_substitutions(id: &str) -> Vec<String> {
    let con_tokens: Vec<&str> = (2..id.len()).step_by(4).map(|i| &id[i..i + 2]).collect();

    (0..con_tokens.len())
        .map(|_| LigandType::ALL.iter())
        .multi_cartesian_product()
        .map(|ligands| {
            ligands
                .iter()
                .zip(&con_tokens)
                .map(|(lig, con)| format!("{lig}{con}"))
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class_of(id: &str, theta: f64) -> BTreeSet<String> {
        equivalent_ids(id, theta).unwrap()
    }

    fn set_of(ids: &[&str]) -> BTreeSet<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn generic_class_of_a_symmetric_dimer() {
        assert_eq!(
            class_of("RRFFLLBB", 30.0),
            set_of(&["RRFFLLBB", "LLBBRRFF", "LLFFRRBB", "RRBBLLFF"]),
        );
    }

    #[test]
    fn generic_class_of_a_mixed_dimer() {
        assert_eq!(
            class_of("RLFBRRFF", 30.0),
            set_of(&[
                "RLFBRRFF", "RRFFRLFB", "RRBFLRFF", "LRFFRRBF",
                "LRFBLLFF", "LLFFLRFB", "LLBFRLFF", "RLFFLLBF",
            ]),
        );
    }

    #[test]
    fn canonical_id_is_the_lexicographic_maximum() {
        assert_eq!(canonical_id("LLBBRRFF", 30.0).unwrap(), "RRFFLLBB");
        assert_eq!(canonical_id("LLBFRLFF", 30.0).unwrap(), "RRFFRLFB");
    }

    #[test]
    fn every_member_yields_the_same_class() {
        let reference = class_of("RLFBRRFF", 30.0);
        for member in &reference {
            assert_eq!(class_of(member, 30.0), reference, "{member}");
        }
    }

    #[test]
    fn zero_tilt_adds_pair_transpositions() {
        let class = class_of("RRFF", 0.0);
        assert_eq!(
            class,
            set_of(&[
                "RRFF", "RRBB", "LLFF", "LLBB",
                "RLFB", "RLBF", "LRFB", "LRBF",
            ]),
        );
        // The same ring at a generic angle has a much smaller class.
        assert_eq!(class_of("RRFF", 30.0), set_of(&["RRFF", "LLFF"]));
    }

    #[test]
    fn full_tilt_adds_ligand_substitutions() {
        let class = class_of("RRFF", 90.0);
        assert_eq!(
            class,
            set_of(&[
                "RRFF", "RLFF", "LRFF", "LLFF",
            ]),
        );
        assert_eq!(canonical_id("LLFF", 90.0).unwrap(), "RRFF");
    }

    #[test]
    fn gated_rules_stay_off_for_intermediate_angles() {
        // Just inside the open interval on both sides.
        let near_zero = class_of("RRFF", 1e-9);
        let near_full = class_of("RRFF", 90.0 - 1e-9);
        assert_eq!(near_zero, set_of(&["RRFF", "LLFF"]));
        assert_eq!(near_full, set_of(&["RRFF", "LLFF"]));
    }

    #[test]
    fn parenthesized_input_is_normalized() {
        assert_eq!(canonical_id("LL(BB)RR(FF)", 30.0).unwrap(), "RRFFLLBB");
    }

    #[test]
    fn rejects_malformed_ids_and_bad_theta() {
        assert_eq!(
            equivalent_ids("RRF", 30.0),
            Err(InvalidInput::RingLength(3))
        );
        assert_eq!(
            equivalent_ids("RRFX", 30.0),
            Err(InvalidInput::ConnectionToken("FX".to_string()))
        );
        assert_eq!(
            equivalent_ids("RRFF", -5.0),
            Err(InvalidInput::ThetaOutOfRange(-5.0))
        );
    }
}
