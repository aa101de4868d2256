use crate::core::error::InvalidInput;
use crate::engine::rsu::calc_rsu;
use serde::Serialize;
use std::cmp::Ordering;
use tracing::{debug, instrument};

/// One scored ring topology.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankEntry {
    pub id: String,
    pub rsu: f64,
}

/// The least strained topology found for one tilt angle of a sweep.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThetaMinimum {
    pub theta: f64,
    pub id: String,
    pub rsu: f64,
}

fn by_ascending_rsu(a: &RankEntry, b: &RankEntry) -> Ordering {
    a.rsu
        .partial_cmp(&b.rsu)
        .unwrap_or(Ordering::Equal)
        // Ties resolve to the lexicographically greatest ID first, matching
        // the canonical-representative convention.
        .then_with(|| b.id.cmp(&a.id))
}

/// Scores every ring ID and returns the `top_n` least strained, ascending by
/// RSU.
///
/// # Errors
///
/// Returns [`InvalidInput`] for any malformed ID or out-of-range angle; a
/// failing ID aborts the whole ranking rather than being skipped, since
/// skipping would silently drop a topology.
#[instrument(skip(ring_ids))]
pub fn rank_by_rsu<S: AsRef<str>>(
    ring_ids: &[S],
    theta: f64,
    delta: f64,
    top_n: usize,
) -> Result<Vec<RankEntry>, InvalidInput> {
    let mut entries = Vec::with_capacity(ring_ids.len());
    for id in ring_ids {
        let id = id.as_ref();
        entries.push(RankEntry {
            id: id.to_string(),
            rsu: calc_rsu(id, theta, delta)?,
        });
    }
    entries.sort_by(by_ascending_rsu);
    entries.truncate(top_n);

    debug!(
        num_scored = ring_ids.len(),
        num_returned = entries.len(),
        "Ranked ring topologies by strain."
    );
    Ok(entries)
}

/// The minimum-RSU topology among the given IDs, or `None` for an empty
/// input.
///
/// Among IDs tying on RSU the lexicographically greatest wins, so the result
/// is deterministic and independent of input order.
///
/// # Errors
///
/// Returns [`InvalidInput`] for any malformed ID or out-of-range angle.
pub fn min_rsu<S: AsRef<str>>(
    ring_ids: &[S],
    theta: f64,
    delta: f64,
) -> Result<Option<RankEntry>, InvalidInput> {
    let mut best: Option<RankEntry> = None;
    for id in ring_ids {
        let id = id.as_ref();
        let rsu = calc_rsu(id, theta, delta)?;
        let supersedes = match &best {
            None => true,
            Some(current) => {
                rsu < current.rsu || (rsu == current.rsu && id > current.id.as_str())
            }
        };
        if supersedes {
            best = Some(RankEntry {
                id: id.to_string(),
                rsu,
            });
        }
    }
    Ok(best)
}

/// Sweeps the tilt angle and reports the least strained topology at each
/// value: the core numeric table behind "minimum RSU versus theta" analyses.
///
/// # Errors
///
/// Returns [`InvalidInput`] for any malformed ID or out-of-range angle.
#[instrument(skip(ring_ids, thetas))]
pub fn min_rsu_for_thetas<S: AsRef<str>>(
    ring_ids: &[S],
    thetas: &[f64],
    delta: f64,
) -> Result<Vec<ThetaMinimum>, InvalidInput> {
    let mut rows = Vec::with_capacity(thetas.len());
    for &theta in thetas {
        if let Some(entry) = min_rsu(ring_ids, theta, delta)? {
            rows.push(ThetaMinimum {
                theta,
                id: entry.id,
                rsu: entry.rsu,
            });
        }
    }
    Ok(rows)
}
