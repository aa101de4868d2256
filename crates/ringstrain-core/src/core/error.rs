use thiserror::Error;

/// The single error kind of the library, raised synchronously whenever an
/// input fails validation.
///
/// Failures propagate immediately to the caller; no partial computation is
/// performed and nothing is retried or recovered internally. Callers that
/// iterate over many conformation IDs should not silently catch-and-continue
/// past one of these, since doing so could skip a topology.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInput {
    #[error("Conformation ID is empty")]
    EmptyId,

    #[error("Conformation ID length {0} is odd; IDs are sequences of 2-character tokens")]
    OddLength(usize),

    #[error("Ring conformation ID length {0} is not a multiple of 4")]
    RingLength(usize),

    #[error("Unrecognized ligand token '{0}'")]
    LigandToken(String),

    #[error("Unrecognized connection token '{0}'")]
    ConnectionToken(String),

    #[error("Tilt angle theta = {0} is outside the valid range [0, 90] degrees")]
    ThetaOutOfRange(f64),

    #[error("Bite angle delta = {0} is outside the valid range (0, 180] degrees")]
    DeltaOutOfRange(f64),
}
