use nalgebra::{Rotation3, Vector3};

/// The position and local-frame orientation of the distal end of a ligand or
/// partial chain, expressed in the global frame.
///
/// An immutable value type; chain assembly produces one `Pose` per ligand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: Vector3<f64>,
    pub rotation: Rotation3<f64>,
}

impl Pose {
    pub fn new(position: Vector3<f64>, rotation: Rotation3<f64>) -> Self {
        Self { position, rotation }
    }

    /// Euclidean distance of the pose from the global origin, i.e. from the
    /// entry point of the first ligand in the chain.
    #[inline]
    pub fn distance_from_origin(&self) -> f64 {
        self.position.norm()
    }
}
