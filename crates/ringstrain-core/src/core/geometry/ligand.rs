use super::check_theta;
use crate::core::conformer::tokens::LigandType;
use crate::core::error::InvalidInput;
use nalgebra::{Rotation3, Vector3};

/// In-plane angle between the two halves of a ligand, set by the 60° kink of
/// the central ring.
const BRIDGE_ANGLE_DEG: f64 = 60.0;

fn rot_x(angle_deg: f64) -> Rotation3<f64> {
    Rotation3::from_axis_angle(&Vector3::x_axis(), angle_deg.to_radians())
}

fn rot_z(angle_deg: f64) -> Rotation3<f64> {
    Rotation3::from_axis_angle(&Vector3::z_axis(), angle_deg.to_radians())
}

/// Computes the exit displacement and exit rotation of a single ligand in its
/// own local frame.
///
/// The entry frame A sits at the ligand's first coordination site with x
/// pointing along the first arm. Walking the ligand applies, in order: the
/// first C–C bond tilt (`j·theta` about x), the central 60° kink (about z),
/// the second C–C bond tilt (`k·theta` about x), and for the symmetric types
/// `RR`/`LL` a final 180° flip about x. The flip normalizes which face of the
/// exit ring the local z-axis protrudes from; altering it breaks the
/// enantiomer and reversal symmetries of the strain metric.
///
/// Returns the vector from the entry site to the exit site measured in frame
/// A, and the rotation from frame A to the exit frame.
///
/// # Errors
///
/// Returns [`InvalidInput::ThetaOutOfRange`] if `theta` is outside `[0, 90]`
/// degrees.
pub fn ligand_end(
    lig_type: LigandType,
    theta: f64,
) -> Result<(Vector3<f64>, Rotation3<f64>), InvalidInput> {
    check_theta(theta)?;
    let (j, k) = lig_type.signs();

    let rot_ab1 = rot_x(j * theta);
    let rot_b1b2 = rot_z(j * BRIDGE_ANGLE_DEG);
    let rot_b2c1 = rot_x(k * theta);
    let rot_c1c2 = match lig_type {
        LigandType::RR | LigandType::LL => rot_x(180.0),
        LigandType::RL | LigandType::LR => Rotation3::identity(),
    };

    let x_ab = Vector3::x();
    let x_bc = (rot_ab1 * rot_b1b2) * Vector3::x();

    let x_ac = x_ab + x_bc;
    let rot_ac = rot_ab1 * rot_b1b2 * rot_b2c1 * rot_c1c2;
    Ok((x_ac, rot_ac))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_vec_close(a: &Vector3<f64>, b: &Vector3<f64>) {
        assert!((a - b).norm() < 1e-9, "{a:?} != {b:?}");
    }

    fn assert_rot_close(a: &Rotation3<f64>, b: &Rotation3<f64>) {
        assert!(
            (a.matrix() - b.matrix()).norm() < 1e-9,
            "{a:?} != {b:?}"
        );
    }

    #[test]
    fn flat_ligand_exit_lies_in_the_xy_plane() {
        // With theta = 0 both tilts vanish and only the 60 degree kink acts.
        let (x_ac, _) = ligand_end(LigandType::RR, 0.0).unwrap();
        let expected = Vector3::new(1.5, (3.0f64).sqrt() / 2.0, 0.0);
        assert_vec_close(&x_ac, &expected);
    }

    #[test]
    fn exit_displacement_norm_is_sqrt_three_for_any_tilt() {
        // |x_ac|^2 = 1 + 1 + 2 cos(60) regardless of theta, because the tilt
        // about x never moves the x component of the kinked arm.
        for lig in LigandType::ALL {
            for theta in [0.0, 17.0, 30.0, 64.5, 90.0] {
                let (x_ac, _) = ligand_end(lig, theta).unwrap();
                assert!((x_ac.norm() - (3.0f64).sqrt()).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn tilt_moves_the_exit_out_of_plane() {
        let (x_ac, _) = ligand_end(LigandType::RR, 30.0).unwrap();
        let expected = Vector3::x()
            + (rot_x(30.0) * rot_z(60.0)) * Vector3::x();
        assert_vec_close(&x_ac, &expected);
        assert!(x_ac.z.abs() > 1e-3);
    }

    #[test]
    fn enantiomer_exit_is_the_xz_mirror_of_the_original() {
        // Mapping R to L negates every rotation sign, which mirrors the exit
        // displacement through the xz plane.
        let (x_rr, _) = ligand_end(LigandType::RR, 38.0).unwrap();
        let (x_ll, _) = ligand_end(LigandType::LL, 38.0).unwrap();
        assert_vec_close(
            &x_ll,
            &Vector3::new(x_rr.x, -x_rr.y, x_rr.z),
        );

        let (x_rl, _) = ligand_end(LigandType::RL, 38.0).unwrap();
        let (x_lr, _) = ligand_end(LigandType::LR, 38.0).unwrap();
        assert_vec_close(
            &x_lr,
            &Vector3::new(x_rl.x, -x_rl.y, x_rl.z),
        );
    }

    #[test]
    fn symmetric_types_carry_the_orientation_flip() {
        let (_, rot_rr) = ligand_end(LigandType::RR, 30.0).unwrap();
        let expected = rot_x(30.0) * rot_z(60.0) * rot_x(30.0) * rot_x(180.0);
        assert_rot_close(&rot_rr, &expected);
    }

    #[test]
    fn mixed_types_have_no_orientation_flip() {
        let (_, rot_rl) = ligand_end(LigandType::RL, 30.0).unwrap();
        let expected = rot_x(30.0) * rot_z(60.0) * rot_x(-30.0);
        assert_rot_close(&rot_rl, &expected);
    }

    #[test]
    fn rejects_theta_outside_range() {
        assert_eq!(
            ligand_end(LigandType::RR, -1.0),
            Err(InvalidInput::ThetaOutOfRange(-1.0))
        );
        assert_eq!(
            ligand_end(LigandType::LL, 120.0),
            Err(InvalidInput::ThetaOutOfRange(120.0))
        );
    }
}
