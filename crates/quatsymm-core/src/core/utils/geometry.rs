use nalgebra::{Matrix4, Point3, Rotation3, Unit, Vector3};

const DEGENERATE_DIRECTION_EPSILON: f64 = 1e-12;

pub fn rotation_from_axis_angle(axis: &Vector3<f64>, angle_degrees: f64) -> Rotation3<f64> {
    Rotation3::from_axis_angle(&Unit::new_normalize(*axis), angle_degrees.to_radians())
}

pub fn transform_point(matrix: &Matrix4<f64>, point: &Point3<f64>) -> Point3<f64> {
    matrix.transform_point(point)
}

pub fn transform_points(matrix: &Matrix4<f64>, points: &[Point3<f64>]) -> Vec<Point3<f64>> {
    points.iter().map(|p| matrix.transform_point(p)).collect()
}

/// Indices of the two trace positions used to measure chain direction.
///
/// Positions `offset` residues in from each terminus are preferred since the termini
/// themselves are often floppy. Traces too short for that (fewer than `2 * offset + 1`
/// points) fall back to the first and last point.
pub fn terminal_indices(len: usize, offset: usize) -> Option<(usize, usize)> {
    if len == 0 {
        return None;
    }
    if offset + offset >= len {
        Some((0, len - 1))
    } else {
        Some((offset, len - 1 - offset))
    }
}

/// Unit vector pointing from the C-terminal reference point to the N-terminal one.
///
/// Returns `None` when both reference points coincide.
pub fn terminal_direction(
    n_term: &Point3<f64>,
    c_term: &Point3<f64>,
) -> Option<Unit<Vector3<f64>>> {
    Unit::try_new(n_term - c_term, DEGENERATE_DIRECTION_EPSILON)
}

pub fn sum_squared_deviation(coords1: &[Point3<f64>], coords2: &[Point3<f64>]) -> f64 {
    coords1
        .iter()
        .zip(coords2.iter())
        .map(|(p1, p2)| (p1 - p2).norm_squared())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{Isometry3, Translation3, UnitQuaternion};

    const TOLERANCE: f64 = 1e-9;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn rotation_about_z_by_ninety_degrees_maps_x_onto_y() {
        let rot = rotation_from_axis_angle(&Vector3::z(), 90.0);
        let rotated = rot * Vector3::x();
        assert!(f64_approx_equal(rotated.x, 0.0));
        assert!(f64_approx_equal(rotated.y, 1.0));
        assert!(f64_approx_equal(rotated.z, 0.0));
    }

    #[test]
    fn transform_points_applies_rotation_then_translation() {
        let iso = Isometry3::from_parts(
            Translation3::new(1.0, 2.0, 3.0),
            UnitQuaternion::from_axis_angle(&Vector3::z_axis(), 90f64.to_radians()),
        );
        let matrix = iso.to_homogeneous();
        let moved = transform_points(&matrix, &[Point3::new(1.0, 0.0, 0.0)]);
        assert!(f64_approx_equal(moved[0].x, 1.0));
        assert!(f64_approx_equal(moved[0].y, 3.0));
        assert!(f64_approx_equal(moved[0].z, 3.0));
    }

    #[test]
    fn terminal_indices_use_offset_for_long_traces() {
        assert_eq!(terminal_indices(21, 10), Some((10, 10)));
        assert_eq!(terminal_indices(30, 10), Some((10, 19)));
    }

    #[test]
    fn terminal_indices_fall_back_to_termini_for_short_traces() {
        assert_eq!(terminal_indices(20, 10), Some((0, 19)));
        assert_eq!(terminal_indices(1, 10), Some((0, 0)));
        assert_eq!(terminal_indices(0, 10), None);
    }

    #[test]
    fn terminal_direction_is_normalized() {
        let dir = terminal_direction(&Point3::new(0.0, 0.0, 5.0), &Point3::origin()).unwrap();
        assert!(f64_approx_equal(dir.norm(), 1.0));
        assert!(f64_approx_equal(dir.z, 1.0));
    }

    #[test]
    fn sum_squared_deviation_of_uniform_shift() {
        let a = [Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)];
        let b = [Point3::new(0.0, 2.0, 0.0), Point3::new(1.0, 2.0, 0.0)];
        assert!(f64_approx_equal(sum_squared_deviation(&a, &b), 8.0));
    }

    #[test]
    fn terminal_direction_of_coincident_points_is_none() {
        let p = Point3::new(1.0, 1.0, 1.0);
        assert!(terminal_direction(&p, &p).is_none());
    }
}
