use crate::core::utils::geometry::{rotation_from_axis_angle, transform_point, transform_points};
use nalgebra::{Isometry3, Matrix4, Point3, Translation3, UnitQuaternion, Vector3};

/// A rigid-body rotation followed by a translation, stored in homogeneous form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transformation {
    matrix: Matrix4<f64>,
}

impl Transformation {
    pub fn identity() -> Self {
        Self {
            matrix: Matrix4::identity(),
        }
    }

    /// Wraps a 4x4 homogeneous matrix. The caller is responsible for it being rigid.
    pub fn from_matrix(matrix: Matrix4<f64>) -> Self {
        Self { matrix }
    }

    /// Rotation by `angle_degrees` about `axis` through the origin, then `translation`.
    pub fn from_axis_angle(
        axis: &Vector3<f64>,
        angle_degrees: f64,
        translation: Vector3<f64>,
    ) -> Self {
        let rotation = UnitQuaternion::from_rotation_matrix(&rotation_from_axis_angle(
            axis,
            angle_degrees,
        ));
        Isometry3::from_parts(Translation3::from(translation), rotation).into()
    }

    pub fn matrix(&self) -> &Matrix4<f64> {
        &self.matrix
    }

    pub fn apply(&self, point: &Point3<f64>) -> Point3<f64> {
        transform_point(&self.matrix, point)
    }

    pub fn apply_all(&self, points: &[Point3<f64>]) -> Vec<Point3<f64>> {
        transform_points(&self.matrix, points)
    }
}

impl Default for Transformation {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<Matrix4<f64>> for Transformation {
    fn from(matrix: Matrix4<f64>) -> Self {
        Self::from_matrix(matrix)
    }
}

impl From<Isometry3<f64>> for Transformation {
    fn from(isometry: Isometry3<f64>) -> Self {
        Self::from_matrix(isometry.to_homogeneous())
    }
}
