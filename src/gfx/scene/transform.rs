//! # Transforms
//!
//! An immutable affine transform that builders thread through their calls.
//! Each operation post-multiplies a local transform onto the current one, the
//! same composition order a matrix stack uses, but returns a new value instead
//! of mutating shared state. A child can therefore never disturb its parent or
//! its siblings.

use cgmath::{Deg, InnerSpace, Matrix, Matrix3, Matrix4, SquareMatrix, Vector3, Vector4};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    matrix: Matrix4<f32>,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    pub fn identity() -> Self {
        Self {
            matrix: Matrix4::identity(),
        }
    }

    pub fn from_matrix(matrix: Matrix4<f32>) -> Self {
        Self { matrix }
    }

    pub fn matrix(&self) -> Matrix4<f32> {
        self.matrix
    }

    /// Composes `local` after this transform (local coordinates are transformed first).
    pub fn then(&self, local: Matrix4<f32>) -> Self {
        Self {
            matrix: self.matrix * local,
        }
    }

    pub fn translate(&self, x: f32, y: f32, z: f32) -> Self {
        self.translate_by(Vector3::new(x, y, z))
    }

    pub fn translate_by(&self, offset: Vector3<f32>) -> Self {
        self.then(Matrix4::from_translation(offset))
    }

    /// Rotates by `degrees` about `axis`. The axis need not be normalized; a
    /// zero axis leaves the transform unchanged.
    pub fn rotate(&self, degrees: f32, axis: [f32; 3]) -> Self {
        let axis = Vector3::from(axis);
        if axis.magnitude2() == 0.0 {
            return *self;
        }
        self.then(Matrix4::from_axis_angle(axis.normalize(), Deg(degrees)))
    }

    pub fn scale(&self, x: f32, y: f32, z: f32) -> Self {
        self.then(Matrix4::from_nonuniform_scale(x, y, z))
    }

    pub fn uniform_scale(&self, factor: f32) -> Self {
        self.then(Matrix4::from_scale(factor))
    }

    pub fn transform_point(&self, p: [f32; 3]) -> [f32; 3] {
        let v = self.matrix * Vector4::new(p[0], p[1], p[2], 1.0);
        [v.x, v.y, v.z]
    }

    /// Where this transform places the local origin.
    pub fn origin(&self) -> [f32; 3] {
        self.transform_point([0.0; 3])
    }

    /// Inverse-transpose of the linear part, for carrying normals through
    /// non-uniform scales. Singular transforms fall back to the linear part.
    pub fn normal_matrix(&self) -> Matrix3<f32> {
        let m = self.matrix;
        let linear = Matrix3::from_cols(m.x.truncate(), m.y.truncate(), m.z.truncate());
        linear
            .invert()
            .map(|inverse| inverse.transpose())
            .unwrap_or(linear)
    }

    /// Transforms a normal and renormalizes it. Degenerate results become zero.
    pub fn transform_normal(&self, n: [f32; 3]) -> [f32; 3] {
        let v = self.normal_matrix() * Vector3::from(n);
        let len2 = v.magnitude2();
        if len2 > 0.0 {
            (v / len2.sqrt()).into()
        } else {
            [0.0; 3]
        }
    }
}
