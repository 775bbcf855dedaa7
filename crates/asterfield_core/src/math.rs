//! Math types shared between the simulation and the GPU.
//!
//! These are the canonical representations uploaded to instance buffers,
//! so every type here is `Pod` with an explicit `repr(C)` layout.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// 3D vector - positions, directions, offsets.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Vec3 {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
    /// Z component
    pub z: f32,
}

impl Vec3 {
    /// Creates a new Vec3
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Zero vector
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Unit Y vector (the local up axis everything spins about)
    pub const UP: Self = Self::new(0.0, 1.0, 0.0);

    /// Converts to array
    #[must_use]
    pub const fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Dot product
    #[must_use]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product
    #[must_use]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Length squared (avoids sqrt)
    #[must_use]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Length
    #[must_use]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Unit vector in the same direction, or zero for degenerate input.
    #[must_use]
    pub fn normalized(self) -> Self {
        let len = self.length();
        if len <= f32::EPSILON {
            Self::ZERO
        } else {
            self * (1.0 / len)
        }
    }
}

impl std::ops::Add for Vec3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl std::ops::Sub for Vec3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl std::ops::Mul<f32> for Vec3 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

/// Quaternion for rotations (x, y, z, w)
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Quat {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
    /// Z component
    pub z: f32,
    /// W component
    pub w: f32,
}

impl Quat {
    /// Creates a new quaternion
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Identity rotation
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Rotation about the Y (up) axis, angle in radians.
    #[must_use]
    pub fn from_rotation_y(radians: f32) -> Self {
        let half = radians * 0.5;
        Self::new(0.0, half.sin(), 0.0, half.cos())
    }

    /// Rotation about the Y (up) axis, angle in degrees.
    ///
    /// Spin angles are tracked in degrees throughout the simulation; the
    /// conversion to radians happens only here.
    #[must_use]
    pub fn from_rotation_y_deg(degrees: f32) -> Self {
        Self::from_rotation_y(degrees.to_radians())
    }

    /// Rotates a vector by this quaternion.
    #[must_use]
    pub fn rotate(self, v: Vec3) -> Vec3 {
        // v' = v + 2 * (q.xyz x (q.xyz x v) + w * (q.xyz x v))
        let u = Vec3::new(self.x, self.y, self.z);
        let uv = u.cross(v);
        let uuv = u.cross(uv);
        v + (uv * self.w + uuv) * 2.0
    }
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl std::ops::Mul for Quat {
    type Output = Self;

    /// Hamilton product: `(a * b).rotate(v) == a.rotate(b.rotate(v))`.
    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
            self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
        )
    }
}

impl std::ops::Mul<Vec3> for Quat {
    type Output = Vec3;
    fn mul(self, rhs: Vec3) -> Vec3 {
        self.rotate(rhs)
    }
}

/// 4x4 transform matrix, row-major, exactly the 64-byte GPU stride.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Mat4 {
    /// Rows of the matrix. Row-major: `rows[r][c]`.
    pub rows: [[f32; 4]; 4],
}

impl Mat4 {
    /// Size in bytes - the structured buffer stride.
    pub const SIZE: usize = std::mem::size_of::<Self>();

    /// Identity matrix
    pub const IDENTITY: Self = Self {
        rows: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    /// Composes translation * rotation * uniform scale.
    #[must_use]
    pub fn from_trs(position: Vec3, rotation: Quat, scale: f32) -> Self {
        let Quat { x, y, z, w } = rotation;

        let xx = x * x;
        let yy = y * y;
        let zz = z * z;
        let xy = x * y;
        let xz = x * z;
        let yz = y * z;
        let wx = w * x;
        let wy = w * y;
        let wz = w * z;

        Self {
            rows: [
                [
                    (1.0 - 2.0 * (yy + zz)) * scale,
                    2.0 * (xy - wz) * scale,
                    2.0 * (xz + wy) * scale,
                    position.x,
                ],
                [
                    2.0 * (xy + wz) * scale,
                    (1.0 - 2.0 * (xx + zz)) * scale,
                    2.0 * (yz - wx) * scale,
                    position.y,
                ],
                [
                    2.0 * (xz - wy) * scale,
                    2.0 * (yz + wx) * scale,
                    (1.0 - 2.0 * (xx + yy)) * scale,
                    position.z,
                ],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    /// Transforms a point (applies rotation, scale and translation).
    #[must_use]
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        let r = &self.rows;
        Vec3::new(
            r[0][0] * p.x + r[0][1] * p.y + r[0][2] * p.z + r[0][3],
            r[1][0] * p.x + r[1][1] * p.y + r[1][2] * p.z + r[1][3],
            r[2][0] * p.x + r[2][1] * p.y + r[2][2] * p.z + r[2][3],
        )
    }

    /// Translation column of the matrix.
    #[must_use]
    pub const fn translation(&self) -> Vec3 {
        Vec3::new(self.rows[0][3], self.rows[1][3], self.rows[2][3])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn test_vec3_operations() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);

        assert_eq!((a + b).x, 5.0);
        assert_eq!(a.dot(b), 32.0); // 1*4 + 2*5 + 3*6
        assert!((Vec3::new(3.0, 0.0, 4.0).length() - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_normalized_degenerate() {
        assert_eq!(Vec3::ZERO.normalized(), Vec3::ZERO);
    }

    #[test]
    fn test_quat_rotation_y() {
        // 90 degrees about Y takes +X to -Z
        let q = Quat::from_rotation_y_deg(90.0);
        let v = q.rotate(Vec3::new(1.0, 0.0, 0.0));
        assert!(approx(v, Vec3::new(0.0, 0.0, -1.0)), "{v:?}");
    }

    #[test]
    fn test_quat_product_composes() {
        let a = Quat::from_rotation_y_deg(30.0);
        let b = Quat::from_rotation_y_deg(60.0);
        let v = Vec3::new(1.0, 0.0, 0.0);
        assert!(approx((a * b).rotate(v), a.rotate(b.rotate(v))));
        // Two rotations about the same axis add up
        assert!(approx((a * b).rotate(v), Quat::from_rotation_y_deg(90.0).rotate(v)));
    }

    #[test]
    fn test_mat4_stride() {
        // Structured buffer stride: 16 floats * 4 bytes
        assert_eq!(Mat4::SIZE, 64);
    }

    #[test]
    fn test_trs_matches_quaternion_path() {
        let pos = Vec3::new(1.0, 2.0, 3.0);
        let rot = Quat::from_rotation_y_deg(45.0);
        let m = Mat4::from_trs(pos, rot, 1.0);

        let p = Vec3::new(0.5, -0.5, 2.0);
        assert!(approx(m.transform_point(p), pos + rot.rotate(p)));
        assert!(approx(m.translation(), pos));
    }
}
