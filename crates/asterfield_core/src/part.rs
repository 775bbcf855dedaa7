//! A single node of the fractal field.

use bytemuck::{Pod, Zeroable};
use rand::Rng;

use crate::math::{Quat, Vec3};

/// Radial offset applied to every child direction when propagating from the
/// parent frame. Fixed for all levels.
pub const RADIAL_OFFSET_SCALE: f32 = 1.5;

/// One body of the field.
///
/// `direction` and `rotation` are fixed at creation; `spin_angle` accumulates
/// every frame (degrees, wrapped only by the trig inside the rotation);
/// the world transform is recomputed from scratch each frame and never
/// survives a rebuild.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct Part {
    /// Local offset direction from the parent, radius-scaled at creation.
    pub direction: Vec3,
    /// Fixed local orientation offset.
    pub rotation: Quat,
    /// Accumulated rotation about the local up axis, in degrees.
    pub spin_angle: f32,
    /// Derived world-space position.
    pub world_position: Vec3,
    /// Derived world-space orientation.
    pub world_rotation: Quat,
}

impl Part {
    /// Size in bytes.
    pub const SIZE: usize = std::mem::size_of::<Self>();

    /// The single root part: anchored, up-pointing, identity orientation.
    #[must_use]
    pub const fn root() -> Self {
        Self {
            direction: Vec3::UP,
            rotation: Quat::IDENTITY,
            spin_angle: 0.0,
            world_position: Vec3::ZERO,
            world_rotation: Quat::IDENTITY,
        }
    }

    /// Creates a randomized child part.
    ///
    /// Direction is a unit vector in the XZ plane scaled by `radius` with a
    /// 0.9-1.1 jitter; orientation is a random yaw.
    #[must_use]
    pub fn random<R: Rng>(rng: &mut R, radius: f32) -> Self {
        let dir = Vec3::new(rng.gen::<f32>(), 0.0, rng.gen::<f32>()).normalized();
        let jitter = 0.9 + 0.2 * rng.gen::<f32>();
        let yaw = rng.gen::<f32>() * 360.0;

        Self {
            direction: dir * (radius * jitter),
            rotation: Quat::from_rotation_y_deg(yaw),
            spin_angle: 0.0,
            world_position: Vec3::ZERO,
            world_rotation: Quat::IDENTITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::FieldSeed;

    #[test]
    fn test_part_layout() {
        // 3 + 4 + 1 + 3 + 4 floats, no padding
        assert_eq!(Part::SIZE, 15 * 4);
    }

    #[test]
    fn test_random_part_in_radius_band() {
        let mut rng = FieldSeed::new(9).rng();
        for _ in 0..100 {
            let part = Part::random(&mut rng, 15.0);
            let len = part.direction.length();
            assert!((13.5..=16.5).contains(&len), "direction length {len}");
            assert_eq!(part.direction.y, 0.0);
            assert_eq!(part.spin_angle, 0.0);
        }
    }
}
