//! Bounding volumes handed to the host's camera culling.

use asterfield_core::Vec3;

/// World-space size of the box wrapped around a field's root.
pub const FIELD_BOUNDS_SIZE: f32 = 3.0;

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Aabb {
    /// Box center.
    pub center: Vec3,
    /// Half extents along each axis.
    pub half_extents: Vec3,
}

impl Aabb {
    /// Empty box at the origin.
    pub const ZERO: Self = Self {
        center: Vec3::ZERO,
        half_extents: Vec3::ZERO,
    };

    /// Creates a box from center and half extents.
    #[must_use]
    pub const fn new(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            center,
            half_extents,
        }
    }

    /// The fixed-size box around a field's root position, recomputed each
    /// frame as the root moves.
    #[must_use]
    pub fn around_root(position: Vec3) -> Self {
        let half = FIELD_BOUNDS_SIZE * 0.5;
        Self::new(position, Vec3::new(half, half, half))
    }

    /// Minimum corner.
    #[must_use]
    pub fn min(&self) -> Vec3 {
        self.center - self.half_extents
    }

    /// Maximum corner.
    #[must_use]
    pub fn max(&self) -> Vec3 {
        self.center + self.half_extents
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_bounds_are_centered() {
        let aabb = Aabb::around_root(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(aabb.center, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(aabb.max() - aabb.min(), Vec3::new(3.0, 3.0, 3.0));
    }
}
