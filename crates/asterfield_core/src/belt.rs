//! The single-level instancer: a flat belt of independent orbiters.
//!
//! The simpler sibling of [`crate::field::AsteroidField`]. No hierarchy -
//! every body orbits the origin at a constant per-body angular velocity -
//! so one parallel pass and one instanced draw cover the whole belt.

use std::f32::consts::FRAC_1_SQRT_2;

use bytemuck::{Pod, Zeroable};
use rand::Rng;
use rayon::prelude::*;

use crate::config::BeltConfig;
use crate::math::{Mat4, Quat, Vec3};
use crate::part::RADIAL_OFFSET_SCALE;
use crate::seed::FieldSeed;

/// Orbit plane axes a belt cycles through, paired with [`ROTATIONS`].
const DIRECTIONS: [Vec3; 5] = [
    Vec3::UP,
    Vec3::new(-1.0, 0.0, 0.0),
    Vec3::new(1.0, 0.0, 0.0),
    Vec3::new(0.0, 0.0, 1.0),
    Vec3::new(0.0, 0.0, -1.0),
];

/// Plane orientations matching [`DIRECTIONS`]: identity, ±90° roll, ±90° pitch.
const ROTATIONS: [Quat; 5] = [
    Quat::IDENTITY,
    Quat::new(0.0, 0.0, FRAC_1_SQRT_2, FRAC_1_SQRT_2),
    Quat::new(0.0, 0.0, -FRAC_1_SQRT_2, FRAC_1_SQRT_2),
    Quat::new(FRAC_1_SQRT_2, 0.0, 0.0, FRAC_1_SQRT_2),
    Quat::new(-FRAC_1_SQRT_2, 0.0, 0.0, FRAC_1_SQRT_2),
];

/// One orbiting body.
///
/// Like a fractal part, but with its own angular speed and no parent: the
/// world transform is recomputed from the origin every frame.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct Orbiter {
    /// Fixed offset from the orbit center, radius-scaled at creation.
    pub direction: Vec3,
    /// Fixed orbit-plane orientation.
    pub rotation: Quat,
    /// Angular speed in degrees per second, fixed at creation.
    pub angular_speed_deg: f32,
    /// Accumulated orbit angle in degrees.
    pub angle: f32,
    /// Derived world-space position.
    pub world_position: Vec3,
    /// Derived world-space orientation.
    pub world_rotation: Quat,
}

/// A flat field of independent orbiters rendered as one instanced draw.
pub struct AsteroidBelt {
    config: BeltConfig,
    seed: FieldSeed,
    generation: u64,
    orbiters: Vec<Orbiter>,
    matrices: Vec<Mat4>,
}

impl AsteroidBelt {
    /// Builds a belt of `config.asteroid_count` orbiters.
    #[must_use]
    pub fn new(config: BeltConfig, seed: FieldSeed) -> Self {
        let config = config.sanitized();
        let mut rng = seed.rng();

        let orbiters: Vec<Orbiter> = (0..config.asteroid_count)
            .map(|i| {
                let axis = i % DIRECTIONS.len();
                Orbiter {
                    direction: DIRECTIONS[axis] * config.radius,
                    rotation: ROTATIONS[axis],
                    angular_speed_deg: config.angular_speed_deg * rng.gen::<f32>(),
                    angle: rng.gen::<f32>() * 360.0,
                    world_position: Vec3::ZERO,
                    world_rotation: Quat::IDENTITY,
                }
            })
            .collect();
        let matrices = vec![Mat4::IDENTITY; orbiters.len()];

        tracing::debug!(
            asteroids = orbiters.len(),
            seed = seed.value(),
            "built asteroid belt"
        );

        Self {
            config,
            seed,
            generation: 0,
            orbiters,
            matrices,
        }
    }

    /// Advances every orbiter by `dt` seconds, one task per index.
    pub fn step(&mut self, dt: f32) {
        self.orbiters
            .par_iter_mut()
            .zip(self.matrices.par_iter_mut())
            .for_each(|(orbiter, matrix)| {
                orbiter.angle += orbiter.angular_speed_deg * dt;
                orbiter.world_rotation =
                    orbiter.rotation * Quat::from_rotation_y_deg(orbiter.angle);
                orbiter.world_position =
                    orbiter.world_rotation * (orbiter.direction * RADIAL_OFFSET_SCALE);

                *matrix = Mat4::from_trs(orbiter.world_position, orbiter.world_rotation, 1.0);
            });
    }

    /// Tears the belt down and rebuilds it with the given parameters.
    pub fn rebuild(&mut self, config: BeltConfig, seed: FieldSeed) {
        tracing::debug!(seed = seed.value(), "rebuilding asteroid belt");
        *self = Self::new(config, seed);
    }

    /// Applies a parameter change: full rebuild with a freshly derived seed.
    pub fn set_config(&mut self, config: BeltConfig) {
        let generation = self.generation + 1;
        let seed = self.seed.derive(generation);
        self.rebuild(config, seed);
        self.generation = generation;
    }

    /// The active configuration (after clamping).
    #[must_use]
    pub const fn config(&self) -> BeltConfig {
        self.config
    }

    /// The seed the current belt was built from.
    #[must_use]
    pub const fn seed(&self) -> FieldSeed {
        self.seed
    }

    /// Number of orbiters (== instance count of the draw call).
    #[must_use]
    pub fn len(&self) -> usize {
        self.orbiters.len()
    }

    /// True if the belt holds no orbiters. Cannot happen through
    /// [`BeltConfig`] clamping, kept for slice-like completeness.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.orbiters.is_empty()
    }

    /// Read-only view of the orbiters.
    #[must_use]
    pub fn orbiters(&self) -> &[Orbiter] {
        &self.orbiters
    }

    /// Read-only view of the matrices, index-aligned with `orbiters()`.
    #[must_use]
    pub fn matrices(&self) -> &[Mat4] {
        &self.matrices
    }
}
