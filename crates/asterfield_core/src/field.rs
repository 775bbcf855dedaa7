//! The hierarchical fractal instancer.
//!
//! A fixed-depth tree of spinning parts: one root, `child_count` children
//! per part on the next level. Per frame:
//!
//! 1. The root advances on the calling thread (one element, sequential).
//! 2. Each non-root level runs one data-parallel pass - one task per part
//!    index - reading the *previous* level's world transforms and writing
//!    its own parts and matrices.
//! 3. Levels are processed in strictly increasing depth order with a full
//!    join between them, because level `k` reads level `k-1`'s
//!    transforms from the same frame.
//!
//! Within a level no ordering is required: every task writes disjoint
//! slots and reads only the parent level, which the borrow split keeps
//! immutable for the whole pass.
//!
//! There is no error path here. NaN radius or dt produces NaN transforms,
//! not a failure.

use rayon::prelude::*;

use crate::config::FieldConfig;
use crate::level::{level_len, parent_index, Level};
use crate::math::{Mat4, Quat};
use crate::part::{Part, RADIAL_OFFSET_SCALE};
use crate::seed::FieldSeed;

/// Depth of the sample scene: root + one child level.
pub const DEFAULT_DEPTH: usize = 2;

/// A multi-level field of spinning bodies.
///
/// All levels are allocated together at construction and released together
/// on drop. Exposed-parameter changes go through [`AsteroidField::rebuild`]
/// (full teardown + reconstruction), never an in-place resize.
pub struct AsteroidField {
    config: FieldConfig,
    seed: FieldSeed,
    generation: u64,
    levels: Vec<Level>,
}

impl AsteroidField {
    /// Builds a field of [`DEFAULT_DEPTH`] levels.
    #[must_use]
    pub fn new(config: FieldConfig, seed: FieldSeed) -> Self {
        Self::with_depth(config, seed, DEFAULT_DEPTH)
    }

    /// Builds a field with an explicit depth (clamped to >= 1).
    ///
    /// Level 0 is always the single anchored root; level `k` holds
    /// `child_count^k` randomized parts drawn from a per-level sub-seed.
    #[must_use]
    pub fn with_depth(config: FieldConfig, seed: FieldSeed, depth: usize) -> Self {
        let config = config.sanitized();
        let depth = depth.max(1);
        let levels = build_levels(config, seed, depth);

        tracing::debug!(
            depth,
            child_count = config.child_count,
            parts = levels.iter().map(Level::len).sum::<usize>(),
            seed = seed.value(),
            "built asteroid field"
        );

        Self {
            config,
            seed,
            generation: 0,
            levels,
        }
    }

    /// Advances the whole field by `dt` seconds.
    ///
    /// Synchronous: when this returns, every level's parts and matrices
    /// hold this frame's values and may be uploaded to the GPU.
    pub fn step(&mut self, dt: f32) {
        let spin_delta = self.config.angular_speed_deg * dt;

        // Root: one element, not worth a task.
        let (parts, matrices) = self.levels[0].slots_mut();
        let root = &mut parts[0];
        root.spin_angle += spin_delta;
        root.world_rotation = root.rotation * Quat::from_rotation_y_deg(root.spin_angle);
        // The root stays anchored; only its orientation advances.
        matrices[0] = Mat4::from_trs(root.world_position, root.world_rotation, 1.0);

        // Child levels, in depth order. split_at_mut gives the pass shared
        // access to the parent level and exclusive access to its own.
        for depth in 1..self.levels.len() {
            let (done, rest) = self.levels.split_at_mut(depth);
            let parent = &done[depth - 1];
            update_level(parent, &mut rest[0], spin_delta, self.config.child_count);
        }
    }

    /// Tears the field down and rebuilds it with the given parameters.
    ///
    /// Sizes follow the new config; parts are re-randomized from `seed`.
    /// Passing the seed the field was built with reproduces it exactly.
    pub fn rebuild(&mut self, config: FieldConfig, seed: FieldSeed) {
        let depth = self.levels.len();
        tracing::debug!(seed = seed.value(), "rebuilding asteroid field");
        *self = Self::with_depth(config, seed, depth);
    }

    /// Applies a parameter change: full rebuild with a freshly derived seed.
    pub fn set_config(&mut self, config: FieldConfig) {
        let generation = self.generation + 1;
        let seed = self.seed.derive(generation);
        self.rebuild(config, seed);
        self.generation = generation;
    }

    /// The active configuration (after clamping).
    #[must_use]
    pub const fn config(&self) -> FieldConfig {
        self.config
    }

    /// The seed the current structure was built from.
    #[must_use]
    pub const fn seed(&self) -> FieldSeed {
        self.seed
    }

    /// Number of levels (fixed at construction).
    #[must_use]
    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    /// All levels, root first.
    #[must_use]
    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    /// The root part.
    #[must_use]
    pub fn root(&self) -> &Part {
        &self.levels[0].parts()[0]
    }
}

fn build_levels(config: FieldConfig, seed: FieldSeed, depth: usize) -> Vec<Level> {
    let mut levels = Vec::with_capacity(depth);
    levels.push(Level::new(vec![Part::root()]));

    for level in 1..depth {
        let mut rng = seed.derive(level as u64).rng();
        let len = level_len(level, config.child_count);
        let parts = (0..len)
            .map(|_| Part::random(&mut rng, config.radius))
            .collect();
        levels.push(Level::new(parts));
    }

    levels
}

/// One full parallel pass over a non-root level.
///
/// Each task owns exactly one part/matrix slot; the parent level is borrowed
/// read-only for the whole pass, so tasks never observe a half-updated
/// parent. The implicit rayon join is the barrier the next level waits on.
fn update_level(parent: &Level, level: &mut Level, spin_delta: f32, child_count: usize) {
    let parents = parent.parts();
    let (parts, matrices) = level.slots_mut();

    parts
        .par_iter_mut()
        .zip(matrices.par_iter_mut())
        .enumerate()
        .for_each(|(index, (part, matrix))| {
            let parent = &parents[parent_index(index, child_count)];

            part.spin_angle += spin_delta;
            part.world_rotation = part.rotation * Quat::from_rotation_y_deg(part.spin_angle);
            part.world_position = parent.world_position
                + parent.world_rotation * (part.direction * RADIAL_OFFSET_SCALE);

            *matrix = Mat4::from_trs(part.world_position, part.world_rotation, 1.0);
        });
}
