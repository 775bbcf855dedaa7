//! Invariant tests for the fractal field and the belt.
//!
//! These pin the contract of the per-frame pass: deterministic output,
//! same-frame parent reads, level isolation, and fixed array sizes.

use asterfield_core::{
    parent_index, AsteroidBelt, AsteroidField, BeltConfig, FieldConfig, FieldSeed,
    RADIAL_OFFSET_SCALE,
};

fn sample_config() -> FieldConfig {
    FieldConfig {
        child_count: 4,
        angular_speed_deg: 80.0,
        radius: 15.0,
    }
}

fn matrices_bytes(field: &AsteroidField) -> Vec<u8> {
    field
        .levels()
        .iter()
        .flat_map(|level| bytemuck::cast_slice::<_, u8>(level.matrices()).to_vec())
        .collect()
}

#[test]
fn test_identical_runs_are_bit_for_bit_equal() {
    let dts = [1.0 / 60.0, 1.0 / 30.0, 0.004, 1.0 / 60.0];

    let mut a = AsteroidField::new(sample_config(), FieldSeed::new(77));
    let mut b = AsteroidField::new(sample_config(), FieldSeed::new(77));

    for dt in dts {
        a.step(dt);
        b.step(dt);
        assert_eq!(matrices_bytes(&a), matrices_bytes(&b));
    }
}

#[test]
fn test_hierarchy_invariant_every_frame() {
    let mut field = AsteroidField::with_depth(
        FieldConfig {
            child_count: 3,
            angular_speed_deg: 80.0,
            radius: 15.0,
        },
        FieldSeed::new(5),
        3,
    );

    for _ in 0..5 {
        field.step(1.0 / 60.0);

        let child_count = field.config().child_count;
        for depth in 1..field.depth() {
            let parents = field.levels()[depth - 1].parts();
            for (i, part) in field.levels()[depth].parts().iter().enumerate() {
                let parent = &parents[parent_index(i, child_count)];
                let expected = parent.world_position
                    + parent.world_rotation * (part.direction * RADIAL_OFFSET_SCALE);
                assert_eq!(part.world_position, expected, "level {depth} part {i}");
            }
        }
    }
}

#[test]
fn test_child_level_never_touches_parent_level() {
    // Two fields whose child levels are randomized completely differently.
    // The root reads nothing from below, so its output must be identical.
    let mut a = AsteroidField::new(sample_config(), FieldSeed::new(9));
    let mut b = AsteroidField::new(sample_config(), FieldSeed::new(1234));

    for _ in 0..3 {
        a.step(1.0 / 60.0);
        b.step(1.0 / 60.0);
        assert_eq!(a.levels()[0].matrices()[0], b.levels()[0].matrices()[0]);
        assert_ne!(a.levels()[1].matrices(), b.levels()[1].matrices());
    }
}

#[test]
fn test_array_sizes_hold_across_frames() {
    let mut field = AsteroidField::new(sample_config(), FieldSeed::new(2));

    for frame in 0..10 {
        field.step(1.0 / 60.0);
        for (depth, level) in field.levels().iter().enumerate() {
            let expected = field.config().child_count.pow(depth as u32);
            assert_eq!(level.len(), expected, "frame {frame} level {depth}");
            assert_eq!(level.parts().len(), level.matrices().len());
        }
    }
}

#[test]
fn test_rebuild_same_seed_reproduces() {
    let mut field = AsteroidField::new(sample_config(), FieldSeed::new(11));
    let before: Vec<_> = field.levels()[1].parts().to_vec();

    field.rebuild(sample_config(), FieldSeed::new(11));
    let after: Vec<_> = field.levels()[1].parts().to_vec();

    assert_eq!(before, after);
}

#[test]
fn test_set_config_rerandomizes_but_keeps_sizes() {
    let mut field = AsteroidField::new(sample_config(), FieldSeed::new(11));
    let before: Vec<_> = field.levels()[1].parts().to_vec();

    field.set_config(sample_config());

    assert_eq!(field.levels()[1].len(), before.len());
    assert_ne!(field.levels()[1].parts(), before.as_slice());
}

#[test]
fn test_sample_scenario_one_frame() {
    // child_count=4, depth=2, 80 deg/s, dt=1/60, radius=15
    let mut field = AsteroidField::new(sample_config(), FieldSeed::new(1));
    field.step(1.0 / 60.0);

    let root = field.root();
    assert!((root.spin_angle - 1.333_333_3).abs() < 1e-4);

    // Every child sits in the root's rotated frame at its fixed offset.
    for part in field.levels()[1].parts() {
        let expected = root.world_position
            + root.world_rotation * (part.direction * RADIAL_OFFSET_SCALE);
        assert_eq!(part.world_position, expected);
    }
}

#[test]
fn test_single_child_degenerate_tree() {
    let config = FieldConfig {
        child_count: 1,
        ..sample_config()
    };
    let mut field = AsteroidField::new(config, FieldSeed::new(4));
    field.step(1.0 / 60.0);

    assert_eq!(field.levels()[1].len(), 1);
    assert_eq!(field.levels()[1].matrices().len(), 1);
}

#[test]
fn test_belt_determinism() {
    let config = BeltConfig {
        asteroid_count: 16,
        ..BeltConfig::default()
    };
    let mut a = AsteroidBelt::new(config, FieldSeed::new(21));
    let mut b = AsteroidBelt::new(config, FieldSeed::new(21));

    for _ in 0..8 {
        a.step(1.0 / 60.0);
        b.step(1.0 / 60.0);
        let bytes_a: &[u8] = bytemuck::cast_slice(a.matrices());
        let bytes_b: &[u8] = bytemuck::cast_slice(b.matrices());
        assert_eq!(bytes_a, bytes_b);
    }
}
