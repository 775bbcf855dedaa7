//! # ASTERFIELD Core
//!
//! Fractal asteroid field simulation:
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │                      PER-FRAME DATA FLOW                      │
//! ├───────────────────────────────────────────────────────────────┤
//! │  root (sequential) → level 1 parallel pass → join → level 2 … │
//! │        │                     │                                │
//! │   matrices[0]           matrices[k]  ──► GPU upload + draw    │
//! │                                          (asterfield_rendering)│
//! └───────────────────────────────────────────────────────────────┘
//! ```
//!
//! Two components share the design, differing only in depth and fan-out:
//! [`AsteroidField`] (root + child levels) and [`AsteroidBelt`] (one flat
//! level). Both are deterministic: same config + same [`FieldSeed`] + same
//! dt sequence reproduces every transform bit-for-bit.
//!
//! This crate is pure CPU. GPU buffers and draw submission live in
//! `asterfield_rendering`.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod belt;
pub mod config;
pub mod error;
pub mod field;
pub mod level;
pub mod math;
pub mod part;
pub mod seed;

pub use belt::{AsteroidBelt, Orbiter};
pub use config::{BeltConfig, FieldConfig};
pub use error::{ConfigError, ConfigResult};
pub use field::{AsteroidField, DEFAULT_DEPTH};
pub use level::{child_range, level_len, parent_index, Level};
pub use math::{Mat4, Quat, Vec3};
pub use part::{Part, RADIAL_OFFSET_SCALE};
pub use seed::FieldSeed;
