//! # ASTERFIELD Rendering
//!
//! GPU instance submission for the fractal field:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                       FRAME PIPELINE                         │
//! ├──────────────────────────────────────────────────────────────┤
//! │  field.step(dt)  ──join──►  upload_field  ──►  draw per level │
//! │  (asterfield_core)          (write_buffer)     (1 call/level) │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! One structured buffer per level, 64-byte stride, bound at a fixed slot
//! and fully overwritten every frame. Mesh and material stay opaque: the
//! host owns the pipeline and vertex data, this crate owns the matrices
//! and the instanced draw calls.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod bounds;
pub mod instancing;
pub mod pipeline;
pub mod shaders;

pub use bounds::{Aabb, FIELD_BOUNDS_SIZE};
pub use instancing::{
    matrices_bind_group_layout, shared_draw_config, DrawConfig, InstancedRenderer, LevelBuffer,
    RenderStats, SharedDrawConfig, MATRIX_STRIDE,
};
pub use pipeline::{BeltPipeline, FieldPipeline};
pub use shaders::{ASTEROID_INSTANCED_WGSL, MATRICES_BINDING, MATRICES_GROUP};
