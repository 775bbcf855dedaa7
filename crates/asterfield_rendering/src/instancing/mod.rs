//! GPU instancing: per-level matrix buffers and draw submission.
//!
//! The contract with the simulation is strict ordering: a level's buffer
//! is written only after that level's parallel pass has joined, and the
//! draw for a frame reads exactly that frame's upload.

pub mod level_buffers;
pub mod submit;

pub use level_buffers::{matrices_bind_group_layout, LevelBuffer, MATRIX_STRIDE};
pub use submit::{shared_draw_config, DrawConfig, InstancedRenderer, RenderStats, SharedDrawConfig};
