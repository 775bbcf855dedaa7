//! Per-level instanced draw submission.
//!
//! The draw path mirrors the simulation's level order: for each level,
//! bind that level's matrix buffer and issue one draw with instance count
//! equal to the buffer's element count. Upload must happen after the
//! simulation's join for the frame; both run on the orchestrating thread.

use std::sync::Arc;

use parking_lot::Mutex;

use asterfield_core::{AsteroidBelt, AsteroidField};

use super::level_buffers::{matrices_bind_group_layout, LevelBuffer};
use crate::bounds::Aabb;
use crate::shaders::MATRICES_GROUP;

/// Draw-call parameters shared across every level of a component.
///
/// The analog of a shared material property block: one process-wide
/// instance may serve several fields, because each draw fully configures
/// the buffer binding immediately before submitting. Concurrent
/// submission from multiple threads must not race on it - serialize draw
/// calls or give each component its own handle.
#[derive(Clone, Copy, Debug)]
pub struct DrawConfig {
    /// Vertex count of the shared mesh (the mesh itself stays opaque).
    pub vertex_count: u32,
    /// Bounding volume handed to the host's camera culling.
    pub bounds: Aabb,
}

impl DrawConfig {
    /// Creates a draw config for a mesh with the given vertex count.
    #[must_use]
    pub const fn new(vertex_count: u32) -> Self {
        Self {
            vertex_count,
            bounds: Aabb::ZERO,
        }
    }
}

/// Shared handle to a [`DrawConfig`], locked around each submission.
pub type SharedDrawConfig = Arc<Mutex<DrawConfig>>;

/// Creates the process-wide shared draw configuration.
#[must_use]
pub fn shared_draw_config(vertex_count: u32) -> SharedDrawConfig {
    Arc::new(Mutex::new(DrawConfig::new(vertex_count)))
}

/// Statistics of one frame's submission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Draw calls issued (one per level with a live buffer).
    pub draw_calls: u32,
    /// Total instances across all draw calls.
    pub instances: u32,
    /// Levels skipped because their buffer was missing.
    pub levels_skipped: u32,
}

/// Owns the GPU side of one component: a matrix buffer per level.
///
/// The buffers are created by [`InstancedRenderer::rebuild`] and released
/// by [`InstancedRenderer::release`] (or drop). While released, uploads
/// and draws are silently skipped - the frame goes on without the
/// component rather than failing.
pub struct InstancedRenderer {
    layout: wgpu::BindGroupLayout,
    levels: Option<Vec<LevelBuffer>>,
}

impl InstancedRenderer {
    /// Creates a renderer with no buffers allocated yet.
    #[must_use]
    pub fn new(device: &wgpu::Device) -> Self {
        Self {
            layout: matrices_bind_group_layout(device),
            levels: None,
        }
    }

    /// The bind group layout for the host's pipeline layout (group 1).
    #[must_use]
    pub const fn layout(&self) -> &wgpu::BindGroupLayout {
        &self.layout
    }

    /// Releases all buffers and allocates one per entry of `level_lens`.
    ///
    /// This is the only sizing path; a configuration change on the
    /// simulation side must be followed by a rebuild here.
    pub fn rebuild(&mut self, device: &wgpu::Device, level_lens: &[usize]) {
        tracing::debug!(levels = level_lens.len(), "rebuilding level buffers");
        self.levels = Some(
            level_lens
                .iter()
                .map(|&len| LevelBuffer::new(device, &self.layout, len))
                .collect(),
        );
    }

    /// Releases every buffer. Subsequent uploads/draws are skipped until
    /// the next [`InstancedRenderer::rebuild`].
    pub fn release(&mut self) {
        self.levels = None;
    }

    /// True while buffers are allocated.
    #[must_use]
    pub const fn is_allocated(&self) -> bool {
        self.levels.is_some()
    }

    /// Uploads every level of a hierarchical field.
    ///
    /// Call after [`AsteroidField::step`] returns for the frame, so the
    /// buffers hold exactly the transforms that pass computed.
    pub fn upload_field(&self, queue: &wgpu::Queue, field: &AsteroidField) {
        let Some(levels) = &self.levels else {
            tracing::trace!("matrix buffers not allocated, skipping upload");
            return;
        };
        for (buffer, level) in levels.iter().zip(field.levels()) {
            buffer.upload(queue, level.matrices());
        }
    }

    /// Uploads a single-level belt (one buffer, index 0).
    pub fn upload_belt(&self, queue: &wgpu::Queue, belt: &AsteroidBelt) {
        let Some(levels) = &self.levels else {
            tracing::trace!("matrix buffer not allocated, skipping upload");
            return;
        };
        if let Some(buffer) = levels.first() {
            buffer.upload(queue, belt.matrices());
        }
    }

    /// Issues one instanced draw per allocated level.
    ///
    /// The host has already set its pipeline and the mesh's vertex buffer
    /// on `pass`; this binds each level's matrices at the fixed group and
    /// draws `vertex_count` vertices for `instance_count` instances.
    pub fn draw<'pass>(
        &'pass self,
        pass: &mut wgpu::RenderPass<'pass>,
        shared: &SharedDrawConfig,
    ) -> RenderStats {
        let mut stats = RenderStats::default();

        let Some(levels) = &self.levels else {
            tracing::trace!("matrix buffers not allocated, skipping draw");
            stats.levels_skipped += 1;
            return stats;
        };

        let config = shared.lock();
        for buffer in levels {
            pass.set_bind_group(MATRICES_GROUP, buffer.bind_group(), &[]);
            pass.draw(0..config.vertex_count, 0..buffer.instance_count());
            stats.draw_calls += 1;
            stats.instances += buffer.instance_count();
        }

        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_config_is_reconfigurable() {
        let shared = shared_draw_config(36);
        {
            let mut config = shared.lock();
            config.bounds = Aabb::around_root(asterfield_core::Vec3::new(1.0, 2.0, 3.0));
        }
        assert_eq!(shared.lock().vertex_count, 36);
        assert_eq!(shared.lock().bounds.center.y, 2.0);
    }

    #[test]
    fn test_stats_start_empty() {
        let stats = RenderStats::default();
        assert_eq!(stats.draw_calls, 0);
        assert_eq!(stats.instances, 0);
    }
}
