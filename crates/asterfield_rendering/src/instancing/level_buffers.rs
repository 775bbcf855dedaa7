//! GPU-visible matrix buffers, one per level.
//!
//! A buffer is sized once, at level creation, and released with it. A
//! parameter change never resizes in place - the owner drops the whole
//! set and allocates a fresh one. Uploads overwrite the entire buffer
//! every frame.

use asterfield_core::Mat4;

use crate::shaders::MATRICES_BINDING;

/// Structured buffer stride: one row-major 4x4 matrix of f32.
pub const MATRIX_STRIDE: usize = Mat4::SIZE;

/// Creates the bind group layout every level buffer binds through.
///
/// Read-only storage, vertex stage only, at the fixed slot the bundled
/// shader consumes.
#[must_use]
pub fn matrices_bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("Level Matrices Layout"),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: MATRICES_BINDING,
            visibility: wgpu::ShaderStages::VERTEX,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Storage { read_only: true },
                has_dynamic_offset: false,
                min_binding_size: wgpu::BufferSize::new(MATRIX_STRIDE as u64),
            },
            count: None,
        }],
    })
}

/// The GPU half of one level: its matrix buffer and bind group.
pub struct LevelBuffer {
    buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    len: u32,
}

impl LevelBuffer {
    /// Allocates a buffer for `len` matrices and binds it at the fixed slot.
    #[must_use]
    pub fn new(device: &wgpu::Device, layout: &wgpu::BindGroupLayout, len: usize) -> Self {
        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Level Matrices"),
            size: (len * MATRIX_STRIDE) as u64,
            usage: wgpu::BufferUsages::STORAGE | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Level Matrices Bind Group"),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: MATRICES_BINDING,
                resource: buffer.as_entire_binding(),
            }],
        });

        Self {
            buffer,
            bind_group,
            len: len as u32,
        }
    }

    /// Overwrites the whole buffer with this frame's matrices.
    ///
    /// A count mismatch means the simulation was rebuilt without
    /// re-validating the GPU side; the upload is skipped for the frame.
    pub fn upload(&self, queue: &wgpu::Queue, matrices: &[Mat4]) {
        if matrices.len() as u32 != self.len {
            tracing::trace!(
                expected = self.len,
                got = matrices.len(),
                "matrix count mismatch, skipping upload"
            );
            return;
        }
        queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(matrices));
    }

    /// The bind group carrying this level's buffer.
    #[must_use]
    pub const fn bind_group(&self) -> &wgpu::BindGroup {
        &self.bind_group
    }

    /// Number of matrices (== instance count of the level's draw call).
    #[must_use]
    pub const fn instance_count(&self) -> u32 {
        self.len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stride_matches_shader_matrix() {
        // 16 floats * 4 bytes
        assert_eq!(MATRIX_STRIDE, 64);
    }

    #[test]
    fn test_upload_bytes_cover_whole_level() {
        let matrices = vec![Mat4::IDENTITY; 150];
        let bytes: &[u8] = bytemuck::cast_slice(&matrices);
        assert_eq!(bytes.len(), 150 * MATRIX_STRIDE);
    }
}
