//! The shader-side buffer contract.
//!
//! The matrix buffer is always bound at the same group/binding pair, and
//! the bundled WGSL consumes it there. Hosts supplying their own material
//! must match this slot.

/// Bind group index of the per-level matrix buffer.
pub const MATRICES_GROUP: u32 = 1;

/// Binding index of the matrix buffer inside [`MATRICES_GROUP`].
pub const MATRICES_BINDING: u32 = 0;

/// Instanced asteroid shader reading the matrix buffer at the fixed slot.
pub const ASTEROID_INSTANCED_WGSL: &str = include_str!("shaders/asteroid_instanced.wgsl");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shader_consumes_the_fixed_slot() {
        assert!(ASTEROID_INSTANCED_WGSL.contains("@group(1) @binding(0)"));
        assert!(ASTEROID_INSTANCED_WGSL.contains("array<mat4x4<f32>>"));
    }

    #[test]
    fn test_shader_reads_instance_index() {
        assert!(ASTEROID_INSTANCED_WGSL.contains("@builtin(instance_index)"));
    }
}
