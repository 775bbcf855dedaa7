//! Frame orchestration, one type per component.
//!
//! Single-threaded per frame: the simulation pass (with its internal
//! parallel fan-out and joins) runs to completion first, then the GPU
//! upload, then draw submission. Keeping all three behind one type makes
//! the ordering impossible to get wrong from the host side.

use asterfield_core::{
    AsteroidBelt, AsteroidField, BeltConfig, FieldConfig, FieldSeed, Level, Vec3,
};

use crate::bounds::Aabb;
use crate::instancing::{InstancedRenderer, RenderStats, SharedDrawConfig};

/// A field plus its GPU buffers, advanced and drawn once per frame.
pub struct FieldPipeline {
    field: AsteroidField,
    renderer: InstancedRenderer,
    bounds: Aabb,
}

impl FieldPipeline {
    /// Builds the simulation and allocates matching level buffers.
    #[must_use]
    pub fn new(device: &wgpu::Device, config: FieldConfig, seed: FieldSeed) -> Self {
        let field = AsteroidField::new(config, seed);
        let mut renderer = InstancedRenderer::new(device);
        renderer.rebuild(device, &level_lens(&field));
        let bounds = Aabb::around_root(field_root(&field));

        Self {
            field,
            renderer,
            bounds,
        }
    }

    /// Advances the frame: simulation step, then full buffer upload.
    ///
    /// When this returns, the buffers hold exactly the transforms this
    /// frame's passes computed, and [`FieldPipeline::draw`] may run.
    pub fn advance(&mut self, queue: &wgpu::Queue, dt: f32) {
        self.field.step(dt);
        self.bounds = Aabb::around_root(field_root(&self.field));
        self.renderer.upload_field(queue, &self.field);
    }

    /// Applies a parameter change: rebuilds the simulation *and* its
    /// buffers. There is no in-place resize path.
    pub fn set_config(&mut self, device: &wgpu::Device, config: FieldConfig) {
        self.field.set_config(config);
        self.renderer.rebuild(device, &level_lens(&self.field));
    }

    /// Releases the GPU buffers; draws are skipped until the next
    /// [`FieldPipeline::set_config`].
    pub fn release(&mut self) {
        self.renderer.release();
    }

    /// Submits one instanced draw per level, refreshing the shared draw
    /// config's bounding volume first.
    pub fn draw<'pass>(
        &'pass self,
        pass: &mut wgpu::RenderPass<'pass>,
        shared: &SharedDrawConfig,
    ) -> RenderStats {
        {
            let mut config = shared.lock();
            config.bounds = self.bounds;
        }
        self.renderer.draw(pass, shared)
    }

    /// The simulation side.
    #[must_use]
    pub const fn field(&self) -> &AsteroidField {
        &self.field
    }

    /// The GPU side.
    #[must_use]
    pub const fn renderer(&self) -> &InstancedRenderer {
        &self.renderer
    }

    /// This frame's bounding volume (follows the root).
    #[must_use]
    pub const fn bounds(&self) -> Aabb {
        self.bounds
    }
}

/// A belt plus its single GPU buffer, advanced and drawn once per frame.
///
/// The flat sibling of [`FieldPipeline`]: one level, one buffer, one draw.
/// The belt orbits the origin, so its bounding volume never moves.
pub struct BeltPipeline {
    belt: AsteroidBelt,
    renderer: InstancedRenderer,
    bounds: Aabb,
}

impl BeltPipeline {
    /// Builds the simulation and allocates its matrix buffer.
    #[must_use]
    pub fn new(device: &wgpu::Device, config: BeltConfig, seed: FieldSeed) -> Self {
        let belt = AsteroidBelt::new(config, seed);
        let mut renderer = InstancedRenderer::new(device);
        renderer.rebuild(device, &[belt.len()]);

        Self {
            belt,
            renderer,
            bounds: Aabb::around_root(Vec3::ZERO),
        }
    }

    /// Advances the frame: simulation step, then full buffer upload.
    pub fn advance(&mut self, queue: &wgpu::Queue, dt: f32) {
        self.belt.step(dt);
        self.renderer.upload_belt(queue, &self.belt);
    }

    /// Applies a parameter change: rebuilds the simulation *and* its
    /// buffer. There is no in-place resize path.
    pub fn set_config(&mut self, device: &wgpu::Device, config: BeltConfig) {
        self.belt.set_config(config);
        self.renderer.rebuild(device, &[self.belt.len()]);
    }

    /// Releases the GPU buffer; draws are skipped until the next
    /// [`BeltPipeline::set_config`].
    pub fn release(&mut self) {
        self.renderer.release();
    }

    /// Submits the belt's single instanced draw.
    pub fn draw<'pass>(
        &'pass self,
        pass: &mut wgpu::RenderPass<'pass>,
        shared: &SharedDrawConfig,
    ) -> RenderStats {
        {
            let mut config = shared.lock();
            config.bounds = self.bounds;
        }
        self.renderer.draw(pass, shared)
    }

    /// The simulation side.
    #[must_use]
    pub const fn belt(&self) -> &AsteroidBelt {
        &self.belt
    }

    /// The GPU side.
    #[must_use]
    pub const fn renderer(&self) -> &InstancedRenderer {
        &self.renderer
    }

    /// The belt's fixed bounding volume.
    #[must_use]
    pub const fn bounds(&self) -> Aabb {
        self.bounds
    }
}

fn level_lens(field: &AsteroidField) -> Vec<usize> {
    field.levels().iter().map(Level::len).collect()
}

fn field_root(field: &AsteroidField) -> Vec3 {
    field.root().world_position
}
