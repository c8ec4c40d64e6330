// Particle-network background animator.
//
// Owns the particle field, the drawing surface and the random source, and
// exposes the `new` / `resize` / `step` lifecycle driven by the frame loop
// and the window resize listener.

use super::constants::{NODE_ALPHA, NODE_RGB, REDUCED_MOTION_FACTOR};
use super::field::ParticleField;
use super::surface::{Rgba, Surface, Viewport};
use rand::Rng;

pub const NODE_COLOR: Rgba = Rgba::new(NODE_RGB, NODE_ALPHA);

pub struct Animator<S: Surface, R: Rng> {
    surface: S,
    rng: R,
    field: ParticleField,
    viewport: Viewport,
}

impl<S: Surface, R: Rng> Animator<S, R> {
    /// Size the surface, seed the first field and apply the reduced-motion
    /// damping. The damping only ever touches this first field.
    pub fn new(surface: S, rng: R, viewport: Viewport, reduced_motion: bool) -> Self {
        let mut animator = Self {
            surface,
            rng,
            field: ParticleField::default(),
            viewport,
        };
        animator.resize(viewport);
        if reduced_motion {
            animator.field.scale_velocities(REDUCED_MOTION_FACTOR);
        }
        animator
    }

    /// Resize the surface and replace the whole field.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.surface.resize(viewport);
        self.field = ParticleField::seed(viewport.width, viewport.height, &mut self.rng);
        log::debug!(
            "[field] resized to {:.0}x{:.0}@{} -> {} particles",
            self.viewport.width,
            self.viewport.height,
            self.viewport.device_pixel_ratio,
            self.field.len()
        );
    }

    pub fn step(&mut self) {
        self.field.step(&mut self.surface, NODE_COLOR);
    }

    #[inline]
    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    #[cfg(test)]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[cfg(test)]
    pub fn surface(&self) -> &S {
        &self.surface
    }
}
