use super::constants::{
    AREA_PER_PARTICLE, EDGE_MAX_ALPHA, EDGE_MAX_DISTANCE_SQ, EDGE_WIDTH, INITIAL_SPEED_MAX,
    MAX_PARTICLES, NODE_RADIUS,
};
use super::surface::{Rgba, Surface};
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
}

impl Particle {
    /// Advance one frame and bounce off the `[0, bounds]` box.
    ///
    /// The position is not clamped: a particle that overshoots keeps its
    /// position and only its velocity flips, so the next frame carries it
    /// back inside.
    #[inline]
    pub fn advance(&mut self, bounds: Vec2) {
        self.position += self.velocity;
        if self.position.x < 0.0 || self.position.x > bounds.x {
            self.velocity.x = -self.velocity.x;
        }
        if self.position.y < 0.0 || self.position.y > bounds.y {
            self.velocity.y = -self.velocity.y;
        }
    }
}

/// A connecting line between two particles that are close enough.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
    pub alpha: f32,
}

/// Number of particles for a logical viewport of `width` x `height`.
#[inline]
pub fn particle_count(width: f64, height: f64) -> usize {
    let n = (width * height / AREA_PER_PARTICLE).floor();
    if n.is_finite() && n > 0.0 {
        (n as usize).min(MAX_PARTICLES)
    } else {
        0
    }
}

/// Stroke alpha for a pair at squared distance `d2`: 0.25 when touching,
/// fading linearly to 0 at the cut-off distance and clamped to 0 beyond it.
#[inline]
pub fn edge_alpha(d2: f32) -> f32 {
    (EDGE_MAX_ALPHA * (1.0 - d2 / EDGE_MAX_DISTANCE_SQ)).max(0.0)
}

#[derive(Clone, Debug, Default)]
pub struct ParticleField {
    particles: Vec<Particle>,
    bounds: Vec2,
}

impl ParticleField {
    /// Seed a fresh field for the given logical viewport.
    pub fn seed<R: Rng + ?Sized>(width: f64, height: f64, rng: &mut R) -> Self {
        let count = particle_count(width, height);
        let (w, h) = (width as f32, height as f32);
        let particles = (0..count)
            .map(|_| Particle {
                position: Vec2::new(rng.gen::<f32>() * w, rng.gen::<f32>() * h),
                velocity: Vec2::new(
                    rng.gen_range(-INITIAL_SPEED_MAX..=INITIAL_SPEED_MAX),
                    rng.gen_range(-INITIAL_SPEED_MAX..=INITIAL_SPEED_MAX),
                ),
            })
            .collect();
        Self {
            particles,
            bounds: Vec2::new(w, h),
        }
    }

    #[cfg(test)]
    pub fn from_particles(particles: Vec<Particle>, bounds: Vec2) -> Self {
        Self { particles, bounds }
    }

    #[cfg(test)]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    #[cfg(test)]
    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    pub fn scale_velocities(&mut self, factor: f32) {
        for p in &mut self.particles {
            p.velocity *= factor;
        }
    }

    #[cfg(test)]
    pub fn advance(&mut self) {
        let bounds = self.bounds;
        for p in &mut self.particles {
            p.advance(bounds);
        }
    }

    /// All pairs `i < j` closer than the cut-off, in field order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        let ps = &self.particles;
        (0..ps.len()).flat_map(move |i| {
            (i + 1..ps.len()).filter_map(move |j| {
                let d2 = ps[i].position.distance_squared(ps[j].position);
                (d2 < EDGE_MAX_DISTANCE_SQ).then(|| Edge {
                    from: i,
                    to: j,
                    alpha: edge_alpha(d2),
                })
            })
        })
    }

    /// One animation frame: clear, move and draw every node, then draw edges.
    pub fn step<S: Surface + ?Sized>(&mut self, surface: &mut S, color: Rgba) {
        surface.clear();
        let bounds = self.bounds;
        for p in &mut self.particles {
            p.advance(bounds);
            surface.fill_disc(p.position, NODE_RADIUS, color);
        }
        for e in self.edges() {
            surface.stroke_line(
                self.particles[e.from].position,
                self.particles[e.to].position,
                EDGE_WIDTH,
                color.with_alpha(e.alpha),
            );
        }
    }
}
