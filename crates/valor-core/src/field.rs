use crate::params::FieldParams;
use crate::particle::Particle;
use crate::pointer::PointerState;
use glam::DVec2;
use rand::Rng;

/// Fixed-size particle set plus the surface bounds it wraps against.
///
/// The count is decided at construction and never changes; the web frontend
/// drops the whole field on unmount.
pub struct ParticleField {
    particles: Vec<Particle>,
    bounds: DVec2,
    params: FieldParams,
}

impl ParticleField {
    pub fn new<R: Rng + ?Sized>(params: FieldParams, bounds: DVec2, rng: &mut R) -> Self {
        let particles = (0..params.particle_count)
            .map(|_| Particle::spawn(rng, bounds, &params))
            .collect::<Vec<_>>();
        log::debug!(
            "[field] spawned {} particles over {:.0}x{:.0}",
            particles.len(),
            bounds.x,
            bounds.y
        );
        Self {
            particles,
            bounds,
            params,
        }
    }

    /// Build from an explicit particle list (scenario setups).
    pub fn from_particles(particles: Vec<Particle>, params: FieldParams, bounds: DVec2) -> Self {
        Self {
            particles,
            bounds,
            params,
        }
    }

    /// New wraparound bounds. Positions are left alone; anything now outside
    /// the buffered area wraps on its next update.
    pub fn resize(&mut self, bounds: DVec2) {
        if bounds != self.bounds {
            log::debug!(
                "[field] bounds {:.0}x{:.0} -> {:.0}x{:.0}",
                self.bounds.x,
                self.bounds.y,
                bounds.x,
                bounds.y
            );
            self.bounds = bounds;
        }
    }

    /// Physics step for every particle.
    pub fn update<R: Rng + ?Sized>(&mut self, pointer: PointerState, rng: &mut R) {
        for i in 0..self.particles.len() {
            self.update_one(i, pointer, rng);
        }
    }

    /// Physics step for a single particle; out-of-range indices are ignored.
    pub fn update_one<R: Rng + ?Sized>(&mut self, index: usize, pointer: PointerState, rng: &mut R) {
        let attractor = pointer.attractor();
        if let Some(p) = self.particles.get_mut(index) {
            p.update(attractor, self.bounds, &self.params, rng);
        }
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    #[inline]
    pub fn bounds(&self) -> DVec2 {
        self.bounds
    }

    #[inline]
    pub fn params(&self) -> &FieldParams {
        &self.params
    }
}
