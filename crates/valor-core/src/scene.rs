//! Per-frame sequence of the particle background, independent of any canvas API.

use crate::color::{Rgba, TRAIL_BLACK};
use crate::connections::connections;
use crate::field::ParticleField;
use crate::params::FieldParams;
use crate::pointer::PointerState;
use glam::DVec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Drawing seam between the frame logic and a concrete 2D surface.
pub trait Painter {
    /// Cover the whole surface with a (usually translucent) colour.
    fn fill_surface(&mut self, size: DVec2, color: Rgba);
    /// Filled circle with a soft glow of `glow_blur` pixels.
    fn dot(&mut self, center: DVec2, radius: f64, color: Rgba, glow_blur: f64);
    /// Straight stroke; when `glow_blur` is set the stroke is repeated with that shadow blur.
    fn line(&mut self, from: DVec2, to: DVec2, width: f64, color: Rgba, glow_blur: Option<f64>);
}

/// Remembers the previous frame timestamp (milliseconds).
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
    now_ms: f64,
}

impl FrameClock {
    /// Record a new timestamp and return the elapsed milliseconds since the
    /// previous one (0 on the first frame, never negative).
    pub fn tick(&mut self, timestamp_ms: f64) -> f64 {
        let dt = match self.last_ms {
            Some(prev) => (timestamp_ms - prev).max(0.0),
            None => 0.0,
        };
        self.last_ms = Some(timestamp_ms);
        self.now_ms = timestamp_ms;
        dt
    }

    #[inline]
    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }
}

/// Everything the background needs between frames.
pub struct Scene {
    pub field: ParticleField,
    pub clock: FrameClock,
    rng: StdRng,
    last_dt_ms: f64,
}

impl Scene {
    pub fn new(params: FieldParams, surface: DVec2) -> Self {
        let mut rng = match params.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let field = ParticleField::new(params, surface, &mut rng);
        Self::with_field(field, rng)
    }

    pub fn with_field(field: ParticleField, rng: StdRng) -> Self {
        Self {
            field,
            clock: FrameClock::default(),
            rng,
            last_dt_ms: 0.0,
        }
    }

    /// Elapsed time between the last two frames. Physics runs per frame and
    /// does not scale by it.
    #[inline]
    pub fn last_dt_ms(&self) -> f64 {
        self.last_dt_ms
    }

    /// One frame: fade, update and draw each particle, then connect.
    pub fn render_frame<P: Painter + ?Sized>(
        &mut self,
        painter: &mut P,
        pointer: PointerState,
        surface: DVec2,
        timestamp_ms: f64,
    ) {
        self.last_dt_ms = self.clock.tick(timestamp_ms);
        self.field.resize(surface);

        let params = self.field.params().clone();
        painter.fill_surface(surface, TRAIL_BLACK.with_alpha(params.trail_alpha));

        for i in 0..self.field.len() {
            self.field.update_one(i, pointer, &mut self.rng);
            let p = &self.field.particles()[i];
            painter.dot(p.position, p.pulse_radius(), p.color, params.particle_glow_blur);
        }

        for c in connections(self.field.particles(), self.clock.now_ms(), &params) {
            let glow = c.glow.then_some(params.connection_glow_blur);
            painter.line(c.from, c.to, c.width, c.color, glow);
        }
    }
}
