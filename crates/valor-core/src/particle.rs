use crate::color::{PaletteIndex, Rgba};
use crate::constants::*;
use crate::params::FieldParams;
use glam::DVec2;
use rand::Rng;
use std::f64::consts::TAU;

/// A single floating dot.
///
/// `origin` is fixed at spawn and acts as the anchor for the spring-return
/// term; everything else the physics touches is `position`, `velocity` and
/// `pulse_phase`.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: DVec2,
    pub origin: DVec2,
    pub size: f64,
    pub velocity: DVec2,
    pub color: Rgba,
    pub pulse_phase: f64,
    pub pulse_speed: f64,
    pub connection_color: PaletteIndex,
    pub connection_width: f64,
}

impl Particle {
    /// Spawn at a uniformly random point of a `bounds`-sized surface.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, bounds: DVec2, params: &FieldParams) -> Self {
        let position = DVec2::new(
            rng.gen::<f64>() * bounds.x.max(0.0),
            rng.gen::<f64>() * bounds.y.max(0.0),
        );
        Self {
            position,
            origin: position,
            size: SIZE_MIN + rng.gen::<f64>() * SIZE_SPAN,
            velocity: random_velocity(rng, params.drift_span),
            color: Rgba::random_particle(rng),
            pulse_phase: rng.gen_range(0.0..TAU),
            pulse_speed: PULSE_SPEED_MIN + rng.gen::<f64>() * PULSE_SPEED_SPAN,
            connection_color: PaletteIndex::random(rng),
            connection_width: CONNECTION_WIDTH_MIN + rng.gen::<f64>() * CONNECTION_WIDTH_SPAN,
        }
    }

    /// One frame of motion. The order of the terms is part of the look:
    /// drift, pulse, pointer pull, spring back, wrap, then maybe a new heading.
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        attractor: Option<DVec2>,
        bounds: DVec2,
        params: &FieldParams,
        rng: &mut R,
    ) {
        self.position += self.velocity;
        self.advance_pulse();
        if let Some(target) = attractor {
            self.position += attraction(
                self.position,
                target,
                params.attraction_radius,
                params.attraction_force,
            );
        }
        self.position += (self.origin - self.position) * params.return_speed;
        self.position = wrap(self.position, bounds, params.wrap_buffer);
        if rng.gen::<f64>() < params.velocity_change_probability {
            self.velocity = random_velocity(rng, params.drift_span);
        }
    }

    #[inline]
    pub fn advance_pulse(&mut self) {
        self.pulse_phase += self.pulse_speed;
        if self.pulse_phase >= TAU {
            self.pulse_phase = 0.0;
        }
    }

    /// Radius the dot is drawn with this frame.
    #[inline]
    pub fn pulse_radius(&self) -> f64 {
        (self.size + self.pulse_phase.sin() * PULSE_SIZE_AMPLITUDE).max(0.0)
    }
}

/// Displacement towards `target` with linear falloff; zero at or beyond `radius`.
pub fn attraction(position: DVec2, target: DVec2, radius: f64, force: f64) -> DVec2 {
    let delta = target - position;
    let distance = delta.length();
    if distance >= radius {
        return DVec2::ZERO;
    }
    let angle = delta.y.atan2(delta.x);
    let falloff = (radius - distance) / radius;
    DVec2::new(angle.cos(), angle.sin()) * force * falloff
}

/// Toroidal wrap with a margin: leaving one buffered edge teleports to the other.
pub fn wrap(position: DVec2, bounds: DVec2, buffer: f64) -> DVec2 {
    DVec2::new(
        wrap_axis(position.x, bounds.x, buffer),
        wrap_axis(position.y, bounds.y, buffer),
    )
}

#[inline]
fn wrap_axis(v: f64, extent: f64, buffer: f64) -> f64 {
    if v > extent + buffer {
        -buffer
    } else if v < -buffer {
        extent + buffer
    } else {
        v
    }
}

fn random_velocity<R: Rng + ?Sized>(rng: &mut R, span: f64) -> DVec2 {
    DVec2::new(
        (rng.gen::<f64>() - 0.5) * span,
        (rng.gen::<f64>() - 0.5) * span,
    )
}
