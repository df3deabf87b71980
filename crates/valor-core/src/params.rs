use crate::constants::*;
use thiserror::Error;

/// Tunables for the particle background.
///
/// `Default` reproduces the look the landing page ships with; the web frontend
/// may override a few fields from markup before the field is built.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldParams {
    pub particle_count: usize,
    pub wrap_buffer: f64,
    pub drift_span: f64,
    pub attraction_radius: f64,
    pub attraction_force: f64,
    pub return_speed: f64,
    pub velocity_change_probability: f64,
    pub connect_distance: f64,
    pub connection_max_opacity: f64,
    pub connection_glow_threshold: f64,
    pub connection_glow_blur: f64,
    pub particle_glow_blur: f64,
    pub trail_alpha: f64,
    /// Fixed RNG seed; `None` draws one from the platform.
    pub seed: Option<u64>,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            particle_count: PARTICLE_COUNT,
            wrap_buffer: WRAP_BUFFER,
            drift_span: DRIFT_SPAN,
            attraction_radius: ATTRACTION_RADIUS,
            attraction_force: ATTRACTION_FORCE,
            return_speed: RETURN_SPEED,
            velocity_change_probability: VELOCITY_CHANGE_PROBABILITY,
            connect_distance: CONNECT_DISTANCE,
            connection_max_opacity: CONNECTION_MAX_OPACITY,
            connection_glow_threshold: CONNECTION_GLOW_THRESHOLD,
            connection_glow_blur: CONNECTION_GLOW_BLUR,
            particle_glow_blur: PARTICLE_GLOW_BLUR,
            trail_alpha: TRAIL_ALPHA,
            seed: None,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ParamsError {
    #[error("particle count must be at least 1")]
    NoParticles,
    #[error("{name} must be a positive finite number, got {value}")]
    NotPositive { name: &'static str, value: f64 },
    #[error("{name} must be a non-negative finite number, got {value}")]
    Negative { name: &'static str, value: f64 },
    #[error("{name} must lie in [0, 1], got {value}")]
    NotUnit { name: &'static str, value: f64 },
}

impl FieldParams {
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.particle_count == 0 {
            return Err(ParamsError::NoParticles);
        }
        for (name, value) in [
            ("connect_distance", self.connect_distance),
            ("attraction_radius", self.attraction_radius),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ParamsError::NotPositive { name, value });
            }
        }
        for (name, value) in [
            ("wrap_buffer", self.wrap_buffer),
            ("drift_span", self.drift_span),
            ("attraction_force", self.attraction_force),
            ("connection_glow_blur", self.connection_glow_blur),
            ("particle_glow_blur", self.particle_glow_blur),
        ] {
            // zero switches the term off
            if !(value.is_finite() && value >= 0.0) {
                return Err(ParamsError::Negative { name, value });
            }
        }
        for (name, value) in [
            ("return_speed", self.return_speed),
            ("velocity_change_probability", self.velocity_change_probability),
            ("connection_max_opacity", self.connection_max_opacity),
            ("connection_glow_threshold", self.connection_glow_threshold),
            ("trail_alpha", self.trail_alpha),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ParamsError::NotUnit { name, value });
            }
        }
        Ok(())
    }
}
