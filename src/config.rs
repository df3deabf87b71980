use valor_core::FieldParams;

/// Raw `data-*` values read from the canvas element.
#[derive(Clone, Debug, Default)]
pub struct MarkupOverrides {
    pub particle_count: Option<String>,
    pub connect_distance: Option<String>,
    pub seed: Option<String>,
}

/// Apply markup overrides on top of the defaults. Anything unparseable, or a
/// combination that fails validation, is logged and the defaults win.
pub fn field_params(overrides: &MarkupOverrides, max_particles: usize) -> FieldParams {
    let defaults = FieldParams::default();
    let mut params = defaults.clone();

    if let Some(raw) = overrides.particle_count.as_deref() {
        match raw.trim().parse::<usize>() {
            Ok(n) if n <= max_particles => params.particle_count = n,
            Ok(n) => log::warn!("[config] particle count {} above {}; ignored", n, max_particles),
            Err(e) => log::warn!("[config] bad particle count {:?}: {}", raw, e),
        }
    }
    if let Some(raw) = overrides.connect_distance.as_deref() {
        match raw.trim().parse::<f64>() {
            Ok(d) => params.connect_distance = d,
            Err(e) => log::warn!("[config] bad connect distance {:?}: {}", raw, e),
        }
    }
    if let Some(raw) = overrides.seed.as_deref() {
        match raw.trim().parse::<u64>() {
            Ok(s) => params.seed = Some(s),
            Err(e) => log::warn!("[config] bad seed {:?}: {}", raw, e),
        }
    }

    match params.validate() {
        Ok(()) => params,
        Err(e) => {
            log::warn!("[config] {}; using defaults", e);
            defaults
        }
    }
}
