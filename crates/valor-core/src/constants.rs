// Particle background tuning shared by the core and the web frontend.

// Field
pub const PARTICLE_COUNT: usize = 200;
pub const WRAP_BUFFER: f64 = 50.0; // how far past an edge a particle may drift before wrapping

// Spawn ranges
pub const SIZE_MIN: f64 = 0.5;
pub const SIZE_SPAN: f64 = 2.0;
pub const DRIFT_SPAN: f64 = 0.5; // velocity components are uniform in [-span/2, span/2)
pub const PULSE_SPEED_MIN: f64 = 0.01;
pub const PULSE_SPEED_SPAN: f64 = 0.05;
pub const CONNECTION_WIDTH_MIN: f64 = 0.2;
pub const CONNECTION_WIDTH_SPAN: f64 = 0.8;

// Physics
pub const ATTRACTION_RADIUS: f64 = 120.0;
pub const ATTRACTION_FORCE: f64 = 0.5;
pub const RETURN_SPEED: f64 = 0.01; // fraction of the anchor offset recovered per frame
pub const VELOCITY_CHANGE_PROBABILITY: f64 = 0.01;

// Dot rendering
pub const PULSE_SIZE_AMPLITUDE: f64 = 0.5;
pub const PARTICLE_GLOW_BLUR: f64 = 5.0;

// Connections
pub const CONNECT_DISTANCE: f64 = 100.0;
pub const CONNECTION_MAX_OPACITY: f64 = 0.8;
pub const CONNECTION_GLOW_THRESHOLD: f64 = 0.5;
pub const CONNECTION_GLOW_BLUR: f64 = 3.0;
pub const LINE_PULSE_TIME_SCALE: f64 = 0.001; // per millisecond of frame time
pub const GRID_INDEX_MIN_PARTICLES: usize = 400; // below this the direct pair pass is cheaper

// Trail
pub const TRAIL_ALPHA: f64 = 0.1;
