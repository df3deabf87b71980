// Element ids and markup hooks shared by the hero and background wiring.

// Pages
pub const PAGE_ATTR: &str = "data-page"; // set on <body>
pub const PAGE_REDIRECT: &str = "getkey";

// Particle background
pub const CANVAS_ID: &str = "particle-canvas";

// Hero
pub const LOADER_ID: &str = "hero-loader";
pub const WORDMARK_ID: &str = "wordmark";
pub const GRID_BACKDROP_ID: &str = "grid-backdrop";
pub const SHAPES_ID: &str = "floating-shapes";

// Redirect page
pub const FALLBACK_LINK_ID: &str = "redirect-fallback";

// Canvas data-* overrides (DOMStringMap keys, camelCase)
pub const DATA_PARTICLE_COUNT: &str = "particleCount";
pub const DATA_CONNECT_DISTANCE: &str = "connectDistance";
pub const DATA_SEED: &str = "seed";

// Upper bound accepted from markup; the pair pass is quadratic below the grid threshold
pub const MAX_PARTICLES_FROM_MARKUP: usize = 5000;
