pub mod color;
pub mod connections;
pub mod constants;
pub mod field;
pub mod hero;
pub mod params;
pub mod particle;
pub mod pointer;
pub mod scene;

pub use color::*;
pub use connections::*;
pub use field::*;
pub use params::*;
pub use particle::*;
pub use pointer::*;
pub use scene::*;
