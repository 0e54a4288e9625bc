mod engine;
mod particle;
mod settings;
mod animation_loop;

pub use engine::*;
pub use particle::*;
pub use settings::*;
pub use animation_loop::*;
