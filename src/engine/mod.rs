mod data;
mod math;
mod errors;
mod graphics;

pub use data::*;
pub use math::*;
pub use errors::*;
pub use graphics::*;
