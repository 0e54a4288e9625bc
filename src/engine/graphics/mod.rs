mod color;
mod surface;
mod particles;
mod renderable;

pub use color::*;
pub use surface::*;
pub use particles::*;
pub use renderable::*;
