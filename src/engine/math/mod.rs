mod bounds;
mod vector2;

pub use bounds::*;
pub use vector2::*;
