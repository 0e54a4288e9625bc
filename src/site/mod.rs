mod page;
mod models;
mod markup;
mod render;
mod document;

pub use page::*;
pub use models::*;
pub use markup::*;
pub use render::*;
pub use document::*;
