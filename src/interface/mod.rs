mod popup;
mod cursor;
mod dropdown;

pub use popup::*;
pub use cursor::*;
pub use dropdown::*;
