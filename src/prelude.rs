// std imports
pub use std::fmt::Display;
pub use std::time::Duration;
pub use std::f32::consts::{ PI, TAU };
pub use std::path::{ Path, PathBuf };
pub use std::ops::Range;
pub use std::collections::{ HashMap, VecDeque };

// sync imports
pub use std::sync::Arc;
pub use std::sync::atomic::{ AtomicBool, Ordering::SeqCst };

// async trait
pub use async_trait::async_trait;

pub use parking_lot::RwLock;

// serde imports
pub use serde::{ Serialize, Deserialize };

// resource names
pub use crate::DATA_DIR;
pub use crate::HEADER_FILE;
pub use crate::ABOUT_FILE;
pub use crate::EXPERIENCE_FILE;
pub use crate::ACHIEVEMENTS_FILE;
pub use crate::PROJECTS_FILE;
pub use crate::BLOGS_FILE;

// general imports
pub use crate::site::*;
pub use crate::engine::*;
pub use crate::interface::*;
