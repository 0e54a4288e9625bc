#![deny(unused_must_use)] // ensure all futures are awaited

#[macro_use] extern crate log;
pub mod engine;
pub mod site;
pub mod prelude;
pub mod interface;

/// where the json documents live, relative to the site root
pub const DATA_DIR: &str = "data";

// resource names, relative to the data dir
pub const HEADER_FILE: &str = "header.json";
pub const ABOUT_FILE: &str = "about.json";
pub const EXPERIENCE_FILE: &str = "experience.json";
pub const ACHIEVEMENTS_FILE: &str = "achievements.json";
pub const PROJECTS_FILE: &str = "projects.json";
pub const BLOGS_FILE: &str = "blogs.json";
