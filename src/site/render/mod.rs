mod about;
mod header;
mod projects;
mod experience;
mod achievements;

pub use about::*;
pub use header::*;
pub use projects::*;
pub use experience::*;
pub use achievements::*;

use crate::prelude::*;

/// one portfolio section: loads its json document and fully replaces
/// its container's markup from it, preserving array order. sections
/// are independent of each other and run concurrently
#[async_trait]
pub trait SectionRenderer: Send + Sync {
    /// the json resource this section consumes, relative to the data dir
    fn resource(&self) -> &'static str;

    async fn render(&self, data_dir: &Path, document: &SharedDocument) -> FolioResult;
}
