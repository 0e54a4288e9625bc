use crate::prelude::*;

/// the drawing surface seam. injected into the frame driver so the
/// engine can run against a window, or headless in tests
pub trait DrawSurface: Send + Sync {
    fn size(&self) -> Vector2;

    /// track the window; previous content is not preserved
    fn resize(&mut self, size: Vector2);

    /// clear, then draw one frame of commands
    fn present(&mut self, list: &RenderableCollection) -> FolioResult;
}


/// surface that only records sizes and frame stats
pub struct HeadlessSurface {
    size: Vector2,

    pub frames_presented: u64,
    pub last_frame_len: usize,
}
impl HeadlessSurface {
    pub fn new(size: Vector2) -> Self {
        Self {
            size,
            frames_presented: 0,
            last_frame_len: 0,
        }
    }
}
impl DrawSurface for HeadlessSurface {
    fn size(&self) -> Vector2 { self.size }

    fn resize(&mut self, size: Vector2) {
        self.size = size;
    }

    fn present(&mut self, list: &RenderableCollection) -> FolioResult {
        self.frames_presented += 1;
        self.last_frame_len = list.len();
        Ok(())
    }
}
