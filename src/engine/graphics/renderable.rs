use crate::prelude::*;

/// one draw command for the presenting backend
#[derive(Clone, Debug)]
pub enum Renderable {
    /// filled circle
    Circle {
        center: Vector2,
        radius: f32,
        color: Color,
    },
    /// rectangle rotated around its center
    Rect {
        center: Vector2,
        size: Vector2,
        rotation: f32,
        color: Color,
    },
    /// filled polygon, used for the sparkle shapes
    Polygon {
        points: Vec<Vector2>,
        color: Color,
    },
    /// stroked polyline, used for the rocket trails
    Path {
        points: Vec<Vector2>,
        width: f32,
        color: Color,
    },
}

#[derive(Default)]
pub struct RenderableCollection {
    pub list: Vec<Renderable>,
}
impl RenderableCollection {
    pub fn new() -> Self { Self::default() }

    pub fn push(&mut self, r: Renderable) {
        self.list.push(r);
    }

    pub fn len(&self) -> usize { self.list.len() }
    pub fn is_empty(&self) -> bool { self.list.is_empty() }

    pub fn take(self) -> Vec<Renderable> {
        self.list
    }
}
