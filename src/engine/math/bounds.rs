use crate::prelude::*;

#[derive(Copy, Clone, Debug, Default)]
pub struct Bounds {
    pub pos: Vector2,
    pub size: Vector2,
}
impl Bounds {
    pub fn new(pos: Vector2, size: Vector2) -> Self {
        Self {
            pos,
            size,
        }
    }
    /// check if these bounds contain a point
    pub fn contains(&self, p:Vector2) -> bool {
        p.x > self.pos.x && p.x < self.pos.x + self.size.x && p.y > self.pos.y && p.y < self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vector2 {
        self.pos + self.size / 2.0
    }
}
