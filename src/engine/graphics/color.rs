#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}
#[allow(dead_code)]
impl Color {
    #[inline]
    pub const fn new(r:f32, g:f32, b:f32, a:f32) -> Self {Self{r, g, b, a}}

    pub fn alpha(mut self, a:f32) -> Color {
        self.a = a;
        self
    }

    pub fn clamp(self) -> Self {
        Self::new(
            self.r.clamp(0.0, 1.0),
            self.g.clamp(0.0, 1.0),
            self.b.clamp(0.0, 1.0),
            self.a.clamp(0.0, 1.0),
        )
    }

    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);
    pub const SILVER: Color = Color::new(0.75, 0.75, 0.78, 1.0);
    pub const GOLD: Color = Color::new(1.0, 0.84, 0.25, 1.0);
    pub const AMBER: Color = Color::new(1.0, 0.65, 0.1, 1.0);
    pub const ORANGE_RED: Color = Color::new(1.0, 0.35, 0.15, 1.0);
    pub const SKY: Color = Color::new(0.45, 0.75, 1.0, 1.0);
    pub const NAVY: Color = Color::new(0.1, 0.2, 0.5, 1.0);
    pub const CRIMSON: Color = Color::new(0.9, 0.15, 0.3, 1.0);
    pub const EMERALD: Color = Color::new(0.15, 0.8, 0.45, 1.0);
    pub const VIOLET: Color = Color::new(0.6, 0.3, 0.9, 1.0);
}
