#[derive(Copy, Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
#[serde(from = "[f32;2]", into = "[f32;2]")]
pub struct Vector2(cgmath::Vector2<f32>);
impl Vector2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0);

    pub const fn new(x: f32, y: f32) -> Self { Self(cgmath::Vector2 { x, y }) }

    pub const fn x(&self) -> f32 { self.0.x }
    pub const fn y(&self) -> f32 { self.0.y }

    pub const fn with_x(x:f32) -> Self { Self::new(x, 0.0) }
    pub const fn with_y(y:f32) -> Self { Self::new(0.0, y) }

    pub fn from_angle(a:f32) -> Self {
        Self::new(a.cos(), a.sin())
    }

    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }
    pub fn length_squared(self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    pub fn normalize(self) -> Self {
        let magnitude = self.length();
        if magnitude == 0.0 { self }
        else { self / magnitude }
    }

    pub fn distance(&self, p2: Self) -> f32 {
        self.distance_squared(p2).sqrt()
    }
    pub fn distance_squared(&self, p2: Self) -> f32 {
        (self.x - p2.x).powi(2) + (self.y - p2.y).powi(2)
    }
}

impl std::ops::Deref for Vector2 {
    type Target = cgmath::Vector2<f32>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
impl std::ops::DerefMut for Vector2 {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<[f32;2]> for Vector2 {
    fn from(value: [f32;2]) -> Self {
        Self::new(value[0], value[1])
    }
}
impl From<Vector2> for [f32;2] {
    fn from(value: Vector2) -> Self {
        [value.x, value.y]
    }
}

impl Default for Vector2 {
    fn default() -> Self { Self::new(0.0, 0.0) }
}

impl std::fmt::Display for Vector2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl std::ops::Add for Vector2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}
impl std::ops::AddAssign for Vector2 {
    fn add_assign(&mut self, rhs: Self) {
        self.0.x += rhs.x;
        self.0.y += rhs.y;
    }
}
impl std::ops::Sub for Vector2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}
impl std::ops::SubAssign for Vector2 {
    fn sub_assign(&mut self, rhs: Self) {
        self.0.x -= rhs.x;
        self.0.y -= rhs.y;
    }
}
impl std::ops::Mul<f32> for Vector2 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs)
    }
}
impl std::ops::MulAssign<f32> for Vector2 {
    fn mul_assign(&mut self, rhs: f32) {
        self.0.x *= rhs;
        self.0.y *= rhs;
    }
}
impl std::ops::Div<f32> for Vector2 {
    type Output = Self;
    fn div(self, rhs: f32) -> Self::Output {
        Self::new(self.x / rhs, self.y / rhs)
    }
}
impl std::ops::Neg for Vector2 {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y)
    }
}
