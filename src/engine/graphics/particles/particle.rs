use crate::prelude::*;

/// which easter egg a card declares. controls palette, size range
/// and draw routine for every particle of an interaction
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ParticleKind {
    #[default]
    Plain,
    Nasa,
    Rocket,
    Stars,
    Confetti,
}
impl ParticleKind {
    /// parse a card's declared key. unknown keys degrade to plain
    /// rather than erroring, visuals are not correctness critical
    pub fn from_key(key: &str) -> Self {
        match key {
            "nasa" => Self::Nasa,
            "rocket" => Self::Rocket,
            "stars" => Self::Stars,
            "confetti" => Self::Confetti,
            _ => Self::Plain,
        }
    }

    pub fn palette(&self) -> &'static [Color] {
        match self {
            Self::Plain => &[ Color::WHITE, Color::SILVER ],
            Self::Nasa => &[ Color::NAVY, Color::SKY, Color::WHITE ],
            Self::Rocket => &[ Color::ORANGE_RED, Color::AMBER ],
            Self::Stars => &[ Color::GOLD, Color::WHITE ],
            Self::Confetti => &[ Color::CRIMSON, Color::GOLD, Color::SKY, Color::EMERALD, Color::VIOLET ],
        }
    }

    pub fn size_range(&self) -> Range<f32> {
        match self {
            Self::Plain => 2.0..5.0,
            Self::Nasa => 2.0..6.0,
            Self::Rocket => 3.0..6.0,
            Self::Stars => 3.0..8.0,
            Self::Confetti => 3.0..7.0,
        }
    }
}


/// kind specific transient state, dispatched over by update and draw
#[derive(Clone, Debug)]
pub enum KindState {
    /// plain and nasa particles are bare circles with no extra physics
    Plain,
    Rocket {
        /// recent positions, oldest first
        trail: VecDeque<Vector2>,
    },
    Stars {
        sparkle: f32,
    },
    Confetti {
        rotation: f32,
        rotation_speed: f32,
    },
}


#[derive(Clone, Debug)]
pub struct Particle {
    pub position: Vector2,
    pub velocity: Vector2,

    /// counts down from the initial value each tick.
    /// once <= 0 the particle is purged and never reused
    pub life: f32,

    pub size: f32,
    pub color: Color,
    pub state: KindState,
}
impl Particle {
    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }

    /// remaining life fraction, drives the linear opacity fade
    pub fn life_fraction(&self, initial_life: f32) -> f32 {
        (self.life / initial_life).clamp(0.0, 1.0)
    }
}
