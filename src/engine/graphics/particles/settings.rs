use crate::prelude::*;

/// tuning knobs for the easter egg engine.
/// defaults reproduce the original visuals
#[derive(Clone, Debug)]
pub struct ParticleSettings {
    /// starting life value for every particle
    pub initial_life: f32,

    /// life removed per tick (not time corrected)
    pub life_decay: f32,

    /// downward velocity bias per tick
    pub gravity: f32,

    /// burst size on hover enter
    pub burst_count: usize,

    /// confetti gets a bigger burst
    pub confetti_burst_count: usize,

    /// chance of emitting one extra particle per hover move
    pub move_emit_chance: f64,

    /// fraction of the card bounds move emission samples from, centered
    pub move_emit_area: f32,

    /// radial offset range for burst placement
    pub burst_radius: Range<f32>,

    /// initial outward speed range for burst particles
    pub burst_speed: Range<f32>,

    /// initial speed range for move-emitted particles
    pub trickle_speed: Range<f32>,

    /// per-tick velocity damping for stars
    pub stars_damping: f32,

    /// sparkle phase advance per tick
    pub stars_sparkle_step: f32,

    /// per-tick horizontal velocity damping for confetti
    pub confetti_damping: f32,

    /// spin speed range for confetti
    pub confetti_spin: Range<f32>,

    /// trail points kept per rocket
    pub rocket_trail_cap: usize,

    /// rockets only grow their trail above this life value
    pub rocket_trail_min_life: f32,
}

impl Default for ParticleSettings {
    fn default() -> Self {
        Self {
            initial_life: 120.0,
            life_decay: 1.5,
            gravity: 0.15,

            burst_count: 25,
            confetti_burst_count: 40,
            move_emit_chance: 0.3,
            move_emit_area: 0.8,

            burst_radius: 4.0..28.0,
            burst_speed: 1.0..4.0,
            trickle_speed: 0.5..2.0,

            stars_damping: 0.98,
            stars_sparkle_step: 0.15,

            confetti_damping: 0.99,
            confetti_spin: -0.2..0.2,

            rocket_trail_cap: 8,
            rocket_trail_min_life: 80.0,
        }
    }
}
