use crate::prelude::*;
use rand::{ Rng, SeedableRng, rngs::StdRng };

/// an achievement card as reported by the host document:
/// where it sits, which easter egg it declares, and its hover image
#[derive(Clone, Debug)]
pub struct EasterEggCard {
    pub bounds: Bounds,
    pub kind: ParticleKind,
    pub image: Option<String>,
}

/// the easter egg engine. owns the live particle set and the card
/// currently being hovered; event handlers produce particles, the
/// per-frame tick advances and purges them
pub struct ParticleEngine {
    settings: ParticleSettings,

    /// live particles in insertion order. order only affects draw layering
    particles: Vec<Particle>,

    /// card currently treated as active, if any
    active_card: Option<EasterEggCard>,

    surface_size: Vector2,

    rng: StdRng,
}
impl ParticleEngine {
    pub fn new(settings: ParticleSettings, surface_size: Vector2) -> Self {
        Self::with_rng(settings, surface_size, StdRng::from_entropy())
    }

    /// fixed seed, for deterministic tests
    pub fn with_seed(settings: ParticleSettings, surface_size: Vector2, seed: u64) -> Self {
        Self::with_rng(settings, surface_size, StdRng::seed_from_u64(seed))
    }

    fn with_rng(settings: ParticleSettings, surface_size: Vector2, rng: StdRng) -> Self {
        Self {
            settings,
            particles: Vec::new(),
            active_card: None,
            surface_size,
            rng,
        }
    }

    /// particles currently in the live set (purged at the start of each tick)
    pub fn particle_count(&self) -> usize { self.particles.len() }
    pub fn particles(&self) -> &[Particle] { &self.particles }
    pub fn active_card(&self) -> Option<&EasterEggCard> { self.active_card.as_ref() }
    pub fn surface_size(&self) -> Vector2 { self.surface_size }

    /// helper for generating a random value from `range`
    fn init_val(range: &Range<f32>, rng: &mut StdRng) -> f32 {
        if range.start == range.end {
            range.end
        } else {
            rng.gen_range(range.clone())
        }
    }

    /// hover enter: radial burst from the card center, then the card
    /// becomes active for move-triggered trickle
    pub fn hover_enter(&mut self, card: &EasterEggCard) {
        let count = if card.kind == ParticleKind::Confetti {
            self.settings.confetti_burst_count
        } else {
            self.settings.burst_count
        };

        let center = card.bounds.center();
        for i in 0..count {
            let angle = TAU * i as f32 / count as f32;
            let distance = Self::init_val(&self.settings.burst_radius, &mut self.rng);
            let speed = Self::init_val(&self.settings.burst_speed, &mut self.rng);

            let position = center + Vector2::from_angle(angle) * distance;
            let velocity = Vector2::from_angle(angle) * speed;
            self.spawn(position, velocity, card.kind);
        }

        self.active_card = Some(card.clone());
    }

    /// hover move: probabilistic trickle of one particle somewhere
    /// within the centered fraction of the active card's bounds
    pub fn hover_move(&mut self) {
        let Some(card) = self.active_card.clone() else { return };
        if !self.rng.gen_bool(self.settings.move_emit_chance) { return }

        let area = card.bounds.size * self.settings.move_emit_area;
        let offset = Vector2::new(
            (self.rng.gen::<f32>() - 0.5) * area.x,
            (self.rng.gen::<f32>() - 0.5) * area.y,
        );

        let angle = self.rng.gen::<f32>() * TAU;
        let speed = Self::init_val(&self.settings.trickle_speed, &mut self.rng);

        let position = card.bounds.center() + offset;
        let velocity = Vector2::from_angle(angle) * speed;
        self.spawn(position, velocity, card.kind);
    }

    /// hover leave: no further trickle. already-emitted particles
    /// live out their own lifecycle unaffected
    pub fn hover_leave(&mut self) {
        self.active_card = None;
    }

    /// track the window. particles are ephemeral so nothing is preserved
    pub fn resize(&mut self, size: Vector2) {
        self.surface_size = size;
    }

    fn spawn(&mut self, position: Vector2, velocity: Vector2, kind: ParticleKind) {
        let size = Self::init_val(&kind.size_range(), &mut self.rng);
        let palette = kind.palette();
        let color = palette[self.rng.gen_range(0..palette.len())];

        let state = match kind {
            ParticleKind::Rocket => KindState::Rocket {
                trail: VecDeque::with_capacity(self.settings.rocket_trail_cap),
            },
            ParticleKind::Stars => KindState::Stars {
                sparkle: self.rng.gen::<f32>() * TAU,
            },
            ParticleKind::Confetti => KindState::Confetti {
                rotation: self.rng.gen::<f32>() * TAU,
                rotation_speed: Self::init_val(&self.settings.confetti_spin, &mut self.rng),
            },
            ParticleKind::Plain | ParticleKind::Nasa => KindState::Plain,
        };

        self.particles.push(Particle {
            position,
            velocity,
            life: self.settings.initial_life,
            size,
            color,
            state,
        });
    }

    /// one tick: purge dead particles, then advance the rest.
    /// not time corrected, life steps by a fixed amount per call
    pub fn update(&mut self) {
        self.particles.retain(Particle::is_alive);

        let settings = &self.settings;
        for p in self.particles.iter_mut() {
            p.position += p.velocity;
            p.velocity += Vector2::with_y(settings.gravity);
            p.life -= settings.life_decay;

            match &mut p.state {
                KindState::Stars { sparkle } => {
                    *sparkle += settings.stars_sparkle_step;
                    p.velocity *= settings.stars_damping;
                }
                KindState::Confetti { rotation, rotation_speed } => {
                    *rotation += *rotation_speed;
                    p.velocity = Vector2::new(p.velocity.x * settings.confetti_damping, p.velocity.y);
                }
                KindState::Rocket { trail } => {
                    if p.life > settings.rocket_trail_min_life {
                        trail.push_back(p.position);
                        while trail.len() > settings.rocket_trail_cap {
                            trail.pop_front();
                        }
                    }
                }
                KindState::Plain => {}
            }
        }
    }

    /// draw every live particle in insertion order.
    /// opacity fades linearly with remaining life
    pub fn draw(&self, list: &mut RenderableCollection) {
        for p in &self.particles {
            let opacity = p.life_fraction(self.settings.initial_life);
            let color = p.color.alpha(p.color.a * opacity);

            match &p.state {
                KindState::Stars { sparkle } => {
                    list.push(Renderable::Polygon {
                        points: sparkle_points(p.position, p.size, *sparkle),
                        color,
                    });
                }
                KindState::Confetti { rotation, .. } => {
                    list.push(Renderable::Rect {
                        center: p.position,
                        size: Vector2::new(p.size * 2.0, p.size),
                        rotation: *rotation,
                        color,
                    });
                }
                KindState::Rocket { trail } => {
                    if trail.len() >= 2 {
                        list.push(Renderable::Path {
                            points: trail.iter().copied().collect(),
                            width: p.size * 0.5,
                            color: color.alpha(color.a * 0.6),
                        });
                    }
                    list.push(Renderable::Circle {
                        center: p.position,
                        radius: p.size,
                        color,
                    });
                }
                KindState::Plain => {
                    list.push(Renderable::Circle {
                        center: p.position,
                        radius: p.size,
                        color,
                    });
                }
            }
        }
    }
}


/// five pointed sparkle, alternating outer and inner radius,
/// spun by the sparkle phase
fn sparkle_points(center: Vector2, size: f32, phase: f32) -> Vec<Vector2> {
    const POINTS: usize = 5;
    let inner = size * 0.4;

    (0..POINTS * 2)
        .map(|i| {
            let radius = if i % 2 == 0 { size } else { inner };
            let angle = phase + PI * i as f32 / POINTS as f32;
            center + Vector2::from_angle(angle) * radius
        })
        .collect()
}
