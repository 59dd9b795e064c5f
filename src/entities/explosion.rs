use rand::Rng;

use super::vector::{Vec2, map_range};

/// One spark of an explosion, positioned relative to the explosion centre.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub offset: Vec2,
    pub velocity: Vec2,
    pub size: f32,
}

impl Particle {
    pub fn new(velocity: Vec2, size: f32) -> Self {
        Self {
            offset: Vec2::default(),
            velocity,
            size,
        }
    }

    pub fn update(&mut self) {
        self.offset += self.velocity;
    }
}

/// Cosmetic burst left where an enemy died.
#[derive(Debug, Clone, PartialEq)]
pub struct Explosion {
    pub pos: Vec2,
    /// Size of the enemy that exploded; scales the particle count and flash.
    pub size: f32,
    pub lifespan: u32,
    pub max_lifespan: u32,
    pub particles: Vec<Particle>,
}

impl Explosion {
    /// Scatters `floor(size)` particles with random velocities in [-3, 3].
    pub fn new<R: Rng>(pos: Vec2, size: f32, lifespan: u32, rng: &mut R) -> Self {
        let count = size.max(0.0).floor() as usize;
        let particles = (0..count)
            .map(|_| {
                Particle::new(
                    Vec2::new(rng.random_range(-3.0..3.0), rng.random_range(-3.0..3.0)),
                    rng.random_range(2.0..6.0),
                )
            })
            .collect();

        Self {
            pos,
            size,
            lifespan,
            max_lifespan: lifespan,
            particles,
        }
    }

    pub fn update(&mut self) {
        self.lifespan = self.lifespan.saturating_sub(1);
        for particle in &mut self.particles {
            particle.update();
        }
    }

    pub fn is_finished(&self) -> bool {
        self.lifespan == 0
    }

    /// Particle opacity, 255 when fresh fading to 0.
    pub fn alpha(&self) -> f32 {
        self.fade(255.0)
    }

    /// Diameter of the central flash, shrinking from `size` to 0.
    pub fn flash_size(&self) -> f32 {
        self.fade(self.size)
    }

    fn fade(&self, full: f32) -> f32 {
        map_range(
            self.lifespan as f32,
            (self.max_lifespan as f32, 0.0),
            (full, 0.0),
        )
    }
}
