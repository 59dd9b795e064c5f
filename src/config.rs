//! Tunable game constants.
//!
//! Every gameplay number lives here as a named constant. [`Config`] bundles
//! them into a value that can be overridden per run (tests shrink the star
//! field or stretch the shield, for example) and validated up front.

use crate::error::ConfigError;

// ── Field ─────────────────────────────────────────────────────────────────────

/// Logical width of the play field.
pub const FIELD_WIDTH: f32 = 800.0;
/// Logical height of the play field.
pub const FIELD_HEIGHT: f32 = 600.0;
/// Number of background stars, fixed at creation.
pub const STAR_COUNT: usize = 150;

// ── Run state ─────────────────────────────────────────────────────────────────

pub const STARTING_LIVES: u32 = 3;
pub const MAX_LIVES: u32 = 5;
/// Points needed per level before the next level-up (`level * LEVEL_UP_SCORE`).
pub const LEVEL_UP_SCORE: u32 = 500;
/// Ticks the shield stays up after a pickup (5 seconds at 60 Hz).
pub const SHIELD_DURATION: u32 = 300;

// ── Spawning ──────────────────────────────────────────────────────────────────

/// Ticks between enemy spawns on level 1.
pub const BASE_SPAWN_RATE: u32 = 120;
/// Spawn interval never drops below this many ticks.
pub const MIN_SPAWN_RATE: u32 = 30;
/// Spawn interval shrinks by this much per level.
pub const SPAWN_RATE_STEP: u32 = 10;
/// Per-tick probability that a power-up appears.
pub const POWER_UP_CHANCE: f64 = 0.01;

pub const ENEMY_MIN_SIZE: f32 = 20.0;
pub const ENEMY_MAX_SIZE: f32 = 40.0;
/// Level range mapped onto [`ENEMY_MIN_SPEED`, `ENEMY_MAX_SPEED`].
pub const ENEMY_SPEED_LEVEL_RANGE: (f32, f32) = (1.0, 10.0);
pub const ENEMY_MIN_SPEED: f32 = 2.0;
pub const ENEMY_MAX_SPEED: f32 = 5.0;
/// Uniform jitter added to the level speed, in both directions.
pub const ENEMY_SPEED_JITTER: f32 = 1.0;
pub const ENEMY_MAX_ROTATION_SPEED: f32 = 0.05;

// ── Entities ──────────────────────────────────────────────────────────────────

pub const PLAYER_SIZE: f32 = 30.0;
/// Ticks between player shots.
pub const PLAYER_FIRE_DELAY: u32 = 15;
/// Player rests this far above the bottom edge when created.
pub const PLAYER_START_OFFSET: f32 = 100.0;
/// Lowest the player may go, measured from the bottom edge.
pub const PLAYER_BOTTOM_MARGIN: f32 = 50.0;

pub const BULLET_SPEED: f32 = 10.0;
pub const BULLET_SIZE: f32 = 5.0;

pub const POWER_UP_SIZE: f32 = 20.0;
pub const POWER_UP_SPEED: f32 = 2.0;
pub const POWER_UP_ROTATION_SPEED: f32 = 0.05;

/// Ticks an explosion stays on screen.
pub const EXPLOSION_LIFESPAN: u32 = 30;

// ── Scoring & collisions ──────────────────────────────────────────────────────

/// Points per bullet kill, multiplied by the level.
pub const ENEMY_KILL_SCORE: u32 = 10;
/// Points per enemy wiped by the clear-enemies power-up, multiplied by the level.
pub const CLEAR_KILL_SCORE: u32 = 5;
/// Shrinks the enemy body radius when it touches the player.
pub const ENEMY_HIT_FACTOR: f32 = 0.8;

/// Explosion cue pitch range in Hz.
pub const EXPLOSION_FREQUENCY_RANGE: (f32, f32) = (150.0, 300.0);

/// Every tunable the simulation reads, defaulting to the constants above.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub field_width: f32,
    pub field_height: f32,
    pub star_count: usize,
    pub starting_lives: u32,
    pub max_lives: u32,
    pub level_up_score: u32,
    pub shield_duration: u32,
    pub base_spawn_rate: u32,
    pub min_spawn_rate: u32,
    pub spawn_rate_step: u32,
    pub power_up_chance: f64,
    pub enemy_size_range: (f32, f32),
    pub player_size: f32,
    pub player_fire_delay: u32,
    pub bullet_speed: f32,
    pub bullet_size: f32,
    pub power_up_size: f32,
    pub power_up_speed: f32,
    pub explosion_lifespan: u32,
    pub enemy_kill_score: u32,
    pub clear_kill_score: u32,
    pub enemy_hit_factor: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            star_count: STAR_COUNT,
            starting_lives: STARTING_LIVES,
            max_lives: MAX_LIVES,
            level_up_score: LEVEL_UP_SCORE,
            shield_duration: SHIELD_DURATION,
            base_spawn_rate: BASE_SPAWN_RATE,
            min_spawn_rate: MIN_SPAWN_RATE,
            spawn_rate_step: SPAWN_RATE_STEP,
            power_up_chance: POWER_UP_CHANCE,
            enemy_size_range: (ENEMY_MIN_SIZE, ENEMY_MAX_SIZE),
            player_size: PLAYER_SIZE,
            player_fire_delay: PLAYER_FIRE_DELAY,
            bullet_speed: BULLET_SPEED,
            bullet_size: BULLET_SIZE,
            power_up_size: POWER_UP_SIZE,
            power_up_speed: POWER_UP_SPEED,
            explosion_lifespan: EXPLOSION_LIFESPAN,
            enemy_kill_score: ENEMY_KILL_SCORE,
            clear_kill_score: CLEAR_KILL_SCORE,
            enemy_hit_factor: ENEMY_HIT_FACTOR,
        }
    }
}

impl Config {
    /// Rejects settings the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("field_width", self.field_width)?;
        positive("field_height", self.field_height)?;
        positive("player_size", self.player_size)?;
        positive("bullet_speed", self.bullet_speed)?;
        positive("bullet_size", self.bullet_size)?;
        positive("power_up_size", self.power_up_size)?;
        positive("power_up_speed", self.power_up_speed)?;
        positive("enemy_hit_factor", self.enemy_hit_factor)?;

        nonzero("shield_duration", self.shield_duration)?;
        nonzero("base_spawn_rate", self.base_spawn_rate)?;
        nonzero("min_spawn_rate", self.min_spawn_rate)?;
        nonzero("level_up_score", self.level_up_score)?;
        nonzero("explosion_lifespan", self.explosion_lifespan)?;

        if self.min_spawn_rate > self.base_spawn_rate {
            return Err(ConfigError::SpawnRateFloorAboveBase {
                floor: self.min_spawn_rate,
                base: self.base_spawn_rate,
            });
        }

        if !(0.0..=1.0).contains(&self.power_up_chance) {
            return Err(ConfigError::ProbabilityOutOfRange {
                field: "power_up_chance",
                value: self.power_up_chance,
            });
        }

        if self.starting_lives == 0 || self.starting_lives > self.max_lives {
            return Err(ConfigError::LivesOutOfRange {
                starting: self.starting_lives,
                max: self.max_lives,
            });
        }

        let (min_size, max_size) = self.enemy_size_range;
        positive("enemy_size_range.0", min_size)?;
        if min_size > max_size {
            return Err(ConfigError::InvertedRange {
                field: "enemy_size_range",
                min: min_size,
                max: max_size,
            });
        }

        Ok(())
    }

    /// Spawn interval while playing `level`: level 1 runs at the base rate and
    /// every level after it is `step` ticks faster, down to the floor.
    pub fn spawn_rate_for_level(&self, level: u32) -> u32 {
        let steps = level.saturating_sub(1);
        self.base_spawn_rate
            .saturating_sub(steps.saturating_mul(self.spawn_rate_step))
            .max(self.min_spawn_rate)
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

fn nonzero(field: &'static str, value: u32) -> Result<(), ConfigError> {
    if value == 0 {
        Err(ConfigError::Zero { field })
    } else {
        Ok(())
    }
}
