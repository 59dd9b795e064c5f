//! Decides when new enemies and power-ups enter the field.

use rand::Rng;

use crate::config::{
    Config, ENEMY_MAX_ROTATION_SPEED, ENEMY_MAX_SPEED, ENEMY_MIN_SPEED, ENEMY_SPEED_JITTER,
    ENEMY_SPEED_LEVEL_RANGE,
};
use crate::entities::{Enemy, EnemyKind, PowerUp, PowerUpKind, Vec2, map_range};

/// Counts ticks between enemy spawns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Spawner {
    pub counter: u32,
}

impl Spawner {
    /// Advances one tick. Returns true, and restarts the count, once
    /// `spawn_rate` ticks have passed.
    pub fn tick(&mut self, spawn_rate: u32) -> bool {
        self.counter += 1;
        if self.counter >= spawn_rate {
            self.counter = 0;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.counter = 0;
    }
}

/// Base falling speed for `level` before jitter.
pub fn enemy_base_speed(level: u32) -> f32 {
    map_range(
        level as f32,
        ENEMY_SPEED_LEVEL_RANGE,
        (ENEMY_MIN_SPEED, ENEMY_MAX_SPEED),
    )
}

/// Creates an enemy just above the visible field so it slides in cleanly.
pub fn spawn_enemy<R: Rng>(rng: &mut R, config: &Config, level: u32) -> Enemy {
    let (min_size, max_size) = config.enemy_size_range;
    let kind = EnemyKind::from_index(rng.random_range(0..EnemyKind::ALL.len()));
    let x = rng.random_range(0.0..config.field_width);
    let size = rng.random_range(min_size..=max_size);
    let speed = enemy_base_speed(level)
        + rng.random_range(-ENEMY_SPEED_JITTER..=ENEMY_SPEED_JITTER);
    let rotation_speed = rng.random_range(-ENEMY_MAX_ROTATION_SPEED..=ENEMY_MAX_ROTATION_SPEED);

    Enemy::new(Vec2::new(x, -size), size, kind, speed, rotation_speed)
}

/// Rolls the per-tick power-up chance; on success drops one at the top edge.
pub fn maybe_spawn_power_up<R: Rng>(rng: &mut R, config: &Config) -> Option<PowerUp> {
    if !rng.random_bool(config.power_up_chance) {
        return None;
    }

    let x = rng.random_range(0.0..config.field_width);
    let kind = PowerUpKind::from_index(rng.random_range(0..PowerUpKind::ALL.len()));
    Some(PowerUp::new(
        Vec2::new(x, 0.0),
        kind,
        config.power_up_size,
        config.power_up_speed,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_spawner_fires_every_rate_ticks() {
        let mut spawner = Spawner::default();
        let fired: Vec<bool> = (0..6).map(|_| spawner.tick(3)).collect();
        assert_eq!(fired, vec![false, false, true, false, false, true]);
        assert_eq!(spawner.counter, 0);
    }

    #[test]
    fn test_spawned_enemy_stays_within_ranges() {
        let config = Config::default();
        let mut rng = StdRng::seed_from_u64(11);
        for level in 1..=10 {
            let enemy = spawn_enemy(&mut rng, &config, level);
            let base = enemy_base_speed(level);
            assert!((20.0..=40.0).contains(&enemy.size));
            assert!((0.0..800.0).contains(&enemy.pos.x));
            assert_eq!(enemy.pos.y, -enemy.size);
            assert!(enemy.speed >= base - 1.0 && enemy.speed <= base + 1.0);
            assert!(enemy.rotation_speed.abs() <= 0.05);
        }
    }

    #[test]
    fn test_enemy_speed_scales_with_level() {
        assert_eq!(enemy_base_speed(1), 2.0);
        assert_eq!(enemy_base_speed(10), 5.0);
        assert!(enemy_base_speed(4) > enemy_base_speed(3));
    }

    #[test]
    fn test_power_up_never_spawns_at_zero_chance() {
        let config = Config {
            power_up_chance: 0.0,
            ..Config::default()
        };
        let mut rng = StdRng::seed_from_u64(5);
        assert!((0..1000).all(|_| maybe_spawn_power_up(&mut rng, &config).is_none()));
    }

    #[test]
    fn test_power_up_always_spawns_at_full_chance() {
        let config = Config {
            power_up_chance: 1.0,
            ..Config::default()
        };
        let mut rng = StdRng::seed_from_u64(5);
        let power_up = maybe_spawn_power_up(&mut rng, &config).expect("certain spawn");
        assert_eq!(power_up.pos.y, 0.0);
        assert_eq!(power_up.size, 20.0);
        assert_eq!(power_up.speed, 2.0);
    }
}
