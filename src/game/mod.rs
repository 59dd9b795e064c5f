//! The simulation: run state, the per-tick update, and screen transitions.

mod collision;
mod effects;
mod events;
mod shield;
mod spawner;

pub use collision::{bullet_hits_enemy, circles_touch, enemy_hits_player, power_up_hits_player};
pub use events::GameEvent;
pub use shield::Shield;
pub use spawner::{Spawner, enemy_base_speed, maybe_spawn_power_up, spawn_enemy};

use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::{debug, info};

use crate::config::{Config, EXPLOSION_FREQUENCY_RANGE};
use crate::entities::{
    Bullet, Enemy, Explosion, GameState, Player, PowerUp, Star, Vec2, create_star_field,
};
use crate::error::ConfigError;

/// Score, lives, level and pacing for the current run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunStats {
    pub score: u32,
    pub lives: u32,
    pub level: u32,
    /// Ticks between enemy spawns.
    pub enemy_spawn_rate: u32,
}

impl RunStats {
    fn new(config: &Config) -> Self {
        Self {
            score: 0,
            lives: config.starting_lives,
            level: 1,
            enemy_spawn_rate: config.spawn_rate_for_level(1),
        }
    }
}

/// Owns every live entity and all run state. One call to [`Game::tick`]
/// advances the world by exactly one fixed step.
pub struct Game {
    config: Config,
    rng: StdRng,
    state: GameState,
    player: Player,
    bullets: Vec<Bullet>,
    enemies: Vec<Enemy>,
    power_ups: Vec<PowerUp>,
    explosions: Vec<Explosion>,
    stars: Vec<Star>,
    stats: RunStats,
    spawner: Spawner,
    shield: Shield,
    /// Ticks since the process started, in every state.
    frame_count: u64,
    events: Vec<GameEvent>,
}

impl Game {
    /// Builds a game on the title screen. The same `seed` replays the same
    /// spawns, particles and stars.
    pub fn new(config: Config, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = StdRng::seed_from_u64(seed);
        let stars = create_star_field(
            &mut rng,
            config.star_count,
            config.field_width,
            config.field_height,
        );

        Ok(Self {
            player: Player::new(&config),
            stats: RunStats::new(&config),
            config,
            rng,
            state: GameState::Start,
            bullets: Vec::new(),
            enemies: Vec::new(),
            power_ups: Vec::new(),
            explosions: Vec::new(),
            stars,
            spawner: Spawner::default(),
            shield: Shield::default(),
            frame_count: 0,
            events: Vec::new(),
        })
    }

    /// Advances one tick. Stars drift on every screen; everything else only
    /// moves while playing.
    pub fn tick(&mut self, pointer: Vec2) {
        self.frame_count += 1;
        self.update_stars();

        if self.state.is_playing() {
            self.update_play(pointer);
            self.check_invariants();
        }
    }

    fn update_play(&mut self, pointer: Vec2) {
        self.shield.tick();

        if self.spawner.tick(self.stats.enemy_spawn_rate) {
            let enemy = spawn_enemy(&mut self.rng, &self.config, self.stats.level);
            debug!(kind = ?enemy.kind, x = enemy.pos.x, speed = enemy.speed, "enemy spawned");
            self.enemies.push(enemy);
        }
        if let Some(power_up) = maybe_spawn_power_up(&mut self.rng, &self.config) {
            debug!(kind = power_up.kind.get_name(), x = power_up.pos.x, "power-up spawned");
            self.power_ups.push(power_up);
        }

        self.player
            .update(pointer, self.config.field_width, self.config.field_height);

        for bullet in &mut self.bullets {
            bullet.update();
        }
        self.bullets.retain(|bullet| !bullet.is_out_of_bounds());

        self.update_enemies();
        self.update_power_ups();
        self.update_explosions();

        // A run that ended this tick stays ended
        if self.state.is_playing()
            && self.stats.score >= self.stats.level.saturating_mul(self.config.level_up_score)
        {
            self.level_up();
        }
    }

    fn update_stars(&mut self) {
        for star in &mut self.stars {
            star.update(
                self.frame_count,
                &mut self.rng,
                self.config.field_width,
                self.config.field_height,
            );
        }
    }

    /// Fires a bullet if playing and the player's gun has cooled down.
    pub fn fire(&mut self) {
        if !self.state.is_playing() {
            return;
        }

        if let Some(bullet) = self
            .player
            .try_fire(self.config.bullet_speed, self.config.bullet_size)
        {
            self.bullets.push(bullet);
            self.events.push(GameEvent::Shot);
        }
    }

    /// Enter/Return: start, resume after a level banner, or restart after
    /// game over.
    pub fn confirm(&mut self) {
        match self.state {
            GameState::Start => {
                info!("game started");
                self.state = GameState::Playing;
            }
            GameState::LevelUp => {
                info!(level = self.stats.level, "level resumed");
                self.state = GameState::Playing;
            }
            GameState::GameOver => {
                info!("new game");
                self.reset_run();
                self.state = GameState::Playing;
            }
            GameState::Playing => {}
        }
    }

    /// Escape: abandon whatever is happening and go back to the title screen
    /// with a fresh star field.
    pub fn cancel(&mut self) {
        info!(from = ?self.state, "returned to menu");
        self.reset_run();
        self.stars = create_star_field(
            &mut self.rng,
            self.config.star_count,
            self.config.field_width,
            self.config.field_height,
        );
        self.state = GameState::Start;
    }

    fn reset_run(&mut self) {
        self.player = Player::new(&self.config);
        self.bullets.clear();
        self.enemies.clear();
        self.power_ups.clear();
        self.explosions.clear();
        self.stats = RunStats::new(&self.config);
        self.spawner.reset();
        self.shield.deactivate();
    }

    fn level_up(&mut self) {
        self.stats.level += 1;
        self.stats.enemy_spawn_rate = self.config.spawn_rate_for_level(self.stats.level);
        self.state = GameState::LevelUp;

        info!(
            level = self.stats.level,
            score = self.stats.score,
            spawn_rate = self.stats.enemy_spawn_rate,
            "level up"
        );
        self.events.push(GameEvent::LevelUp {
            level: self.stats.level,
        });
    }

    fn lose_life(&mut self) {
        self.stats.lives = self.stats.lives.saturating_sub(1);
        if self.stats.lives == 0 {
            self.end_run();
        }
    }

    fn end_run(&mut self) {
        if self.state == GameState::GameOver {
            return;
        }

        info!(score = self.stats.score, level = self.stats.level, "game over");
        self.state = GameState::GameOver;
        self.events.push(GameEvent::GameOver {
            score: self.stats.score,
        });
    }

    /// Adds `base * level` points.
    fn award(&mut self, base: u32) {
        let points = base.saturating_mul(self.stats.level);
        self.stats.score = self.stats.score.saturating_add(points);
    }

    fn spawn_explosion(&mut self, pos: Vec2, size: f32) {
        self.explosions.push(Explosion::new(
            pos,
            size,
            self.config.explosion_lifespan,
            &mut self.rng,
        ));
    }

    /// Explosion plus the destruction cue.
    fn explode(&mut self, enemy: &Enemy) {
        self.spawn_explosion(enemy.pos, enemy.size);
        let (low, high) = EXPLOSION_FREQUENCY_RANGE;
        let frequency = self.rng.random_range(low..high);
        self.events.push(GameEvent::EnemyDestroyed { frequency });
    }

    /// Debug builds stop on a broken invariant; release builds clamp and
    /// carry on.
    fn check_invariants(&mut self) {
        debug_assert!(
            self.stats.lives <= self.config.max_lives,
            "lives {} above max {}",
            self.stats.lives,
            self.config.max_lives
        );
        debug_assert!(self.stats.level >= 1, "level dropped below 1");

        self.stats.lives = self.stats.lives.min(self.config.max_lives);
        if self.stats.lives == 0 && self.state.is_playing() {
            self.end_run();
        }
    }

    /// Takes the events recorded since the last call.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn bullets(&self) -> &[Bullet] {
        &self.bullets
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn power_ups(&self) -> &[PowerUp] {
        &self.power_ups
    }

    pub fn explosions(&self) -> &[Explosion] {
        &self.explosions
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    pub fn shield(&self) -> &Shield {
        &self.shield
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    // Direct access for scripted setups such as tests.

    pub fn bullets_mut(&mut self) -> &mut Vec<Bullet> {
        &mut self.bullets
    }

    pub fn enemies_mut(&mut self) -> &mut Vec<Enemy> {
        &mut self.enemies
    }

    pub fn power_ups_mut(&mut self) -> &mut Vec<PowerUp> {
        &mut self.power_ups
    }

    pub fn stats_mut(&mut self) -> &mut RunStats {
        &mut self.stats
    }

    pub fn shield_mut(&mut self) -> &mut Shield {
        &mut self.shield
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{EnemyKind, PowerUpKind};

    fn quiet_config() -> Config {
        Config {
            star_count: 10,
            power_up_chance: 0.0,
            ..Config::default()
        }
    }

    fn playing_game() -> Game {
        let mut game = Game::new(quiet_config(), 42).expect("valid config");
        game.confirm();
        game
    }

    const POINTER: Vec2 = Vec2::new(400.0, 500.0);

    #[test]
    fn test_new_game_starts_on_title() {
        let game = Game::new(Config::default(), 1).expect("valid config");
        assert_eq!(game.state(), GameState::Start);
        assert_eq!(game.stars().len(), 150);
        assert_eq!(game.stats().lives, 3);
        assert_eq!(game.stats().level, 1);
        assert_eq!(game.stats().enemy_spawn_rate, 120);
    }

    #[test]
    fn test_invalid_config_fails_fast() {
        let config = Config {
            shield_duration: 0,
            ..Config::default()
        };
        assert!(Game::new(config, 1).is_err());
    }

    #[test]
    fn test_simulation_idle_outside_play() {
        let mut game = Game::new(quiet_config(), 1).expect("valid config");
        let star_y = game.stars()[0].pos.y;
        for _ in 0..200 {
            game.tick(POINTER);
        }
        assert!(game.enemies().is_empty());
        assert_eq!(game.spawner.counter, 0);
        assert_eq!(game.frame_count(), 200);
        assert_ne!(game.stars()[0].pos.y, star_y);
    }

    #[test]
    fn test_enemy_spawns_on_schedule() {
        let mut game = playing_game();
        for _ in 0..119 {
            game.tick(POINTER);
        }
        assert!(game.enemies().is_empty());
        game.tick(POINTER);
        assert_eq!(game.enemies().len(), 1);
    }

    #[test]
    fn test_fire_only_while_playing() {
        let mut game = Game::new(quiet_config(), 1).expect("valid config");
        game.fire();
        assert!(game.bullets().is_empty());

        game.confirm();
        game.fire();
        game.fire();
        assert_eq!(game.bullets().len(), 1);
        assert_eq!(game.drain_events(), vec![GameEvent::Shot]);
    }

    #[test]
    fn test_bullets_removed_above_field() {
        let mut game = playing_game();
        game.bullets_mut()
            .push(Bullet::new(Vec2::new(50.0, 5.0), 10.0, 5.0));
        game.tick(POINTER);
        assert!(game.bullets().is_empty());
    }

    #[test]
    fn test_enemy_leaving_bottom_gives_nothing() {
        let mut game = playing_game();
        game.enemies_mut().push(Enemy::new(
            Vec2::new(50.0, 629.0),
            30.0,
            EnemyKind::Square,
            2.0,
            0.0,
        ));
        game.tick(POINTER);
        assert!(game.enemies().is_empty());
        assert!(game.explosions().is_empty());
        assert_eq!(game.stats().score, 0);
    }

    #[test]
    fn test_one_bullet_per_enemy_newest_first() {
        let mut game = playing_game();
        game.enemies_mut().push(Enemy::new(
            Vec2::new(100.0, 100.0),
            30.0,
            EnemyKind::Star,
            0.0,
            0.0,
        ));
        for y in [110.0, 112.0] {
            game.bullets_mut()
                .push(Bullet::new(Vec2::new(100.0, y), 10.0, 5.0));
        }

        game.tick(POINTER);

        assert!(game.enemies().is_empty());
        assert_eq!(game.bullets().len(), 1);
        // The older bullet is the one left flying
        assert_eq!(game.bullets()[0].pos.y, 100.0);
        assert_eq!(game.stats().score, 10);
    }

    #[test]
    fn test_shield_expires_after_duration() {
        let mut game = playing_game();
        game.shield_mut().activate(3);
        for _ in 0..2 {
            game.tick(POINTER);
            assert!(game.shield().is_active());
        }
        game.tick(POINTER);
        assert!(!game.shield().is_active());
    }

    #[test]
    fn test_power_up_passing_bottom_has_no_effect() {
        let mut game = playing_game();
        game.power_ups_mut().push(PowerUp::new(
            Vec2::new(10.0, 599.0),
            PowerUpKind::ExtraLife,
            20.0,
            2.0,
        ));
        game.tick(POINTER);
        assert!(game.power_ups().is_empty());
        assert_eq!(game.stats().lives, 3);
    }

    #[test]
    fn test_explosions_expire() {
        let mut game = playing_game();
        game.spawn_explosion(Vec2::new(10.0, 10.0), 20.0);
        for _ in 0..29 {
            game.tick(POINTER);
        }
        assert_eq!(game.explosions().len(), 1);
        game.tick(POINTER);
        assert!(game.explosions().is_empty());
    }

    #[test]
    fn test_game_over_is_not_overwritten_by_level_up() {
        let mut game = playing_game();
        game.stats_mut().lives = 1;
        game.stats_mut().score = 490;
        game.enemies_mut().push(Enemy::new(
            Vec2::new(400.0, 500.0),
            30.0,
            EnemyKind::Triangle,
            0.0,
            0.0,
        ));
        game.enemies_mut().push(Enemy::new(
            Vec2::new(100.0, 100.0),
            30.0,
            EnemyKind::Triangle,
            0.0,
            0.0,
        ));
        game.bullets_mut()
            .push(Bullet::new(Vec2::new(100.0, 110.0), 10.0, 5.0));

        game.tick(POINTER);

        assert_eq!(game.stats().score, 500);
        assert_eq!(game.state(), GameState::GameOver);
        assert_eq!(game.stats().level, 1);
    }

    #[test]
    fn test_cancel_rebuilds_star_field() {
        let mut game = playing_game();
        let before: Vec<Vec2> = game.stars().iter().map(|star| star.pos).collect();
        game.cancel();
        let after: Vec<Vec2> = game.stars().iter().map(|star| star.pos).collect();
        assert_eq!(game.state(), GameState::Start);
        assert_eq!(after.len(), before.len());
        assert_ne!(before, after);
    }

    #[test]
    fn test_same_seed_replays_identically() {
        let run = |seed| {
            let config = Config {
                power_up_chance: 0.05,
                ..quiet_config()
            };
            let mut game = Game::new(config, seed).expect("valid config");
            game.confirm();
            for _ in 0..600 {
                game.tick(POINTER);
            }
            (
                game.enemies().to_vec(),
                game.power_ups().to_vec(),
                game.stats().clone(),
            )
        };
        assert_eq!(run(9), run(9));
    }

    // Property-based tests
    #[cfg(test)]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(32))]

            #[test]
            fn test_tick_invariants_hold(
                seed in any::<u64>(),
                inputs in prop::collection::vec(
                    (0.0f32..800.0, 0.0f32..600.0, prop::bool::ANY),
                    1..400
                )
            ) {
                let config = Config {
                    power_up_chance: 0.05,
                    base_spawn_rate: 20,
                    min_spawn_rate: 5,
                    ..quiet_config()
                };
                let mut game = Game::new(config, seed).expect("valid config");
                game.confirm();

                let mut last_score = 0;
                let mut last_level = 1;
                for (x, y, fire) in inputs {
                    if game.state() == GameState::LevelUp {
                        game.confirm();
                    }
                    if fire {
                        game.fire();
                    }
                    let lives_before = game.stats().lives;
                    let collected_life = game.power_ups().iter().any(|p| p.kind == PowerUpKind::ExtraLife);

                    game.tick(Vec2::new(x, y));

                    let stats = game.stats();
                    prop_assert!(stats.score >= last_score);
                    prop_assert!(stats.lives <= 5);
                    prop_assert!(stats.level == last_level || stats.level == last_level + 1);
                    if !collected_life {
                        prop_assert!(stats.lives <= lives_before);
                    }
                    prop_assert_eq!(game.shield().is_active(), game.shield().timer() > 0);
                    prop_assert!(game.shield().timer() <= game.config().shield_duration);
                    if stats.lives == 0 {
                        prop_assert_eq!(game.state(), GameState::GameOver);
                    }
                    if game.state() == GameState::GameOver {
                        break;
                    }

                    last_score = stats.score;
                    last_level = stats.level;
                }
            }
        }
    }
}
