// Library exports for testing
pub use config::Config;
pub use entities::{
    Bullet, Enemy, EnemyKind, Explosion, GameState, Particle, Player, PowerUp, PowerUpKind, Star,
    Vec2,
};
pub use error::ConfigError;
pub use game::{Game, GameEvent, RunStats, Shield};

pub mod app;
pub mod audio;
pub mod config;
pub mod entities;
pub mod error;
pub mod game;
pub mod input;
pub mod renderer;
pub mod scene;
