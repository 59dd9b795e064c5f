mod bullet;
mod enemy;
mod explosion;
mod game_state;
mod player;
mod power_up;
mod star;
mod vector;

// Re-export all public types
pub use bullet::Bullet;
pub use enemy::{Enemy, EnemyKind};
pub use explosion::{Explosion, Particle};
pub use game_state::GameState;
pub use player::Player;
pub use power_up::{PowerUp, PowerUpKind};
pub use star::{Star, create_star_field};
pub use vector::{Vec2, map_range};
