use tracing::debug;

use super::Game;
use super::events::GameEvent;
use crate::entities::PowerUpKind;

impl Game {
    /// Applies a collected power-up.
    pub(super) fn activate_power_up(&mut self, kind: PowerUpKind) {
        debug!(power_up = kind.get_name(), "power-up collected");
        self.events.push(GameEvent::PowerUpCollected(kind));

        match kind {
            PowerUpKind::ExtraLife => {
                self.stats.lives = (self.stats.lives + 1).min(self.config.max_lives);
            }
            PowerUpKind::Shield => {
                self.shield.activate(self.config.shield_duration);
            }
            PowerUpKind::ClearEnemies => {
                // Taken in one go so nothing later this tick sees the wiped enemies
                let cleared = std::mem::take(&mut self.enemies);
                for enemy in &cleared {
                    self.spawn_explosion(enemy.pos, enemy.size);
                    self.award(self.config.clear_kill_score);
                }
            }
        }
    }
}
