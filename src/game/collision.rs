//! Circle-proxy hit tests and the per-tick interaction passes.
//!
//! Passes walk their collections from the back and remove with
//! `Vec::remove`, so survivors keep spawn order. Bullets are also scanned
//! from the back: when several bullets overlap one enemy, the newest one
//! takes the kill and the rest fly on.

use super::Game;
use crate::entities::{Bullet, Enemy, Player, PowerUp, Vec2};

/// True when two circles of the given diameters overlap, after scaling the
/// combined radius by `factor`.
pub fn circles_touch(a: Vec2, a_size: f32, b: Vec2, b_size: f32, factor: f32) -> bool {
    a.distance(b) < (a_size / 2.0 + b_size / 2.0) * factor
}

pub fn bullet_hits_enemy(bullet: &Bullet, enemy: &Enemy) -> bool {
    circles_touch(bullet.pos, bullet.size, enemy.pos, enemy.size, 1.0)
}

/// Enemy bodies use a tightened radius so near misses stay misses.
pub fn enemy_hits_player(enemy: &Enemy, player: &Player, factor: f32) -> bool {
    circles_touch(enemy.pos, enemy.size, player.pos, player.size, factor)
}

pub fn power_up_hits_player(power_up: &PowerUp, player: &Player) -> bool {
    circles_touch(power_up.pos, power_up.size, player.pos, player.size, 1.0)
}

impl Game {
    /// Moves every enemy and resolves, in order: body contact with the
    /// player, leaving the bottom edge, and bullet hits.
    pub(super) fn update_enemies(&mut self) {
        let mut i = self.enemies.len();
        while i > 0 {
            i -= 1;
            self.enemies[i].update();

            // A raised shield blocks the body hit, but the enemy stays in play
            if !self.shield.is_active()
                && enemy_hits_player(&self.enemies[i], &self.player, self.config.enemy_hit_factor)
            {
                let enemy = self.enemies.remove(i);
                self.explode(&enemy);
                self.lose_life();
                continue;
            }

            if self.enemies[i].is_below(self.config.field_height) {
                self.enemies.remove(i);
                continue;
            }

            let enemy = &self.enemies[i];
            let hit = self
                .bullets
                .iter()
                .rposition(|bullet| bullet_hits_enemy(bullet, enemy));
            if let Some(j) = hit {
                self.bullets.remove(j);
                let enemy = self.enemies.remove(i);
                self.award(self.config.enemy_kill_score);
                self.explode(&enemy);
            }
        }
    }

    /// Moves power-ups, applying any the player touches.
    pub(super) fn update_power_ups(&mut self) {
        let mut i = self.power_ups.len();
        while i > 0 {
            i -= 1;
            self.power_ups[i].update();

            if power_up_hits_player(&self.power_ups[i], &self.player) {
                let power_up = self.power_ups.remove(i);
                self.activate_power_up(power_up.kind);
                continue;
            }

            if self.power_ups[i].is_out_of_bounds(self.config.field_height) {
                self.power_ups.remove(i);
            }
        }
    }

    pub(super) fn update_explosions(&mut self) {
        for explosion in &mut self.explosions {
            explosion.update();
        }
        self.explosions.retain(|explosion| !explosion.is_finished());
    }
}
