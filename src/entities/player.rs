use super::bullet::Bullet;
use super::vector::Vec2;
use crate::config::{Config, PLAYER_BOTTOM_MARGIN, PLAYER_START_OFFSET};

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub pos: Vec2,
    pub size: f32,
    /// Ticks until the next shot is allowed.
    pub fire_cooldown: u32,
    pub fire_delay: u32,
}

impl Player {
    /// Creates the player at its resting spot: centred, near the bottom.
    pub fn new(config: &Config) -> Self {
        Self {
            pos: Vec2::new(
                config.field_width / 2.0,
                config.field_height - PLAYER_START_OFFSET,
            ),
            size: config.player_size,
            fire_cooldown: 0,
            fire_delay: config.player_fire_delay,
        }
    }

    /// Moves to the pointer, kept inside the lower half of the field, and
    /// counts the fire cooldown down by one tick.
    pub fn update(&mut self, pointer: Vec2, field_width: f32, field_height: f32) {
        self.pos.x = pointer.x.clamp(0.0, field_width);
        let top = field_height / 2.0;
        let bottom = (field_height - PLAYER_BOTTOM_MARGIN).max(top);
        self.pos.y = pointer.y.clamp(top, bottom);

        self.update_cooldown();
    }

    pub fn update_cooldown(&mut self) {
        if self.fire_cooldown > 0 {
            self.fire_cooldown -= 1;
        }
    }

    pub fn can_fire(&self) -> bool {
        self.fire_cooldown == 0
    }

    /// Fires one bullet from the nose of the ship if the cooldown allows.
    pub fn try_fire(&mut self, bullet_speed: f32, bullet_size: f32) -> Option<Bullet> {
        if !self.can_fire() {
            return None;
        }

        self.fire_cooldown = self.fire_delay;
        Some(Bullet::new(
            Vec2::new(self.pos.x, self.pos.y - self.size),
            bullet_speed,
            bullet_size,
        ))
    }
}
