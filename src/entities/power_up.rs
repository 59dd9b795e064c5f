use super::vector::Vec2;
use crate::config::POWER_UP_ROTATION_SPEED;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerUpKind {
    ExtraLife,
    Shield,
    ClearEnemies,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 3] = [
        PowerUpKind::ExtraLife,
        PowerUpKind::Shield,
        PowerUpKind::ClearEnemies,
    ];

    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    pub fn get_name(&self) -> &'static str {
        match self {
            PowerUpKind::ExtraLife => "Extra Life",
            PowerUpKind::Shield => "Shield",
            PowerUpKind::ClearEnemies => "Clear Enemies",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PowerUp {
    pub pos: Vec2,
    pub kind: PowerUpKind,
    pub size: f32,
    pub speed: f32,
    pub rotation: f32,
}

impl PowerUp {
    pub fn new(pos: Vec2, kind: PowerUpKind, size: f32, speed: f32) -> Self {
        Self {
            pos,
            kind,
            size,
            speed,
            rotation: 0.0,
        }
    }

    pub fn update(&mut self) {
        self.pos.y += self.speed;
        self.rotation += POWER_UP_ROTATION_SPEED;
    }

    pub fn is_out_of_bounds(&self, field_height: f32) -> bool {
        self.pos.y > field_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_up_falls() {
        let mut power_up = PowerUp::new(Vec2::new(10.0, 0.0), PowerUpKind::Shield, 20.0, 2.0);
        power_up.update();
        assert_eq!(power_up.pos.y, 2.0);
        assert!((power_up.rotation - 0.05).abs() < 1e-6);
    }

    #[test]
    fn test_power_up_leaves_field() {
        let power_up = PowerUp::new(Vec2::new(10.0, 600.0), PowerUpKind::ExtraLife, 20.0, 2.0);
        assert!(!power_up.is_out_of_bounds(600.0));
        let power_up = PowerUp::new(Vec2::new(10.0, 601.0), PowerUpKind::ExtraLife, 20.0, 2.0);
        assert!(power_up.is_out_of_bounds(600.0));
    }
}
