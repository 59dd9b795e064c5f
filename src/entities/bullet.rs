use super::vector::Vec2;

#[derive(Debug, Clone, PartialEq)]
pub struct Bullet {
    pub pos: Vec2,
    pub speed: f32,
    pub size: f32,
}

impl Bullet {
    pub fn new(pos: Vec2, speed: f32, size: f32) -> Self {
        Self { pos, speed, size }
    }

    pub fn update(&mut self) {
        self.pos.y -= self.speed;
    }

    /// Bullets leave through the top edge only.
    pub fn is_out_of_bounds(&self) -> bool {
        self.pos.y < 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bullet_moves_up() {
        let mut bullet = Bullet::new(Vec2::new(50.0, 100.0), 10.0, 5.0);
        bullet.update();
        assert_eq!(bullet.pos, Vec2::new(50.0, 90.0));
    }

    #[test]
    fn test_bullet_out_of_bounds() {
        let mut bullet = Bullet::new(Vec2::new(50.0, 5.0), 10.0, 5.0);
        assert!(!bullet.is_out_of_bounds());
        bullet.update();
        assert!(bullet.is_out_of_bounds());
    }
}
