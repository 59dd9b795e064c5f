use rand::Rng;

use super::vector::{Vec2, map_range};

/// Background star. Lives forever and wraps back to the top.
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pub pos: Vec2,
    pub size: f32,
    pub speed: f32,
    pub twinkle_speed: f32,
    pub brightness: f32,
}

impl Star {
    pub fn new<R: Rng>(rng: &mut R, field_width: f32, field_height: f32) -> Self {
        let size = rng.random_range(1.0..3.0);
        Self {
            pos: Vec2::new(
                rng.random_range(0.0..field_width),
                rng.random_range(0.0..field_height),
            ),
            size,
            // Bigger stars are closer, so they fall faster
            speed: map_range(size, (1.0, 3.0), (0.5, 2.0)),
            twinkle_speed: rng.random_range(0.03..0.07),
            brightness: rng.random_range(100.0..255.0),
        }
    }

    pub fn update<R: Rng>(
        &mut self,
        frame_count: u64,
        rng: &mut R,
        field_width: f32,
        field_height: f32,
    ) {
        self.pos.y += self.speed;
        if self.pos.y > field_height {
            self.pos.y = 0.0;
            self.pos.x = rng.random_range(0.0..field_width);
        }

        self.brightness = 150.0 + 105.0 * (frame_count as f32 * self.twinkle_speed).sin();
    }
}

/// Builds a fresh star field of `count` stars.
pub fn create_star_field<R: Rng>(
    rng: &mut R,
    count: usize,
    field_width: f32,
    field_height: f32,
) -> Vec<Star> {
    (0..count)
        .map(|_| Star::new(&mut *rng, field_width, field_height))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_star_speed_scales_with_size() {
        let mut rng = StdRng::seed_from_u64(3);
        for star in create_star_field(&mut rng, 50, 800.0, 600.0) {
            assert!((1.0..3.0).contains(&star.size));
            assert!((0.5..=2.0).contains(&star.speed));
            assert!((0.0..800.0).contains(&star.pos.x));
        }
    }

    #[test]
    fn test_star_wraps_to_top() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut star = Star::new(&mut rng, 800.0, 600.0);
        star.pos.y = 599.9;
        star.update(1, &mut rng, 800.0, 600.0);
        assert_eq!(star.pos.y, 0.0);
    }

    #[test]
    fn test_star_brightness_oscillates_in_range() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut star = Star::new(&mut rng, 800.0, 600.0);
        for frame in 0..500 {
            star.update(frame, &mut rng, 800.0, 600.0);
            assert!((45.0..=255.0).contains(&star.brightness));
        }
    }
}
