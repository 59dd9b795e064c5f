use super::vector::Vec2;

/// Enemy shape, drawn from the type tag 0..5.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyKind {
    Triangle,
    Square,
    SpikedOrb,
    Diamond,
    Star,
}

impl EnemyKind {
    pub const ALL: [EnemyKind; 5] = [
        EnemyKind::Triangle,
        EnemyKind::Square,
        EnemyKind::SpikedOrb,
        EnemyKind::Diamond,
        EnemyKind::Star,
    ];

    /// Maps a type tag onto a kind. Tags past the last kind wrap around.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    pub fn index(self) -> usize {
        match self {
            EnemyKind::Triangle => 0,
            EnemyKind::Square => 1,
            EnemyKind::SpikedOrb => 2,
            EnemyKind::Diamond => 3,
            EnemyKind::Star => 4,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub pos: Vec2,
    pub size: f32,
    pub kind: EnemyKind,
    /// Downward speed per tick.
    pub speed: f32,
    pub rotation: f32,
    pub rotation_speed: f32,
}

impl Enemy {
    pub fn new(pos: Vec2, size: f32, kind: EnemyKind, speed: f32, rotation_speed: f32) -> Self {
        Self {
            pos,
            size,
            kind,
            speed,
            rotation: 0.0,
            rotation_speed,
        }
    }

    pub fn update(&mut self) {
        self.pos.y += self.speed;
        self.rotation += self.rotation_speed;
    }

    /// True once the enemy has fully passed the bottom edge.
    pub fn is_below(&self, field_height: f32) -> bool {
        self.pos.y > field_height + self.size
    }
}
