use crate::entities::PowerUpKind;

/// Something noteworthy that happened during a tick. The app drains these
/// after every tick to trigger sound cues.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    Shot,
    /// An enemy was destroyed by a bullet or by ramming the player.
    EnemyDestroyed { frequency: f32 },
    PowerUpCollected(PowerUpKind),
    LevelUp { level: u32 },
    GameOver { score: u32 },
}
