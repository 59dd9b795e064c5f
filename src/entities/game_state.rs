/// Which screen is up and whether the simulation advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Title screen, waiting for confirm.
    Start,
    /// Simulation running.
    Playing,
    /// Simulation paused behind the level banner.
    LevelUp,
    /// Simulation stopped, final score shown.
    GameOver,
}

impl GameState {
    pub fn is_playing(self) -> bool {
        self == GameState::Playing
    }
}
