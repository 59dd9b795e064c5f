/// Timed invulnerability against enemy body contact.
///
/// Only the remaining ticks are stored; the shield is active exactly while
/// that count is above zero, so the two can never disagree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Shield {
    timer: u32,
}

impl Shield {
    /// Raises the shield for `duration` ticks. A second pickup refreshes the
    /// timer rather than stacking.
    pub fn activate(&mut self, duration: u32) {
        self.timer = duration;
    }

    pub fn tick(&mut self) {
        self.timer = self.timer.saturating_sub(1);
    }

    pub fn deactivate(&mut self) {
        self.timer = 0;
    }

    pub fn is_active(&self) -> bool {
        self.timer > 0
    }

    pub fn timer(&self) -> u32 {
        self.timer
    }

    /// Whole seconds left at 60 ticks per second, rounded up.
    pub fn seconds_left(&self) -> u32 {
        self.timer.div_ceil(60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shield_counts_down_and_drops() {
        let mut shield = Shield::default();
        assert!(!shield.is_active());

        shield.activate(2);
        assert!(shield.is_active());
        shield.tick();
        assert!(shield.is_active());
        shield.tick();
        assert!(!shield.is_active());
        shield.tick();
        assert_eq!(shield.timer(), 0);
    }

    #[test]
    fn test_shield_refresh_does_not_stack() {
        let mut shield = Shield::default();
        shield.activate(300);
        for _ in 0..100 {
            shield.tick();
        }
        shield.activate(300);
        assert_eq!(shield.timer(), 300);
    }

    #[test]
    fn test_seconds_left_rounds_up() {
        let mut shield = Shield::default();
        shield.activate(300);
        assert_eq!(shield.seconds_left(), 5);
        shield.tick();
        assert_eq!(shield.seconds_left(), 5);
        shield.activate(1);
        assert_eq!(shield.seconds_left(), 1);
    }
}
