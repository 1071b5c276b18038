//! Streak display view-model.

use serde::{Deserialize, Serialize};

/// Days of consecutive activity before the display gets the flame treatment
const ON_FIRE_DAYS: u32 = 7;

/// Current and record activity streaks, in days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakView {
    current: u32,
    longest: u32,
}

impl StreakView {
    /// Create from current and longest streak lengths
    #[must_use]
    pub fn new(current: u32, longest: u32) -> Self {
        Self { current, longest }
    }

    /// Current streak in days
    #[must_use]
    pub fn current(&self) -> u32 {
        self.current
    }

    /// Longest recorded streak in days
    #[must_use]
    pub fn longest(&self) -> u32 {
        self.longest
    }

    /// True when there is any active streak
    #[must_use]
    pub fn active(&self) -> bool {
        self.current > 0
    }

    /// True at seven consecutive days or more
    #[must_use]
    pub fn on_fire(&self) -> bool {
        self.current >= ON_FIRE_DAYS
    }

    /// Headline label, e.g. `12 day streak`
    #[must_use]
    pub fn current_label(&self) -> String {
        format!("{} day streak", self.current)
    }

    /// Record label, e.g. `best: 30`
    #[must_use]
    pub fn longest_label(&self) -> String {
        format!("best: {}", self.longest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_streak_new() {
        let streak = StreakView::new(3, 12);
        assert_eq!(streak.current(), 3);
        assert_eq!(streak.longest(), 12);
    }

    #[test]
    fn test_streak_active() {
        assert!(!StreakView::new(0, 5).active());
        assert!(StreakView::new(1, 5).active());
    }

    #[test]
    fn test_streak_on_fire_threshold() {
        assert!(!StreakView::new(6, 30).on_fire());
        assert!(StreakView::new(7, 30).on_fire());
        assert!(StreakView::new(8, 30).on_fire());
    }

    #[test]
    fn test_streak_labels() {
        let streak = StreakView::new(12, 30);
        assert_eq!(streak.current_label(), "12 day streak");
        assert_eq!(streak.longest_label(), "best: 30");
    }
}
