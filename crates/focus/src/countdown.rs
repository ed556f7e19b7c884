//! A single timed phase of a focus session

use chrono::Duration;
use serde::{Deserialize, Serialize};
use wellnus_core::format;

/// Which kind of phase a countdown times
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Work,
    Break,
    LongBreak,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Work => "Work",
            Phase::Break => "Break",
            Phase::LongBreak => "Long break",
        }
    }

    fn prompt(&self) -> &'static str {
        match self {
            Phase::Work => "Time to focus!",
            Phase::Break => "Stretch, get some water, look away from the screen.",
            Phase::LongBreak => "You have earned a proper rest. Well done!",
        }
    }
}

/// One phase: label, total length and time left
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    phase: Phase,
    minutes: u32,
    total: Duration,
    remaining: Duration,
}

impl Countdown {
    pub fn new(phase: Phase, minutes: u32) -> Self {
        let total = Duration::minutes(i64::from(minutes));
        Self {
            phase,
            minutes,
            total,
            remaining: total,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    pub fn total(&self) -> Duration {
        self.total
    }

    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    /// Subtract elapsed time; remaining never drops below zero
    pub fn tick(&mut self, elapsed: Duration) -> Duration {
        if elapsed > Duration::zero() {
            self.remaining = (self.remaining - elapsed).max(Duration::zero());
        }
        self.remaining
    }

    pub fn is_expired(&self) -> bool {
        self.remaining <= Duration::zero()
    }

    /// e.g. "Work: 25 minutes. Time to focus!"
    pub fn description(&self) -> String {
        format!(
            "{}: {}. {}",
            self.phase.as_str(),
            format::minutes(self.minutes),
            self.phase.prompt()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_countdown_is_full() {
        let countdown = Countdown::new(Phase::Work, 25);
        assert_eq!(countdown.total(), Duration::minutes(25));
        assert_eq!(countdown.remaining(), countdown.total());
        assert!(!countdown.is_expired());
    }

    #[test]
    fn test_tick_floors_at_zero() {
        let mut countdown = Countdown::new(Phase::Break, 1);
        assert_eq!(countdown.tick(Duration::seconds(45)), Duration::seconds(15));
        assert_eq!(countdown.tick(Duration::seconds(45)), Duration::zero());
        assert!(countdown.is_expired());
        assert_eq!(countdown.tick(Duration::hours(3)), Duration::zero());
    }

    #[test]
    fn test_negative_elapsed_ignored() {
        let mut countdown = Countdown::new(Phase::Work, 5);
        countdown.tick(Duration::seconds(-30));
        assert_eq!(countdown.remaining(), Duration::minutes(5));
    }

    #[test]
    fn test_description_names_phase_and_length() {
        let description = Countdown::new(Phase::LongBreak, 15).description();
        assert!(description.starts_with("Long break: 15 minutes."));
        assert!(Countdown::new(Phase::Work, 1).description().starts_with("Work: 1 minute."));
    }
}
