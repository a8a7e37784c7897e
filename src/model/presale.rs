use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// Fixed presale schedule: the price steps linearly from `start_price` to
/// `end_price` once every `step_hours` between the two dates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PresaleWindow {
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub start_price: f64,
    pub end_price: f64,
    pub step_hours: u32,
}

impl PresaleWindow {
    pub fn step(&self) -> TimeDelta {
        TimeDelta::hours(i64::from(self.step_hours))
    }
}

/// Where `now` sits relative to the presale window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PresalePhase {
    NotStarted,
    Active,
    Ended,
}

/// Remaining time split into display units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Countdown {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl Countdown {
    pub const ZERO: Countdown = Countdown {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Split a time span into whole days, hours, minutes and seconds.
    /// Negative spans count as zero; sub-second remainders are dropped.
    pub fn from_delta(delta: TimeDelta) -> Self {
        let secs = delta.num_seconds().max(0) as u64;
        Self {
            days: secs / 86_400,
            hours: (secs % 86_400) / 3_600,
            minutes: (secs % 3_600) / 60,
            seconds: secs % 60,
        }
    }

    /// Saturates at `u64::MAX` for hand-built countdowns too large to sum.
    pub fn total_seconds(&self) -> u64 {
        self.days
            .saturating_mul(86_400)
            .saturating_add(self.hours.saturating_mul(3_600))
            .saturating_add(self.minutes.saturating_mul(60))
            .saturating_add(self.seconds)
    }

    pub fn is_zero(&self) -> bool {
        self.days == 0 && self.hours == 0 && self.minutes == 0 && self.seconds == 0
    }
}

/// Presale price at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub price: f64,
    pub next_step_at: DateTime<Utc>,
    pub countdown: Countdown,
    pub phase: PresalePhase,
}

/// Shape consumed by countdown widgets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PresalePrice {
    pub current_price: f64,
    pub time_until_next_step: Countdown,
    pub next_step_date: DateTime<Utc>,
}

impl From<PricePoint> for PresalePrice {
    fn from(point: PricePoint) -> Self {
        Self {
            current_price: point.price,
            time_until_next_step: point.countdown,
            next_step_date: point.next_step_at,
        }
    }
}
