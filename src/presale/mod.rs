//! Stepped presale pricing.
//!
//! The price is a pure function of the wall-clock time: it starts at
//! `start_price`, jumps by a fixed amount at every step boundary and reaches
//! `end_price` when the window closes.

mod countdown;
#[cfg(feature = "full")]
pub mod report;

pub use countdown::format_countdown;

use chrono::{DateTime, TimeDelta, Utc};
use thiserror::Error;
use tracing::trace;

use crate::model::{Countdown, PresalePhase, PresalePrice, PresaleWindow, PricePoint};

/// 2025-03-01T00:00:00Z
pub const PRESALE_START_TIMESTAMP: i64 = 1_740_787_200;
/// 2025-03-31T00:00:00Z
pub const PRESALE_END_TIMESTAMP: i64 = 1_743_379_200;
pub const PRESALE_START_PRICE: f64 = 0.10;
pub const PRESALE_END_PRICE: f64 = 0.40;
pub const PRESALE_STEP_HOURS: u32 = 24;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PresaleError {
    #[error("Presale window is empty: end {end} is not after start {start}")]
    EmptyWindow {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    #[error("Presale start price {start} is above end price {end}")]
    InvertedPrices { start: f64, end: f64 },

    #[error("Presale prices must be finite, got start {start} and end {end}")]
    NonFinitePrice { start: f64, end: f64 },

    #[error("Presale step must be at least one hour")]
    InvalidStep,

    #[error("Timestamp {0} ms is not a representable instant")]
    InvalidTimestamp(f64),
}

impl Default for PresaleWindow {
    fn default() -> Self {
        Self {
            start_date: DateTime::from_timestamp(PRESALE_START_TIMESTAMP, 0).unwrap_or_default(),
            end_date: DateTime::from_timestamp(PRESALE_END_TIMESTAMP, 0).unwrap_or_default(),
            start_price: PRESALE_START_PRICE,
            end_price: PRESALE_END_PRICE,
            step_hours: PRESALE_STEP_HOURS,
        }
    }
}

impl PresaleWindow {
    pub fn validate(&self) -> Result<(), PresaleError> {
        if self.end_date <= self.start_date {
            return Err(PresaleError::EmptyWindow {
                start: self.start_date,
                end: self.end_date,
            });
        }
        if !self.start_price.is_finite() || !self.end_price.is_finite() {
            return Err(PresaleError::NonFinitePrice {
                start: self.start_price,
                end: self.end_price,
            });
        }
        if self.start_price > self.end_price {
            return Err(PresaleError::InvertedPrices {
                start: self.start_price,
                end: self.end_price,
            });
        }
        if self.step_hours == 0 {
            return Err(PresaleError::InvalidStep);
        }
        Ok(())
    }

    /// Number of price steps in the window; a trailing partial step counts.
    pub fn total_steps(&self) -> i64 {
        let span = (self.end_date - self.start_date).num_milliseconds();
        let step = self.step().num_milliseconds();
        (span + step - 1) / step
    }
}

/// Presale price schedule over a validated [`PresaleWindow`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PresaleClock {
    window: PresaleWindow,
}

impl PresaleClock {
    pub fn new(window: PresaleWindow) -> Result<Self, PresaleError> {
        window.validate()?;
        Ok(Self { window })
    }

    pub fn window(&self) -> &PresaleWindow {
        &self.window
    }

    pub fn phase(&self, now: DateTime<Utc>) -> PresalePhase {
        if now <= self.window.start_date {
            PresalePhase::NotStarted
        } else if now >= self.window.end_date {
            PresalePhase::Ended
        } else {
            PresalePhase::Active
        }
    }

    /// Price in effect at `now`, when it next changes, and the time left
    /// until then.
    pub fn current_price(&self, now: DateTime<Utc>) -> PricePoint {
        let w = &self.window;
        let phase = self.phase(now);

        let (raw_price, next_step_at, countdown) = match phase {
            PresalePhase::NotStarted => (
                w.start_price,
                w.start_date,
                Countdown::from_delta(w.start_date - now),
            ),
            PresalePhase::Ended => (w.end_price, w.end_date, Countdown::ZERO),
            PresalePhase::Active => {
                let step_ms = w.step().num_milliseconds();
                let total_steps = w.total_steps();
                let elapsed_steps =
                    ((now - w.start_date).num_milliseconds() / step_ms).clamp(0, total_steps);
                let price_per_step = (w.end_price - w.start_price) / total_steps as f64;
                let price = w.start_price + elapsed_steps as f64 * price_per_step;

                // A step ending past the representable range ends with the window.
                let next_step_at = w
                    .start_date
                    .checked_add_signed(TimeDelta::milliseconds((elapsed_steps + 1) * step_ms))
                    .map_or(w.end_date, |step_end| step_end.min(w.end_date));
                (price, next_step_at, Countdown::from_delta(next_step_at - now))
            }
        };

        let price = settle_price(raw_price, w);
        trace!(?phase, raw_price, price, %next_step_at, "presale price");

        PricePoint {
            price,
            next_step_at,
            countdown,
            phase,
        }
    }

    pub fn presale_price(&self, now: DateTime<Utc>) -> PresalePrice {
        self.current_price(now).into()
    }
}

/// Round to cents, then force into `[start_price, end_price]`.
/// `NaN` falls back to `start_price`.
pub fn settle_price(raw: f64, window: &PresaleWindow) -> f64 {
    let rounded = (raw * 100.0).round() / 100.0;
    if rounded.is_nan() {
        return window.start_price;
    }
    rounded.max(window.start_price).min(window.end_price)
}

/// Price under the default presale schedule.
pub fn presale_price(now: DateTime<Utc>) -> PresalePrice {
    PresaleClock::default().presale_price(now)
}

/// [`presale_price`] for a unix timestamp in milliseconds, as handed over by
/// JavaScript's `Date.now()`.
pub fn presale_price_at_millis(now_ms: f64) -> Result<PresalePrice, PresaleError> {
    if !now_ms.is_finite() {
        return Err(PresaleError::InvalidTimestamp(now_ms));
    }
    let now = DateTime::from_timestamp_millis(now_ms.floor() as i64)
        .ok_or(PresaleError::InvalidTimestamp(now_ms))?;
    Ok(presale_price(now))
}
