//! The clock seam.
//!
//! Timestamp defaults are never read from the wall clock inline; every
//! construction or decode path that needs "now" takes a [`Clock`], so tests
//! and replay tooling can pin time. The two accessors are deliberately kept
//! separate: location readings carry epoch seconds while patient events
//! carry epoch milliseconds, and neither side converts.

use chrono::Utc;

/// Source of the current time, in both resolutions used by the records.
pub trait Clock {
  /// Seconds since the Unix epoch ([`crate::LocationReading::timestamp`]).
  fn now_seconds(&self) -> i64;
  /// Milliseconds since the Unix epoch ([`crate::PatientEvent::timestamp`]).
  fn now_millis(&self) -> i64;
}

/// The production clock; reads the system wall clock via chrono.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
  fn now_seconds(&self) -> i64 { Utc::now().timestamp() }

  fn now_millis(&self) -> i64 { Utc::now().timestamp_millis() }
}

/// A pinned clock for tests and deterministic replay.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
  pub seconds: i64,
  pub millis:  i64,
}

impl FixedClock {
  /// Pin both resolutions to the same instant, given in seconds.
  pub fn at_seconds(seconds: i64) -> Self {
    Self {
      seconds,
      millis: seconds * 1000,
    }
  }
}

impl Clock for FixedClock {
  fn now_seconds(&self) -> i64 { self.seconds }

  fn now_millis(&self) -> i64 { self.millis }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn fixed_clock_pins_both_resolutions() {
    let clock = FixedClock::at_seconds(1_732_000_000);
    assert_eq!(clock.now_seconds(), 1_732_000_000);
    assert_eq!(clock.now_millis(), 1_732_000_000_000);
  }

  #[test]
  fn system_clock_resolutions_agree() {
    let clock = SystemClock;
    let s = clock.now_seconds();
    let ms = clock.now_millis();
    // Both reads happen within the same second or the next.
    assert!((ms / 1000 - s).abs() <= 1);
  }
}
