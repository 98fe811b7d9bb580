//! Location readings — one positioning fix from a tracked device.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::clock::Clock;

/// A single position fix reported by a UWB tag or comparable device.
///
/// Coordinates live in an open plane (no implicit range); `z` exists for
/// multi-floor deployments but 2D readings are the common case, hence its
/// 0.0 default. `timestamp` is epoch **seconds** — note that
/// [`crate::PatientEvent`] uses milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationReading {
  pub device_id: String,
  pub x:         f64,
  pub y:         f64,
  #[serde(default)]
  pub z:         f64,
  /// Estimated error radius in meters; 0.0 means unknown (or a perfect fix).
  #[serde(default)]
  pub accuracy:  f64,
  pub timestamp: i64,
  /// Weak reference to an [`crate::Area::id`]. Held by value; this module
  /// never checks that the target area exists — that is the ingesting
  /// collaborator's job.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub area: Option<String>,
  /// Remaining charge in percent, 0..=100 when present.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub battery_level: Option<u8>,
  /// Free-form extension metadata. Keys are unique; insertion order is
  /// irrelevant, so a sorted map keeps encoding deterministic.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub additional_info: Option<BTreeMap<String, String>>,
}

impl LocationReading {
  /// A reading with every defaultable field at its default: `z` and
  /// `accuracy` zero, `timestamp` stamped from `clock` exactly once, all
  /// optionals absent.
  pub fn new(
    device_id: impl Into<String>,
    x: f64,
    y: f64,
    clock: &dyn Clock,
  ) -> Self {
    Self {
      device_id: device_id.into(),
      x,
      y,
      z: 0.0,
      accuracy: 0.0,
      timestamp: clock.now_seconds(),
      area: None,
      battery_level: None,
      additional_info: None,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::clock::FixedClock;

  #[test]
  fn new_stamps_defaults_once() {
    let clock = FixedClock::at_seconds(1_732_000_100);
    let reading = LocationReading::new("uwb-17", 3.25, 8.1, &clock);

    assert_eq!(reading.device_id, "uwb-17");
    assert_eq!(reading.z, 0.0);
    assert_eq!(reading.accuracy, 0.0);
    assert_eq!(reading.timestamp, 1_732_000_100);
    assert_eq!(reading.area, None);
    assert_eq!(reading.battery_level, None);
    assert_eq!(reading.additional_info, None);
  }
}
