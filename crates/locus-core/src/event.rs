//! Patient events — clinically relevant occurrences, optionally pinned to a
//! location fix.

use serde::{Deserialize, Serialize};

use crate::{clock::Clock, reading::LocationReading};

/// An event concerning a tracked patient.
///
/// `kind` is an open category string (serialized as `type`); no closed
/// enumeration exists upstream. `timestamp` is epoch **milliseconds**,
/// unlike [`LocationReading::timestamp`] which is seconds — an inherited
/// inconsistency that is preserved rather than silently unified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientEvent {
  pub patient_id: String,
  #[serde(rename = "type")]
  pub kind: String,
  pub description: String,
  pub timestamp:   i64,
  /// The reading that located the patient when the event occurred. Owned by
  /// the event — an embedded copy, never a reference to a shared record.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub location_data: Option<LocationReading>,
}

impl PatientEvent {
  /// An event stamped from `clock` exactly once, with no location attached.
  pub fn new(
    patient_id: impl Into<String>,
    kind: impl Into<String>,
    description: impl Into<String>,
    clock: &dyn Clock,
  ) -> Self {
    Self {
      patient_id: patient_id.into(),
      kind: kind.into(),
      description: description.into(),
      timestamp: clock.now_millis(),
      location_data: None,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::clock::FixedClock;

  #[test]
  fn new_stamps_milliseconds() {
    let clock = FixedClock::at_seconds(1_732_000_000);
    let event = PatientEvent::new("p-42", "fall_detected", "bed exit", &clock);

    assert_eq!(event.timestamp, 1_732_000_000_000);
    assert_eq!(event.location_data, None);
  }
}
