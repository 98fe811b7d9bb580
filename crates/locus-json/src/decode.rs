//! JSON-to-record decoding.
//!
//! Pipeline:
//!   raw &str
//!     └─ serde_json::from_str     → Value
//!          └─ *_from_value()      → field extractors
//!               └─ validated record (defaults populated, clock applied)
//!
//! Decoding walks a [`Value`] by hand rather than deriving `Deserialize`:
//! the contract distinguishes missing fields from type mismatches from
//! range violations, and fills absent timestamps from an injected clock.
//! Derive-based deserialization can express none of those.

use std::collections::BTreeMap;

use locus_core::{
  area::{Area, Point},
  clock::Clock,
  event::PatientEvent,
  reading::LocationReading,
};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

// ─── Path and type naming ────────────────────────────────────────────────────

/// Human-readable JSON type name, used in `TypeMismatch` reports.
fn json_type(value: &Value) -> &'static str {
  match value {
    Value::Null => "null",
    Value::Bool(_) => "boolean",
    Value::Number(_) => "number",
    Value::String(_) => "string",
    Value::Array(_) => "array",
    Value::Object(_) => "object",
  }
}

/// Dotted path of `field` under the prefix `at` ("" at the record root).
fn path(at: &str, field: &str) -> String {
  if at.is_empty() {
    field.to_string()
  } else {
    format!("{at}.{field}")
  }
}

fn object_at<'a>(value: &'a Value, at: &str) -> Result<&'a Map<String, Value>> {
  value.as_object().ok_or_else(|| Error::TypeMismatch {
    field:    if at.is_empty() { "(root)".to_string() } else { at.to_string() },
    expected: "object",
    found:    json_type(value),
  })
}

// ─── Field extractors ────────────────────────────────────────────────────────

fn require_string(
  obj: &Map<String, Value>,
  at: &str,
  field: &str,
) -> Result<String> {
  match obj.get(field) {
    None => Err(Error::MissingField { field: path(at, field) }),
    Some(Value::String(s)) => Ok(s.clone()),
    Some(other) => Err(Error::TypeMismatch {
      field:    path(at, field),
      expected: "string",
      found:    json_type(other),
    }),
  }
}

/// Like [`require_string`] but rejects the empty string; used for the
/// identifier fields the schema declares non-empty.
fn require_identifier(
  obj: &Map<String, Value>,
  at: &str,
  field: &str,
) -> Result<String> {
  let s = require_string(obj, at, field)?;
  if s.is_empty() {
    return Err(Error::TypeMismatch {
      field:    path(at, field),
      expected: "non-empty string",
      found:    "empty string",
    });
  }
  Ok(s)
}

fn require_f64(obj: &Map<String, Value>, at: &str, field: &str) -> Result<f64> {
  match obj.get(field) {
    None => Err(Error::MissingField { field: path(at, field) }),
    Some(v) => v.as_f64().ok_or_else(|| Error::TypeMismatch {
      field:    path(at, field),
      expected: "number",
      found:    json_type(v),
    }),
  }
}

/// Absent means `default`; present must be a number.
fn f64_or(
  obj: &Map<String, Value>,
  at: &str,
  field: &str,
  default: f64,
) -> Result<f64> {
  match obj.get(field) {
    None => Ok(default),
    Some(v) => v.as_f64().ok_or_else(|| Error::TypeMismatch {
      field:    path(at, field),
      expected: "number",
      found:    json_type(v),
    }),
  }
}

/// An optional integer field. Fractional numbers are a mismatch, not a
/// truncation.
fn opt_i64(
  obj: &Map<String, Value>,
  at: &str,
  field: &str,
) -> Result<Option<i64>> {
  match obj.get(field) {
    None => Ok(None),
    Some(v) => match v.as_i64() {
      Some(n) => Ok(Some(n)),
      None => Err(Error::TypeMismatch {
        field:    path(at, field),
        expected: "integer",
        found:    json_type(v),
      }),
    },
  }
}

fn opt_string(
  obj: &Map<String, Value>,
  at: &str,
  field: &str,
) -> Result<Option<String>> {
  match obj.get(field) {
    None => Ok(None),
    Some(Value::String(s)) => Ok(Some(s.clone())),
    Some(other) => Err(Error::TypeMismatch {
      field:    path(at, field),
      expected: "string",
      found:    json_type(other),
    }),
  }
}

/// An optional string-to-string map; every value must itself be a string.
fn opt_string_map(
  obj: &Map<String, Value>,
  at: &str,
  field: &str,
) -> Result<Option<BTreeMap<String, String>>> {
  let Some(v) = obj.get(field) else { return Ok(None) };
  let entries = object_at(v, &path(at, field))?;
  let mut map = BTreeMap::new();
  for (key, value) in entries {
    let Value::String(s) = value else {
      return Err(Error::TypeMismatch {
        field:    path(&path(at, field), key),
        expected: "string",
        found:    json_type(value),
      });
    };
    map.insert(key.clone(), s.clone());
  }
  Ok(Some(map))
}

/// `batteryLevel`: optional, integral, inclusive 0..=100. Out-of-range
/// values are an error, never clamped.
fn opt_battery_level(obj: &Map<String, Value>, at: &str) -> Result<Option<u8>> {
  let Some(v) = obj.get("batteryLevel") else { return Ok(None) };
  let field = path(at, "batteryLevel");
  let n = v.as_i64().ok_or_else(|| Error::TypeMismatch {
    field:    field.clone(),
    expected: "integer",
    found:    json_type(v),
  })?;
  if !(0..=100).contains(&n) {
    return Err(Error::RangeViolation {
      field,
      value: n as f64,
      allowed: "0..=100",
    });
  }
  Ok(Some(n as u8))
}

// ─── Record decoders ─────────────────────────────────────────────────────────

pub(crate) fn reading_from_value(
  value: &Value,
  at: &str,
  clock: &dyn Clock,
) -> Result<LocationReading> {
  let obj = object_at(value, at)?;

  let device_id = require_identifier(obj, at, "deviceId")?;
  let x = require_f64(obj, at, "x")?;
  let y = require_f64(obj, at, "y")?;
  let z = f64_or(obj, at, "z", 0.0)?;

  let accuracy = f64_or(obj, at, "accuracy", 0.0)?;
  if accuracy < 0.0 {
    return Err(Error::RangeViolation {
      field:   path(at, "accuracy"),
      value:   accuracy,
      allowed: ">= 0",
    });
  }

  // Epoch seconds; stamped from the clock exactly once when absent.
  let timestamp = match opt_i64(obj, at, "timestamp")? {
    Some(t) => t,
    None => clock.now_seconds(),
  };

  Ok(LocationReading {
    device_id,
    x,
    y,
    z,
    accuracy,
    timestamp,
    area: opt_string(obj, at, "area")?,
    battery_level: opt_battery_level(obj, at)?,
    additional_info: opt_string_map(obj, at, "additionalInfo")?,
  })
}

pub(crate) fn point_from_value(value: &Value, at: &str) -> Result<Point> {
  let obj = object_at(value, at)?;
  Ok(Point {
    x: require_f64(obj, at, "x")?,
    y: require_f64(obj, at, "y")?,
  })
}

pub(crate) fn area_from_value(value: &Value, at: &str) -> Result<Area> {
  let obj = object_at(value, at)?;

  let id = require_identifier(obj, at, "id")?;
  let name = require_identifier(obj, at, "name")?;
  let description = opt_string(obj, at, "description")?;

  // Order is significant (polygon winding); the minimum-3 rule for a closed
  // region is the geometry consumer's precondition, not checked here.
  let boundary_points = match obj.get("boundaryPoints") {
    None => Vec::new(),
    Some(Value::Array(items)) => {
      let mut points = Vec::with_capacity(items.len());
      for (i, item) in items.iter().enumerate() {
        let element = format!("{}[{i}]", path(at, "boundaryPoints"));
        points.push(point_from_value(item, &element)?);
      }
      points
    }
    Some(other) => {
      return Err(Error::TypeMismatch {
        field:    path(at, "boundaryPoints"),
        expected: "array",
        found:    json_type(other),
      });
    }
  };

  let level = match opt_i64(obj, at, "level")? {
    None => 0,
    Some(n) => i32::try_from(n).map_err(|_| Error::RangeViolation {
      field:   path(at, "level"),
      value:   n as f64,
      allowed: "32-bit integer",
    })?,
  };

  Ok(Area {
    id,
    name,
    description,
    boundary_points,
    level,
  })
}

pub(crate) fn event_from_value(
  value: &Value,
  at: &str,
  clock: &dyn Clock,
) -> Result<PatientEvent> {
  let obj = object_at(value, at)?;

  let patient_id = require_identifier(obj, at, "patientId")?;
  let kind = require_string(obj, at, "type")?;
  let description = require_string(obj, at, "description")?;

  // Epoch milliseconds here, unlike the reading's seconds.
  let timestamp = match opt_i64(obj, at, "timestamp")? {
    Some(t) => t,
    None => clock.now_millis(),
  };

  let location_data = match obj.get("locationData") {
    None => None,
    Some(v) => Some(reading_from_value(v, &path(at, "locationData"), clock)?),
  };

  Ok(PatientEvent {
    patient_id,
    kind,
    description,
    timestamp,
    location_data,
  })
}

#[cfg(test)]
mod tests {
  use locus_core::clock::FixedClock;
  use serde_json::json;

  use super::*;

  const CLOCK: FixedClock = FixedClock {
    seconds: 1_732_000_100,
    millis:  1_732_000_100_000,
  };

  #[test]
  fn reading_rejects_non_number_coordinate() {
    let value = json!({"deviceId": "uwb-17", "x": "3.25", "y": 8.1});
    let err = reading_from_value(&value, "", &CLOCK).unwrap_err();
    assert!(matches!(
      err,
      Error::TypeMismatch { ref field, expected: "number", found: "string" }
        if field == "x"
    ));
  }

  #[test]
  fn reading_rejects_empty_device_id() {
    let value = json!({"deviceId": "", "x": 1.0, "y": 2.0});
    let err = reading_from_value(&value, "", &CLOCK).unwrap_err();
    assert!(matches!(
      err,
      Error::TypeMismatch { ref field, expected: "non-empty string", .. }
        if field == "deviceId"
    ));
  }

  #[test]
  fn reading_rejects_fractional_timestamp() {
    let value =
      json!({"deviceId": "uwb-17", "x": 1.0, "y": 2.0, "timestamp": 17.5});
    let err = reading_from_value(&value, "", &CLOCK).unwrap_err();
    assert!(matches!(
      err,
      Error::TypeMismatch { ref field, expected: "integer", .. }
        if field == "timestamp"
    ));
  }

  #[test]
  fn reading_rejects_negative_accuracy() {
    let value =
      json!({"deviceId": "uwb-17", "x": 1.0, "y": 2.0, "accuracy": -0.5});
    let err = reading_from_value(&value, "", &CLOCK).unwrap_err();
    assert!(matches!(
      err,
      Error::RangeViolation { ref field, .. } if field == "accuracy"
    ));
  }

  #[test]
  fn reading_rejects_non_string_metadata_value() {
    let value = json!({
      "deviceId": "uwb-17", "x": 1.0, "y": 2.0,
      "additionalInfo": {"firmware": 21}
    });
    let err = reading_from_value(&value, "", &CLOCK).unwrap_err();
    assert!(matches!(
      err,
      Error::TypeMismatch { ref field, expected: "string", found: "number" }
        if field == "additionalInfo.firmware"
    ));
  }

  #[test]
  fn area_names_the_broken_boundary_point() {
    let value = json!({
      "id": "ward-3", "name": "Ward 3",
      "boundaryPoints": [{"x": 0.0, "y": 0.0}, {"x": 4.0}]
    });
    let err = area_from_value(&value, "").unwrap_err();
    assert!(matches!(
      err,
      Error::MissingField { ref field } if field == "boundaryPoints[1].y"
    ));
  }

  #[test]
  fn area_without_boundary_decodes_empty() {
    let value = json!({"id": "ward-3", "name": "Ward 3"});
    let area = area_from_value(&value, "").unwrap();
    assert!(area.boundary_points.is_empty());
    assert_eq!(area.level, 0);
  }

  #[test]
  fn event_names_nested_reading_failures() {
    let value = json!({
      "patientId": "p-42", "type": "fall_detected", "description": "bed exit",
      "locationData": {"x": 1.0, "y": 2.0}
    });
    let err = event_from_value(&value, "", &CLOCK).unwrap_err();
    assert!(matches!(
      err,
      Error::MissingField { ref field } if field == "locationData.deviceId"
    ));
  }

  #[test]
  fn non_object_root_is_a_type_mismatch() {
    let err = point_from_value(&json!([1.0, 2.0]), "").unwrap_err();
    assert!(matches!(
      err,
      Error::TypeMismatch { ref field, expected: "object", found: "array" }
        if field == "(root)"
    ));
  }
}
