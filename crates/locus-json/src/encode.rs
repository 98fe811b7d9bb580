//! Record-to-JSON encoding.
//!
//! Encoding rides the `Serialize` derives in `locus-core`: fields are
//! emitted in declaration order, absent optionals are omitted entirely
//! (never `null`), and the extension-metadata map is sorted, so identical
//! records always produce identical text. Consumers should still treat key
//! order as unspecified.

use locus_core::{
  area::{Area, Point},
  event::PatientEvent,
  reading::LocationReading,
};

use crate::error::Result;

pub fn encode_reading(reading: &LocationReading) -> Result<String> {
  Ok(serde_json::to_string(reading)?)
}

pub fn encode_area(area: &Area) -> Result<String> {
  Ok(serde_json::to_string(area)?)
}

pub fn encode_point(point: &Point) -> Result<String> {
  Ok(serde_json::to_string(point)?)
}

pub fn encode_event(event: &PatientEvent) -> Result<String> {
  Ok(serde_json::to_string(event)?)
}
