//! JSON codec for the Locus record types.
//!
//! Converts between interchange-format JSON text and the [`locus_core`]
//! records. Pure synchronous; no I/O, no shared state — calls on
//! independent inputs may run in parallel with no coordination.
//!
//! Decoding validates field presence, type, and range, and reports exactly
//! one typed [`Error`] per failure; there is no partial success. Timestamp
//! defaults come from the caller-supplied [`Clock`], never from an inline
//! wall-clock read.
//!
//! # Quick start
//!
//! ```
//! use locus_core::clock::SystemClock;
//! use locus_json::{decode_reading, encode_reading};
//!
//! let json = r#"{"deviceId":"uwb-17","x":3.25,"y":8.1}"#;
//! let reading = decode_reading(json, &SystemClock).unwrap();
//! assert_eq!(reading.accuracy, 0.0); // defaulted
//! let out = encode_reading(&reading).unwrap();
//! assert!(out.contains("\"deviceId\":\"uwb-17\""));
//! ```

pub mod error;

mod decode;
mod encode;

pub use encode::{encode_area, encode_event, encode_point, encode_reading};
pub use error::{Error, Result};
use locus_core::{
  area::{Area, Point},
  clock::Clock,
  event::PatientEvent,
  reading::LocationReading,
};
use serde_json::Value;

// ─── Decode API ──────────────────────────────────────────────────────────────

/// Decode a [`LocationReading`]. An absent `timestamp` is stamped from
/// `clock` in epoch seconds.
pub fn decode_reading(
  input: &str,
  clock: &dyn Clock,
) -> Result<LocationReading> {
  let value: Value = serde_json::from_str(input)?;
  decode::reading_from_value(&value, "", clock)
}

/// Decode an [`Area`]. `boundaryPoints` order is preserved as given.
pub fn decode_area(input: &str) -> Result<Area> {
  let value: Value = serde_json::from_str(input)?;
  decode::area_from_value(&value, "")
}

/// Decode a bare [`Point`].
pub fn decode_point(input: &str) -> Result<Point> {
  let value: Value = serde_json::from_str(input)?;
  decode::point_from_value(&value, "")
}

/// Decode a [`PatientEvent`]. An absent `timestamp` is stamped from `clock`
/// in epoch milliseconds; an embedded `locationData` reading decodes under
/// the same rules (and the same clock) as [`decode_reading`].
pub fn decode_event(input: &str, clock: &dyn Clock) -> Result<PatientEvent> {
  let value: Value = serde_json::from_str(input)?;
  decode::event_from_value(&value, "", clock)
}

// ─── Codec law tests ─────────────────────────────────────────────────────────
