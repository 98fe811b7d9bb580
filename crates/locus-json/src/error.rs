//! Error types for the locus-json codec.
//!
//! All variants except [`Error::Json`] are produced by decode validation;
//! encoding does not fail in practice. Fields are named by dotted path from
//! the record root (`locationData.deviceId`, `boundaryPoints[1].x`) so
//! nested failures stay attributable.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// A field the schema marks as required is absent from the input object.
  #[error("missing required field: {field}")]
  MissingField { field: String },

  /// A field is present but its value cannot be coerced to the declared
  /// type (including an empty string where a non-empty identifier is
  /// declared, and a non-object where a record is expected).
  #[error("{field}: expected {expected}, found {found}")]
  TypeMismatch {
    field:    String,
    expected: &'static str,
    found:    &'static str,
  },

  /// A field is well-typed but outside its declared range. Never clamped.
  #[error("{field}: value {value} outside allowed range {allowed}")]
  RangeViolation {
    field:   String,
    value:   f64,
    allowed: &'static str,
  },

  /// The input is not well-formed JSON at all.
  #[error("malformed JSON: {0}")]
  Json(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
