//! Record types for the Locus indoor-positioning data plane.
//!
//! This crate defines the four record shapes exchanged by the tracking
//! system — location readings, areas with their boundary polygons, bare
//! coordinate points, and patient events — plus the clock seam used for
//! construction-time timestamp defaults.
//!
//! Records are plain immutable values: no setters, no interior mutability,
//! no I/O. Any "update" is the construction of a new record. The JSON codec
//! (with its validation rules) lives in `locus-json`; all other crates
//! depend on this one and it depends on nothing beyond serde and chrono.

pub mod area;
pub mod clock;
pub mod event;
pub mod reading;

pub use area::{Area, Point};
pub use clock::{Clock, FixedClock, SystemClock};
pub use event::PatientEvent;
pub use reading::LocationReading;
