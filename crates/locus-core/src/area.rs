//! Areas — named regions of a floor plan, bounded by a point polygon.

use serde::{Deserialize, Serialize};

/// A bare coordinate pair. Pure value type: two equal points are the same
/// point, there is no identity beyond the coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
  pub x: f64,
  pub y: f64,
}

/// A named region, e.g. a ward, a room, or a restricted zone.
///
/// `id` uniqueness is owned by whatever collection holds the areas, not by
/// this type. `boundary_points` is ordered (the order defines the polygon
/// winding) and a closed region needs at least 3 points — a precondition
/// for geometry consumers that this module documents but does not enforce.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Area {
  pub id:   String,
  pub name: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(default)]
  pub boundary_points: Vec<Point>,
  /// Floor index; 0 is the ground floor.
  #[serde(default)]
  pub level: i32,
}

impl Area {
  /// An area with no description, no boundary yet, on the ground floor.
  pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
    Self {
      id: id.into(),
      name: name.into(),
      description: None,
      boundary_points: Vec::new(),
      level: 0,
    }
  }
}
