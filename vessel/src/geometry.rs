//! Closed-form solids used by the tank shapes.
//!
//! All lengths are in meters, areas in m² and volumes in m³.

use std::f64::consts::PI;

pub fn circle_area(radius: f64) -> f64 {
  PI * radius * radius
}

/// Volume of a right circular cone with the given base radius and height.
pub fn cone_volume(radius: f64, height: f64) -> f64 {
  circle_area(radius) * height / 3.0
}

pub fn sphere_volume(radius: f64) -> f64 {
  4.0 / 3.0 * PI * radius.powi(3)
}

/// Volume of the cap cut from a sphere of `radius` by a plane `cap_height` above its lowest point.
pub fn spherical_cap_volume(radius: f64, cap_height: f64) -> f64 {
  PI * cap_height * cap_height / 3.0 * (3.0 * radius - cap_height)
}

/// Area of a circle of `radius` lying below a horizontal chord `depth` above its lowest point.
///
/// `depth` is clamped to `[0, 2 * radius]`. The `acos` argument is clamped to
/// `[-1, 1]` so rounding at the boundaries never yields `NaN`.
pub fn circular_segment_area(radius: f64, depth: f64) -> f64 {
  if radius <= 0.0 {
    return 0.0
  }

  let depth = depth.clamp(0.0, 2.0 * radius);
  let cos_half_angle = ((radius - depth) / radius).clamp(-1.0, 1.0);
  let theta = 2.0 * cos_half_angle.acos();

  radius * radius / 2.0 * (theta - theta.sin())
}

#[cfg(test)]
mod tests {
  use approx::{assert_abs_diff_eq, assert_relative_eq};

  use super::*;

  #[test]
  fn segment_is_empty_at_the_bottom() {
    assert_abs_diff_eq!(circular_segment_area(1.0, 0.0), 0.0);
  }

  #[test]
  fn segment_is_half_circle_at_the_center() {
    assert_relative_eq!(circular_segment_area(1.0, 1.0), PI / 2.0, max_relative = 1e-12);
  }

  #[test]
  fn segment_is_full_circle_at_the_top() {
    assert_relative_eq!(circular_segment_area(0.7, 1.4), circle_area(0.7), max_relative = 1e-12);
  }

  #[test]
  fn segment_survives_rounding_past_the_boundary() {
    let area = circular_segment_area(0.1, 0.2 + 1e-17);
    assert!(area.is_finite());
    assert_relative_eq!(area, circle_area(0.1), max_relative = 1e-12);
    assert_abs_diff_eq!(circular_segment_area(0.1, -1e-17), 0.0);
  }

  #[test]
  fn segment_of_degenerate_circle() {
    assert_eq!(circular_segment_area(0.0, 0.0), 0.0);
  }

  #[test]
  fn cap_of_full_height_is_sphere() {
    assert_relative_eq!(spherical_cap_volume(1.5, 3.0), sphere_volume(1.5), max_relative = 1e-12);
    assert_relative_eq!(spherical_cap_volume(1.5, 1.5), sphere_volume(1.5) / 2.0, max_relative = 1e-12);
  }

  #[test]
  fn cone_is_a_third_of_cylinder() {
    assert_relative_eq!(cone_volume(2.0, 3.0), circle_area(2.0), max_relative = 1e-12);
  }
}
