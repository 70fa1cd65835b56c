use measurements::{Length, Volume};

use crate::dimensions::Dimensions;
use crate::geometry::{circle_area, sphere_volume, spherical_cap_volume};
use crate::tank::Tank;

/// Cylinder closed by a hemisphere at each end, standing upright.
///
/// `height` is the length of the cylindrical section, so the overall height
/// is `height + diameter`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapsuleTank {
  dimensions: Dimensions,
}

impl CapsuleTank {
  pub fn new(dimensions: Dimensions) -> Self {
    let dimensions = dimensions.clamp_level(dimensions.height() + dimensions.diameter());
    Self { dimensions }
  }

  pub fn total_height(&self) -> Length {
    self.dimensions.height() + self.dimensions.diameter()
  }
}

impl Tank for CapsuleTank {
  fn dimensions(&self) -> &Dimensions {
    &self.dimensions
  }

  fn max_level(&self) -> Length {
    self.total_height()
  }

  fn volume(&self) -> Volume {
    let d = &self.dimensions;
    let r = d.radius().as_meters();

    Volume::from_cubic_meters(circle_area(r) * d.height().as_meters() + sphere_volume(r))
  }

  fn liquid_volume(&self) -> Volume {
    let d = &self.dimensions;
    let r = d.radius().as_meters();
    let cylinder_height = d.height().as_meters();
    let h = d.liquid_level().as_meters();

    let volume = if h <= r {
      spherical_cap_volume(r, h)
    } else if h <= cylinder_height + r {
      sphere_volume(r) / 2.0 + circle_area(r) * (h - r)
    } else {
      let top = h - cylinder_height - r;
      sphere_volume(r) / 2.0 + circle_area(r) * cylinder_height + spherical_cap_volume(r, top)
    };

    Volume::from_cubic_meters(volume)
  }
}

#[cfg(test)]
mod tests {
  use std::f64::consts::PI;

  use approx::assert_relative_eq;

  use super::*;

  const EPSILON: f64 = 1e-12;

  fn tank(diameter: f64, height: f64, level: f64) -> CapsuleTank {
    let dimensions = Dimensions::new(
      Length::from_meters(diameter),
      Length::from_meters(height),
      Length::from_meters(level),
      1.0,
    ).unwrap();

    CapsuleTank::new(dimensions)
  }

  fn liquid(diameter: f64, height: f64, level: f64) -> f64 {
    tank(diameter, height, level).liquid_volume().as_cubic_meters()
  }

  #[test]
  fn total_volume() {
    let tank = tank(2.0, 3.0, 0.0);
    assert_relative_eq!(tank.volume().as_cubic_meters(), 3.0 * PI + 4.0 / 3.0 * PI, max_relative = EPSILON);
  }

  #[test]
  fn regimes() {
    // Inside the bottom cap.
    assert_relative_eq!(liquid(2.0, 3.0, 0.5), PI * 0.25 / 3.0 * 2.5, max_relative = EPSILON);
    // Inside the cylinder.
    assert_relative_eq!(liquid(2.0, 3.0, 2.0), 2.0 / 3.0 * PI + PI, max_relative = EPSILON);
    // Inside the top cap.
    assert_relative_eq!(liquid(2.0, 3.0, 4.5), 2.0 / 3.0 * PI + 3.0 * PI + PI * 0.25 / 3.0 * 2.5, max_relative = EPSILON);
  }

  #[test]
  fn continuous_at_regime_boundaries() {
    let (diameter, height) = (1.8, 2.5);
    let r = diameter / 2.0;

    for boundary in [r, height + r] {
      let below = liquid(diameter, height, boundary - 1e-12);
      let at = liquid(diameter, height, boundary);
      let above = liquid(diameter, height, boundary + 1e-12);

      assert_relative_eq!(below, at, max_relative = 1e-9);
      assert_relative_eq!(above, at, max_relative = 1e-9);
    }
  }

  #[test]
  fn full() {
    let tank = tank(1.8, 2.5, 10.0);

    assert_relative_eq!(tank.dimensions().liquid_level().as_meters(), 4.3, max_relative = EPSILON);
    assert_relative_eq!(tank.liquid_volume().as_cubic_meters(), tank.volume().as_cubic_meters(), max_relative = 1e-9);
    assert_relative_eq!(tank.fill_percentage(), 100.0, max_relative = EPSILON);
  }

  #[test]
  fn fill_percentage_uses_total_height() {
    let tank = tank(2.0, 3.0, 2.5);
    assert_relative_eq!(tank.fill_percentage(), 50.0, max_relative = EPSILON);
  }

  #[test]
  fn liquid_volume_grows_with_level() {
    let mut previous = 0.0;

    for step in 0..=50 {
      let volume = liquid(2.0, 3.0, step as f64 * 0.1);
      assert!(volume >= previous, "{} < {} at step {}", volume, previous, step);
      previous = volume;
    }
  }
}
