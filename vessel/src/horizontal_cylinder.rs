use measurements::Volume;

use crate::dimensions::Dimensions;
use crate::geometry::{circle_area, circular_segment_area, sphere_volume};
use crate::head::HeadType;
use crate::tank::Tank;

/// Cylinder lying on its side; `height` is the axial length.
///
/// Conical heads add a combined volume of one hemisphere to the total. The
/// liquid volume covers the cylindrical section only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizontalCylinder {
  dimensions: Dimensions,
  head: HeadType,
}

impl HorizontalCylinder {
  pub fn new(dimensions: Dimensions, head: HeadType) -> Self {
    let dimensions = dimensions.clamp_level(dimensions.height());
    Self { dimensions, head }
  }

  pub fn head(&self) -> HeadType {
    self.head
  }
}

impl Tank for HorizontalCylinder {
  fn dimensions(&self) -> &Dimensions {
    &self.dimensions
  }

  fn volume(&self) -> Volume {
    let d = &self.dimensions;
    let radius = d.radius().as_meters();
    let cylinder = circle_area(radius) * d.height().as_meters();

    let heads = match self.head {
      HeadType::Flat => 0.0,
      HeadType::Conical => sphere_volume(radius) / 2.0,
    };

    Volume::from_cubic_meters(cylinder + heads)
  }

  fn liquid_volume(&self) -> Volume {
    let d = &self.dimensions;

    // The cross-section cannot hold liquid above its own diameter.
    let depth = d.liquid_level().as_meters().min(d.diameter().as_meters());
    let area = circular_segment_area(d.radius().as_meters(), depth);

    Volume::from_cubic_meters(area * d.height().as_meters())
  }
}

#[cfg(test)]
mod tests {
  use std::f64::consts::PI;

  use approx::{assert_abs_diff_eq, assert_relative_eq};
  use measurements::Length;

  use super::*;

  fn tank(diameter: f64, length: f64, level: f64, head: HeadType) -> HorizontalCylinder {
    let dimensions = Dimensions::new(
      Length::from_meters(diameter),
      Length::from_meters(length),
      Length::from_meters(level),
      1.0,
    ).unwrap();

    HorizontalCylinder::new(dimensions, head)
  }

  #[test]
  fn half_full_cross_section() {
    let tank = tank(2.0, 4.0, 1.0, HeadType::Flat);

    assert_relative_eq!(tank.liquid_volume().as_cubic_meters(), 2.0 * PI, max_relative = 1e-12);
    assert_relative_eq!(tank.volume().as_cubic_meters(), 4.0 * PI, max_relative = 1e-12);
    assert_relative_eq!(tank.fill_percentage(), 25.0);
  }

  #[test]
  fn empty() {
    let tank = tank(2.0, 4.0, 0.0, HeadType::Flat);
    assert_abs_diff_eq!(tank.liquid_volume().as_cubic_meters(), 0.0);
  }

  #[test]
  fn full_cross_section() {
    let flat = tank(2.0, 4.0, 2.0, HeadType::Flat);
    assert_relative_eq!(flat.liquid_volume().as_cubic_meters(), flat.volume().as_cubic_meters(), max_relative = 1e-9);

    // Levels above the diameter do not add liquid.
    let above = tank(2.0, 4.0, 3.5, HeadType::Flat);
    assert_relative_eq!(above.liquid_volume().as_cubic_meters(), 4.0 * PI, max_relative = 1e-9);
  }

  #[test]
  fn conical_heads_add_a_hemisphere() {
    let tank = tank(2.0, 4.0, 2.0, HeadType::Conical);

    assert_relative_eq!(tank.volume().as_cubic_meters(), 4.0 * PI + 2.0 / 3.0 * PI, max_relative = 1e-12);
    assert_relative_eq!(tank.liquid_volume().as_cubic_meters(), 4.0 * PI, max_relative = 1e-9);
  }

  #[test]
  fn level_is_clamped_to_length() {
    let tank = tank(3.0, 1.0, 2.0, HeadType::Flat);
    assert_eq!(tank.dimensions().liquid_level().as_meters(), 1.0);
    assert_relative_eq!(tank.fill_percentage(), 100.0);
  }

  #[test]
  fn liquid_volume_grows_with_level() {
    let mut previous = 0.0;

    for step in 0..=40 {
      let volume = tank(2.0, 4.0, step as f64 * 0.1, HeadType::Flat).liquid_volume().as_cubic_meters();
      assert!(volume >= previous, "{} < {} at step {}", volume, previous, step);
      previous = volume;
    }
  }
}
