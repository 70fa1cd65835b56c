use measurements::Volume;

use crate::dimensions::Dimensions;
use crate::geometry::{circle_area, cone_volume};
use crate::head::HeadType;
use crate::tank::Tank;

/// Upright cylinder, optionally with a conical head at the top and bottom.
///
/// Each conical head is modelled as a cone as tall as the tank's diameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerticalCylinder {
  dimensions: Dimensions,
  head: HeadType,
}

impl VerticalCylinder {
  pub fn new(dimensions: Dimensions, head: HeadType) -> Self {
    let dimensions = dimensions.clamp_level(dimensions.height());
    Self { dimensions, head }
  }

  pub fn head(&self) -> HeadType {
    self.head
  }

  fn head_volume(&self) -> f64 {
    let d = &self.dimensions;
    cone_volume(d.radius().as_meters(), d.diameter().as_meters())
  }
}

impl Tank for VerticalCylinder {
  fn dimensions(&self) -> &Dimensions {
    &self.dimensions
  }

  fn volume(&self) -> Volume {
    let d = &self.dimensions;
    let cylinder = circle_area(d.radius().as_meters()) * d.height().as_meters();

    let heads = match self.head {
      HeadType::Flat => 0.0,
      HeadType::Conical => 2.0 * self.head_volume(),
    };

    Volume::from_cubic_meters(cylinder + heads)
  }

  fn liquid_volume(&self) -> Volume {
    let d = &self.dimensions;
    let radius = d.radius().as_meters();
    let level = d.liquid_level().as_meters();
    let cylinder = circle_area(radius) * level;

    // The head contribution grows with the level and saturates at one full cone.
    let head = match self.head {
      HeadType::Conical if level > 0.0 => self.head_volume().min(cone_volume(radius, level)),
      _ => 0.0,
    };

    Volume::from_cubic_meters(cylinder + head)
  }
}
