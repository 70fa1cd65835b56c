use measurements::Length;
use measurements::Volume;

use crate::dimensions::Dimensions;
use crate::tank::Tank;

/// Box-shaped tank; its width is the `diameter` of its [`Dimensions`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CuboidTank {
  dimensions: Dimensions,
  length: Length,
}

impl CuboidTank {
  pub fn new(dimensions: Dimensions, length: Length) -> Self {
    let dimensions = dimensions.clamp_level(dimensions.height());
    Self { dimensions, length }
  }

  /// Tank with a square cross-section whose side is the `diameter`.
  pub fn square(dimensions: Dimensions) -> Self {
    Self::new(dimensions, dimensions.diameter())
  }

  pub fn length(&self) -> Length {
    self.length
  }

  pub fn width(&self) -> Length {
    self.dimensions.diameter()
  }

  pub fn height(&self) -> Length {
    self.dimensions.height()
  }
}

impl Tank for CuboidTank {
  fn dimensions(&self) -> &Dimensions {
    &self.dimensions
  }

  fn volume(&self) -> Volume {
    Volume::from_liters(self.length.as_decimeters() * self.width().as_decimeters() * self.height().as_decimeters())
  }

  fn liquid_volume(&self) -> Volume {
    let filling_height = self.dimensions.liquid_level();
    Volume::from_liters(self.length.as_decimeters() * self.width().as_decimeters() * filling_height.as_decimeters())
  }
}
