use measurements::{Length, Mass, Volume};

use crate::dimensions::Dimensions;
use crate::level::Level;

pub trait Tank {
  fn dimensions(&self) -> &Dimensions;

  /// Total internal volume.
  fn volume(&self) -> Volume;

  /// Volume of the liquid up to the current liquid level.
  fn liquid_volume(&self) -> Volume;

  /// Highest possible liquid level, the basis of the fill percentage.
  fn max_level(&self) -> Length {
    self.dimensions().height()
  }

  fn empty_volume(&self) -> Volume {
    self.volume() - self.liquid_volume()
  }

  fn mass(&self) -> Mass {
    Mass::from_kilograms(self.liquid_volume().as_cubic_meters() * self.dimensions().density() * 1000.0)
  }

  fn fill_percentage(&self) -> f64 {
    let max_level = self.max_level().as_meters();

    if max_level > 0.0 {
      self.dimensions().liquid_level().as_meters() / max_level * 100.0
    } else {
      0.0
    }
  }

  fn level(&self) -> Level {
    Level {
      height: self.dimensions().liquid_level(),
      volume: self.liquid_volume(),
      percentage: self.fill_percentage(),
    }
  }
}
