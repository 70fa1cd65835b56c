use measurements::{Length, Volume};

/// Liquid state of a tank.
#[derive(Debug, Clone, Copy)]
pub struct Level {
  pub(crate) height: Length,
  pub(crate) volume: Volume,
  pub(crate) percentage: f64,
}

impl Level {
  pub fn height(&self) -> Length {
    self.height
  }

  pub fn volume(&self) -> Volume {
    self.volume
  }

  /// Fill percentage in the range `0.0..=100.0`.
  pub fn percentage(&self) -> f64 {
    self.percentage
  }
}

impl From<Level> for f64 {
  fn from(level: Level) -> Self {
    level.percentage
  }
}

impl From<Level> for Volume {
  fn from(level: Level) -> Self {
    level.volume
  }
}
