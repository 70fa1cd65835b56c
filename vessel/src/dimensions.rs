use log::{debug, warn};
use measurements::Length;

use crate::error::Error;

const DEFAULT_DENSITY: f64 = 1.0;

/// Shared geometric and physical state of a tank.
///
/// For rectangular tanks `diameter` is the side of the square cross-section,
/// for capsules `height` is the length of the cylindrical section only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
  diameter: Length,
  height: Length,
  liquid_level: Length,
  density: f64,
}

impl Dimensions {
  /// Validates the dimensions, rejecting non-finite or non-positive diameter,
  /// height and density as well as a non-finite liquid level.
  ///
  /// `density` is in g/cm³.
  pub fn new(diameter: Length, height: Length, liquid_level: Length, density: f64) -> Result<Self, Error> {
    positive("diameter", diameter.as_meters())?;
    positive("height", height.as_meters())?;
    positive("density", density)?;

    if !liquid_level.as_meters().is_finite() {
      return Err(Error::InvalidInput { field: "liquid level", value: liquid_level.as_meters() })
    }

    Ok(Self { diameter, height, liquid_level, density })
  }

  /// Coerces invalid values instead of rejecting them: lengths which are
  /// non-finite or negative become zero, a non-finite or non-positive
  /// density becomes 1 g/cm³.
  pub fn lenient(diameter: Length, height: Length, liquid_level: Length, density: f64) -> Self {
    let density = if density.is_finite() && density > 0.0 {
      density
    } else {
      warn!("Replacing density {} with {} g/cm³.", density, DEFAULT_DENSITY);
      DEFAULT_DENSITY
    };

    Self {
      diameter: non_negative("diameter", diameter),
      height: non_negative("height", height),
      liquid_level: non_negative("liquid level", liquid_level),
      density,
    }
  }

  pub fn diameter(&self) -> Length {
    self.diameter
  }

  pub fn radius(&self) -> Length {
    self.diameter / 2.0
  }

  pub fn height(&self) -> Length {
    self.height
  }

  pub fn liquid_level(&self) -> Length {
    self.liquid_level
  }

  /// Density in g/cm³.
  pub fn density(&self) -> f64 {
    self.density
  }

  /// Returns a copy with the liquid level clamped to `[0, max_level]`.
  pub(crate) fn clamp_level(mut self, max_level: Length) -> Self {
    let level = self.liquid_level.as_meters();
    let clamped = level.clamp(0.0, max_level.as_meters().max(0.0));

    if clamped != level {
      debug!("Clamping liquid level from {} m to {} m.", level, clamped);
      self.liquid_level = Length::from_meters(clamped);
    }

    self
  }
}

fn positive(field: &'static str, value: f64) -> Result<(), Error> {
  if value.is_finite() && value > 0.0 {
    Ok(())
  } else {
    Err(Error::InvalidInput { field, value })
  }
}

fn non_negative(field: &'static str, length: Length) -> Length {
  let meters = length.as_meters();

  if meters.is_finite() && meters >= 0.0 {
    length
  } else {
    warn!("Replacing {} {} m with 0 m.", field, meters);
    Length::from_meters(0.0)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn meters(m: f64) -> Length {
    Length::from_meters(m)
  }

  #[test]
  fn rejects_non_positive_values() {
    assert_eq!(
      Dimensions::new(meters(0.0), meters(1.0), meters(0.5), 1.0),
      Err(Error::InvalidInput { field: "diameter", value: 0.0 }),
    );
    assert_eq!(
      Dimensions::new(meters(1.0), meters(-2.0), meters(0.5), 1.0),
      Err(Error::InvalidInput { field: "height", value: -2.0 }),
    );
    assert_eq!(
      Dimensions::new(meters(1.0), meters(2.0), meters(0.5), 0.0),
      Err(Error::InvalidInput { field: "density", value: 0.0 }),
    );
  }

  #[test]
  fn rejects_non_finite_values() {
    assert!(Dimensions::new(meters(f64::NAN), meters(1.0), meters(0.5), 1.0).is_err());
    assert!(Dimensions::new(meters(1.0), meters(f64::INFINITY), meters(0.5), 1.0).is_err());
    assert!(Dimensions::new(meters(1.0), meters(1.0), meters(f64::NAN), 1.0).is_err());
    assert!(Dimensions::new(meters(1.0), meters(1.0), meters(0.5), f64::NAN).is_err());
  }

  #[test]
  fn lenient_coerces_invalid_values() {
    let dimensions = Dimensions::lenient(meters(f64::NAN), meters(-1.0), meters(0.5), 0.0);

    assert_eq!(dimensions.diameter().as_meters(), 0.0);
    assert_eq!(dimensions.height().as_meters(), 0.0);
    assert_eq!(dimensions.liquid_level().as_meters(), 0.5);
    assert_eq!(dimensions.density(), 1.0);
  }

  #[test]
  fn clamp_level() {
    let dimensions = Dimensions::new(meters(1.0), meters(2.0), meters(3.0), 1.0).unwrap();
    assert_eq!(dimensions.clamp_level(meters(2.0)).liquid_level().as_meters(), 2.0);

    let dimensions = Dimensions::new(meters(1.0), meters(2.0), meters(-3.0), 1.0).unwrap();
    assert_eq!(dimensions.clamp_level(meters(2.0)).liquid_level().as_meters(), 0.0);
  }
}
