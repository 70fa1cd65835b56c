//! Conversion between the input unit systems and the SI units used internally.

use std::fmt;
use std::str::FromStr;

use measurements::Length;

use crate::error::Error;

const METERS_PER_INCH: f64 = 0.0254;
const G_CM3_PER_LB_FT3: f64 = 0.016018463;
const LITERS_PER_M3: f64 = 1000.0;
const GALLONS_PER_M3: f64 = 264.172;

/// Unit system of the raw input: millimeters and g/cm³, or inches and lb/ft³.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum UnitSystem {
  #[default]
  Metric,
  Imperial,
}

impl UnitSystem {
  pub fn length_unit(&self) -> &'static str {
    match self {
      UnitSystem::Metric => "mm",
      UnitSystem::Imperial => "in",
    }
  }

  pub fn density_unit(&self) -> &'static str {
    match self {
      UnitSystem::Metric => "g/cm³",
      UnitSystem::Imperial => "lb/ft³",
    }
  }
}

impl FromStr for UnitSystem {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_ascii_lowercase().as_str() {
      "metric" => Ok(UnitSystem::Metric),
      "imperial" => Ok(UnitSystem::Imperial),
      _ => Err(Error::UnsupportedUnitSystem(s.to_owned())),
    }
  }
}

impl fmt::Display for UnitSystem {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      UnitSystem::Metric => "metric",
      UnitSystem::Imperial => "imperial",
    })
  }
}

/// Converts millimeters (metric) or inches (imperial) to meters.
pub fn to_meters(value: f64, unit: UnitSystem) -> f64 {
  match unit {
    UnitSystem::Metric => value / 1000.0,
    UnitSystem::Imperial => value * METERS_PER_INCH,
  }
}

pub fn length(value: f64, unit: UnitSystem) -> Length {
  Length::from_meters(to_meters(value, unit))
}

/// Converts g/cm³ (metric) or lb/ft³ (imperial) to g/cm³.
pub fn density_to_g_cm3(value: f64, unit: UnitSystem) -> f64 {
  match unit {
    UnitSystem::Metric => value,
    UnitSystem::Imperial => value * G_CM3_PER_LB_FT3,
  }
}

pub fn m3_to_liters(m3: f64) -> f64 {
  m3 * LITERS_PER_M3
}

/// US gallons.
pub fn m3_to_gallons(m3: f64) -> f64 {
  m3 * GALLONS_PER_M3
}

#[cfg(test)]
mod tests {
  use approx::assert_relative_eq;

  use super::*;

  #[test]
  fn lengths() {
    assert_eq!(to_meters(2500.0, UnitSystem::Metric), 2.5);
    assert_relative_eq!(to_meters(100.0, UnitSystem::Imperial), 2.54, max_relative = 1e-12);
    assert_eq!(length(1000.0, UnitSystem::Metric).as_meters(), 1.0);
  }

  #[test]
  fn densities() {
    assert_eq!(density_to_g_cm3(0.85, UnitSystem::Metric), 0.85);
    assert_relative_eq!(density_to_g_cm3(62.428, UnitSystem::Imperial), 1.0, max_relative = 1e-4);
  }

  #[test]
  fn volumes() {
    assert_eq!(m3_to_liters(1.0), 1000.0);
    assert_eq!(m3_to_gallons(1.0), 264.172);
    assert_eq!(m3_to_liters(2.0) * 2.0, m3_to_liters(4.0));
  }

  #[test]
  fn parse() {
    assert_eq!("Imperial".parse::<UnitSystem>(), Ok(UnitSystem::Imperial));
    assert_eq!("metric".parse::<UnitSystem>(), Ok(UnitSystem::Metric));
    assert!("furlongs".parse::<UnitSystem>().is_err());
  }
}
