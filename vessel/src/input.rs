use log::warn;

use crate::dimensions::Dimensions;
use crate::error::Error;
use crate::head::HeadType;
use crate::shape::{AnyTank, Geometry};
use crate::tank::Tank;
use crate::units::{self, UnitSystem};

/// How invalid numeric input is handled.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
  /// Reject unparsable numbers and invalid dimensions.
  #[default]
  Strict,
  /// Replace unparsable lengths with 0 and an unparsable density with 1,
  /// then coerce invalid dimensions as [`Dimensions::lenient`] does.
  Lenient,
}

/// Tank description as entered by a user, every value still as text.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RawInput {
  pub geometry: String,
  pub head: Option<String>,
  pub diameter: String,
  pub height: String,
  pub level: String,
  pub density: String,
  pub units: Option<String>,
}

/// Typed tank description, dimensions still in the input unit system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TankInput {
  pub geometry: Geometry,
  pub head: HeadType,
  pub diameter: f64,
  pub height: f64,
  pub liquid_level: f64,
  pub density: f64,
  pub unit_system: UnitSystem,
}

impl RawInput {
  pub fn parse(&self, mode: InputMode) -> Result<TankInput, Error> {
    let geometry: Geometry = self.geometry.parse()?;
    let head = self.head.as_deref().map(str::parse::<HeadType>).transpose()?.unwrap_or_default();
    let unit_system = self.units.as_deref().map(str::parse::<UnitSystem>).transpose()?.unwrap_or_default();

    Ok(TankInput {
      geometry,
      head,
      diameter: number("diameter", &self.diameter, 0.0, mode)?,
      height: number("height", &self.height, 0.0, mode)?,
      liquid_level: number("liquid level", &self.level, 0.0, mode)?,
      density: number("density", &self.density, 1.0, mode)?,
      unit_system,
    })
  }
}

impl TankInput {
  /// Converts to SI units and constructs the tank.
  pub fn build(&self, mode: InputMode) -> Result<AnyTank, Error> {
    let diameter = units::length(self.diameter, self.unit_system);
    let height = units::length(self.height, self.unit_system);
    let liquid_level = units::length(self.liquid_level, self.unit_system);
    let density = units::density_to_g_cm3(self.density, self.unit_system);

    let dimensions = match mode {
      InputMode::Strict => Dimensions::new(diameter, height, liquid_level, density)?,
      InputMode::Lenient => Dimensions::lenient(diameter, height, liquid_level, density),
    };

    let tank = AnyTank::new(self.geometry, self.head, dimensions);

    // Finite but huge dimensions can still overflow.
    let volume = tank.volume().as_cubic_meters();
    if !volume.is_finite() {
      return Err(Error::InvalidInput { field: "volume", value: volume })
    }

    let mass = tank.mass().as_kilograms();
    if !mass.is_finite() {
      return Err(Error::InvalidInput { field: "mass", value: mass })
    }

    Ok(tank)
  }
}

fn number(field: &'static str, text: &str, default: f64, mode: InputMode) -> Result<f64, Error> {
  match (text.trim().parse::<f64>(), mode) {
    (Ok(value), _) => Ok(value),
    (Err(_), InputMode::Strict) => Err(Error::Unparsable { field, text: text.to_owned() }),
    (Err(_), InputMode::Lenient) => {
      warn!("Cannot parse {} from {:?}, using {}.", field, text, default);
      Ok(default)
    },
  }
}
