use std::fmt;
use std::str::FromStr;

use log::debug;
use measurements::{Length, Volume};

use crate::capsule_tank::CapsuleTank;
use crate::cuboid_tank::CuboidTank;
use crate::dimensions::Dimensions;
use crate::error::Error;
use crate::head::HeadType;
use crate::horizontal_cylinder::HorizontalCylinder;
use crate::tank::Tank;
use crate::vertical_cylinder::VerticalCylinder;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Geometry {
  Vertical,
  Horizontal,
  Rectangular,
  Capsule,
}

impl Geometry {
  /// Whether the head type applies to this geometry.
  pub fn has_heads(&self) -> bool {
    matches!(self, Geometry::Vertical | Geometry::Horizontal)
  }
}

impl FromStr for Geometry {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_ascii_lowercase().as_str() {
      "vertical" => Ok(Geometry::Vertical),
      "horizontal" => Ok(Geometry::Horizontal),
      "rectangular" => Ok(Geometry::Rectangular),
      "capsule" => Ok(Geometry::Capsule),
      _ => Err(Error::UnsupportedGeometry(s.to_owned())),
    }
  }
}

impl fmt::Display for Geometry {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Geometry::Vertical => "vertical",
      Geometry::Horizontal => "horizontal",
      Geometry::Rectangular => "rectangular",
      Geometry::Capsule => "capsule",
    })
  }
}

/// A tank of any supported shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnyTank {
  Vertical(VerticalCylinder),
  Horizontal(HorizontalCylinder),
  Rectangular(CuboidTank),
  Capsule(CapsuleTank),
}

impl AnyTank {
  pub fn new(geometry: Geometry, head: HeadType, dimensions: Dimensions) -> Self {
    if !geometry.has_heads() && head != HeadType::Flat {
      debug!("Ignoring {} head for {} tank.", head, geometry);
    }

    match geometry {
      Geometry::Vertical => AnyTank::Vertical(VerticalCylinder::new(dimensions, head)),
      Geometry::Horizontal => AnyTank::Horizontal(HorizontalCylinder::new(dimensions, head)),
      Geometry::Rectangular => AnyTank::Rectangular(CuboidTank::square(dimensions)),
      Geometry::Capsule => AnyTank::Capsule(CapsuleTank::new(dimensions)),
    }
  }

  pub fn geometry(&self) -> Geometry {
    match self {
      AnyTank::Vertical(_) => Geometry::Vertical,
      AnyTank::Horizontal(_) => Geometry::Horizontal,
      AnyTank::Rectangular(_) => Geometry::Rectangular,
      AnyTank::Capsule(_) => Geometry::Capsule,
    }
  }

  /// Head type of cylindrical tanks, `Flat` for every other shape.
  pub fn head(&self) -> HeadType {
    match self {
      AnyTank::Vertical(tank) => tank.head(),
      AnyTank::Horizontal(tank) => tank.head(),
      AnyTank::Rectangular(_) | AnyTank::Capsule(_) => HeadType::Flat,
    }
  }

  fn as_tank(&self) -> &dyn Tank {
    match self {
      AnyTank::Vertical(tank) => tank,
      AnyTank::Horizontal(tank) => tank,
      AnyTank::Rectangular(tank) => tank,
      AnyTank::Capsule(tank) => tank,
    }
  }
}

impl Tank for AnyTank {
  fn dimensions(&self) -> &Dimensions {
    self.as_tank().dimensions()
  }

  fn volume(&self) -> Volume {
    self.as_tank().volume()
  }

  fn liquid_volume(&self) -> Volume {
    self.as_tank().liquid_volume()
  }

  fn max_level(&self) -> Length {
    self.as_tank().max_level()
  }
}
