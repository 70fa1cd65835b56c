//! Filled and empty volume, mass and fill percentage of liquid storage tanks.
//!
//! Every tank shape implements [`Tank`]. Use [`AnyTank`] when the shape is
//! only known at runtime, e.g. when building a tank from [`RawInput`].

mod capsule_tank;
mod cuboid_tank;
mod dimensions;
mod error;
pub mod geometry;
mod head;
mod horizontal_cylinder;
mod input;
mod level;
mod report;
mod shape;
mod tank;
pub mod units;
mod vertical_cylinder;

pub use measurements::{Length, Mass, Volume};

pub use crate::capsule_tank::CapsuleTank;
pub use crate::cuboid_tank::CuboidTank;
pub use crate::dimensions::Dimensions;
pub use crate::error::Error;
pub use crate::head::HeadType;
pub use crate::horizontal_cylinder::HorizontalCylinder;
pub use crate::input::{InputMode, RawInput, TankInput};
pub use crate::level::Level;
pub use crate::report::Report;
pub use crate::shape::{AnyTank, Geometry};
pub use crate::tank::Tank;
pub use crate::units::UnitSystem;
pub use crate::vertical_cylinder::VerticalCylinder;
