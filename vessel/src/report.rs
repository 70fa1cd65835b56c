use measurements::Volume;
use serde::Serialize;

use crate::tank::Tank;
use crate::units::{m3_to_gallons, m3_to_liters};

/// Derived quantities of a tank: volumes in m³, L and US gal, mass in kg and
/// fill percentage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Report {
  pub total_volume: f64,
  pub liquid_volume: f64,
  pub empty_volume: f64,
  pub mass: f64,
  pub fill_percentage: f64,
  pub total_liters: f64,
  pub liquid_liters: f64,
  pub empty_liters: f64,
  pub total_gallons: f64,
  pub liquid_gallons: f64,
  pub empty_gallons: f64,
}

impl Report {
  pub fn new<T: Tank + ?Sized>(tank: &T) -> Self {
    let total_volume = tank.volume().as_cubic_meters();
    let level = tank.level();
    let liquid_volume = Volume::from(level).as_cubic_meters();
    // Reported volumes must add up exactly.
    let empty_volume = total_volume - liquid_volume;

    Self {
      total_volume,
      liquid_volume,
      empty_volume,
      mass: tank.mass().as_kilograms(),
      fill_percentage: f64::from(level),
      total_liters: m3_to_liters(total_volume),
      liquid_liters: m3_to_liters(liquid_volume),
      empty_liters: m3_to_liters(empty_volume),
      total_gallons: m3_to_gallons(total_volume),
      liquid_gallons: m3_to_gallons(liquid_volume),
      empty_gallons: m3_to_gallons(empty_volume),
    }
  }
}
