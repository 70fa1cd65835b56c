use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser, ValueEnum};
use vessel::{InputMode, RawInput};

use crate::config::{Config, Format};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
  /// Reject unparsable or invalid numbers.
  #[default]
  Strict,
  /// Replace unparsable lengths with 0 and density with 1.
  Lenient,
}

impl From<Mode> for InputMode {
  fn from(mode: Mode) -> Self {
    match mode {
      Mode::Strict => InputMode::Strict,
      Mode::Lenient => InputMode::Lenient,
    }
  }
}

/// Volume, mass and fill level of a liquid storage tank.
///
/// Lengths are in mm (metric) or in (imperial), density in g/cm³ or lb/ft³.
/// For rectangular tanks `--diameter` is the side of the square base, for
/// capsules `--height` is the length of the cylindrical section.
#[derive(Debug, Parser)]
#[command(name = "tank-gauge", version)]
pub struct Args {
  /// Tank shape: vertical, horizontal, rectangular or capsule.
  #[arg(long)]
  pub geometry: String,

  /// Head type of cylinders: flat or conical.
  #[arg(long)]
  pub head: Option<String>,

  #[arg(long, default_value = "")]
  pub diameter: String,

  #[arg(long, default_value = "")]
  pub height: String,

  /// Liquid level measured from the bottom of the tank.
  #[arg(long, default_value = "")]
  pub level: String,

  #[arg(long, default_value = "1")]
  pub density: String,

  /// Unit system of the input: metric or imperial.
  #[arg(long)]
  pub units: Option<String>,

  /// Handling of invalid numbers.
  #[arg(long, value_enum, env = "TANK_GAUGE_MODE", default_value_t = Mode::Strict)]
  pub mode: Mode,

  /// Shorthand for `--mode lenient`.
  #[arg(long, conflicts_with = "strict")]
  pub lenient: bool,

  /// Shorthand for `--mode strict`.
  #[arg(long)]
  pub strict: bool,

  #[arg(long, value_enum, env = "TANK_GAUGE_FORMAT", default_value_t = Format::Text)]
  pub format: Format,

  /// Shorthand for `--format json`.
  #[arg(long, conflicts_with = "text")]
  pub json: bool,

  /// Shorthand for `--format text`.
  #[arg(long)]
  pub text: bool,

  /// Draw the fill-level schematic below the text report.
  #[arg(
    long,
    env = "TANK_GAUGE_SCHEMATIC",
    default_value_t = true,
    action = ArgAction::Set,
    value_parser = BoolishValueParser::new(),
  )]
  pub schematic: bool,

  /// Shorthand for `--schematic false`.
  #[arg(long)]
  pub no_schematic: bool,
}

impl Args {
  pub fn config(&self) -> Config {
    let mode = match (self.lenient, self.strict) {
      (true, _) => Mode::Lenient,
      (_, true) => Mode::Strict,
      _ => self.mode,
    };

    let format = match (self.json, self.text) {
      (true, _) => Format::Json,
      (_, true) => Format::Text,
      _ => self.format,
    };

    Config { mode: mode.into(), format, schematic: self.schematic && !self.no_schematic }
  }

  pub fn raw_input(&self) -> RawInput {
    RawInput {
      geometry: self.geometry.clone(),
      head: self.head.clone(),
      diameter: self.diameter.clone(),
      height: self.height.clone(),
      level: self.level.clone(),
      density: self.density.clone(),
      units: self.units.clone(),
    }
  }
}
