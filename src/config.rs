use clap::ValueEnum;
use vessel::InputMode;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
  #[default]
  Text,
  Json,
}

/// Runtime settings resolved from flags and `TANK_GAUGE_*` environment variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
  pub mode: InputMode,
  pub format: Format,
  pub schematic: bool,
}

impl Default for Config {
  fn default() -> Self {
    Self { mode: InputMode::Strict, format: Format::Text, schematic: true }
  }
}
