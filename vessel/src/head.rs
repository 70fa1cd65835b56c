use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// End-cap shape of a cylindrical tank.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum HeadType {
  #[default]
  Flat,
  Conical,
}

impl FromStr for HeadType {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_ascii_lowercase().as_str() {
      "flat" => Ok(HeadType::Flat),
      "conical" => Ok(HeadType::Conical),
      _ => Err(Error::UnsupportedHeadType(s.to_owned())),
    }
  }
}

impl fmt::Display for HeadType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      HeadType::Flat => "flat",
      HeadType::Conical => "conical",
    })
  }
}
