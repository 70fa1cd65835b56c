use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
  #[error("invalid {field}: {value}")]
  InvalidInput { field: &'static str, value: f64 },
  #[error("cannot parse {field} from {text:?}")]
  Unparsable { field: &'static str, text: String },
  #[error("unsupported geometry {0:?}, expected one of: vertical, horizontal, rectangular, capsule")]
  UnsupportedGeometry(String),
  #[error("unsupported head type {0:?}, expected one of: flat, conical")]
  UnsupportedHeadType(String),
  #[error("unsupported unit system {0:?}, expected one of: metric, imperial")]
  UnsupportedUnitSystem(String),
}
