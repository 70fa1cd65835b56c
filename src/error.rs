use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error(transparent)]
  Vessel(#[from] vessel::Error),
  #[error(transparent)]
  Json(#[from] serde_json::Error),
}
