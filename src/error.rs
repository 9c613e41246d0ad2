use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures of the surrounding machinery.
///
/// Registration itself never fails; every rejection is a
/// [`crate::RegisterResult`] instead.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] figment::Error),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Failed to initialise logging: {0}")]
    Logging(#[from] anyhow::Error),
}
