use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum OptionsError {
    #[error("coverage threshold must be within 0.0..=1.0, got {0}")]
    ThresholdOutOfRange(f64),
}

pub type Result<T> = std::result::Result<T, OptionsError>;
