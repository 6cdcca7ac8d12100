use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpiroError {
    #[error("Shape error: {0}")]
    Shape(String),

    #[error("Motion error: {0}")]
    Motion(String),

    #[error("Parameter error: {0}")]
    Parameter(String),
}

pub type Result<T> = std::result::Result<T, SpiroError>;
