use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Api(#[from] yieldpool::ApiError),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("submission unavailable: {0}")]
    Unavailable(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
