use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Component not found")]
    NotFound,
    #[error("Component has no files")]
    NoFiles,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}
