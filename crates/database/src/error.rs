use models::ValidationError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("database error: {0}")]
    Database(#[from] DbErr),
}

impl ServiceError {
    /// Shorthand for a rule violation carrying `mensagem`
    pub fn validacao(mensagem: impl Into<String>) -> Self {
        Self::Validation(ValidationError::new(mensagem))
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
