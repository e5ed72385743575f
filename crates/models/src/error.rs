use thiserror::Error;

/// The single domain error kind.
///
/// Raised for invariant violations at construction, illegal state
/// transitions, missing referenced entities and failed cross-entity checks.
/// The message is meant to be shown to API clients as is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{mensagem}")]
pub struct ValidationError {
    mensagem: String,
}

impl ValidationError {
    pub fn new(mensagem: impl Into<String>) -> Self {
        Self {
            mensagem: mensagem.into(),
        }
    }

    pub fn mensagem(&self) -> &str {
        &self.mensagem
    }
}

pub type ValidationResult<T> = Result<T, ValidationError>;
