use thiserror::Error;

use crate::modules::config::ConfigError;
use crate::modules::host::HostError;
use crate::modules::survey::{ApplicationError, RepositoryError};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{context}: {source}")]
    CommandRegistration {
        context: String,
        #[source]
        source: HostError,
    },

    #[error("Configuration error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("Repository error: {0}")]
    RepositoryError(#[from] RepositoryError),

    #[error("Application error: {0}")]
    ApplicationError(#[from] ApplicationError),
}

impl serde::Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_error_keeps_context() {
        let err = AppError::CommandRegistration {
            context: "failed to register reset data command".to_string(),
            source: HostError::RegistrationFailed("trigger taken".to_string()),
        };

        assert_eq!(
            err.to_string(),
            "failed to register reset data command: Command registration failed: trigger taken"
        );
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_app_error_serializes_as_message() {
        let err = AppError::from(RepositoryError::DatabaseError("disk full".to_string()));
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(json, "\"Repository error: Database error: disk full\"");
    }
}
