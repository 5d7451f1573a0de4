use async_graphql::ErrorExtensions;
use thiserror::Error;

/// `NotFound` and `Validation` complete the caller-facing [`ErrorKind`] set.
/// Resolvers report a missing record as an absent value and leave argument
/// checking to the schema, so neither is raised by the shipped resolvers.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("{0}")]
    Store(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, GatewayError>;

/// Coarse classification of failures as seen by API callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    StoreFailure,
    ValidationFailure,
    Configuration,
}

impl ErrorKind {
    /// Value of the `code` extension attached to GraphQL errors.
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::NotFound => "NOT_FOUND",
            ErrorKind::StoreFailure => "STORE_FAILURE",
            ErrorKind::ValidationFailure => "VALIDATION_FAILURE",
            ErrorKind::Configuration => "CONFIGURATION",
        }
    }
}

impl GatewayError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GatewayError::NotFound(_) => ErrorKind::NotFound,
            GatewayError::Validation(_) => ErrorKind::ValidationFailure,
            GatewayError::Config(_) | GatewayError::Toml(_) => ErrorKind::Configuration,
            GatewayError::Store(_) | GatewayError::Io(_) | GatewayError::Json(_) => {
                ErrorKind::StoreFailure
            }
        }
    }
}

impl From<mongodb::error::Error> for GatewayError {
    fn from(err: mongodb::error::Error) -> Self {
        GatewayError::Store(err.to_string())
    }
}

impl From<mongodb::bson::ser::Error> for GatewayError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        GatewayError::Store(format!("failed to encode document: {}", err))
    }
}

impl ErrorExtensions for GatewayError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| {
            e.set("code", self.kind().code());
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_errors_map_to_store_failure() {
        let err = GatewayError::Store("connection refused".to_string());
        assert_eq!(err.kind(), ErrorKind::StoreFailure);
        assert_eq!(err.kind().code(), "STORE_FAILURE");
    }

    #[test]
    fn test_extend_carries_message_and_code() {
        let err = GatewayError::Validation("bad input".to_string()).extend();
        assert_eq!(err.message, "Validation error: bad input");

        let ext = err.extensions.expect("extensions should be set");
        assert_eq!(
            ext.get("code"),
            Some(&async_graphql::Value::from("VALIDATION_FAILURE"))
        );
    }

    #[test]
    fn test_config_kind() {
        let err = GatewayError::Config("unsupported scheme".to_string());
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }
}
