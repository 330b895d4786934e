//! Error types for credential handling

/// Errors that can occur while loading or using credentials
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Key or secret is empty
    #[error("You need to set API Key and API Secret to call this method")]
    MissingCredentials,

    /// Invalid API credentials
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    /// Environment variable not set
    #[error("Environment variable not set: {0}")]
    EnvVarNotSet(String),
}

/// Result type for authentication operations
pub type AuthResult<T> = Result<T, AuthError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AuthError::EnvVarNotSet("LIVECOIN_API_KEY".to_string());
        assert!(err.to_string().contains("LIVECOIN_API_KEY"));
    }

    #[test]
    fn test_missing_credentials_message() {
        let err = AuthError::MissingCredentials;
        assert!(err.to_string().contains("API Secret"));
    }
}
