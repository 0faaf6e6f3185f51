use thiserror::Error;

/// Common error types for the event board.
///
/// The derivation core never produces these; they come from the outer layers
/// (catalog sources, configuration, rendering).
#[derive(Error, Debug, Clone)]
pub enum EventsError {
    /// File system related errors
    #[error("{0}")]
    FileSystem(String),

    /// Configuration related errors
    #[error("{0}")]
    Configuration(String),

    /// Catalog validation errors
    #[error("{0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("{0}")]
    Serialization(String),

    /// Output rendering errors
    #[error("{0}")]
    Render(String),

    /// Generic errors with context
    #[error("{0}")]
    Generic(String)
}

/// Convert from anyhow::Error
impl From<anyhow::Error> for EventsError {
    fn from(err: anyhow::Error) -> Self {
        EventsError::Generic(format!("{:#}", err))
    }
}

/// Convert from std::io::Error
impl From<std::io::Error> for EventsError {
    fn from(err: std::io::Error) -> Self {
        EventsError::FileSystem(err.to_string())
    }
}

/// Convert from serde_yaml::Error
impl From<serde_yaml::Error> for EventsError {
    fn from(err: serde_yaml::Error) -> Self {
        EventsError::Serialization(err.to_string())
    }
}

/// Convert from serde_json::Error
impl From<serde_json::Error> for EventsError {
    fn from(err: serde_json::Error) -> Self {
        EventsError::Serialization(err.to_string())
    }
}
