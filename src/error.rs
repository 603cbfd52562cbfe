use thiserror::Error;

/// Error types for the lcfit-constraints library.
#[derive(Error, Debug)]
pub enum ConstraintError {
    /// A required namespaced parameter key is absent from the input mapping.
    #[error("Missing parameter '{key}' in trial parameter mapping")]
    MissingParameter { key: String },

    /// A trial parameter value is NaN or infinite.
    #[error("Non-finite value {value} for parameter '{key}'")]
    NonFiniteParameter { key: String, value: f64 },

    /// An ejecta velocity at or above the speed of light, for which the
    /// bound-mass formula has no real value.
    #[error("Superluminal velocity {velocity_km_s} km/s for parameter '{key}'")]
    SuperluminalVelocity { key: String, velocity_km_s: f64 },

    /// Invalid constraint configuration detected at construction time.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Two constraint instances produce the same output key.
    #[error("Duplicate score key '{0}' in constraint set")]
    DuplicateScoreKey(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type alias for lcfit-constraints operations.
pub type Result<T> = std::result::Result<T, ConstraintError>;
