use thiserror::Error;

#[derive(Error, Debug)]
pub enum LevainError {
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing configuration entry: {field}")]
    MissingConfigError { field: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Incompatible hydration rates")]
    IncompatibleHydration,

    #[error("Input closed")]
    Interrupted,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV output error: {0}")]
    CsvError(#[from] csv::Error),
}

impl LevainError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            LevainError::ConfigNotFound { path } => {
                format!("Configuration file not found: {}", path)
            }
            LevainError::ConfigError { .. } | LevainError::MissingConfigError { .. } => {
                "Error in configuration file".to_string()
            }
            LevainError::InvalidConfigValueError { field, value, .. } => {
                format!("{} incorrect: {}", field, value)
            }
            LevainError::ValidationError { message } => message.clone(),
            LevainError::IncompatibleHydration => "Incompatible hydration rates".to_string(),
            LevainError::Interrupted => "Interrupted".to_string(),
            LevainError::IoError(e) => format!("Input/output failure: {}", e),
            LevainError::SerializationError(_) | LevainError::CsvError(_) => {
                "Could not render the results".to_string()
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            LevainError::ConfigNotFound { .. } => {
                "Create a config.ini next to the executable or pass --config <path>"
            }
            LevainError::ConfigError { .. } | LevainError::MissingConfigError { .. } => {
                "The file needs a [formules] section, e.g. `taux_sel = 0.02`"
            }
            LevainError::InvalidConfigValueError { .. } | LevainError::ValidationError { .. } => {
                "Weights must be positive and rates between 0 (excluded) and 100 percent"
            }
            LevainError::IncompatibleHydration => {
                "Raise the dough hydration or lower the starter hydration or the starter ratio"
            }
            LevainError::Interrupted => "Nothing to do",
            LevainError::IoError(_)
            | LevainError::SerializationError(_)
            | LevainError::CsvError(_) => "Check that standard output is writable",
        }
    }

    /// Process exit status associated with this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            LevainError::Interrupted => 0,
            LevainError::ConfigNotFound { .. }
            | LevainError::ConfigError { .. }
            | LevainError::InvalidConfigValueError { .. }
            | LevainError::MissingConfigError { .. }
            | LevainError::ValidationError { .. } => 1,
            LevainError::IncompatibleHydration => 2,
            LevainError::IoError(_)
            | LevainError::SerializationError(_)
            | LevainError::CsvError(_) => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, LevainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(LevainError::Interrupted.exit_code(), 0);
        assert_eq!(
            LevainError::ConfigNotFound {
                path: "config.ini".to_string()
            }
            .exit_code(),
            1
        );
        assert_eq!(LevainError::IncompatibleHydration.exit_code(), 2);
    }

    #[test]
    fn test_config_errors_share_user_message() {
        let missing = LevainError::MissingConfigError {
            field: "formules".to_string(),
        };
        let broken = LevainError::ConfigError {
            message: "bad".to_string(),
        };
        assert_eq!(missing.user_friendly_message(), broken.user_friendly_message());
    }
}
