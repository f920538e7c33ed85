use thiserror::Error;

pub type Result<T> = std::result::Result<T, FactoryError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FactoryError {
    #[error("unknown product discriminator: '{value}'")]
    UnknownDiscriminator { value: String },

    #[error("unknown tier: '{value}' (expected 'low' or 'high')")]
    UnknownTier { value: String },

    #[error("failed to parse factory config: {message}")]
    ConfigParse { message: String },

    #[error("failed to read factory config {path}: {message}")]
    ConfigIo { path: String, message: String },
}

impl FactoryError {
    pub fn unknown_discriminator(value: impl ToString) -> Self {
        Self::UnknownDiscriminator {
            value: value.to_string(),
        }
    }

    pub fn unknown_tier(value: impl ToString) -> Self {
        Self::UnknownTier {
            value: value.to_string(),
        }
    }

    pub fn config_parse(message: impl Into<String>) -> Self {
        Self::ConfigParse {
            message: message.into(),
        }
    }

    pub fn config_io(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ConfigIo {
            path: path.into(),
            message: message.into(),
        }
    }

    /// True when the error means "variant not supported".
    pub fn is_unknown_variant(&self) -> bool {
        matches!(
            self,
            FactoryError::UnknownDiscriminator { .. } | FactoryError::UnknownTier { .. }
        )
    }
}

impl From<serde_json::Error> for FactoryError {
    fn from(err: serde_json::Error) -> Self {
        FactoryError::config_parse(format!(
            "line {}, column {}: {err}",
            err.line(),
            err.column()
        ))
    }
}

impl From<toml::de::Error> for FactoryError {
    fn from(err: toml::de::Error) -> Self {
        FactoryError::config_parse(err.to_string())
    }
}
