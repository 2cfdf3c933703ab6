use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building a [`Reflower`](crate::Reflower).
///
/// Reflowing itself never fails; only option loading and validation do.
#[derive(Debug, Error)]
pub enum Error {
    /// An option value that would break the reflow loop or produce invalid Markdown.
    #[error("invalid option `{field}`: {reason}")]
    InvalidOptions {
        field: &'static str,
        reason: String,
    },

    /// The options file is not valid TOML or has unknown keys.
    #[error("configuration error: {0}")]
    Config(#[from] toml::de::Error),
}

impl Error {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidOptions {
            field,
            reason: reason.into(),
        }
    }
}
