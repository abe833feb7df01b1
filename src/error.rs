//! Error handling for glidepages-rs
//!
//! Page switching itself never fails; these errors only come from loading,
//! validating and saving page profiles and session state.

use thiserror::Error;

/// Main error type for glidepages-rs operations
#[derive(Error, Debug)]
pub enum PageError {
    /// Errors related to locating or writing configuration files
    #[error("Configuration error: {0}")]
    Config(String),

    /// Page settings that violate the page count invariant
    #[error("Invalid page settings: {0}")]
    InvalidSettings(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed TOML page profile
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic errors with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<PageError>,
    },
}

impl PageError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        PageError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }
}

/// Result type alias for glidepages-rs operations
pub type Result<T> = std::result::Result<T, PageError>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error result
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context lazily to an error result
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| e.with_context(f()))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, std::io::Error> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| PageError::Io(e).with_context(context))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| PageError::Io(e).with_context(f()))
    }
}
