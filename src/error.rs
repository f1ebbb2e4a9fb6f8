use thiserror::Error;
use tracing::{error, warn};

/// Error severity for surfacing to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Warning, // recoverable, defaults were used
    Error,   // operation failed
}

/// Errors raised at the I/O edges of the floor finder.
///
/// The search core itself never fails; these only come from loading the
/// location registry, reading config, or parsing session commands.
#[derive(Error, Debug)]
pub enum FloorFinderError {
    #[error("Failed to read location registry '{path}': {source}")]
    RegistryRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse location registry '{path}': {source}")]
    RegistryParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to read config '{path}': {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("Invalid session command: {0}")]
    Command(String),
}

impl FloorFinderError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::RegistryRead { .. } => ErrorSeverity::Error,
            Self::RegistryParse { .. } => ErrorSeverity::Error,
            Self::ConfigRead { .. } => ErrorSeverity::Warning,
            Self::ConfigParse(_) => ErrorSeverity::Warning,
            Self::Command(_) => ErrorSeverity::Warning,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::RegistryRead { path, .. } => format!("Could not read locations from {}", path),
            Self::RegistryParse { path, .. } => format!("Locations file {} is not valid", path),
            Self::ConfigRead { path, .. } => format!("Could not read config from {}", path),
            Self::ConfigParse(e) => format!("Configuration issue: {}", e),
            Self::Command(msg) => msg.clone(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FloorFinderError>;

/// Extension trait for silent error logging with caller location tracking.
/// Use when the operation is recoverable and the user doesn't need to know.
///
/// ```ignore
/// use floor_finder::error::ResultExt;
///
/// let registry = load_registry(path).log_err().unwrap_or_default();
/// ```
pub trait ResultExt<T> {
    /// Log error with caller location and return None.
    fn log_err(self) -> Option<T>;
    /// Log as warning with caller location and return None.
    fn warn_on_err(self) -> Option<T>;
}

impl<T, E: std::fmt::Debug> ResultExt<T> for std::result::Result<T, E> {
    #[track_caller]
    fn log_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(error) => {
                let caller = std::panic::Location::caller();
                error!(
                    error = ?error,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation failed"
                );
                None
            }
        }
    }

    #[track_caller]
    fn warn_on_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(error) => {
                let caller = std::panic::Location::caller();
                warn!(
                    error = ?error,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation had warning"
                );
                None
            }
        }
    }
}
