//! Shared error type across tradereport crates.

use thiserror::Error;

/// Stable error codes (reported by the CLI and asserted by tests).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Dataset is malformed (bad key, missing currency, unparsable JSON).
    InvalidData,
    /// A value that must be formatted as a number is not numeric.
    NonNumeric,
    /// A long/short record has no same-key record in the `all` collection.
    MissingCounterpart,
    /// A node required by a click handler is absent.
    MissingNode,
    /// Configuration rejected.
    InvalidConfig,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Filesystem / output failure.
    Io,
}

impl ErrorCode {
    /// String representation used in logs and test vectors.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidData => "INVALID_DATA",
            ErrorCode::NonNumeric => "NON_NUMERIC",
            ErrorCode::MissingCounterpart => "MISSING_COUNTERPART",
            ErrorCode::MissingNode => "MISSING_NODE",
            ErrorCode::InvalidConfig => "INVALID_CONFIG",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorCode::Io => "IO",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, ReportError>;

/// Unified error type used by core and cli.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("invalid data: {0}")]
    InvalidData(String),
    #[error("non-numeric value in {collection}[{key}]: {value:?}")]
    NonNumeric {
        collection: &'static str,
        key: String,
        value: String,
    },
    #[error("{collection}[{key}] has no counterpart in all_trades")]
    MissingCounterpart {
        collection: &'static str,
        key: String,
    },
    #[error("missing node: {0}")]
    MissingNode(String),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("unsupported config version {0}")]
    UnsupportedVersion(u32),
    #[error("io: {0}")]
    Io(String),
}

impl ReportError {
    /// Map the error to its stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            ReportError::InvalidData(_) => ErrorCode::InvalidData,
            ReportError::NonNumeric { .. } => ErrorCode::NonNumeric,
            ReportError::MissingCounterpart { .. } => ErrorCode::MissingCounterpart,
            ReportError::MissingNode(_) => ErrorCode::MissingNode,
            ReportError::InvalidConfig(_) => ErrorCode::InvalidConfig,
            ReportError::UnsupportedVersion(_) => ErrorCode::UnsupportedVersion,
            ReportError::Io(_) => ErrorCode::Io,
        }
    }
}
