//! Error types for the geotag crate.

use thiserror::Error;

/// Result type alias for geotag operations.
pub type Result<T> = std::result::Result<T, GeotagError>;

/// Errors that can occur during tagging operations.
#[derive(Debug, Error)]
pub enum GeotagError {
    /// Latitude or longitude outside the valid range
    #[error("Coordinate out of range: {0}")]
    InvalidCoordinate(String),

    /// Malformed or undecodable location code
    #[error("Invalid location code: {0}")]
    InvalidCode(String),

    /// String is not a well-formed geo tag
    #[error("Invalid geo tag: {0}")]
    InvalidTag(String),
}

/// Error code for integration with app-level error reporting.
/// Range: 11xxx for geotag errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeotagErrorCode {
    /// Latitude or longitude outside the valid range
    InvalidCoordinate = 11001,
    /// Malformed or undecodable location code
    InvalidCode = 11002,
    /// String is not a well-formed geo tag
    InvalidTag = 11003,
}

impl GeotagError {
    /// Returns the error code for this error.
    pub fn code(&self) -> GeotagErrorCode {
        match self {
            GeotagError::InvalidCoordinate(_) => GeotagErrorCode::InvalidCoordinate,
            GeotagError::InvalidCode(_) => GeotagErrorCode::InvalidCode,
            GeotagError::InvalidTag(_) => GeotagErrorCode::InvalidTag,
        }
    }
}
