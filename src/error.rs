use crate::types::GeoPoint;

/// Validation errors raised when constructing quiz data
///
/// The projection and distance functions never fail; these errors only
/// occur at construction boundaries (targets, frames, catalogs).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid tolerance for {id}: {km} km (must be a positive number)")]
    InvalidTolerance { id: String, km: f64 },

    #[error("Coordinate out of range: {point}")]
    CoordinateOutOfRange { point: GeoPoint },

    #[error("Invalid projection frame: {reason}")]
    InvalidFrame { reason: String },

    #[error("Duplicate catalog id: {0}")]
    DuplicateId(String),
}

/// Non-fatal issues encountered while building a catalog leniently
#[derive(Debug, Clone, PartialEq)]
pub enum Warning {
    /// Record failed validation and was skipped
    InvalidRecord { id: String, reason: String },

    /// A record with the same id was already present, the later one was skipped
    DuplicateRecord { id: String },
}

pub type Result<T> = std::result::Result<T, Error>;
