//! Engine error types.
//!
//! Every failure mode of the reconstruction engine is a deterministic
//! data-validation failure. Errors are terminal for the airspace being
//! reconstructed; the surrounding batch tooling decides whether to skip
//! that airspace and continue with others.

use thiserror::Error;

/// Errors raised while reconstructing an airspace boundary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BoundaryError {
    /// A circle directive carries a non-positive radius
    #[error("invalid circle radius: {radius_m} m")]
    InvalidRadius { radius_m: f64 },

    /// A ring or border with fewer than two points cannot bracket a query
    #[error("ring has {len} points, need at least 2")]
    EmptyRing { len: usize },

    /// A directive references a border absent from the supplied table
    #[error("unknown border: {border_id}")]
    UnknownBorder { border_id: String },

    /// Raw airspace shape is neither a circle nor a directive list
    #[error("airspace geometry is neither a circle nor a directive list")]
    UnknownGeometry,
}
