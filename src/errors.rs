//! Shared error types used across submodules.

use thiserror::Error;

use crate::dashboard::ParameterError;
use crate::materials::Material;
use crate::math::Scalar;
use crate::wiring::{Gauge, TempRating};

/// Outcomes of gauge selection other than a satisfied selection.
///
/// Every variant is an expected, recoverable result: the caller reports it
/// and moves on.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GaugeError {
    /// Material name not recognised.
    #[error("unknown conductor material `{0}` (expected copper or aluminum)")]
    InvalidMaterial(String),
    /// Insulation temperature rating index outside {0, 1, 2}.
    #[error("invalid temperature rating index {0} (expected 0=60°C, 1=75°C, 2=90°C)")]
    InvalidTempRating(usize),
    /// Gauge label could not be parsed.
    #[error("unrecognised wire gauge `{0}`")]
    InvalidGauge(String),
    /// Required ampacity exceeds the largest tabulated conductor.
    #[error(
        "no {material} gauge carries {required:.1} A at {rating}; load exceeds the largest tabulated size"
    )]
    NoSuitableGauge {
        /// Ampacity that had to be met.
        required: Scalar,
        /// Conductor material searched.
        material: Material,
        /// Insulation rating column searched.
        rating: TempRating,
    },
    /// Even the largest conductor exceeds the voltage-drop limit.
    #[error(
        "voltage drop {drop_percent:.2}% at {largest} AWG still exceeds the {limit_percent}% limit"
    )]
    VoltageDropLimitExceeded {
        /// Largest gauge evaluated.
        largest: Gauge,
        /// Drop at that gauge, in percent.
        drop_percent: Scalar,
        /// Configured limit, in percent.
        limit_percent: Scalar,
    },
    /// Gauge is missing from the material's resistance table.
    #[error("no resistance data for {gauge} AWG {material}")]
    ResistanceDataUnavailable {
        /// Gauge that was looked up.
        gauge: Gauge,
        /// Conductor material.
        material: Material,
    },
}

/// Top-level error type for the crate.
#[derive(Debug, Error)]
pub enum PowerLabError {
    /// Wraps gauge-selection outcomes.
    #[error(transparent)]
    Gauge(#[from] GaugeError),
    /// Wraps dashboard parameter validation failures.
    #[error(transparent)]
    Parameter(#[from] ParameterError),
    /// Raised when writing a report or export fails.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
