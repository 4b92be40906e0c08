//! Engineering constants and rule-of-thumb factors shared by both calculators.
//!
//! ## References
//!
//! - NFPA 70 (NEC) 2023, Table 310.16: conductor ampacities at 30 °C ambient,
//!   not more than three current-carrying conductors in a raceway.
//! - NFPA 70 (NEC) 2023, Chapter 9 Table 8: DC resistance of uncoated
//!   conductors at 75 °C.
//! - NEC 210.19(A)(1) / 215.2(A)(1): 125 % sizing for continuous loads.
//! - NEC 210.19(A) Informational Note No. 4: 3 % branch-circuit voltage drop
//!   recommendation (advisory, not a code requirement).

use crate::math::Scalar;

/// Sizing multiplier applied to continuous loads (125 %).
pub const CONTINUOUS_LOAD_FACTOR: Scalar = 1.25;
/// Duration in hours at or beyond which a load is considered continuous.
pub const CONTINUOUS_LOAD_HOURS: Scalar = 3.0;
/// Conductor path multiplier for a single-phase run (out and back).
pub const SINGLE_PHASE_PATH_FACTOR: Scalar = 2.0;
/// Feet per thousand feet; tabulated resistances are quoted per kft.
pub const FEET_PER_KFT: Scalar = 1000.0;
/// Recommended maximum voltage drop in percent.
pub const DEFAULT_MAX_DROP_PERCENT: Scalar = 3.0;

/// Typical maximum rated junction temperature for silicon MOSFETs (°C).
pub const DEFAULT_TJ_MAX_C: Scalar = 150.0;
/// Width of the warning band below `Tj_max` (°C).
pub const JUNCTION_WARNING_BAND_C: Scalar = 25.0;

/// Returns the ampacity a conductor must provide for `load_current` amperes.
///
/// Continuous loads are scaled by [`CONTINUOUS_LOAD_FACTOR`].
#[inline]
#[must_use]
pub fn required_ampacity(load_current: Scalar, continuous: bool) -> Scalar {
    if continuous {
        load_current * CONTINUOUS_LOAD_FACTOR
    } else {
        load_current
    }
}

/// Returns true when a load running for `hours` counts as continuous.
#[inline]
#[must_use]
pub fn is_continuous_duration(hours: Scalar) -> bool {
    hours >= CONTINUOUS_LOAD_HOURS
}
