//! Conduction and switching loss estimates for a hard-switched MOSFET.
//!
//! All functions are plain arithmetic over the reals. No range checks are
//! applied; negative or non-finite inputs propagate through the formulas.

use crate::math::Scalar;

/// Ohmic loss in the channel, `I_rms² · Rds(on)` (W).
#[inline]
#[must_use]
pub fn conduction_loss(i_rms: Scalar, rds_on: Scalar) -> Scalar {
    i_rms * i_rms * rds_on
}

/// Linear-transition switching loss, `½ · Vds · Id · (tr + tf) · f_sw` (W).
///
/// Rise and fall times are in seconds, `f_sw` in hertz.
#[inline]
#[must_use]
pub fn switching_loss(vds: Scalar, id: Scalar, t_rise: Scalar, t_fall: Scalar, f_sw: Scalar) -> Scalar {
    0.5 * vds * id * (t_rise + t_fall) * f_sw
}

/// Sum of conduction and switching loss (W).
#[inline]
#[must_use]
pub fn total_loss(p_cond: Scalar, p_sw: Scalar) -> Scalar {
    p_cond + p_sw
}

/// Loss components at one operating point.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LossBreakdown {
    /// Conduction loss (W).
    pub conduction: Scalar,
    /// Switching loss (W).
    pub switching: Scalar,
}

impl LossBreakdown {
    /// Total dissipation (W).
    #[must_use]
    pub fn total(&self) -> Scalar {
        total_loss(self.conduction, self.switching)
    }

    /// Fraction of the total lost to conduction; zero when nothing is dissipated.
    #[must_use]
    pub fn conduction_share(&self) -> Scalar {
        crate::math::ratio_or_zero(self.conduction, self.total())
    }
}
