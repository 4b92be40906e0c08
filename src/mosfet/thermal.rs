//! Steady-state junction temperature from dissipated power and a thermal
//! resistance network.

use crate::math::Scalar;

/// `Ta + P · Rθja` with a single lumped junction-to-ambient resistance (°C).
#[inline]
#[must_use]
pub fn junction_temp_simple(t_ambient: Scalar, p_total: Scalar, r_th_ja: Scalar) -> Scalar {
    t_ambient + p_total * r_th_ja
}

/// `Ta + P · (Rθjc + Rθcs + Rθsa)` for a junction/case/sink stack (°C).
#[inline]
#[must_use]
pub fn junction_temp_detailed(
    t_ambient: Scalar,
    p_total: Scalar,
    r_th_jc: Scalar,
    r_th_cs: Scalar,
    r_th_sa: Scalar,
) -> Scalar {
    t_ambient + p_total * (r_th_jc + r_th_cs + r_th_sa)
}

/// Headroom below the rated maximum, `Tj_max − Tj` (°C).
///
/// Negative when the junction already exceeds its rating.
#[inline]
#[must_use]
pub fn safety_margin(t_j: Scalar, t_j_max: Scalar) -> Scalar {
    t_j_max - t_j
}

/// Thermal path from junction to ambient.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ThermalModel {
    /// Single datasheet Rθja (°C/W).
    Simple {
        /// Junction to ambient.
        r_ja: Scalar,
    },
    /// Series stack of junction-case, case-sink and sink-ambient (°C/W).
    Detailed {
        /// Junction to case.
        r_jc: Scalar,
        /// Case to sink (interface material).
        r_cs: Scalar,
        /// Sink to ambient (heatsink).
        r_sa: Scalar,
    },
}

impl ThermalModel {
    /// Lumped junction-to-ambient resistance (°C/W).
    #[must_use]
    pub fn total_resistance(&self) -> Scalar {
        match *self {
            Self::Simple { r_ja } => r_ja,
            Self::Detailed { r_jc, r_cs, r_sa } => r_jc + r_cs + r_sa,
        }
    }

    /// Junction temperature at `p_total` watts in `t_ambient` °C.
    #[must_use]
    pub fn junction_temp(&self, t_ambient: Scalar, p_total: Scalar) -> Scalar {
        match *self {
            Self::Simple { r_ja } => junction_temp_simple(t_ambient, p_total, r_ja),
            Self::Detailed { r_jc, r_cs, r_sa } => {
                junction_temp_detailed(t_ambient, p_total, r_jc, r_cs, r_sa)
            }
        }
    }

    /// Short label for reports.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Simple { .. } => "simple (RθJA)",
            Self::Detailed { .. } => "detailed stack",
        }
    }
}

impl Default for ThermalModel {
    fn default() -> Self {
        Self::Detailed {
            r_jc: 1.5,
            r_cs: 0.5,
            r_sa: 3.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn zero_power_sits_at_ambient() {
        let tj = junction_temp_simple(25.0, 0.0, 4.0);
        assert_relative_eq!(tj, 25.0);
        assert_relative_eq!(safety_margin(tj, 150.0), 125.0);
    }

    #[test]
    fn detailed_stack_sums_resistances() {
        let tj = junction_temp_detailed(25.0, 15.0, 1.5, 0.5, 3.0);
        assert_relative_eq!(tj, 100.0);
        let model = ThermalModel::default();
        assert_relative_eq!(model.total_resistance(), 5.0);
        assert_relative_eq!(model.junction_temp(25.0, 15.0), tj);
    }

    #[test]
    fn margin_goes_negative_past_rating() {
        assert_relative_eq!(safety_margin(162.5, 150.0), -12.5);
    }

    #[test]
    fn simple_and_detailed_agree_for_equal_totals() {
        let simple = ThermalModel::Simple { r_ja: 5.0 };
        let detailed = ThermalModel::default();
        assert_relative_eq!(simple.junction_temp(40.0, 7.0), detailed.junction_temp(40.0, 7.0));
    }
}
