use std::fmt;

use log::warn;

use crate::constants::JUNCTION_WARNING_BAND_C;
use crate::math::{clamp_unit, ratio_or_zero, Scalar};
use crate::mosfet::{conduction_loss, safety_margin, switching_loss, LossBreakdown, ThermalModel};

use super::{MosfetParameters, ParameterError};

/// Where the junction temperature sits relative to its rating.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThermalStatus {
    /// More than the warning band below `Tj_max`.
    Safe,
    /// Within the warning band of `Tj_max`.
    Warning,
    /// Above `Tj_max`.
    Exceeded,
}

impl ThermalStatus {
    /// Classifies `t_j` against `t_j_max`.
    #[must_use]
    pub fn classify(t_j: Scalar, t_j_max: Scalar) -> Self {
        if t_j > t_j_max {
            Self::Exceeded
        } else if t_j > t_j_max - JUNCTION_WARNING_BAND_C {
            Self::Warning
        } else {
            Self::Safe
        }
    }
}

impl fmt::Display for ThermalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Safe => "Thermal performance within safe range.",
            Self::Warning => "Junction temperature approaching limit.",
            Self::Exceeded => "Junction temperature exceeds maximum limit!",
        })
    }
}

/// Thermal resistance budget that keeps the junction at `Tj_max`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatsinkRequirement {
    /// Largest allowed junction-to-ambient resistance (°C/W).
    pub total: Scalar,
    /// Largest allowed heatsink RθSA for a detailed stack (°C/W).
    ///
    /// Negative when the junction-case and case-sink resistances alone
    /// already exceed the budget.
    pub sink_to_ambient: Option<Scalar>,
}

impl HeatsinkRequirement {
    /// Budget for dissipating `p_total` watts; `None` when nothing is dissipated.
    #[must_use]
    pub fn for_dissipation(
        p_total: Scalar,
        t_ambient: Scalar,
        t_j_max: Scalar,
        model: &ThermalModel,
    ) -> Option<Self> {
        if p_total <= 0.0 {
            return None;
        }
        let total = (t_j_max - t_ambient) / p_total;
        let sink_to_ambient = match *model {
            ThermalModel::Simple { .. } => None,
            ThermalModel::Detailed { r_jc, r_cs, .. } => Some(total - r_jc - r_cs),
        };
        Some(Self {
            total,
            sink_to_ambient,
        })
    }

    /// True when the fitted heatsink is at least as good as required.
    #[must_use]
    pub fn satisfied_by(&self, model: &ThermalModel) -> bool {
        model.total_resistance() <= self.total
    }
}

/// Point evaluation of one operating point.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashboardReport {
    /// Loss components (W).
    pub losses: LossBreakdown,
    /// Junction temperature (°C).
    pub junction_temp: Scalar,
    /// `Tj_max − Tj` (°C).
    pub margin: Scalar,
    /// Lumped junction-to-ambient resistance in use (°C/W).
    pub thermal_resistance: Scalar,
    /// `P_out / (P_out + P_loss)`, clamped to [0, 1].
    pub efficiency: Scalar,
    /// Warning classification.
    pub status: ThermalStatus,
    /// Heatsink budget, absent for zero dissipation.
    pub heatsink: Option<HeatsinkRequirement>,
}

impl DashboardReport {
    /// Validates `params` and evaluates the operating point.
    pub fn evaluate(params: &MosfetParameters) -> Result<Self, ParameterError> {
        params.validate()?;
        let losses = LossBreakdown {
            conduction: conduction_loss(params.id, params.rds_on),
            switching: switching_loss(params.vds, params.id, params.t_rise, params.t_fall, params.f_sw),
        };
        let p_total = losses.total();
        let junction_temp = params.thermal.junction_temp(params.t_ambient, p_total);
        let status = ThermalStatus::classify(junction_temp, params.t_j_max);
        if status == ThermalStatus::Exceeded {
            warn!(
                "junction at {junction_temp:.1} °C exceeds rated {:.1} °C",
                params.t_j_max
            );
        }

        Ok(Self {
            losses,
            junction_temp,
            margin: safety_margin(junction_temp, params.t_j_max),
            thermal_resistance: params.thermal.total_resistance(),
            efficiency: efficiency(params.output_power(), p_total),
            status,
            heatsink: HeatsinkRequirement::for_dissipation(
                p_total,
                params.t_ambient,
                params.t_j_max,
                &params.thermal,
            ),
        })
    }

    /// Total dissipation (W).
    #[must_use]
    pub fn total_loss(&self) -> Scalar {
        self.losses.total()
    }
}

/// Converter efficiency with `p_loss` dissipated in the switch.
#[must_use]
pub fn efficiency(p_out: Scalar, p_loss: Scalar) -> Scalar {
    clamp_unit(ratio_or_zero(p_out, p_out + p_loss))
}
