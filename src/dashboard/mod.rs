//! Operating-point evaluation and thermal policy for the MOSFET dashboard.
//!
//! The loss and thermal functions in [`crate::mosfet`] are total and
//! unchecked. This layer owns everything a front end needs on top of them:
//! parameter validation, efficiency, the warning bands around `Tj_max`,
//! heatsink sizing and the drain-current sweep.

mod report;
mod sweep;

pub use report::{efficiency, DashboardReport, HeatsinkRequirement, ThermalStatus};
pub use sweep::{write_sweep_csv, ThermalSweep};

use crate::constants::DEFAULT_TJ_MAX_C;
use crate::math::Scalar;
use crate::mosfet::ThermalModel;

/// Errors raised while validating dashboard inputs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParameterError {
    /// Raised when a parameter is NaN or infinite.
    #[error("parameter `{0}` must be a finite number")]
    NonFinite(&'static str),
    /// Raised when a magnitude-like parameter is negative.
    #[error("parameter `{0}` must not be negative")]
    Negative(&'static str),
    /// Raised when a sweep is requested with zero points.
    #[error("sweep needs at least one point")]
    EmptySweep,
}

/// Electrical, switching and thermal inputs for one MOSFET operating point.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MosfetParameters {
    /// Blocking drain-source voltage (V).
    pub vds: Scalar,
    /// Drain current (A), also used as the RMS conduction current.
    pub id: Scalar,
    /// On-state resistance (Ω).
    pub rds_on: Scalar,
    /// Rise time (s).
    pub t_rise: Scalar,
    /// Fall time (s).
    pub t_fall: Scalar,
    /// Switching frequency (Hz).
    pub f_sw: Scalar,
    /// Converter output voltage (V).
    pub v_out: Scalar,
    /// Converter output current (A).
    pub i_out: Scalar,
    /// Ambient temperature (°C).
    pub t_ambient: Scalar,
    /// Maximum rated junction temperature (°C).
    pub t_j_max: Scalar,
    /// Junction-to-ambient thermal path.
    pub thermal: ThermalModel,
}

impl Default for MosfetParameters {
    fn default() -> Self {
        Self {
            vds: 400.0,
            id: 10.0,
            rds_on: 0.05,
            t_rise: 50e-9,
            t_fall: 50e-9,
            f_sw: 50_000.0,
            v_out: 48.0,
            i_out: 10.0,
            t_ambient: 25.0,
            t_j_max: DEFAULT_TJ_MAX_C,
            thermal: ThermalModel::default(),
        }
    }
}

impl MosfetParameters {
    /// Replaces the thermal model.
    #[must_use]
    pub const fn with_thermal(mut self, thermal: ThermalModel) -> Self {
        self.thermal = thermal;
        self
    }

    /// Output power delivered to the load (W).
    #[must_use]
    pub fn output_power(&self) -> Scalar {
        self.v_out * self.i_out
    }

    /// Checks every input is finite and magnitudes are non-negative.
    pub fn validate(&self) -> Result<(), ParameterError> {
        let finite = [
            ("ambient temperature", self.t_ambient),
            ("maximum junction temperature", self.t_j_max),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(ParameterError::NonFinite(name));
            }
        }

        let mut magnitudes = vec![
            ("Vds", self.vds),
            ("Id", self.id),
            ("Rds(on)", self.rds_on),
            ("rise time", self.t_rise),
            ("fall time", self.t_fall),
            ("switching frequency", self.f_sw),
            ("output voltage", self.v_out),
            ("output current", self.i_out),
        ];
        match self.thermal {
            ThermalModel::Simple { r_ja } => magnitudes.push(("RθJA", r_ja)),
            ThermalModel::Detailed { r_jc, r_cs, r_sa } => {
                magnitudes.extend([("RθJC", r_jc), ("RθCS", r_cs), ("RθSA", r_sa)]);
            }
        }
        for (name, value) in magnitudes {
            if !value.is_finite() {
                return Err(ParameterError::NonFinite(name));
            }
            if value < 0.0 {
                return Err(ParameterError::Negative(name));
            }
        }
        Ok(())
    }
}
