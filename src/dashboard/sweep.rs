use std::io::{self, Write};

use crate::math::{Scalar, Series};
use crate::mosfet::{conduction_loss, switching_loss};
use crate::sweep::SweepConfig;

use super::{MosfetParameters, ParameterError};

/// Losses and junction temperature sampled over drain current.
///
/// Every sample is an independent point evaluation: the current replaces
/// `Id` in both the conduction and switching terms, everything else is held
/// at the operating point's values.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ThermalSweep {
    /// Drain current samples (A).
    pub currents: Series,
    /// Conduction loss per sample (W).
    pub conduction: Series,
    /// Switching loss per sample (W).
    pub switching: Series,
    /// Junction temperature per sample (°C).
    pub junction_temps: Series,
}

impl ThermalSweep {
    /// Sweeps drain current around `params.id` as described by `config`.
    pub fn run(params: &MosfetParameters, config: &SweepConfig) -> Result<Self, ParameterError> {
        params.validate()?;
        if config.points == 0 {
            return Err(ParameterError::EmptySweep);
        }
        Ok(Self::over(params, config.currents(params.id)))
    }

    /// Evaluates `params` at each of the given drain currents.
    #[must_use]
    pub fn over(params: &MosfetParameters, currents: Series) -> Self {
        let conduction = currents.map(|i| conduction_loss(i, params.rds_on));
        let switching =
            currents.map(|i| switching_loss(params.vds, i, params.t_rise, params.t_fall, params.f_sw));
        let junction_temps = (&conduction + &switching)
            .map(|p| params.thermal.junction_temp(params.t_ambient, p));
        Self {
            currents,
            conduction,
            switching,
            junction_temps,
        }
    }

    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.currents.len()
    }

    /// True when no samples were taken.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.currents.is_empty()
    }

    /// Total loss per sample (W).
    #[must_use]
    pub fn total_losses(&self) -> Series {
        &self.conduction + &self.switching
    }

    /// First sampled current whose junction temperature exceeds `t_j_max`.
    #[must_use]
    pub fn first_exceeding(&self, t_j_max: Scalar) -> Option<Scalar> {
        self.junction_temps
            .iter()
            .position(|&t| t > t_j_max)
            .map(|idx| self.currents[idx])
    }

    /// Highest junction temperature in the sweep.
    #[must_use]
    pub fn peak_junction_temp(&self) -> Option<Scalar> {
        (!self.is_empty()).then(|| self.junction_temps.max())
    }
}

/// Writes a CSV of the sweep: current, conduction, switching, total, junction temperature.
pub fn write_sweep_csv<W: Write>(mut w: W, sweep: &ThermalSweep) -> io::Result<()> {
    writeln!(w, "current,conduction,switching,total,junction_temp")?;
    for idx in 0..sweep.len() {
        let (pc, ps) = (sweep.conduction[idx], sweep.switching[idx]);
        writeln!(
            w,
            "{:.6e},{:.6e},{:.6e},{:.6e},{:.6e}",
            sweep.currents[idx],
            pc,
            ps,
            pc + ps,
            sweep.junction_temps[idx]
        )?;
    }
    Ok(())
}
