//! Convenience re-exports for both calculators.

pub use crate::constants::*;
pub use crate::dashboard::{
    efficiency, write_sweep_csv, DashboardReport, HeatsinkRequirement, MosfetParameters,
    ParameterError, ThermalStatus, ThermalSweep,
};
pub use crate::errors::{GaugeError, PowerLabError};
pub use crate::materials::Material;
pub use crate::math::{Scalar, Series};
pub use crate::mosfet::{
    conduction_loss, junction_temp_detailed, junction_temp_simple, safety_margin, switching_loss,
    total_loss, LossBreakdown, ThermalModel,
};
pub use crate::sweep::{linspace, sweep_map, SweepConfig};
pub use crate::units::{
    Current, Percentage, Power, Quantity, Resistance, Temperature, ThermalResistance,
    Unit, Voltage,
};
pub use crate::wiring::{
    ampacity_table, find_min_gauge, gauge_options, resistance_table, select_gauge, voltage_drop,
    AmpacityTable, Escalation, Gauge, GaugeAmpacity, ResistanceTable, SelectionRequest,
    SelectionResult, TempRating, VoltageDrop,
};
