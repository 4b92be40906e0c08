//! Wire gauge selection for single-phase branch circuits.
//!
//! Static NEC ampacity/resistance tables for copper and aluminum building
//! wire, plus the selector that picks the smallest conductor satisfying both
//! the ampacity requirement and a voltage-drop limit.

mod gauge;
/// Static ampacity and resistance lookup tables.
pub mod tables;
/// Minimum-gauge search and voltage-drop escalation.
pub mod selector;

pub use gauge::{Gauge, TempRating};
pub use selector::{
    find_min_gauge, select_gauge, voltage_drop, Escalation, GaugeAmpacity, SelectionRequest,
    SelectionResult, VoltageDrop,
};
pub use tables::{ampacity_table, gauge_options, resistance_table, AmpacityTable, ResistanceTable};
