#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Engineering constants and sizing factors.
pub mod constants;
/// Strongly typed unit helpers and quantity abstractions.
pub mod units;
/// Shared numerical aliases and helpers.
pub mod math;
/// Conductor materials.
pub mod materials;
/// Wire gauge tables and the gauge selector.
pub mod wiring;
/// MOSFET conduction/switching loss and junction temperature.
pub mod mosfet;
/// Parameter sweep builders.
pub mod sweep;
/// Operating-point evaluation, thermal policy and sweeps for the MOSFET dashboard.
pub mod dashboard;
/// Error types shared between submodules.
pub mod errors;

/// Common exports for downstream crates.
pub mod prelude;
