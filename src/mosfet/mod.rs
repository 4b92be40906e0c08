//! Power MOSFET loss and thermal estimates.
//!
//! Pure closed-form functions; the [`crate::dashboard`] layer applies the
//! warning policy and parameter checks on top of these.

/// Conduction, switching and total loss.
pub mod loss;
/// Junction temperature models and safety margin.
pub mod thermal;

pub use loss::{conduction_loss, switching_loss, total_loss, LossBreakdown};
pub use thermal::{
    junction_temp_detailed, junction_temp_simple, safety_margin, ThermalModel,
};
