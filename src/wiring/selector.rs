//! Minimum-gauge search, voltage-drop evaluation and gauge escalation.
//!
//! Selection runs in three steps:
//!
//! 1. scan the material's gauges from the thinnest conductor up and take the
//!    first whose ampacity at the chosen insulation rating covers the
//!    required current;
//! 2. evaluate the single-phase voltage drop for that gauge;
//! 3. while the drop exceeds the limit, step to the next larger gauge and
//!    re-evaluate, stopping at the largest tabulated size.
//!
//! [`Escalation`] exposes every evaluated gauge as an iterator so a caller
//! can show the trail; [`select_gauge`] runs it to completion.

use log::{debug, warn};

use crate::constants::{
    required_ampacity, DEFAULT_MAX_DROP_PERCENT, FEET_PER_KFT, SINGLE_PHASE_PATH_FACTOR,
};
use crate::errors::GaugeError;
use crate::materials::Material;
use crate::math::{ratio_or_zero, Scalar};

use super::gauge::{Gauge, TempRating};
use super::tables::{ampacity_table, resistance_table, AmpacityTable, ResistanceTable};

/// Gauge together with its allowed ampacity at the requested rating.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaugeAmpacity {
    /// Conductor size.
    pub gauge: Gauge,
    /// Allowed amperes.
    pub ampacity: Scalar,
}

/// Voltage lost along a run.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoltageDrop {
    /// Drop in volts.
    pub volts: Scalar,
    /// Drop as a percentage of the circuit voltage (0 for a 0 V circuit).
    pub percent: Scalar,
}

impl VoltageDrop {
    /// Single-phase drop for `current` amperes over a one-way run of
    /// `length_ft` feet of conductor with `ohms_per_kft` resistance.
    #[must_use]
    pub fn single_phase(current: Scalar, length_ft: Scalar, ohms_per_kft: Scalar, voltage: Scalar) -> Self {
        let volts = SINGLE_PHASE_PATH_FACTOR * current * length_ft * ohms_per_kft / FEET_PER_KFT;
        Self {
            volts,
            percent: 100.0 * ratio_or_zero(volts, voltage),
        }
    }
}

/// One evaluated gauge: the chosen size, its ampacity and the resulting drop.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionResult {
    /// Conductor size.
    pub gauge: Gauge,
    /// Allowed amperes at the requested rating.
    pub ampacity: Scalar,
    /// Voltage drop in volts.
    pub drop_volts: Scalar,
    /// Voltage drop in percent of circuit voltage.
    pub drop_percent: Scalar,
}

/// Inputs for a gauge selection.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionRequest {
    /// Conductor material.
    pub material: Material,
    /// Actual load current in amperes.
    pub load_current: Scalar,
    /// Circuit voltage in volts.
    pub voltage: Scalar,
    /// One-way run length in feet.
    pub length_ft: Scalar,
    /// Insulation temperature rating.
    pub temp_rating: TempRating,
    /// Load runs three hours or more.
    pub continuous: bool,
    /// Largest acceptable voltage drop in percent.
    pub max_drop_percent: Scalar,
}

impl SelectionRequest {
    /// Creates a request with a 75 °C rating, non-continuous load and a 3 % limit.
    #[must_use]
    pub fn new(material: Material, load_current: Scalar, voltage: Scalar, length_ft: Scalar) -> Self {
        Self {
            material,
            load_current,
            voltage,
            length_ft,
            temp_rating: TempRating::default(),
            continuous: false,
            max_drop_percent: DEFAULT_MAX_DROP_PERCENT,
        }
    }

    /// Sets the insulation temperature rating.
    #[must_use]
    pub const fn with_temp_rating(mut self, rating: TempRating) -> Self {
        self.temp_rating = rating;
        self
    }

    /// Marks the load as continuous (or not).
    #[must_use]
    pub const fn continuous(mut self, continuous: bool) -> Self {
        self.continuous = continuous;
        self
    }

    /// Sets the voltage-drop limit in percent.
    #[must_use]
    pub const fn with_max_drop_percent(mut self, percent: Scalar) -> Self {
        self.max_drop_percent = percent;
        self
    }

    /// Ampacity the conductor must provide, including the continuous-load factor.
    #[must_use]
    pub fn required_ampacity(&self) -> Scalar {
        required_ampacity(self.load_current, self.continuous)
    }
}

/// Escalation path of `table` paired with ampacities at `rating`.
fn rated_options(table: &AmpacityTable, rating: TempRating) -> Vec<GaugeAmpacity> {
    table
        .options()
        .into_iter()
        .filter_map(|gauge| {
            table
                .ampacity(gauge, rating)
                .map(|ampacity| GaugeAmpacity { gauge, ampacity })
        })
        .collect()
}

fn first_adequate(options: &[GaugeAmpacity], required: Scalar) -> Option<usize> {
    options.iter().position(|o| o.ampacity >= required)
}

/// Smallest gauge whose ampacity at `rating` is at least `required`.
///
/// `required` is expected to already include any continuous-load factor.
pub fn find_min_gauge(
    required: Scalar,
    rating: TempRating,
    material: Material,
) -> Result<GaugeAmpacity, GaugeError> {
    let options = rated_options(&ampacity_table(material), rating);
    first_adequate(&options, required)
        .map(|idx| options[idx])
        .ok_or(GaugeError::NoSuitableGauge {
            required,
            material,
            rating,
        })
}

/// Voltage drop for `current` over a `length_ft` one-way run of `gauge`.
pub fn voltage_drop(
    current: Scalar,
    length_ft: Scalar,
    gauge: Gauge,
    voltage: Scalar,
    material: Material,
) -> Result<VoltageDrop, GaugeError> {
    let ohms_per_kft = resistance_table(material)
        .per_kft(gauge)
        .ok_or(GaugeError::ResistanceDataUnavailable { gauge, material })?;
    Ok(VoltageDrop::single_phase(current, length_ft, ohms_per_kft, voltage))
}

/// Step-by-step gauge escalation for one request.
///
/// Yields a [`SelectionResult`] for every gauge evaluated, starting at the
/// minimum-ampacity gauge and moving strictly upward. Iteration stops after
/// the first gauge within the drop limit, after the largest gauge, or when
/// resistance data is missing. [`Escalation::finish`] then reports the
/// outcome.
#[derive(Debug, Clone)]
pub struct Escalation {
    request: SelectionRequest,
    resistance: ResistanceTable,
    options: Vec<GaugeAmpacity>,
    start: usize,
    next: Option<usize>,
    last: Option<SelectionResult>,
    failure: Option<GaugeError>,
}

impl Escalation {
    /// Runs the minimum-ampacity search and positions the escalation there.
    pub fn new(request: &SelectionRequest) -> Result<Self, GaugeError> {
        Self::with_tables(
            request,
            ampacity_table(request.material),
            resistance_table(request.material),
        )
    }

    /// Like [`Escalation::new`], but over the given tables instead of the
    /// built-in NEC data for the request's material.
    pub fn with_tables(
        request: &SelectionRequest,
        ampacity: AmpacityTable,
        resistance: ResistanceTable,
    ) -> Result<Self, GaugeError> {
        let options = rated_options(&ampacity, request.temp_rating);
        let required = request.required_ampacity();
        let start = first_adequate(&options, required).ok_or(GaugeError::NoSuitableGauge {
            required,
            material: request.material,
            rating: request.temp_rating,
        })?;
        debug!(
            "minimum gauge for {required:.1} A {} at {}: {} AWG",
            ampacity.material(), request.temp_rating, options[start].gauge
        );
        Ok(Self {
            request: *request,
            resistance,
            options,
            start,
            next: Some(start),
            last: None,
            failure: None,
        })
    }

    /// Gauge chosen on ampacity alone.
    #[must_use]
    pub fn minimum(&self) -> GaugeAmpacity {
        self.options[self.start]
    }

    /// Request being evaluated.
    #[must_use]
    pub const fn request(&self) -> &SelectionRequest {
        &self.request
    }

    /// Number of gauges left on the path above the current position.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.next.map_or(0, |idx| self.options.len() - idx)
    }

    /// Drives the escalation to the end and reports the outcome.
    pub fn finish(mut self) -> Result<SelectionResult, GaugeError> {
        self.by_ref().for_each(drop);
        if let Some(err) = self.failure {
            return Err(err);
        }
        let Some(last) = self.last else {
            return Err(GaugeError::NoSuitableGauge {
                required: self.request.required_ampacity(),
                material: self.request.material,
                rating: self.request.temp_rating,
            });
        };
        if last.drop_percent > self.request.max_drop_percent {
            warn!(
                "largest {} gauge ({} AWG) still drops {:.2}% (limit {}%)",
                self.request.material, last.gauge, last.drop_percent, self.request.max_drop_percent
            );
            return Err(GaugeError::VoltageDropLimitExceeded {
                largest: last.gauge,
                drop_percent: last.drop_percent,
                limit_percent: self.request.max_drop_percent,
            });
        }
        Ok(last)
    }
}

impl Iterator for Escalation {
    type Item = SelectionResult;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.next.take()?;
        let GaugeAmpacity { gauge, ampacity } = self.options[idx];
        let req = &self.request;

        let Some(ohms_per_kft) = self.resistance.per_kft(gauge) else {
            let err = GaugeError::ResistanceDataUnavailable {
                gauge,
                material: self.resistance.material(),
            };
            warn!("{err}");
            self.failure = Some(err);
            return None;
        };
        let drop = VoltageDrop::single_phase(req.load_current, req.length_ft, ohms_per_kft, req.voltage);

        let result = SelectionResult {
            gauge,
            ampacity,
            drop_volts: drop.volts,
            drop_percent: drop.percent,
        };
        debug!(
            "{gauge} AWG: drop {:.3} V ({:.2}%), limit {}%",
            drop.volts, drop.percent, req.max_drop_percent
        );

        if drop.percent > req.max_drop_percent && idx + 1 < self.options.len() {
            self.next = Some(idx + 1);
        }
        self.last = Some(result);
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining()))
    }
}

/// Selects the smallest gauge meeting both the ampacity and voltage-drop limits.
pub fn select_gauge(request: &SelectionRequest) -> Result<SelectionResult, GaugeError> {
    Escalation::new(request)?.finish()
}
