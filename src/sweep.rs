//! Parameter sweep utilities.

use log::debug;

use crate::math::{Scalar, Series};

/// Generates `n` linearly spaced samples in [start, stop].
#[must_use]
pub fn linspace(start: Scalar, stop: Scalar, n: usize) -> Vec<Scalar> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n as Scalar - 1.0);
            (0..n).map(|i| start + step * i as Scalar).collect()
        }
    }
}

/// Applies `f` to each sample and collects results.
#[must_use]
pub fn sweep_map<I, F, T>(samples: I, f: F) -> Vec<T>
where
    I: IntoIterator<Item = Scalar>,
    F: FnMut(Scalar) -> T,
{
    samples.into_iter().map(f).collect()
}

/// Range of drain currents swept around a nominal operating point.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepConfig {
    /// Number of samples.
    pub points: usize,
    /// First sample as a fraction of the nominal current.
    pub start_fraction: Scalar,
    /// Last sample as a fraction of the nominal current.
    pub stop_fraction: Scalar,
    /// Floor on the first sample (A).
    pub min_start: Scalar,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            points: 100,
            start_fraction: 0.05,
            stop_fraction: 2.0,
            min_start: 0.1,
        }
    }
}

impl SweepConfig {
    /// Sets the number of samples.
    #[must_use]
    pub const fn with_points(mut self, points: usize) -> Self {
        self.points = points;
        self
    }

    /// Bounds of the sweep around `nominal` amperes.
    #[must_use]
    pub fn bounds(&self, nominal: Scalar) -> (Scalar, Scalar) {
        (
            self.min_start.max(nominal * self.start_fraction),
            nominal * self.stop_fraction,
        )
    }

    /// Current samples around `nominal` amperes.
    #[must_use]
    pub fn currents(&self, nominal: Scalar) -> Series {
        let (start, stop) = self.bounds(nominal);
        debug!("current sweep {start:.3} A .. {stop:.3} A, {} points", self.points);
        Series::from_vec(linspace(start, stop, self.points))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn linspace_basic() {
        let v = linspace(0.0, 1.0, 5);
        assert_eq!(v, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(3.0, 9.0, 1), vec![3.0]);
    }

    #[test]
    fn sweep_map_runs_function() {
        let out = sweep_map(vec![1.0, 2.0, 3.0], |i| i * 2.0);
        assert_eq!(out, vec![2.0, 4.0, 6.0]);
    }

    #[test]
    fn default_sweep_spans_five_percent_to_double() {
        let currents = SweepConfig::default().currents(10.0);
        assert_eq!(currents.len(), 100);
        assert_relative_eq!(currents[0], 0.5);
        assert_relative_eq!(currents[99], 20.0, epsilon = 1e-12);
    }

    #[test]
    fn small_currents_respect_floor() {
        let (start, stop) = SweepConfig::default().bounds(1.0);
        assert_relative_eq!(start, 0.1);
        assert_relative_eq!(stop, 2.0);
    }
}
