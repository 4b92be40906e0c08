//! Strongly typed quantities used when reporting results.
//!
//! Calculations run on bare [`Scalar`] values; wrapping them in a
//! [`Quantity`] attaches the unit symbol for display and keeps report
//! fields from being mixed up (a voltage drop cannot be passed where a
//! current is expected).

use std::fmt;
use std::marker::PhantomData;

use crate::math::Scalar;

/// Marker trait for unit tags.
pub trait Unit {
    /// Symbol printed after the numeric value.
    const SYMBOL: &'static str;
}

macro_rules! unit {
    ($(#[$meta:meta])* $name:ident, $symbol:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        pub struct $name;

        impl Unit for $name {
            const SYMBOL: &'static str = $symbol;
        }
    };
}

unit!(
    /// Volts.
    Volt,
    "V"
);
unit!(
    /// Amperes.
    Ampere,
    "A"
);
unit!(
    /// Ohms.
    Ohm,
    "Ω"
);
unit!(
    /// Watts.
    Watt,
    "W"
);
unit!(
    /// Degrees Celsius.
    Celsius,
    "°C"
);
unit!(
    /// Degrees Celsius per watt (thermal resistance).
    CelsiusPerWatt,
    "°C/W"
);
unit!(
    /// Percent.
    Percent,
    "%"
);

/// Scalar value tagged with a unit.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Quantity<T, U> {
    value: T,
    unit: PhantomData<U>,
}

impl<T: Copy, U: Unit> Quantity<T, U> {
    /// Wraps a raw value.
    #[must_use]
    pub const fn new(value: T) -> Self {
        Self {
            value,
            unit: PhantomData,
        }
    }

    /// Raw value in base units.
    #[must_use]
    pub const fn value(&self) -> T {
        self.value
    }

    /// Unit symbol.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        U::SYMBOL
    }
}

impl<T: Copy, U: Unit> From<T> for Quantity<T, U> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: fmt::Display, U: Unit> fmt::Display for Quantity<T, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*} {}", p, self.value, U::SYMBOL),
            None => write!(f, "{} {}", self.value, U::SYMBOL),
        }
    }
}

/// Voltage in volts.
pub type Voltage = Quantity<Scalar, Volt>;
/// Current in amperes.
pub type Current = Quantity<Scalar, Ampere>;
/// Resistance in ohms.
pub type Resistance = Quantity<Scalar, Ohm>;
/// Power in watts.
pub type Power = Quantity<Scalar, Watt>;
/// Temperature in degrees Celsius.
pub type Temperature = Quantity<Scalar, Celsius>;
/// Thermal resistance in °C/W.
pub type ThermalResistance = Quantity<Scalar, CelsiusPerWatt>;
/// Dimensionless ratio expressed in percent.
pub type Percentage = Quantity<Scalar, Percent>;

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn display_honours_precision() {
        let v = Voltage::new(9.528);
        assert_eq!(format!("{v:.2}"), "9.53 V");
        let r = ThermalResistance::new(4.0);
        assert_eq!(format!("{r}"), "4 °C/W");
    }

    #[test]
    fn resistance_prints_ohm_symbol() {
        let r = Resistance::new(0.05);
        let printed = format!("{r}");
        assert!(
            printed.ends_with('Ω'),
            "expected resistance string to include ohm symbol, got {printed}"
        );
        assert_relative_eq!(r.value(), 0.05);
    }
}
