//! Shared numerical primitives anchored on `nalgebra`.

use nalgebra::DVector;

/// Primary scalar type used across the crate.
pub type Scalar = f64;
/// Column of sampled values (one entry per sweep point).
pub type Series = DVector<Scalar>;

/// Clamps `value` into the closed unit interval; NaN maps to zero.
#[must_use]
pub fn clamp_unit(value: Scalar) -> Scalar {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Ratio `num / den`, or zero when the denominator is exactly zero.
#[must_use]
pub fn ratio_or_zero(num: Scalar, den: Scalar) -> Scalar {
    if den == 0.0 {
        0.0
    } else {
        num / den
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn clamp_unit_bounds_values() {
        assert_relative_eq!(clamp_unit(1.5), 1.0);
        assert_relative_eq!(clamp_unit(-0.2), 0.0);
        assert_relative_eq!(clamp_unit(Scalar::NAN), 0.0);
        assert_relative_eq!(clamp_unit(0.42), 0.42);
    }

    #[test]
    fn ratio_guards_zero_denominator() {
        assert_relative_eq!(ratio_or_zero(9.528, 0.0), 0.0);
        assert_relative_eq!(ratio_or_zero(9.0, 3.0), 3.0);
    }
}
