use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::errors::GaugeError;

/// American Wire Gauge size designation.
///
/// Ordered by current-carrying capacity: numbered sizes run from thin to
/// thick as the number falls (14, 12, ..., 1), then the aught sizes grow
/// with their count of zeros (1/0, 2/0, 3/0, 4/0).
///
/// The variants are public for pattern matching; build values from numbers
/// with [`Gauge::awg`] and [`Gauge::aught`], which reject `Awg(0)` and
/// `Aught(0)`. The single-zero size is `Aught(1)`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gauge {
    /// Numbered size, e.g. `Awg(12)` for 12 AWG. Never zero.
    Awg(u8),
    /// Aught size, e.g. `Aught(2)` for 2/0 ("00"). Never zero.
    Aught(u8),
}

impl Gauge {
    /// Numbered size `n` AWG; `n` must be at least 1.
    pub fn awg(n: u8) -> Result<Self, GaugeError> {
        if n == 0 {
            return Err(GaugeError::InvalidGauge(n.to_string()));
        }
        Ok(Self::Awg(n))
    }

    /// Aught size with `zeros` zeros (`aught(2)` is 2/0); `zeros` must be at least 1.
    pub fn aught(zeros: u8) -> Result<Self, GaugeError> {
        if zeros == 0 {
            return Err(GaugeError::InvalidGauge(format!("{zeros}/0")));
        }
        Ok(Self::Aught(zeros))
    }
}

impl Ord for Gauge {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Awg(a), Self::Awg(b)) => b.cmp(a),
            (Self::Aught(a), Self::Aught(b)) => a.cmp(b),
            (Self::Awg(_), Self::Aught(_)) => Ordering::Less,
            (Self::Aught(_), Self::Awg(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for Gauge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Gauge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Awg(n) => write!(f, "{n}"),
            Self::Aught(n) => write!(f, "{n}/0"),
        }
    }
}

impl FromStr for Gauge {
    type Err = GaugeError;

    /// Parses `12`, `12 AWG`, `1/0`, `2/0 AWG` and the zero forms `0`..`0000`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || GaugeError::InvalidGauge(s.trim().to_owned());
        let lower = s.trim().to_ascii_lowercase();
        let body = lower.strip_suffix("awg").unwrap_or(&lower).trim();

        if let Some((count, zero)) = body.split_once('/') {
            if zero.trim() != "0" {
                return Err(invalid());
            }
            let zeros = count.trim().parse::<u8>().map_err(|_| invalid())?;
            return Self::aught(zeros).map_err(|_| invalid());
        }

        if !body.is_empty() && body.chars().all(|c| c == '0') {
            return u8::try_from(body.len())
                .map(Self::Aught)
                .map_err(|_| invalid());
        }

        let n = body.parse::<u8>().map_err(|_| invalid())?;
        Self::awg(n).map_err(|_| invalid())
    }
}

/// Insulation temperature rating; selects the ampacity column.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum TempRating {
    /// 60 °C (TW, UF).
    C60,
    /// 75 °C (THW, THWN, XHHW).
    #[default]
    C75,
    /// 90 °C (THHN, XHHW-2).
    C90,
}

impl TempRating {
    /// Ratings in column order.
    pub const ALL: [Self; 3] = [Self::C60, Self::C75, Self::C90];

    /// Column index into an ampacity row.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::C60 => 0,
            Self::C75 => 1,
            Self::C90 => 2,
        }
    }

    /// Rated conductor temperature in °C.
    #[must_use]
    pub const fn celsius(self) -> u16 {
        match self {
            Self::C60 => 60,
            Self::C75 => 75,
            Self::C90 => 90,
        }
    }
}

impl TryFrom<usize> for TempRating {
    type Error = GaugeError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(GaugeError::InvalidTempRating(index))
    }
}

impl fmt::Display for TempRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°C", self.celsius())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_follows_conductor_size() {
        let mut sizes = vec![
            Gauge::Aught(2),
            Gauge::Awg(1),
            Gauge::Awg(14),
            Gauge::Aught(1),
            Gauge::Awg(4),
        ];
        sizes.sort();
        assert_eq!(
            sizes,
            vec![
                Gauge::Awg(14),
                Gauge::Awg(4),
                Gauge::Awg(1),
                Gauge::Aught(1),
                Gauge::Aught(2),
            ]
        );
    }

    #[test]
    fn parses_common_spellings() {
        assert_eq!("12".parse::<Gauge>().unwrap(), Gauge::Awg(12));
        assert_eq!("12 AWG".parse::<Gauge>().unwrap(), Gauge::Awg(12));
        assert_eq!("1/0".parse::<Gauge>().unwrap(), Gauge::Aught(1));
        assert_eq!("4/0 awg".parse::<Gauge>().unwrap(), Gauge::Aught(4));
        assert_eq!("000".parse::<Gauge>().unwrap(), Gauge::Aught(3));
        assert_eq!("0".parse::<Gauge>().unwrap(), Gauge::Aught(1));
    }

    #[test]
    fn rejects_garbage() {
        for bad in ["", "awg", "1/2", "x", "0/0", "-4"] {
            assert!(
                matches!(bad.parse::<Gauge>(), Err(GaugeError::InvalidGauge(_))),
                "expected `{bad}` to be rejected"
            );
        }
    }

    #[test]
    fn display_round_trips_through_parse() {
        for g in [Gauge::Awg(14), Gauge::Aught(3)] {
            assert_eq!(g.to_string().parse::<Gauge>().unwrap(), g);
        }
        for n in 1..=40 {
            let g = Gauge::awg(n).unwrap();
            assert_eq!(g.to_string().parse::<Gauge>().unwrap(), g);
            let g = Gauge::aught(n).unwrap();
            assert_eq!(g.to_string().parse::<Gauge>().unwrap(), g);
        }
    }

    #[test]
    fn zero_sizes_are_not_constructible() {
        assert_eq!(Gauge::awg(0), Err(GaugeError::InvalidGauge("0".to_owned())));
        assert_eq!(Gauge::aught(0), Err(GaugeError::InvalidGauge("0/0".to_owned())));
    }

    #[test]
    fn temp_rating_indices() {
        assert_eq!(TempRating::try_from(1).unwrap(), TempRating::C75);
        assert_eq!(TempRating::C90.index(), 2);
        assert_eq!(
            TempRating::try_from(3).unwrap_err(),
            GaugeError::InvalidTempRating(3)
        );
        assert_eq!(TempRating::C60.to_string(), "60°C");
    }
}
