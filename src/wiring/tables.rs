//! Static ampacity and resistance data.
//!
//! Ampacities follow NEC Table 310.16 (30 °C ambient, at most three
//! current-carrying conductors). Resistances are NEC Chapter 9 Table 8 DC
//! values for uncoated stranded conductors at 75 °C, in ohms per 1000 ft;
//! the aluminum figures are approximate.

use crate::materials::Material;
use crate::math::Scalar;

use super::gauge::Gauge::{Aught, Awg};
use super::gauge::{Gauge, TempRating};

/// Ampacity row: amperes at 60 °C, 75 °C and 90 °C.
pub type AmpacityRow = [u16; 3];

const COPPER_AMPACITY: &[(Gauge, AmpacityRow)] = &[
    (Awg(14), [15, 20, 25]),
    (Awg(12), [20, 25, 30]),
    (Awg(10), [30, 35, 40]),
    (Awg(8), [40, 50, 55]),
    (Awg(6), [55, 65, 75]),
    (Awg(4), [70, 85, 95]),
    (Awg(3), [85, 100, 110]),
    (Awg(2), [95, 115, 130]),
    (Awg(1), [110, 130, 145]),
    (Aught(1), [125, 150, 170]),
    (Aught(2), [145, 175, 195]),
    (Aught(3), [165, 200, 225]),
    (Aught(4), [195, 230, 260]),
];

// 14 AWG aluminum is not listed.
const ALUMINUM_AMPACITY: &[(Gauge, AmpacityRow)] = &[
    (Awg(12), [15, 20, 25]),
    (Awg(10), [25, 30, 35]),
    (Awg(8), [35, 40, 45]),
    (Awg(6), [40, 50, 55]),
    (Awg(4), [55, 65, 75]),
    (Awg(3), [65, 75, 85]),
    (Awg(2), [75, 90, 100]),
    (Awg(1), [85, 100, 115]),
    (Aught(1), [100, 120, 135]),
    (Aught(2), [115, 135, 150]),
    (Aught(3), [130, 155, 175]),
    (Aught(4), [150, 180, 205]),
];

const COPPER_RESISTANCE: &[(Gauge, Scalar)] = &[
    (Awg(14), 2.525),
    (Awg(12), 1.588),
    (Awg(10), 0.999),
    (Awg(8), 0.628),
    (Awg(6), 0.395),
    (Awg(4), 0.248),
    (Awg(3), 0.197),
    (Awg(2), 0.156),
    (Awg(1), 0.124),
    (Aught(1), 0.099),
    (Aught(2), 0.078),
    (Aught(3), 0.062),
    (Aught(4), 0.049),
];

const ALUMINUM_RESISTANCE: &[(Gauge, Scalar)] = &[
    (Awg(12), 2.659),
    (Awg(10), 1.671),
    (Awg(8), 1.052),
    (Awg(6), 0.661),
    (Awg(4), 0.416),
    (Awg(3), 0.330),
    (Awg(2), 0.262),
    (Awg(1), 0.208),
    (Aught(1), 0.165),
    (Aught(2), 0.131),
    (Aught(3), 0.104),
    (Aught(4), 0.082),
];

/// Read-only view of a material's ampacity table.
#[derive(Debug, Clone, Copy)]
pub struct AmpacityTable {
    material: Material,
    rows: &'static [(Gauge, AmpacityRow)],
}

impl AmpacityTable {
    /// Table over caller-supplied rows, e.g. values already derated for
    /// ambient temperature or conductor bundling.
    #[must_use]
    pub const fn new(material: Material, rows: &'static [(Gauge, AmpacityRow)]) -> Self {
        Self { material, rows }
    }

    /// Material the table describes.
    #[must_use]
    pub const fn material(&self) -> Material {
        self.material
    }

    /// Full row for `gauge`, if tabulated.
    #[must_use]
    pub fn row(&self, gauge: Gauge) -> Option<AmpacityRow> {
        self.rows
            .iter()
            .find(|(g, _)| *g == gauge)
            .map(|(_, row)| *row)
    }

    /// Allowed amperes for `gauge` at `rating`.
    #[must_use]
    pub fn ampacity(&self, gauge: Gauge, rating: TempRating) -> Option<Scalar> {
        self.row(gauge).map(|row| Scalar::from(row[rating.index()]))
    }

    /// Tabulated gauges in storage order.
    pub fn gauges(&self) -> impl Iterator<Item = Gauge> + '_ {
        self.rows.iter().map(|(g, _)| *g)
    }

    /// Tabulated gauges, smallest conductor first.
    #[must_use]
    pub fn options(&self) -> Vec<Gauge> {
        let mut options: Vec<Gauge> = self.gauges().collect();
        options.sort_unstable();
        options.dedup();
        options
    }
}

/// Read-only view of a material's resistance table (Ω per 1000 ft).
#[derive(Debug, Clone, Copy)]
pub struct ResistanceTable {
    material: Material,
    rows: &'static [(Gauge, Scalar)],
}

impl ResistanceTable {
    /// Table over caller-supplied rows in ohms per 1000 ft.
    #[must_use]
    pub const fn new(material: Material, rows: &'static [(Gauge, Scalar)]) -> Self {
        Self { material, rows }
    }

    /// Material the table describes.
    #[must_use]
    pub const fn material(&self) -> Material {
        self.material
    }

    /// Resistance per 1000 ft for `gauge`, if tabulated.
    #[must_use]
    pub fn per_kft(&self, gauge: Gauge) -> Option<Scalar> {
        self.rows
            .iter()
            .find(|(g, _)| *g == gauge)
            .map(|(_, r)| *r)
    }
}

/// Ampacity table for `material`.
#[must_use]
pub const fn ampacity_table(material: Material) -> AmpacityTable {
    let rows = match material {
        Material::Copper => COPPER_AMPACITY,
        Material::Aluminum => ALUMINUM_AMPACITY,
    };
    AmpacityTable::new(material, rows)
}

/// Resistance table for `material`.
#[must_use]
pub const fn resistance_table(material: Material) -> ResistanceTable {
    let rows = match material {
        Material::Copper => COPPER_RESISTANCE,
        Material::Aluminum => ALUMINUM_RESISTANCE,
    };
    ResistanceTable::new(material, rows)
}

/// Gauges available for `material`, smallest conductor first.
///
/// This is the escalation path followed when a voltage-drop limit forces a
/// larger conductor.
#[must_use]
pub fn gauge_options(material: Material) -> Vec<Gauge> {
    ampacity_table(material).options()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copper_options_run_small_to_large() {
        let options = gauge_options(Material::Copper);
        assert_eq!(options.len(), 13);
        assert_eq!(options.first(), Some(&Gauge::Awg(14)));
        assert_eq!(options[8], Gauge::Awg(1));
        assert_eq!(options[9], Gauge::Aught(1));
        assert_eq!(options.last(), Some(&Gauge::Aught(4)));
    }

    #[test]
    fn aluminum_has_no_fourteen_gauge() {
        let options = gauge_options(Material::Aluminum);
        assert_eq!(options.first(), Some(&Gauge::Awg(12)));
        assert!(!options.contains(&Gauge::Awg(14)));
        assert!(ampacity_table(Material::Aluminum).row(Gauge::Awg(14)).is_none());
    }

    #[test]
    fn ampacity_is_monotone_in_size_and_rating() {
        for material in Material::ALL {
            let table = ampacity_table(material);
            let options = gauge_options(material);
            for pair in options.windows(2) {
                let (small, large) = (table.row(pair[0]).unwrap(), table.row(pair[1]).unwrap());
                for t in 0..3 {
                    assert!(small[t] <= large[t], "{material} {} vs {}", pair[0], pair[1]);
                }
            }
            for g in options {
                let row = table.row(g).unwrap();
                assert!(row[0] <= row[1] && row[1] <= row[2], "{material} {g}");
            }
        }
    }

    #[test]
    fn resistance_strictly_decreases_with_size() {
        for material in Material::ALL {
            let table = resistance_table(material);
            let options = gauge_options(material);
            for pair in options.windows(2) {
                let small = table.per_kft(pair[0]).unwrap();
                let large = table.per_kft(pair[1]).unwrap();
                assert!(small > large, "{material} {} vs {}", pair[0], pair[1]);
            }
        }
    }

    #[test]
    fn every_ampacity_gauge_has_resistance() {
        for material in Material::ALL {
            let res = resistance_table(material);
            for g in ampacity_table(material).gauges() {
                assert!(res.per_kft(g).is_some(), "{material} {g}");
            }
        }
    }

    #[test]
    fn custom_rows_keep_their_material() {
        static ROWS: &[(Gauge, AmpacityRow)] = &[(Awg(10), [24, 28, 32]), (Awg(12), [16, 20, 24])];
        let table = AmpacityTable::new(Material::Copper, ROWS);
        assert_eq!(table.material(), Material::Copper);
        assert_eq!(table.options(), vec![Awg(12), Awg(10)]);
        assert_eq!(table.ampacity(Awg(10), TempRating::C75), Some(28.0));
        assert_eq!(resistance_table(Material::Aluminum).material(), Material::Aluminum);
    }

    #[test]
    fn lookup_by_rating() {
        let cu = ampacity_table(Material::Copper);
        assert_eq!(cu.ampacity(Gauge::Awg(12), TempRating::C75), Some(25.0));
        assert_eq!(cu.ampacity(Gauge::Aught(4), TempRating::C90), Some(260.0));
        assert_eq!(cu.ampacity(Gauge::Awg(18), TempRating::C60), None);
    }
}
