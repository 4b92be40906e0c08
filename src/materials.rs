//! Conductor materials covered by the ampacity and resistance tables.

use std::fmt;
use std::str::FromStr;

use crate::errors::GaugeError;

/// Conductor material.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Material {
    /// Annealed copper.
    Copper,
    /// Aluminum (AA-8000 series building wire).
    Aluminum,
}

impl Material {
    /// Every supported material.
    pub const ALL: [Self; 2] = [Self::Copper, Self::Aluminum];

    /// Lower-case canonical name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Copper => "copper",
            Self::Aluminum => "aluminum",
        }
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Copper => "Copper",
            Self::Aluminum => "Aluminum",
        })
    }
}

impl FromStr for Material {
    type Err = GaugeError;

    /// Accepts the full name, the chemical symbol or its initial letter,
    /// case-insensitively. Anything else is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "c" | "cu" | "copper" => Ok(Self::Copper),
            "a" | "al" | "aluminum" | "aluminium" => Ok(Self::Aluminum),
            _ => Err(GaugeError::InvalidMaterial(s.trim().to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_aliases_case_insensitively() {
        assert_eq!("Copper".parse::<Material>().unwrap(), Material::Copper);
        assert_eq!(" CU ".parse::<Material>().unwrap(), Material::Copper);
        assert_eq!("al".parse::<Material>().unwrap(), Material::Aluminum);
        assert_eq!("Aluminium".parse::<Material>().unwrap(), Material::Aluminum);
    }

    #[test]
    fn unknown_material_is_reported() {
        let err = "gold".parse::<Material>().unwrap_err();
        assert!(matches!(err, GaugeError::InvalidMaterial(ref m) if m == "gold"));
    }
}
