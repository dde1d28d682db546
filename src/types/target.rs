use crate::error::{Error, Result};
use crate::types::{CapitalDirection, GeoPoint, GeographyKind, SchoolLevel};

/// Tolerance used for targets that don't specify one
pub const DEFAULT_TOLERANCE_KM: f64 = 100.0;

/// A named real-world location students have to find on the map
///
/// Immutable once built. `tolerance_km` is the maximum distance at which a
/// placed pin still counts as correct.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeographyTarget {
    pub id: String,
    pub name: String,
    pub kind: GeographyKind,
    pub point: GeoPoint,
    #[cfg_attr(feature = "serde", serde(default = "default_tolerance_km"))]
    pub tolerance_km: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub level: SchoolLevel,
}

#[cfg(feature = "serde")]
fn default_tolerance_km() -> f64 {
    DEFAULT_TOLERANCE_KM
}

impl GeographyTarget {
    /// Create a Sek1 target
    ///
    /// The id is derived from kind and name (e.g. `"See-Bodensee"`).
    ///
    /// # Errors
    ///
    /// `InvalidTolerance` if `tolerance_km` is not a positive finite number,
    /// `CoordinateOutOfRange` if `point` is outside the valid lat/lon ranges.
    pub fn new(
        name: impl Into<String>,
        kind: GeographyKind,
        point: GeoPoint,
        tolerance_km: f64,
    ) -> Result<Self> {
        let name = name.into();
        let target = Self {
            id: format!("{}-{}", kind.display_name(), name),
            name,
            kind,
            point,
            tolerance_km,
            level: SchoolLevel::Sek1,
        };
        target.validate()?;
        Ok(target)
    }

    /// Create a Sek1 target with the [`DEFAULT_TOLERANCE_KM`] radius
    ///
    /// # Errors
    ///
    /// `CoordinateOutOfRange` if `point` is outside the valid lat/lon ranges.
    pub fn with_default_tolerance(
        name: impl Into<String>,
        kind: GeographyKind,
        point: GeoPoint,
    ) -> Result<Self> {
        Self::new(name, kind, point, DEFAULT_TOLERANCE_KM)
    }

    /// Set the school level the target is taught in
    pub fn with_level(mut self, level: SchoolLevel) -> Self {
        self.level = level;
        self
    }

    /// Check the tolerance and coordinate invariants
    pub fn validate(&self) -> Result<()> {
        if !(self.tolerance_km.is_finite() && self.tolerance_km > 0.0) {
            return Err(Error::InvalidTolerance {
                id: self.id.clone(),
                km: self.tolerance_km,
            });
        }
        if !self.point.is_valid() {
            return Err(Error::CoordinateOutOfRange { point: self.point });
        }
        Ok(())
    }
}

/// A European capital for the capitals quiz
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Capital {
    pub id: String,
    pub country: String,
    pub capital: String,
    pub point: GeoPoint,
    pub level: SchoolLevel,
}

impl Capital {
    /// Create a Sek1 capital, id is `"<country>-<capital>"`
    pub fn new(country: impl Into<String>, capital: impl Into<String>, point: GeoPoint) -> Self {
        let country = country.into();
        let capital = capital.into();
        Self {
            id: format!("{country}-{capital}"),
            country,
            capital,
            point,
            level: SchoolLevel::Sek1,
        }
    }

    pub fn with_level(mut self, level: SchoolLevel) -> Self {
        self.level = level;
        self
    }

    /// Text shown as the question
    pub fn prompt(&self, direction: CapitalDirection) -> &str {
        match direction {
            CapitalDirection::CountryToCapital => &self.country,
            CapitalDirection::CapitalToCountry => &self.capital,
        }
    }

    /// Text expected as the answer
    pub fn answer(&self, direction: CapitalDirection) -> &str {
        match direction {
            CapitalDirection::CountryToCapital => &self.capital,
            CapitalDirection::CapitalToCountry => &self.country,
        }
    }

    /// Check a typed answer against the capital's name
    ///
    /// Case, accents and surrounding whitespace are ignored.
    pub fn matches_answer(&self, input: &str) -> bool {
        crate::utils::text::fuzzy_match(input, &self.capital)
    }
}
