/// Kind of geographic feature a quiz target refers to
///
/// Carried through the evaluation untouched; only used for display and
/// filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GeographyKind {
    Continent,
    Mountain,
    River,
    Sea,
    Lake,
    Island,
    Peninsula,
    Strait,
    Landscape,
    Landmark,
}

impl GeographyKind {
    pub const ALL: [GeographyKind; 10] = [
        GeographyKind::Continent,
        GeographyKind::Mountain,
        GeographyKind::River,
        GeographyKind::Sea,
        GeographyKind::Lake,
        GeographyKind::Island,
        GeographyKind::Peninsula,
        GeographyKind::Strait,
        GeographyKind::Landscape,
        GeographyKind::Landmark,
    ];

    /// Label shown to students (German, as printed in the atlas)
    pub fn display_name(&self) -> &'static str {
        match self {
            GeographyKind::Continent => "Kontinent",
            GeographyKind::Mountain => "Gebirge",
            GeographyKind::River => "Fluss",
            GeographyKind::Sea => "Meer/Ozean",
            GeographyKind::Lake => "See",
            GeographyKind::Island => "Insel",
            GeographyKind::Peninsula => "Halbinsel",
            GeographyKind::Strait => "Meerenge",
            GeographyKind::Landscape => "Landschaft",
            GeographyKind::Landmark => "Weltwunder/Rekord",
        }
    }

    /// Display group this kind is listed under
    pub fn group(&self) -> KindGroup {
        match self {
            GeographyKind::Continent => KindGroup::Continents,
            GeographyKind::River
            | GeographyKind::Sea
            | GeographyKind::Lake
            | GeographyKind::Strait => KindGroup::Waters,
            GeographyKind::Mountain => KindGroup::Mountains,
            GeographyKind::Island | GeographyKind::Peninsula => KindGroup::IslandsAndPeninsulas,
            GeographyKind::Landscape => KindGroup::Landscapes,
            GeographyKind::Landmark => KindGroup::Landmarks,
        }
    }

    /// Sort key for grouped listings
    pub fn group_order(&self) -> u8 {
        self.group() as u8
    }
}

/// Grouping of [`GeographyKind`]s for display, in listing order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum KindGroup {
    Continents = 0,
    Waters = 1,
    Mountains = 2,
    IslandsAndPeninsulas = 3,
    Landscapes = 4,
    Landmarks = 5,
}

impl KindGroup {
    pub fn display_name(&self) -> &'static str {
        match self {
            KindGroup::Continents => "Kontinente",
            KindGroup::Waters => "Gewässer",
            KindGroup::Mountains => "Gebirge",
            KindGroup::IslandsAndPeninsulas => "Inseln & Halbinseln",
            KindGroup::Landscapes => "Landschaften",
            KindGroup::Landmarks => "Weltwunder/Rekorde",
        }
    }
}

/// School year a record is taught in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SchoolLevel {
    #[default]
    Sek1,
    Sek2,
}

impl SchoolLevel {
    /// Whether records of `item_level` are part of this level's question pool
    ///
    /// Sek1 only sees Sek1 records, Sek2 builds on top of Sek1 and sees all.
    pub fn includes(&self, item_level: SchoolLevel) -> bool {
        match self {
            SchoolLevel::Sek1 => item_level == SchoolLevel::Sek1,
            SchoolLevel::Sek2 => true,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SchoolLevel::Sek1 => "1. Sek",
            SchoolLevel::Sek2 => "2. Sek",
        }
    }
}

/// Which half of a capital record a question asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CapitalDirection {
    /// Country is shown, the capital has to be answered
    #[default]
    CountryToCapital,
    /// Capital is shown, the country has to be answered
    CapitalToCountry,
}
