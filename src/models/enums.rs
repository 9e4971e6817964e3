use serde::{Deserialize, Serialize};

/// Macro to generate a closed enum with as_str + all() + Display.
macro_rules! str_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }

            pub fn all() -> &'static [$name] {
                &[$(Self::$variant),+]
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }
    };
}

str_enum!(
    /// Closed set of astronomical object kinds the catalog sells.
    ObjectCategory {
        Star => "star",
        Galaxy => "galaxy",
        BlackHole => "black_hole",
        Nebula => "nebula",
        SupernovaRemnant => "supernova_remnant",
        Planet => "planet",
        Exoplanet => "exoplanet",
        NeutronStar => "neutron_star",
        Quasar => "quasar",
        Comet => "comet",
        StarCluster => "star_cluster",
        Moon => "moon",
        BrownDwarf => "brown_dwarf",
        GlobularCluster => "globular_cluster",
        DwarfPlanet => "dwarf_planet",
        WhiteDwarf => "white_dwarf",
        Supernova => "supernova",
        Unknown => "unknown",
    }
);

impl ObjectCategory {
    /// Map a catalog category string onto the closed set.
    ///
    /// Case, surrounding whitespace, `_` and `-` separators are ignored.
    /// Anything unrecognized becomes `Unknown`; this never fails.
    pub fn from_catalog(raw: &str) -> Self {
        let normalized = raw
            .trim()
            .to_lowercase()
            .replace(['_', '-'], " ")
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");

        match normalized.as_str() {
            "star" | "stars" => Self::Star,
            "galaxy" | "galaxies" => Self::Galaxy,
            "black hole" | "blackhole" => Self::BlackHole,
            "nebula" | "nebulae" => Self::Nebula,
            "supernova remnant" | "snr" => Self::SupernovaRemnant,
            "planet" => Self::Planet,
            "exoplanet" | "extrasolar planet" => Self::Exoplanet,
            "pulsar" | "magnetar" | "neutron star" | "pulsar/magnetar/neutron star" => {
                Self::NeutronStar
            }
            "quasar" => Self::Quasar,
            "comet" => Self::Comet,
            "star cluster" | "open cluster" => Self::StarCluster,
            "moon" | "natural satellite" => Self::Moon,
            "brown dwarf" => Self::BrownDwarf,
            "globular cluster" => Self::GlobularCluster,
            "dwarf planet" => Self::DwarfPlanet,
            "white dwarf" => Self::WhiteDwarf,
            "supernova" => Self::Supernova,
            _ => Self::Unknown,
        }
    }

    /// Human-readable label used inside prompt text.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Star => "star",
            Self::Galaxy => "galaxy",
            Self::BlackHole => "black hole",
            Self::Nebula => "nebula",
            Self::SupernovaRemnant => "supernova remnant",
            Self::Planet => "planet",
            Self::Exoplanet => "exoplanet",
            Self::NeutronStar => "neutron star",
            Self::Quasar => "quasar",
            Self::Comet => "comet",
            Self::StarCluster => "star cluster",
            Self::Moon => "moon",
            Self::BrownDwarf => "brown dwarf",
            Self::GlobularCluster => "globular cluster",
            Self::DwarfPlanet => "dwarf planet",
            Self::WhiteDwarf => "white dwarf",
            Self::Supernova => "supernova",
            Self::Unknown => "celestial object",
        }
    }
}

impl Default for ObjectCategory {
    fn default() -> Self {
        Self::Unknown
    }
}

str_enum!(
    /// Provenance tier that determined an object's visual descriptors.
    ///
    /// Declared in priority order: `Explicit` outranks everything below it.
    FeatureSource {
        Explicit => "explicit",
        Famous => "famous",
        Spectral => "spectral",
        Template => "template",
        Default => "default",
    }
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_strings_map_to_categories() {
        assert_eq!(ObjectCategory::from_catalog("Star"), ObjectCategory::Star);
        assert_eq!(ObjectCategory::from_catalog("Black Hole"), ObjectCategory::BlackHole);
        assert_eq!(ObjectCategory::from_catalog("black_hole"), ObjectCategory::BlackHole);
        assert_eq!(
            ObjectCategory::from_catalog("  Supernova-Remnant "),
            ObjectCategory::SupernovaRemnant
        );
        assert_eq!(ObjectCategory::from_catalog("Dwarf Planet"), ObjectCategory::DwarfPlanet);
    }

    #[test]
    fn pulsar_family_collapses_to_neutron_star() {
        for raw in ["Pulsar", "magnetar", "Neutron Star"] {
            assert_eq!(ObjectCategory::from_catalog(raw), ObjectCategory::NeutronStar, "{raw}");
        }
    }

    #[test]
    fn unrecognized_category_falls_back_to_unknown() {
        assert_eq!(ObjectCategory::from_catalog("Wormhole"), ObjectCategory::Unknown);
        assert_eq!(ObjectCategory::from_catalog(""), ObjectCategory::Unknown);
    }

    #[test]
    fn as_str_round_trips_through_catalog_parser() {
        for category in ObjectCategory::all() {
            assert_eq!(ObjectCategory::from_catalog(category.as_str()), *category);
        }
    }

    #[test]
    fn feature_source_declared_in_priority_order() {
        assert!(FeatureSource::Explicit < FeatureSource::Famous);
        assert!(FeatureSource::Famous < FeatureSource::Spectral);
        assert!(FeatureSource::Spectral < FeatureSource::Template);
        assert!(FeatureSource::Template < FeatureSource::Default);
    }

    #[test]
    fn serde_uses_snake_case() {
        let json = serde_json::to_string(&ObjectCategory::GlobularCluster).unwrap();
        assert_eq!(json, "\"globular_cluster\"");
        let source: FeatureSource = serde_json::from_str("\"famous\"").unwrap();
        assert_eq!(source, FeatureSource::Famous);
    }
}
