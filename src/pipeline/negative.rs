//! Negative prompt composition.
//!
//! Universal exclusions always come first, then the category's own list of
//! characteristic failure modes. Output is a flat comma-joined term list.

use super::tables::is_barred_spiral;
use crate::models::ObjectCategory;

/// Style and artifact terms excluded for every object.
pub const UNIVERSAL_NEGATIVE: &[&str] = &[
    "cartoon",
    "anime",
    "illustration",
    "drawing",
    "painting",
    "sketch",
    "3d render",
    "cgi",
    "digital art",
    "concept art",
    "fantasy art",
    "diagram",
    "infographic",
    "chart",
    "text",
    "labels",
    "annotations",
    "watermark",
    "signature",
    "logo",
    "border",
    "picture frame",
    "low quality",
    "blurry",
    "jpeg artifacts",
    "oversaturated",
    "distorted proportions",
    "duplicate objects",
];

const STAR_NEGATIVE: &[&str] = &[
    "glass",
    "crystal",
    "glass sphere",
    "marble",
    "eclipse",
    "corona",
    "corona ring",
    "lens flare",
    "halo ring",
    "flat disk",
    "rocky surface",
    "face",
];

const GALAXY_NEGATIVE: &[&str] = &[
    "perfectly symmetric spiral",
    "drawn spiral lines",
    "solid disk",
    "single star",
    "planet",
    "overexposed core",
];

/// Added on top of the galaxy list when the subtype is a barred spiral.
const BARRED_SPIRAL_EXTRA: &[&str] = &[
    "standard spiral",
    "arms from center",
    "no bar",
    "arms originating at the nucleus",
    "round bulge without bar",
];

const BLACK_HOLE_NEGATIVE: &[&str] = &[
    "portal",
    "eye",
    "iris",
    "symmetric ring",
    "perfect ring",
    "wormhole",
    "tunnel",
    "vortex",
    "stargate",
    "glowing sphere",
    "solid black ball",
];

// Gas clouds are translucent; "transparent" must never be excluded here.
const NEBULA_NEGATIVE: &[&str] = &[
    "solid surface",
    "hard edges",
    "opaque wall",
    "smoke",
    "fire",
    "terrestrial clouds",
    "landscape",
    "horizon",
];

const SUPERNOVA_REMNANT_NEGATIVE: &[&str] = &[
    "perfect circle",
    "symmetric ring",
    "fireworks",
    "smoke",
    "fire",
    "explosion cloud",
];

const PLANET_NEGATIVE: &[&str] = &[
    "glowing planet",
    "neon colors",
    "flat disk",
    "city lights",
    "spaceship",
    "aliens",
    "multiple moons in foreground",
];

const EXOPLANET_NEGATIVE: &[&str] = &[
    "earth continents",
    "glowing planet",
    "neon colors",
    "city lights",
    "spaceship",
    "aliens",
];

const NEUTRON_STAR_NEGATIVE: &[&str] = &[
    "plasma ball",
    "lightning",
    "electricity",
    "glowing orb",
    "lens flare",
    "laser beams",
];

const QUASAR_NEGATIVE: &[&str] = &[
    "sun",
    "lens flare",
    "starburst filter",
    "laser beams",
    "symmetric ring",
];

const COMET_NEGATIVE: &[&str] = &[
    "meteor",
    "fireball",
    "shooting star",
    "atmospheric entry",
    "tail pointing toward the sun",
    "fire",
];

const STAR_CLUSTER_NEGATIVE: &[&str] = &[
    "single star",
    "nebula",
    "galaxy",
    "lens flare",
    "starburst filter",
];

const MOON_NEGATIVE: &[&str] = &[
    "atmosphere",
    "clouds",
    "glowing",
    "earth continents",
    "oceans",
];

const BROWN_DWARF_NEGATIVE: &[&str] = &[
    "sun",
    "bright yellow star",
    "rocky surface",
    "lens flare",
    "glowing corona",
];

const GLOBULAR_CLUSTER_NEGATIVE: &[&str] = &[
    "spiral arms",
    "nebula",
    "sparse scattered stars",
    "single star",
    "lens flare",
];

const DWARF_PLANET_NEGATIVE: &[&str] = &[
    "thick atmosphere",
    "oceans",
    "clouds",
    "glowing",
    "rings",
];

const WHITE_DWARF_NEGATIVE: &[&str] = &[
    "large star",
    "huge flares",
    "sunspots",
    "planet",
    "lens flare",
];

const SUPERNOVA_NEGATIVE: &[&str] = &[
    "fireworks",
    "mushroom cloud",
    "nuclear explosion",
    "smoke",
    "fire",
];

const UNKNOWN_NEGATIVE: &[&str] = &[
    "fictional object",
    "science fiction",
    "spaceship",
    "aliens",
    "unrealistic colors",
    "lens flare",
];

/// Category-specific exclusion list, honoring the barred-spiral override.
pub fn category_negative_terms(
    category: ObjectCategory,
    subtype: Option<&str>,
) -> Vec<&'static str> {
    use ObjectCategory::*;
    let base: &[&str] = match category {
        Star => STAR_NEGATIVE,
        Galaxy => GALAXY_NEGATIVE,
        BlackHole => BLACK_HOLE_NEGATIVE,
        Nebula => NEBULA_NEGATIVE,
        SupernovaRemnant => SUPERNOVA_REMNANT_NEGATIVE,
        Planet => PLANET_NEGATIVE,
        Exoplanet => EXOPLANET_NEGATIVE,
        NeutronStar => NEUTRON_STAR_NEGATIVE,
        Quasar => QUASAR_NEGATIVE,
        Comet => COMET_NEGATIVE,
        StarCluster => STAR_CLUSTER_NEGATIVE,
        Moon => MOON_NEGATIVE,
        BrownDwarf => BROWN_DWARF_NEGATIVE,
        GlobularCluster => GLOBULAR_CLUSTER_NEGATIVE,
        DwarfPlanet => DWARF_PLANET_NEGATIVE,
        WhiteDwarf => WHITE_DWARF_NEGATIVE,
        Supernova => SUPERNOVA_NEGATIVE,
        Unknown => UNKNOWN_NEGATIVE,
    };

    let mut terms = base.to_vec();
    if category == Galaxy && subtype.is_some_and(is_barred_spiral) {
        terms.extend_from_slice(BARRED_SPIRAL_EXTRA);
    }
    terms
}

/// Full negative prompt: universal terms, then category terms, comma-joined.
pub fn get_negative_prompt(category: ObjectCategory, subtype: Option<&str>) -> String {
    UNIVERSAL_NEGATIVE
        .iter()
        .copied()
        .chain(category_negative_terms(category, subtype))
        .collect::<Vec<_>>()
        .join(", ")
}
