//! Static lookup tables driving attribute derivation.
//!
//! All derived text comes from here: per-spectral-class star profiles,
//! luminosity modifiers, per-category defaults, known-object overrides and
//! subtype descriptions. Nothing in this module is mutated at runtime.

use super::spectral::{ParsedSpectralType, SpectralClass};
use crate::models::ObjectCategory;

// ═══════════════════════════════════════════════════════════
// Spectral class profiles
// ═══════════════════════════════════════════════════════════

/// Visual profile of a star of a given temperature class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpectralProfile {
    pub temperature: &'static str,
    pub granulation: &'static str,
    pub starspots: &'static str,
    pub prominences: &'static str,
    pub primary_color: &'static str,
    pub limb_color: &'static str,
    pub accent_color: &'static str,
    /// Percentage of the frame the stellar disk should fill.
    pub frame_fill: u8,
    pub wavelength: &'static str,
}

/// Indexed by `SpectralClass as usize` (O first, Y last).
static SPECTRAL_PROFILES: [SpectralProfile; 10] = [
    SpectralProfile {
        temperature: "extremely hot (above 30,000 K)",
        granulation: "barely visible, very fine granulation smoothed by intense radiation pressure",
        starspots: "no visible starspots",
        prominences: "a powerful radiation-driven stellar wind streaming from the surface",
        primary_color: "intense blue",
        limb_color: "violet-blue",
        accent_color: "bright white",
        frame_fill: 55,
        wavelength: "ultraviolet-enhanced visible-light",
    },
    SpectralProfile {
        temperature: "very hot (10,000 to 30,000 K)",
        granulation: "fine, faint granulation",
        starspots: "no visible starspots",
        prominences: "faint wind-driven outflows along the limb",
        primary_color: "blue-white",
        limb_color: "pale blue",
        accent_color: "white",
        frame_fill: 60,
        wavelength: "ultraviolet-enhanced visible-light",
    },
    SpectralProfile {
        temperature: "hot (7,500 to 10,000 K)",
        granulation: "very fine, low-contrast granulation",
        starspots: "no visible starspots",
        prominences: "minimal prominence activity",
        primary_color: "brilliant white",
        limb_color: "pale blue-white",
        accent_color: "soft silver",
        frame_fill: 65,
        wavelength: "visible-light",
    },
    SpectralProfile {
        temperature: "warm (6,000 to 7,500 K)",
        granulation: "fine granulation with moderate contrast",
        starspots: "occasional small starspots",
        prominences: "small prominences along the limb",
        primary_color: "yellow-white",
        limb_color: "pale yellow",
        accent_color: "white",
        frame_fill: 70,
        wavelength: "visible-light",
    },
    SpectralProfile {
        temperature: "Sun-like (5,200 to 6,000 K)",
        granulation: "distinct honeycomb granulation of convection cells",
        starspots: "scattered dark sunspots with lighter penumbrae",
        prominences: "arching prominences and dark filaments along the limb",
        primary_color: "golden yellow",
        limb_color: "deep orange",
        accent_color: "pale yellow",
        frame_fill: 70,
        wavelength: "visible-light",
    },
    SpectralProfile {
        temperature: "cool (3,700 to 5,200 K)",
        granulation: "coarse granulation with larger convection cells",
        starspots: "larger, more numerous starspots",
        prominences: "moderate prominence loops",
        primary_color: "orange",
        limb_color: "deep red-orange",
        accent_color: "amber",
        frame_fill: 72,
        wavelength: "visible-light",
    },
    SpectralProfile {
        temperature: "cool red (2,400 to 3,700 K)",
        granulation: "large, irregular convection cells",
        starspots: "extensive dark starspot groups covering much of the surface",
        prominences: "frequent magnetic loops",
        primary_color: "deep red-orange",
        limb_color: "dark crimson",
        accent_color: "orange-red",
        frame_fill: 75,
        wavelength: "near-infrared and visible-light",
    },
    SpectralProfile {
        temperature: "very cool (1,300 to 2,400 K)",
        granulation: "turbulent cloud banding rather than granulation",
        starspots: "dark patchy gaps in the cloud deck",
        prominences: "faint auroral emission near the poles",
        primary_color: "dark red",
        limb_color: "deep maroon",
        accent_color: "dull magenta",
        frame_fill: 75,
        wavelength: "near-infrared",
    },
    SpectralProfile {
        temperature: "extremely cool (550 to 1,300 K)",
        granulation: "methane cloud bands",
        starspots: "dark gaps in the cloud bands",
        prominences: "faint auroral emission",
        primary_color: "deep magenta",
        limb_color: "dark purple",
        accent_color: "dull red",
        frame_fill: 75,
        wavelength: "infrared",
    },
    SpectralProfile {
        temperature: "ultracool (below 550 K)",
        granulation: "faint water-ice cloud bands",
        starspots: "no visible starspots",
        prominences: "no prominences",
        primary_color: "very dark reddish-purple",
        limb_color: "near-black maroon",
        accent_color: "faint brown",
        frame_fill: 75,
        wavelength: "mid-infrared",
    },
];

/// Used for stars without a usable spectral type.
pub const DEFAULT_STAR_PROFILE: SpectralProfile = SpectralProfile {
    temperature: "moderate",
    granulation: "fine, evenly distributed convection granules",
    starspots: "a few small dark starspots",
    prominences: "small arcing prominences along the limb",
    primary_color: "warm yellow-white",
    limb_color: "deeper orange",
    accent_color: "pale gold",
    frame_fill: 70,
    wavelength: "visible-light",
};

pub fn spectral_profile(class: SpectralClass) -> &'static SpectralProfile {
    &SPECTRAL_PROFILES[class as usize]
}

/// Size-driven overrides for evolved stars.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LuminosityModifier {
    pub granulation: &'static str,
    pub prominences: &'static str,
    pub frame_fill: u8,
}

pub const SUPERGIANT_MODIFIER: LuminosityModifier = LuminosityModifier {
    granulation: "a handful of enormous convection cells, each spanning a large fraction of the stellar disk, giving a mottled, irregular surface",
    prominences: "vast asymmetric plumes of outflowing gas and dust from intense mass loss",
    frame_fill: 85,
};

pub const GIANT_MODIFIER: LuminosityModifier = LuminosityModifier {
    granulation: "large, irregular convection cells visible across the bloated disk",
    prominences: "extended arcs of escaping gas along the limb",
    frame_fill: 80,
};

pub fn luminosity_modifier(parsed: &ParsedSpectralType) -> Option<&'static LuminosityModifier> {
    if parsed.is_supergiant() {
        Some(&SUPERGIANT_MODIFIER)
    } else if parsed.is_giant() {
        Some(&GIANT_MODIFIER)
    } else {
        None
    }
}

/// Lowercase name fragments that mark a known flare star.
pub const FLARE_STAR_INDICATORS: &[&str] = &["proxima", "flare", "uv ceti", "wolf"];

pub const FLARE_ACTIVITY: &str =
    "intense magnetic flare activity, with sudden bright flare ribbons erupting from active regions";

pub const EMISSION_LINE_ACTIVITY: &str = "a faint circumstellar gas disk glowing in emission lines";

// ═══════════════════════════════════════════════════════════
// Category defaults
// ═══════════════════════════════════════════════════════════

/// Lowest-priority descriptors for a category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryDefaults {
    pub structure: &'static str,
    pub surface: &'static str,
    pub colors: &'static str,
    pub wavelength: &'static str,
}

pub fn category_defaults(category: ObjectCategory) -> &'static CategoryDefaults {
    use ObjectCategory::*;
    match category {
        Star => &CategoryDefaults {
            structure: "a spherical photosphere with subtle limb darkening toward the edges",
            surface: "fine convective texture across the visible disk",
            colors: "warm yellow-white core fading to deeper orange at the limb",
            wavelength: "visible-light",
        },
        Galaxy => &CategoryDefaults {
            structure: "a bright central bulge surrounded by a flattened disk of stars",
            surface: "countless unresolved stars, dark dust lanes and scattered pink star-forming regions",
            colors: "warm yellow core, blue-white outer regions, reddish-brown dust lanes",
            wavelength: "visible-light",
        },
        BlackHole => &CategoryDefaults {
            structure: "a dark event-horizon shadow framed by a thin bright photon ring and a tilted, turbulent accretion disk",
            surface: "hot plasma streaming through the accretion disk, brighter on the approaching side from relativistic beaming",
            colors: "deep black shadow, orange and gold accretion disk, white-hot inner edge",
            wavelength: "radio interferometry and X-ray",
        },
        Nebula => &CategoryDefaults {
            structure: "billowing clouds of ionized gas laced with dark dust filaments",
            surface: "translucent wisps, bright ionization fronts and embedded young stars",
            colors: "hydrogen-alpha red, oxygen-III teal and sulfur gold",
            wavelength: "narrowband",
        },
        SupernovaRemnant => &CategoryDefaults {
            structure: "an expanding shell of shocked gas with intricate filaments",
            surface: "tangled filamentary strands and knots of shocked material",
            colors: "red hydrogen filaments, blue-green oxygen emission, faint violet X-ray haze",
            wavelength: "multi-wavelength",
        },
        Planet => &CategoryDefaults {
            structure: "a fully lit spherical planetary disk",
            surface: "atmospheric bands, cloud structures and weather systems",
            colors: "natural planetary tones of tan, cream and muted blue",
            wavelength: "visible-light",
        },
        Exoplanet => &CategoryDefaults {
            structure: "a spherical planet partly lit by its host star, showing a crescent terminator",
            surface: "cloud bands and hazy atmosphere consistent with its composition",
            colors: "muted natural tones shaped by the light of its host star",
            wavelength: "visible-light",
        },
        NeutronStar => &CategoryDefaults {
            structure: "a tiny, intensely bright compact stellar remnant with twin collimated radiation beams from its magnetic poles",
            surface: "a faint surrounding wind nebula and field-aligned emission",
            colors: "intense blue-white point source, violet and cyan beam emission",
            wavelength: "X-ray",
        },
        Quasar => &CategoryDefaults {
            structure: "an extremely luminous compact galactic nucleus with a narrow relativistic jet",
            surface: "a faint host galaxy barely visible around the blinding core",
            colors: "brilliant white-blue core, faint orange glow of the host galaxy",
            wavelength: "multi-wavelength",
        },
        Comet => &CategoryDefaults {
            structure: "a bright compact coma with a long curved dust tail and a straight ion tail",
            surface: "jets of sublimating gas and dust streaming from the nucleus",
            colors: "blue-green coma, white-yellow dust tail, blue ion tail",
            wavelength: "visible-light",
        },
        StarCluster => &CategoryDefaults {
            structure: "a loose grouping of young, bright stars",
            surface: "individually resolved stars with faint reflection nebulosity",
            colors: "hot blue-white stars with occasional orange giants",
            wavelength: "visible-light",
        },
        Moon => &CategoryDefaults {
            structure: "a fully lit spherical moon",
            surface: "impact craters, maria and ridges with sharp shadows along the terminator",
            colors: "neutral grays with subtle tan and brown tones",
            wavelength: "visible-light",
        },
        BrownDwarf => &CategoryDefaults {
            structure: "a dim, Jupiter-sized substellar sphere",
            surface: "turbulent cloud bands of condensates and patchy weather",
            colors: "deep magenta and dull reddish-brown",
            wavelength: "near-infrared",
        },
        GlobularCluster => &CategoryDefaults {
            structure: "a dense spherical swarm of hundreds of thousands of old stars concentrated toward the core",
            surface: "resolved individual stars thinning toward the outskirts",
            colors: "golden yellow core, scattered red giants and blue stragglers",
            wavelength: "visible-light",
        },
        DwarfPlanet => &CategoryDefaults {
            structure: "a small, nearly spherical icy world",
            surface: "icy plains, craters and subtle albedo patches",
            colors: "pale cream, tan and rust-brown tholin tones",
            wavelength: "visible-light",
        },
        WhiteDwarf => &CategoryDefaults {
            structure: "a tiny, dense Earth-sized stellar remnant appearing as an intensely bright point",
            surface: "a faint surrounding glow from residual ejected material",
            colors: "brilliant blue-white",
            wavelength: "ultraviolet and visible-light",
        },
        Supernova => &CategoryDefaults {
            structure: "an intensely bright stellar explosion outshining its host galaxy",
            surface: "a rapidly expanding blast front with glowing ejecta",
            colors: "brilliant white core with blue and orange ejecta",
            wavelength: "visible-light",
        },
        Unknown => &CategoryDefaults {
            structure: "a distinct astronomical object with natural, physically plausible structure",
            surface: "fine natural detail consistent with real telescope observations",
            colors: "natural astronomical tones",
            wavelength: "visible-light",
        },
    }
}

// ═══════════════════════════════════════════════════════════
// Known-object overrides
// ═══════════════════════════════════════════════════════════

/// A well-known object whose appearance is documented.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KnownObject {
    /// Lowercase name fragments matched by containment.
    pub keys: &'static [&'static str],
    pub name: &'static str,
    pub specific_features: &'static str,
    pub colors: Option<&'static str>,
}

pub static FAMOUS_NEBULAE: &[KnownObject] = &[
    KnownObject {
        keys: &["eagle nebula", "eagle", "m16", "pillars of creation"],
        name: "Eagle Nebula (M16)",
        specific_features: "the Pillars of Creation: three towering columns of cold gas and dust with evaporating gaseous globules at their tips, silhouetted against glowing ionized hydrogen",
        colors: Some("dusty brown pillars, golden-green ionized gas, teal oxygen emission"),
    },
    KnownObject {
        keys: &["orion nebula", "orion", "m42"],
        name: "Orion Nebula (M42)",
        specific_features: "a bright central cavity carved by the Trapezium cluster, with billowing walls of glowing gas and dark dust bays",
        colors: Some("pink-red hydrogen glow, teal core, brown dust lanes"),
    },
    KnownObject {
        keys: &["crab nebula", "crab"],
        name: "Crab Nebula (M1)",
        specific_features: "a chaotic web of orange-red filaments around a blue synchrotron glow powered by the central pulsar",
        colors: Some("orange-red filaments, electric blue interior glow"),
    },
    KnownObject {
        keys: &["horsehead"],
        name: "Horsehead Nebula",
        specific_features: "a dark horse-head shaped dust pillar rising against the glowing red emission of IC 434",
        colors: Some("black-brown dust silhouette, deep red hydrogen background"),
    },
    KnownObject {
        keys: &["ring nebula", "m57"],
        name: "Ring Nebula (M57)",
        specific_features: "an oval shell of glowing gas around a faint central white dwarf, with a darker inner cavity",
        colors: Some("teal-blue interior, orange-red outer shell"),
    },
    KnownObject {
        keys: &["helix"],
        name: "Helix Nebula",
        specific_features: "a vast twin-shelled planetary nebula with radial cometary knots surrounding a hot central star",
        colors: Some("blue-green inner region, red outer shell"),
    },
    KnownObject {
        keys: &["carina"],
        name: "Carina Nebula",
        specific_features: "towering dust pillars and the brilliant, turbulent region around Eta Carinae",
        colors: None,
    },
    KnownObject {
        keys: &["lagoon"],
        name: "Lagoon Nebula (M8)",
        specific_features: "a broad glowing cloud split by a dark dust lane, with a bright hourglass-shaped core",
        colors: Some("pink-red hydrogen glow, dark dust lane"),
    },
    KnownObject {
        keys: &["cat's eye", "cats eye"],
        name: "Cat's Eye Nebula",
        specific_features: "concentric shells and intricate knotted jets around a bright central star",
        colors: Some("green-blue inner shells, red outer halo"),
    },
];

pub static FAMOUS_BLACK_HOLES: &[KnownObject] = &[
    KnownObject {
        keys: &["m87"],
        name: "M87*",
        specific_features: "a bright asymmetric photon ring, brightest along its southern side, encircling a dark central shadow as resolved by very long baseline radio interferometry",
        colors: Some("orange and gold emission against a pure black shadow"),
    },
    KnownObject {
        keys: &["sagittarius a", "sgr a"],
        name: "Sagittarius A*",
        specific_features: "a compact dark shadow surrounded by a knotted, flickering band of emission at the heart of the Milky Way",
        colors: Some("amber and orange emission, black shadow"),
    },
    KnownObject {
        keys: &["cygnus x-1", "cyg x-1"],
        name: "Cygnus X-1",
        specific_features: "a stellar-mass black hole pulling a stream of gas from its blue supergiant companion into a bright accretion disk",
        colors: Some("blue-white companion star, orange-white accretion stream"),
    },
    KnownObject {
        keys: &["ton 618"],
        name: "TON 618",
        specific_features: "an ultramassive black hole powering a blinding quasar, its accretion disk outshining the surrounding galaxy",
        colors: None,
    },
];

pub static FAMOUS_DWARF_PLANETS: &[KnownObject] = &[
    KnownObject {
        keys: &["pluto"],
        name: "Pluto",
        specific_features: "the heart-shaped nitrogen-ice plain Sputnik Planitia, the dark reddish Cthulhu Macula and rugged water-ice mountains",
        colors: Some("cream and pale peach plains, dark red-brown highlands"),
    },
    KnownObject {
        keys: &["ceres"],
        name: "Ceres",
        specific_features: "a heavily cratered gray surface with the bright salt deposits of Occator crater",
        colors: Some("dark charcoal gray with brilliant white spots"),
    },
    KnownObject {
        keys: &["eris"],
        name: "Eris",
        specific_features: "a highly reflective, nearly white surface of frozen methane",
        colors: Some("bright off-white with faint gray mottling"),
    },
    KnownObject {
        keys: &["haumea"],
        name: "Haumea",
        specific_features: "an elongated, rapidly spinning ellipsoid with a crystalline water-ice surface and a dark red spot",
        colors: None,
    },
    KnownObject {
        keys: &["makemake"],
        name: "Makemake",
        specific_features: "a reddish-brown methane-ice surface with subtle bright patches",
        colors: None,
    },
];

pub fn known_objects(category: ObjectCategory) -> &'static [KnownObject] {
    match category {
        ObjectCategory::Nebula => FAMOUS_NEBULAE,
        ObjectCategory::BlackHole => FAMOUS_BLACK_HOLES,
        ObjectCategory::DwarfPlanet => FAMOUS_DWARF_PLANETS,
        _ => &[],
    }
}

/// Find the known object whose key is contained in `name` (case-insensitive).
///
/// Longest matching key wins; equal lengths go to the entry declared first.
pub fn match_known_object(category: ObjectCategory, name: &str) -> Option<&'static KnownObject> {
    let lower = name.to_lowercase();
    let mut best: Option<(&'static KnownObject, usize)> = None;

    for entry in known_objects(category) {
        let longest = entry
            .keys
            .iter()
            .filter(|key| lower.contains(*key))
            .map(|key| key.len())
            .max();
        if let Some(len) = longest {
            if best.is_none_or(|(_, best_len)| len > best_len) {
                best = Some((entry, len));
            }
        }
    }

    best.map(|(entry, _)| entry)
}

// ═══════════════════════════════════════════════════════════
// Subtypes
// ═══════════════════════════════════════════════════════════

/// Normalize a subtype string for lookup: lowercase, `_`/`-` to spaces.
pub fn normalize_subtype(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .replace(['_', '-'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn is_barred_spiral(subtype: &str) -> bool {
    normalize_subtype(subtype) == "barred spiral"
}

/// Technical description for a known `(category, subtype)` pair.
pub fn subtype_description(category: ObjectCategory, subtype: &str) -> Option<&'static str> {
    let key = normalize_subtype(subtype);
    match (category, key.as_str()) {
        (ObjectCategory::Galaxy, "spiral") => {
            Some("a spiral galaxy with well-defined arms winding out from a bright central bulge")
        }
        (ObjectCategory::Galaxy, "barred spiral") => Some(
            "a barred spiral galaxy with a prominent straight central bar of stars, its spiral arms starting at the ends of the bar",
        ),
        (ObjectCategory::Galaxy, "elliptical") => {
            Some("a smooth, featureless elliptical galaxy of old stars")
        }
        (ObjectCategory::Galaxy, "lenticular") => {
            Some("a lenticular galaxy with a bright bulge and a smooth disk without spiral arms")
        }
        (ObjectCategory::Galaxy, "irregular") => {
            Some("an irregular galaxy with a chaotic, asymmetric spread of stars and gas")
        }
        (ObjectCategory::Nebula, "emission") => Some("an emission nebula of glowing ionized hydrogen"),
        (ObjectCategory::Nebula, "planetary") => {
            Some("a planetary nebula of gas shells expelled by a dying star")
        }
        (ObjectCategory::Nebula, "reflection") => {
            Some("a blue reflection nebula of dust scattering nearby starlight")
        }
        (ObjectCategory::Nebula, "dark") => {
            Some("a dark nebula of dense dust blocking background starlight")
        }
        (ObjectCategory::Planet | ObjectCategory::Exoplanet, "gas giant") => {
            Some("a banded gas giant planet")
        }
        (ObjectCategory::Planet | ObjectCategory::Exoplanet, "ice giant") => {
            Some("a smooth, pale ice giant planet")
        }
        (ObjectCategory::Planet | ObjectCategory::Exoplanet, "terrestrial" | "rocky") => {
            Some("a rocky terrestrial planet")
        }
        (ObjectCategory::Planet | ObjectCategory::Exoplanet, "super earth") => {
            Some("a large rocky super-Earth")
        }
        (ObjectCategory::Planet | ObjectCategory::Exoplanet, "hot jupiter") => {
            Some("a tidally heated hot Jupiter glowing on its night side")
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::spectral::parse_spectral_type;

    #[test]
    fn every_class_has_a_profile() {
        for class in SpectralClass::all() {
            let profile = spectral_profile(*class);
            assert!(!profile.granulation.is_empty());
            assert!(profile.frame_fill > 0 && profile.frame_fill <= 100);
        }
    }

    #[test]
    fn profiles_indexed_by_class_order() {
        assert_eq!(spectral_profile(SpectralClass::O).primary_color, "intense blue");
        assert_eq!(spectral_profile(SpectralClass::G).primary_color, "golden yellow");
        assert_eq!(spectral_profile(SpectralClass::Y).wavelength, "mid-infrared");
    }

    #[test]
    fn supergiant_modifier_applies() {
        let parsed = parse_spectral_type("M2Iab").unwrap();
        assert_eq!(luminosity_modifier(&parsed), Some(&SUPERGIANT_MODIFIER));
        let parsed = parse_spectral_type("K5III").unwrap();
        assert_eq!(luminosity_modifier(&parsed), Some(&GIANT_MODIFIER));
        let parsed = parse_spectral_type("G2V").unwrap();
        assert!(luminosity_modifier(&parsed).is_none());
    }

    #[test]
    fn every_category_has_defaults() {
        for category in ObjectCategory::all() {
            let defaults = category_defaults(*category);
            assert!(!defaults.structure.is_empty(), "{category}");
            assert!(!defaults.colors.is_empty(), "{category}");
        }
    }

    #[test]
    fn known_object_match_is_case_insensitive() {
        let hit = match_known_object(ObjectCategory::Nebula, "THE EAGLE NEBULA").unwrap();
        assert_eq!(hit.name, "Eagle Nebula (M16)");
    }

    #[test]
    fn known_object_longest_key_wins() {
        // "horsehead" (9) beats "orion" (5)
        let hit = match_known_object(ObjectCategory::Nebula, "Orion Horsehead").unwrap();
        assert_eq!(hit.name, "Horsehead Nebula");
    }

    #[test]
    fn known_object_equal_length_goes_to_first_entry() {
        // "eagle" and "orion" are both five characters
        let hit = match_known_object(ObjectCategory::Nebula, "eagle orion").unwrap();
        assert_eq!(hit.name, "Eagle Nebula (M16)");
    }

    #[test]
    fn known_objects_scoped_to_category() {
        assert!(match_known_object(ObjectCategory::Galaxy, "Eagle").is_none());
        assert!(match_known_object(ObjectCategory::BlackHole, "M87*").is_some());
        assert!(match_known_object(ObjectCategory::DwarfPlanet, "134340 Pluto").is_some());
    }

    #[test]
    fn subtype_lookup_normalizes() {
        assert!(subtype_description(ObjectCategory::Galaxy, "Barred_Spiral").is_some());
        assert!(subtype_description(ObjectCategory::Galaxy, "ring").is_none());
        assert!(is_barred_spiral("barred-spiral"));
        assert!(!is_barred_spiral("spiral"));
    }
}
