//! Stellar spectral classification parser.
//!
//! Parses Morgan–Keenan style codes (`G2V`, `K5III`, `B2Ve`, `M1-2Ia-Iab`)
//! into a `ParsedSpectralType`. Classification is advisory: anything that
//! does not start with a recognized class letter yields `None`, never an
//! error. Results are recomputed on every call.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

// ═══════════════════════════════════════════════════════════
// Types
// ═══════════════════════════════════════════════════════════

/// Temperature class, declared hottest to coolest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SpectralClass {
    O,
    B,
    A,
    F,
    G,
    K,
    M,
    L,
    T,
    Y,
}

impl SpectralClass {
    pub fn all() -> &'static [SpectralClass] {
        &[
            Self::O,
            Self::B,
            Self::A,
            Self::F,
            Self::G,
            Self::K,
            Self::M,
            Self::L,
            Self::T,
            Self::Y,
        ]
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'O' => Some(Self::O),
            'B' => Some(Self::B),
            'A' => Some(Self::A),
            'F' => Some(Self::F),
            'G' => Some(Self::G),
            'K' => Some(Self::K),
            'M' => Some(Self::M),
            'L' => Some(Self::L),
            'T' => Some(Self::T),
            'Y' => Some(Self::Y),
            _ => None,
        }
    }

    pub fn letter(&self) -> char {
        match self {
            Self::O => 'O',
            Self::B => 'B',
            Self::A => 'A',
            Self::F => 'F',
            Self::G => 'G',
            Self::K => 'K',
            Self::M => 'M',
            Self::L => 'L',
            Self::T => 'T',
            Self::Y => 'Y',
        }
    }

    /// Approximate effective temperature range in kelvin, `(low, high)`.
    /// `O` has no upper bound.
    pub fn temperature_range_k(&self) -> (u32, Option<u32>) {
        match self {
            Self::O => (30_000, None),
            Self::B => (10_000, Some(30_000)),
            Self::A => (7_500, Some(10_000)),
            Self::F => (6_000, Some(7_500)),
            Self::G => (5_200, Some(6_000)),
            Self::K => (3_700, Some(5_200)),
            Self::M => (2_400, Some(3_700)),
            Self::L => (1_300, Some(2_400)),
            Self::T => (550, Some(1_300)),
            Self::Y => (250, Some(550)),
        }
    }
}

impl fmt::Display for SpectralClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Yerkes luminosity class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LuminosityClass {
    /// `0`, `Ia0`, `Ia+`
    Hypergiant,
    SupergiantIa,
    SupergiantIab,
    SupergiantIb,
    /// Bare `I`
    Supergiant,
    /// `II`
    BrightGiant,
    /// `III`
    Giant,
    /// `IV`
    Subgiant,
    /// `V`
    MainSequence,
    /// `VI`
    Subdwarf,
}

impl LuminosityClass {
    /// Classify a luminosity token. Ranges such as `Ia-Iab` use the first
    /// (brighter) component.
    pub fn from_code(code: &str) -> Option<Self> {
        let first = code.split(['-', '/']).next()?.trim();
        match first {
            "0" | "Ia0" | "Ia+" => Some(Self::Hypergiant),
            "Ia" => Some(Self::SupergiantIa),
            "Iab" => Some(Self::SupergiantIab),
            "Ib" => Some(Self::SupergiantIb),
            "I" => Some(Self::Supergiant),
            "II" => Some(Self::BrightGiant),
            "III" => Some(Self::Giant),
            "IV" => Some(Self::Subgiant),
            "V" => Some(Self::MainSequence),
            "VI" => Some(Self::Subdwarf),
            _ => None,
        }
    }

    pub fn is_supergiant(&self) -> bool {
        matches!(
            self,
            Self::Hypergiant
                | Self::SupergiantIa
                | Self::SupergiantIab
                | Self::SupergiantIb
                | Self::Supergiant
        )
    }

    pub fn is_giant(&self) -> bool {
        matches!(self, Self::BrightGiant | Self::Giant)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Hypergiant => "hypergiant",
            Self::SupergiantIa | Self::SupergiantIab | Self::SupergiantIb | Self::Supergiant => {
                "supergiant"
            }
            Self::BrightGiant => "bright giant",
            Self::Giant => "giant",
            Self::Subgiant => "subgiant",
            Self::MainSequence => "main-sequence star",
            Self::Subdwarf => "subdwarf",
        }
    }
}

/// Structured result of parsing a spectral classification code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedSpectralType {
    pub class: SpectralClass,
    pub subclass: Option<f32>,
    pub luminosity: Option<LuminosityClass>,
    /// The luminosity token as written (`Iab`, `Ia-Iab`).
    pub luminosity_code: Option<String>,
    pub peculiarities: BTreeSet<char>,
}

impl ParsedSpectralType {
    fn class_only(class: SpectralClass) -> Self {
        Self {
            class,
            subclass: None,
            luminosity: None,
            luminosity_code: None,
            peculiarities: BTreeSet::new(),
        }
    }

    pub fn is_supergiant(&self) -> bool {
        self.luminosity.is_some_and(|l| l.is_supergiant())
    }

    pub fn is_giant(&self) -> bool {
        self.luminosity.is_some_and(|l| l.is_giant())
    }

    pub fn has_peculiarity(&self, flag: char) -> bool {
        self.peculiarities.contains(&flag)
    }
}

impl fmt::Display for ParsedSpectralType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.class)?;
        if let Some(sub) = self.subclass {
            write!(f, "{sub}")?;
        }
        if let Some(code) = &self.luminosity_code {
            write!(f, "{code}")?;
        }
        for flag in &self.peculiarities {
            write!(f, "{flag}")?;
        }
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════
// Parsing
// ═══════════════════════════════════════════════════════════

/// Class letter, subclass (one decimal), optional subclass range, luminosity
/// token (optionally a range), trailing peculiarity letters.
///
/// Alternation order matters: longer luminosity tokens are listed first.
static SPECTRAL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^([OBAFGKMLTY])(\d(?:\.\d)?)?(?:-\d(?:\.\d)?)?\s*((?:Ia0|Ia\+|Iab|Ia|Ib|III|II|IV|VI|V|I)(?:[-/](?:Ia0|Iab|Ia|Ib|III|II|IV|VI|V|I))?)?([a-z]*)$",
    )
    .expect("valid regex")
});

/// Parse a spectral classification code.
///
/// Returns `None` when the leading character is not a class letter.
pub fn parse_spectral_type(code: &str) -> Option<ParsedSpectralType> {
    let trimmed = code.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Some(caps) = SPECTRAL_PATTERN.captures(trimmed) {
        let class = caps
            .get(1)
            .and_then(|m| m.as_str().chars().next())
            .and_then(SpectralClass::from_letter)?;
        let subclass = caps.get(2).and_then(|m| m.as_str().parse::<f32>().ok());
        let luminosity_code = caps.get(3).map(|m| m.as_str().to_string());
        let luminosity = luminosity_code.as_deref().and_then(LuminosityClass::from_code);
        let peculiarities = caps
            .get(4)
            .map(|m| m.as_str().chars().collect())
            .unwrap_or_default();

        return Some(ParsedSpectralType {
            class,
            subclass,
            luminosity,
            luminosity_code,
            peculiarities,
        });
    }

    let leading = trimmed.chars().next()?;
    let class = SpectralClass::from_letter(leading)?;
    tracing::debug!(code = trimmed, class = %class, "Spectral code only partially parsed");
    Some(ParsedSpectralType::class_only(class))
}
