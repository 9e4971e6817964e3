//! Canonical object record and the catalog boundary that produces it.
//!
//! The catalog collaborator is loose about shapes: feature lists arrive as
//! JSON arrays, as JSON-encoded strings, or as comma-separated text, and blank
//! strings stand in for missing values. Everything is normalized here, once,
//! so the pipeline only ever sees `ObjectRecord`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::enums::ObjectCategory;
use crate::error::CompileError;

// ═══════════════════════════════════════════════════════════
// Canonical record
// ═══════════════════════════════════════════════════════════

/// Category-specific overrides supplied by the catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryOverrides {
    pub galaxy_type: Option<String>,
    pub nebula_type: Option<String>,
    pub planet_type: Option<String>,
    /// Generic structural detail (spiral arms, pillars, rings...).
    pub substructure: Option<String>,
    pub surface: Option<String>,
    pub color: Option<String>,
}

impl CategoryOverrides {
    /// The subtype relevant to `category`, if one was supplied.
    pub fn subtype_for(&self, category: ObjectCategory) -> Option<&str> {
        match category {
            ObjectCategory::Galaxy => self.galaxy_type.as_deref(),
            ObjectCategory::Nebula => self.nebula_type.as_deref(),
            ObjectCategory::Planet | ObjectCategory::Exoplanet => self.planet_type.as_deref(),
            _ => None,
        }
    }
}

/// A single astronomical object, as consumed by the compilation pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectRecord {
    pub id: Option<String>,
    pub name: String,
    pub category: ObjectCategory,
    pub description: Option<String>,
    pub spectral_type: Option<String>,
    /// Mass in solar masses.
    pub mass: Option<f64>,
    pub notable_features: Vec<String>,
    pub visual_features: Vec<String>,
    pub overrides: CategoryOverrides,
}

impl ObjectRecord {
    pub fn new(name: impl Into<String>, category: ObjectCategory) -> Self {
        Self {
            name: name.into(),
            category,
            ..Default::default()
        }
    }

    pub fn with_spectral_type(mut self, code: impl Into<String>) -> Self {
        self.spectral_type = Some(code.into());
        self
    }

    pub fn with_visual_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.visual_features = features.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_overrides(mut self, overrides: CategoryOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn with_mass(mut self, solar_masses: f64) -> Self {
        self.mass = Some(solar_masses);
        self
    }

    /// Identifier used in logs: the catalog id when present, else the name.
    pub fn log_key(&self) -> &str {
        self.id.as_deref().unwrap_or(&self.name)
    }
}

// ═══════════════════════════════════════════════════════════
// Catalog boundary
// ═══════════════════════════════════════════════════════════

/// Catalog identifiers are sometimes numeric, sometimes text.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CatalogId {
    Text(String),
    Number(i64),
}

/// Feature lists are either already structured or serialized as text.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum FeatureList {
    List(Vec<String>),
    Encoded(String),
}

impl FeatureList {
    /// Flatten into trimmed, non-empty entries.
    pub fn normalize(self) -> Vec<String> {
        let items = match self {
            Self::List(items) => items,
            Self::Encoded(text) => decode_feature_text(&text),
        };
        items
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

/// Decode a JSON-encoded array, falling back to comma/semicolon splitting.
fn decode_feature_text(text: &str) -> Vec<String> {
    let trimmed = text.trim();
    if trimmed.starts_with('[') {
        if let Ok(items) = serde_json::from_str::<Vec<String>>(trimmed) {
            return items;
        }
        tracing::debug!(raw = trimmed, "Feature list looked like JSON but did not parse, splitting");
    }
    trimmed
        .trim_start_matches('[')
        .trim_end_matches(']')
        .split([',', ';'])
        .map(|s| s.trim().trim_matches('"').to_string())
        .collect()
}

/// Raw record shape as served by the catalog.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogObject {
    #[serde(default)]
    pub id: Option<CatalogId>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, alias = "type", alias = "object_type")]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, alias = "spectral_type", alias = "spectralClass")]
    pub spectral_type: Option<String>,
    #[serde(default)]
    pub mass: Option<f64>,
    #[serde(default, alias = "notable_features")]
    pub notable_features: Option<FeatureList>,
    #[serde(default, alias = "visual_features")]
    pub visual_features: Option<FeatureList>,
    #[serde(default, alias = "galaxy_type")]
    pub galaxy_type: Option<String>,
    #[serde(default, alias = "nebula_type")]
    pub nebula_type: Option<String>,
    #[serde(default, alias = "planet_type")]
    pub planet_type: Option<String>,
    #[serde(default)]
    pub substructure: Option<String>,
    #[serde(default, alias = "surface_features")]
    pub surface: Option<String>,
    #[serde(default, alias = "colors", alias = "color_description")]
    pub color: Option<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

impl TryFrom<CatalogObject> for ObjectRecord {
    type Error = CompileError;

    fn try_from(raw: CatalogObject) -> Result<Self, Self::Error> {
        let name = non_blank(raw.name)
            .ok_or_else(|| CompileError::InvalidRecord("record has no name".into()))?;

        let category = raw
            .category
            .as_deref()
            .map(ObjectCategory::from_catalog)
            .unwrap_or_default();

        let id = raw.id.map(|id| match id {
            CatalogId::Text(s) => s,
            CatalogId::Number(n) => n.to_string(),
        });

        Ok(Self {
            id: non_blank(id),
            name,
            category,
            description: non_blank(raw.description),
            spectral_type: non_blank(raw.spectral_type),
            mass: raw.mass.filter(|m| m.is_finite() && *m > 0.0),
            notable_features: raw.notable_features.map(FeatureList::normalize).unwrap_or_default(),
            visual_features: raw.visual_features.map(FeatureList::normalize).unwrap_or_default(),
            overrides: CategoryOverrides {
                galaxy_type: non_blank(raw.galaxy_type),
                nebula_type: non_blank(raw.nebula_type),
                planet_type: non_blank(raw.planet_type),
                substructure: non_blank(raw.substructure),
                surface: non_blank(raw.surface),
                color: non_blank(raw.color),
            },
        })
    }
}

/// Parse a single catalog object from JSON text and normalize it.
pub fn record_from_json(json: &str) -> Result<ObjectRecord, CompileError> {
    let raw: CatalogObject = serde_json::from_str(json)?;
    ObjectRecord::try_from(raw)
}

/// A catalog payload: either one object or an array of them.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum CatalogPayload {
    Many(Vec<CatalogObject>),
    One(Box<CatalogObject>),
}

/// Parse catalog JSON holding one object or an array of objects.
pub fn catalog_from_json(json: &str) -> Result<Vec<CatalogObject>, CompileError> {
    Ok(match serde_json::from_str(json)? {
        CatalogPayload::Many(objects) => objects,
        CatalogPayload::One(object) => vec![*object],
    })
}

/// Read and parse a catalog file.
pub fn load_catalog(path: &Path) -> Result<Vec<CatalogObject>, CompileError> {
    let text = std::fs::read_to_string(path)?;
    let objects = catalog_from_json(&text)?;
    tracing::debug!(path = %path.display(), count = objects.len(), "Catalog loaded");
    Ok(objects)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_structured_feature_list() {
        let record = record_from_json(
            r#"{"name": "Vega", "category": "Star", "visualFeatures": ["rapid rotation", "  ", "dusty disk"]}"#,
        )
        .unwrap();
        assert_eq!(record.visual_features, vec!["rapid rotation", "dusty disk"]);
    }

    #[test]
    fn normalizes_json_encoded_feature_list() {
        let record = record_from_json(
            r#"{"name": "M87", "category": "Galaxy", "notableFeatures": "[\"relativistic jet\", \"giant elliptical\"]"}"#,
        )
        .unwrap();
        assert_eq!(record.notable_features, vec!["relativistic jet", "giant elliptical"]);
    }

    #[test]
    fn normalizes_comma_separated_feature_text() {
        let record = record_from_json(
            r#"{"name": "Saturn", "category": "planet", "visual_features": "ring system, hexagonal storm"}"#,
        )
        .unwrap();
        assert_eq!(record.visual_features, vec!["ring system", "hexagonal storm"]);
    }

    #[test]
    fn malformed_json_feature_text_falls_back_to_split() {
        let list = FeatureList::Encoded("[\"a\", \"b\"".into());
        assert_eq!(list.normalize(), vec!["a", "b"]);
    }

    #[test]
    fn blank_optional_fields_become_none() {
        let record = record_from_json(
            r#"{"name": "Sirius", "category": "Star", "spectralType": "  ", "galaxyType": ""}"#,
        )
        .unwrap();
        assert!(record.spectral_type.is_none());
        assert!(record.overrides.galaxy_type.is_none());
    }

    #[test]
    fn numeric_id_becomes_text() {
        let record = record_from_json(r#"{"id": 42, "name": "Ceres", "category": "Dwarf Planet"}"#).unwrap();
        assert_eq!(record.id.as_deref(), Some("42"));
        assert_eq!(record.log_key(), "42");
        assert_eq!(record.category, ObjectCategory::DwarfPlanet);
    }

    #[test]
    fn missing_category_is_unknown() {
        let record = record_from_json(r#"{"name": "XYZ-001"}"#).unwrap();
        assert_eq!(record.category, ObjectCategory::Unknown);
    }

    #[test]
    fn missing_name_is_rejected() {
        let err = record_from_json(r#"{"category": "Star"}"#).unwrap_err();
        assert!(matches!(err, CompileError::InvalidRecord(_)));
    }

    #[test]
    fn non_positive_mass_is_dropped() {
        let record = record_from_json(r#"{"name": "Odd", "category": "Star", "mass": -3.0}"#).unwrap();
        assert!(record.mass.is_none());
    }

    #[test]
    fn subtype_lookup_follows_category() {
        let overrides = CategoryOverrides {
            galaxy_type: Some("barred spiral".into()),
            planet_type: Some("gas giant".into()),
            ..Default::default()
        };
        assert_eq!(overrides.subtype_for(ObjectCategory::Galaxy), Some("barred spiral"));
        assert_eq!(overrides.subtype_for(ObjectCategory::Exoplanet), Some("gas giant"));
        assert_eq!(overrides.subtype_for(ObjectCategory::Star), None);
    }

    #[test]
    fn catalog_accepts_single_object_or_array() {
        let one = catalog_from_json(r#"{"name": "Vega"}"#).unwrap();
        assert_eq!(one.len(), 1);
        let many = catalog_from_json(r#"[{"name": "Vega"}, {"name": "Deneb", "id": 7}]"#).unwrap();
        assert_eq!(many.len(), 2);
        let record = ObjectRecord::try_from(many[1].clone()).unwrap();
        assert_eq!(record.id.as_deref(), Some("7"));
    }

    #[test]
    fn load_catalog_reads_file() {
        use std::io::Write;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"name": "Sirius", "category": "star", "spectralType": "A1V"}}]"#).unwrap();
        let objects = load_catalog(file.path()).unwrap();
        assert_eq!(objects[0].spectral_type.as_deref(), Some("A1V"));
    }

    #[test]
    fn load_catalog_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_catalog(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, CompileError::Io(_)));
    }

    #[test]
    fn load_catalog_bad_json_is_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(load_catalog(&path).unwrap_err(), CompileError::Json(_)));
    }
}
