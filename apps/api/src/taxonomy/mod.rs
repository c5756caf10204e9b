//! Skill taxonomy — the static category → canonical label table used by the
//! extractor and the categories endpoint.
//!
//! A `SkillTaxonomy` is built once at startup (built-in data or a JSON file)
//! and shared read-only behind an `Arc`. Labels are validated on construction:
//! lowercase, trimmed, non-empty and unique across the whole table.

mod builtin;

use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Category keys, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Programming,
    Web,
    Mobile,
    Database,
    Cloud,
    MlAi,
    Tools,
    Other,
}

#[derive(Debug, Error)]
pub enum TaxonomyError {
    #[error("skill '{label}' appears in both {first:?} and {second:?}")]
    DuplicateLabel {
        label: String,
        first: SkillCategory,
        second: SkillCategory,
    },

    #[error("empty skill label in {0:?}")]
    EmptyLabel(SkillCategory),

    #[error("skill label '{0}' must be lowercase and trimmed")]
    NotLowercase(String),

    #[error("failed to read taxonomy file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid taxonomy JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Ordered mapping of category to canonical skill labels.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SkillTaxonomy {
    categories: BTreeMap<SkillCategory, Vec<String>>,
}

impl SkillTaxonomy {
    /// The taxonomy shipped with the service, validated like any loaded file.
    pub fn builtin() -> Result<Self, TaxonomyError> {
        let categories = builtin::BUILTIN_SKILLS
            .iter()
            .map(|(category, labels)| {
                (*category, labels.iter().map(|l| l.to_string()).collect())
            })
            .collect();

        Self::from_categories(categories)
    }

    pub fn from_categories(
        categories: BTreeMap<SkillCategory, Vec<String>>,
    ) -> Result<Self, TaxonomyError> {
        validate(&categories)?;
        Ok(Self { categories })
    }

    /// Parses a JSON object of `{ "<category>": ["label", ...], ... }`.
    pub fn from_json_str(json: &str) -> Result<Self, TaxonomyError> {
        let categories: BTreeMap<SkillCategory, Vec<String>> = serde_json::from_str(json)?;
        Self::from_categories(categories)
    }

    pub fn load(path: &Path) -> Result<Self, TaxonomyError> {
        let raw = std::fs::read_to_string(path).map_err(|source| TaxonomyError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    pub fn categories(&self) -> &BTreeMap<SkillCategory, Vec<String>> {
        &self.categories
    }

    /// All labels flattened, in category order then label order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.categories
            .values()
            .flat_map(|labels| labels.iter().map(String::as_str))
    }

    pub fn total_skills(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }
}

fn validate(categories: &BTreeMap<SkillCategory, Vec<String>>) -> Result<(), TaxonomyError> {
    let mut seen: Vec<(&str, SkillCategory)> = Vec::new();
    let mut labels: HashSet<&str> = HashSet::new();

    for (category, entries) in categories {
        for label in entries {
            if label.trim().is_empty() {
                return Err(TaxonomyError::EmptyLabel(*category));
            }
            if label.trim() != label || label.to_lowercase() != *label {
                return Err(TaxonomyError::NotLowercase(label.clone()));
            }
            if !labels.insert(label.as_str()) {
                let first = seen
                    .iter()
                    .find(|(l, _)| *l == label.as_str())
                    .map(|(_, c)| *c)
                    .unwrap_or(*category);
                return Err(TaxonomyError::DuplicateLabel {
                    label: label.clone(),
                    first,
                    second: *category,
                });
            }
            seen.push((label.as_str(), *category));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn map(entries: Vec<(SkillCategory, Vec<&str>)>) -> BTreeMap<SkillCategory, Vec<String>> {
        entries
            .into_iter()
            .map(|(c, labels)| (c, labels.into_iter().map(String::from).collect()))
            .collect()
    }

    #[test]
    fn test_builtin_taxonomy_is_valid() {
        let builtin = SkillTaxonomy::builtin().unwrap();
        assert_eq!(builtin.categories().len(), 8);
        assert_eq!(builtin.total_skills(), 71);
    }

    #[test]
    fn test_builtin_contains_known_labels() {
        let taxonomy = SkillTaxonomy::builtin().unwrap();
        let labels: HashSet<&str> = taxonomy.labels().collect();
        for label in ["python", "java", "javascript", "aws", "machine learning", "ci/cd"] {
            assert!(labels.contains(label), "missing {label}");
        }
        assert!(!labels.contains("cobol"));
    }

    #[test]
    fn test_labels_follow_category_order() {
        let taxonomy = SkillTaxonomy::builtin().unwrap();
        let labels: Vec<&str> = taxonomy.labels().collect();
        assert_eq!(labels.first(), Some(&"python"));
        assert_eq!(labels.last(), Some(&"ci/cd"));
    }

    #[test]
    fn test_duplicate_across_categories_rejected() {
        let categories = map(vec![
            (SkillCategory::Programming, vec!["python", "go"]),
            (SkillCategory::Cloud, vec!["aws", "go"]),
        ]);
        match SkillTaxonomy::from_categories(categories) {
            Err(TaxonomyError::DuplicateLabel {
                label,
                first,
                second,
            }) => {
                assert_eq!(label, "go");
                assert_eq!(first, SkillCategory::Programming);
                assert_eq!(second, SkillCategory::Cloud);
            }
            other => panic!("expected duplicate error, got {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_within_category_rejected() {
        let categories = map(vec![(SkillCategory::Web, vec!["react", "react"])]);
        assert!(matches!(
            SkillTaxonomy::from_categories(categories),
            Err(TaxonomyError::DuplicateLabel { .. })
        ));
    }

    #[test]
    fn test_uppercase_and_empty_labels_rejected() {
        let upper = map(vec![(SkillCategory::Cloud, vec!["AWS"])]);
        assert!(matches!(
            SkillTaxonomy::from_categories(upper),
            Err(TaxonomyError::NotLowercase(_))
        ));

        let empty = map(vec![(SkillCategory::Cloud, vec!["  "])]);
        assert!(matches!(
            SkillTaxonomy::from_categories(empty),
            Err(TaxonomyError::EmptyLabel(SkillCategory::Cloud))
        ));
    }

    #[test]
    fn test_serializes_in_category_order() {
        let json = serde_json::to_string(&SkillTaxonomy::builtin().unwrap()).unwrap();
        let programming = json.find("\"programming\"").unwrap();
        let ml_ai = json.find("\"ml_ai\"").unwrap();
        let other = json.find("\"other\"").unwrap();
        assert!(programming < ml_ai && ml_ai < other);
    }

    #[test]
    fn test_from_json_str_rejects_unknown_category() {
        let err = SkillTaxonomy::from_json_str(r#"{"cooking": ["baking"]}"#).unwrap_err();
        assert!(matches!(err, TaxonomyError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"tools": ["git"], "programming": ["rust", "zig"]}}"#).unwrap();

        let taxonomy = SkillTaxonomy::load(file.path()).unwrap();
        assert_eq!(taxonomy.total_skills(), 3);
        let labels: Vec<&str> = taxonomy.labels().collect();
        assert_eq!(labels, vec!["rust", "zig", "git"]);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = SkillTaxonomy::load(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, TaxonomyError::Io { .. }));
    }
}
