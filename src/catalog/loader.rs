//! Loading recipe catalogs from JSON record files.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LadleError, Result};

/// One recipe record as stored in a catalog file.
///
/// Unknown fields are ignored on deserialization, so richer recipe documents
/// load as long as they carry a name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeRecord {
    /// Display name of the recipe.
    pub name: String,
}

/// Parse a catalog from a JSON array of recipe records.
///
/// Names are trimmed and lowercased here; the matcher operates on lowercase
/// phrases only.
pub fn parse_catalog(json: &str) -> Result<Vec<String>> {
    let records: Vec<RecipeRecord> = serde_json::from_str(json)?;
    records_to_names(records)
}

/// Load a catalog from a JSON file of recipe records.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let json = fs::read_to_string(path)?;
    parse_catalog(&json)
}

fn records_to_names(records: Vec<RecipeRecord>) -> Result<Vec<String>> {
    let mut names = Vec::with_capacity(records.len());

    for (index, record) in records.into_iter().enumerate() {
        let name = record.name.trim().to_lowercase();
        if name.is_empty() {
            return Err(LadleError::catalog(format!(
                "record {index} has a blank name"
            )));
        }
        names.push(name);
    }

    Ok(names)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_parse_catalog_lowercases_names() {
        let json = r#"[
            {"name": "Minestrone Soup"},
            {"name": "Jerk Chicken"}
        ]"#;

        let names = parse_catalog(json).unwrap();
        assert_eq!(names, vec!["minestrone soup", "jerk chicken"]);
    }

    #[test]
    fn test_parse_catalog_trims_names() {
        let json = r#"[{"name": "  Cauliflower Soup  "}]"#;
        assert_eq!(parse_catalog(json).unwrap(), vec!["cauliflower soup"]);
    }

    #[test]
    fn test_parse_catalog_ignores_extra_fields() {
        let json = r#"[{"name": "Sesame Soba Noodles", "servings": 4, "vegetarian": true}]"#;
        assert_eq!(parse_catalog(json).unwrap(), vec!["sesame soba noodles"]);
    }

    #[test]
    fn test_parse_catalog_rejects_blank_name() {
        let json = r#"[{"name": "Jerk Chicken"}, {"name": "   "}]"#;
        let error = parse_catalog(json).unwrap_err();
        assert!(matches!(error, LadleError::Catalog(_)));
    }

    #[test]
    fn test_parse_catalog_rejects_malformed_json() {
        let error = parse_catalog("not a catalog").unwrap_err();
        assert!(matches!(error, LadleError::Json(_)));
    }

    #[test]
    fn test_parse_catalog_empty_array() {
        assert!(parse_catalog("[]").unwrap().is_empty());
    }

    #[test]
    fn test_load_catalog_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"name": "Crispy Baked Falafel"}}, {{"name": "Roasted Broccoli Salad"}}]"#
        )
        .unwrap();

        let names = load_catalog(file.path()).unwrap();
        assert_eq!(names, vec!["crispy baked falafel", "roasted broccoli salad"]);
    }

    #[test]
    fn test_load_catalog_missing_file() {
        let error = load_catalog("/nonexistent/catalog.json").unwrap_err();
        assert!(matches!(error, LadleError::Io(_)));
    }
}
