//! Rule catalog: known pairwise incompatibilities and required dependencies.
//!
//! Provides two loading methods:
//! - `default_catalog()` - Loads the catalog embedded in the binary
//! - `load_catalog(path)` - Loads a custom catalog from a file path
//!
//! The catalog is immutable once built. Callers that refresh it (e.g. from a
//! remote source) must swap in a whole new `RuleCatalog` value, never mutate
//! one in place, so the detection engine stays referentially transparent.

use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;
use serde::Deserialize;
use tracing::debug;

/// Default catalog embedded in the binary at compile time.
/// Loaded from `config/mod_rules.toml`.
const DEFAULT_CATALOG: &str = include_str!("../../config/mod_rules.toml");

/// Immutable compatibility knowledge, keyed by inferred mod id.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RuleCatalog {
    /// For each mod id, the mod ids it is known not to work with.
    /// Lookups are directional: an entry under "optifine" listing "sodium"
    /// does not imply the reverse entry exists.
    #[serde(default)]
    pub incompatibilities: HashMap<String, Vec<String>>,
    /// For each mod id, the mod ids it requires to be installed
    #[serde(default)]
    pub dependencies: HashMap<String, Vec<String>>,
}

impl RuleCatalog {
    /// Mod ids listed as incompatible with `mod_id` (empty when unlisted).
    pub fn incompatible_with(&self, mod_id: &str) -> &[String] {
        self.incompatibilities
            .get(mod_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Mod ids required by `mod_id` (empty when unlisted).
    pub fn required_dependencies(&self, mod_id: &str) -> &[String] {
        self.dependencies
            .get(mod_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Load a catalog from a TOML file at the given path.
///
/// # Errors
/// Fails if the file cannot be read or the TOML is invalid.
pub fn load_catalog(path: &Path) -> Result<RuleCatalog> {
    let content = std::fs::read_to_string(path)?;
    let catalog: RuleCatalog = toml::from_str(&content)?;
    debug!(
        "loaded rule catalog from {}: {} incompatibility keys, {} dependency keys",
        path.display(),
        catalog.incompatibilities.len(),
        catalog.dependencies.len()
    );
    Ok(catalog)
}

/// Get the default catalog embedded in the binary.
///
/// # Panics
/// Panics if the embedded TOML is invalid (this would be a compile-time bug).
pub fn default_catalog() -> RuleCatalog {
    toml::from_str(DEFAULT_CATALOG).expect("embedded mod_rules.toml must be valid TOML")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_loads() {
        let catalog = default_catalog();
        assert!(
            !catalog.incompatibilities.is_empty(),
            "Should have incompatibility entries"
        );
        assert!(
            !catalog.dependencies.is_empty(),
            "Should have dependency entries"
        );
    }

    #[test]
    fn test_known_rendering_incompatibilities() {
        let catalog = default_catalog();
        let optifine = catalog.incompatible_with("optifine");
        assert!(optifine.contains(&"sodium".to_string()));
        assert!(optifine.contains(&"rubidium".to_string()));
        // Mutual entry: sodium also lists optifine
        assert!(catalog
            .incompatible_with("sodium")
            .contains(&"optifine".to_string()));
    }

    #[test]
    fn test_known_dependencies() {
        let catalog = default_catalog();
        assert_eq!(
            catalog.required_dependencies("create"),
            &["flywheel".to_string()]
        );
        assert!(catalog
            .required_dependencies("botania")
            .contains(&"patchouli".to_string()));
    }

    #[test]
    fn test_unlisted_id_yields_empty_slices() {
        let catalog = default_catalog();
        assert!(catalog.incompatible_with("journeymap").is_empty());
        assert!(catalog.required_dependencies("journeymap").is_empty());
        assert!(catalog.incompatible_with("").is_empty());
    }

    #[test]
    fn test_load_catalog_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom_rules.toml");
        std::fs::write(
            &path,
            r#"
[incompatibilities]
alpha = ["beta"]

[dependencies]
gamma = ["delta", "epsilon"]
"#,
        )
        .unwrap();

        let catalog = load_catalog(&path).unwrap();
        assert_eq!(catalog.incompatible_with("alpha"), &["beta".to_string()]);
        assert_eq!(catalog.required_dependencies("gamma").len(), 2);
    }

    #[test]
    fn test_load_catalog_missing_sections_default_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.toml");
        std::fs::write(&path, "[incompatibilities]\nalpha = [\"beta\"]\n").unwrap();

        let catalog = load_catalog(&path).unwrap();
        assert!(catalog.dependencies.is_empty());
    }

    #[test]
    fn test_load_catalog_invalid_toml_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "incompatibilities = \"not a table\"").unwrap();
        assert!(load_catalog(&path).is_err());
        assert!(load_catalog(&dir.path().join("missing.toml")).is_err());
    }
}
