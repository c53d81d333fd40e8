//! Service catalogs
//!
//! Each platform family ships a JSON catalog of known service integrations
//! that need custom logic in the generated Docker assets. Catalogs are
//! embedded at build time and parsed once; iteration order follows the
//! declaration order of the JSON object (`serde_json` with
//! `preserve_order`).
//!
//! Catalogs are injected into the `Generator` rather than looked up
//! globally, so tests can substitute synthetic ones.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{DockgenError, DockgenResult};
use crate::models::Platform;

const NODE_SERVICES: &str = include_str!("../resources/node/services.json");
const SWIFT_SERVICES: &str = include_str!("../resources/swift/services.json");
const PYTHON_SERVICES: &str = include_str!("../resources/python/services.json");

/// One catalog entry: read-only reference data for a known integration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceBinding {
    /// Package the platform build must install when the service is bound
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,

    /// Environment variables the service contributes to compose files
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub envs: Option<Map<String, Value>>,

    /// Extra compiler flags (Swift only), space-joined across bound services
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compilation_options: Option<String>,
}

/// Ordered, immutable mapping from service key to binding metadata
#[derive(Debug, Clone, Default)]
pub struct ServiceCatalog {
    entries: Vec<(String, ServiceBinding)>,
}

impl ServiceCatalog {
    /// Empty catalog; resolving against it yields empty outputs
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a catalog from its JSON object form, preserving declaration
    /// order. `id` names the resource in error messages.
    pub fn from_json(id: &str, raw: &str) -> DockgenResult<Self> {
        let value: Value = serde_json::from_str(raw)?;
        let object = value.as_object().ok_or_else(|| DockgenError::InvalidCatalog {
            catalog: id.to_string(),
            message: "expected a JSON object".to_string(),
        })?;

        let mut entries = Vec::with_capacity(object.len());
        for (key, binding) in object {
            let binding: ServiceBinding =
                serde_json::from_value(binding.clone()).map_err(|e| {
                    DockgenError::InvalidCatalog {
                        catalog: id.to_string(),
                        message: format!("entry '{key}': {e}"),
                    }
                })?;
            entries.push((key.clone(), binding));
        }
        Ok(Self { entries })
    }

    /// Build a catalog from explicit entries (tests and embedders)
    pub fn from_entries(entries: Vec<(String, ServiceBinding)>) -> Self {
        Self { entries }
    }

    /// Iterate entries in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ServiceBinding)> {
        self.entries.iter().map(|(key, binding)| (key.as_str(), binding))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// The per-platform-family catalogs consulted during generation.
///
/// The Java family has no catalog: its generation procedure does not
/// resolve services at all.
#[derive(Debug, Clone)]
pub struct Catalogs {
    node: ServiceCatalog,
    swift: ServiceCatalog,
    python: ServiceCatalog,
}

impl Catalogs {
    /// Catalogs embedded in the binary
    pub fn builtin() -> DockgenResult<Self> {
        Ok(Self {
            node: ServiceCatalog::from_json("node/services.json", NODE_SERVICES)?,
            swift: ServiceCatalog::from_json("swift/services.json", SWIFT_SERVICES)?,
            python: ServiceCatalog::from_json("python/services.json", PYTHON_SERVICES)?,
        })
    }

    /// Synthetic catalogs for tests and embedders
    pub fn new(node: ServiceCatalog, swift: ServiceCatalog, python: ServiceCatalog) -> Self {
        Self { node, swift, python }
    }

    /// Catalog for a platform, or `None` for the Java family
    pub fn for_platform(&self, platform: Platform) -> Option<&ServiceCatalog> {
        match platform {
            Platform::Node => Some(&self.node),
            Platform::Swift => Some(&self.swift),
            Platform::Python | Platform::Django => Some(&self.python),
            Platform::Java | Platform::Spring => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_preserves_declaration_order() {
        let catalog = ServiceCatalog::from_json(
            "test",
            r#"{"zebra": {}, "alpha": {"package": "a"}, "mike": {}}"#,
        )
        .unwrap();

        let keys: Vec<&str> = catalog.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["zebra", "alpha", "mike"]);
    }

    #[test]
    fn test_catalog_parses_binding_fields() {
        let catalog = ServiceCatalog::from_json(
            "test",
            r#"{
                "cloudant": {
                    "package": "cloudant",
                    "envs": {"CLOUDANT_URL": "${CLOUDANT_URL}"},
                    "compilationOptions": "-DGENERATE_CLOUDANT"
                }
            }"#,
        )
        .unwrap();

        let (key, binding) = catalog.iter().next().unwrap();
        assert_eq!(key, "cloudant");
        assert_eq!(binding.package.as_deref(), Some("cloudant"));
        assert_eq!(
            binding.compilation_options.as_deref(),
            Some("-DGENERATE_CLOUDANT")
        );
        assert!(binding.envs.as_ref().unwrap().contains_key("CLOUDANT_URL"));
    }

    #[test]
    fn test_catalog_rejects_non_object() {
        let err = ServiceCatalog::from_json("bad.json", r#"["not", "an", "object"]"#).unwrap_err();
        assert!(matches!(
            err,
            DockgenError::InvalidCatalog { catalog, .. } if catalog == "bad.json"
        ));
    }

    #[test]
    fn test_builtin_catalogs_parse() {
        let catalogs = Catalogs::builtin().unwrap();
        assert!(!catalogs.for_platform(Platform::Node).unwrap().is_empty());
        assert!(!catalogs.for_platform(Platform::Swift).unwrap().is_empty());
        assert!(!catalogs.for_platform(Platform::Python).unwrap().is_empty());
    }

    #[test]
    fn test_java_family_has_no_catalog() {
        let catalogs = Catalogs::builtin().unwrap();
        assert!(catalogs.for_platform(Platform::Java).is_none());
        assert!(catalogs.for_platform(Platform::Spring).is_none());
    }

    #[test]
    fn test_python_and_django_share_a_catalog() {
        let catalogs = Catalogs::builtin().unwrap();
        let python: Vec<&str> = catalogs
            .for_platform(Platform::Python)
            .unwrap()
            .iter()
            .map(|(k, _)| k)
            .collect();
        let django: Vec<&str> = catalogs
            .for_platform(Platform::Django)
            .unwrap()
            .iter()
            .map(|(k, _)| k)
            .collect();
        assert_eq!(python, django);
    }
}
