//! Service metadata resolver
//!
//! Walks a platform catalog in declaration order and splits it against the
//! project's bound-service flags.
//!
//! Two different collection rules apply per entry and are intentionally
//! asymmetric (see DESIGN.md before changing either):
//! - packages, active items and compilation options are collected only
//!   from entries whose key is bound on the descriptor;
//! - environment variables are collected from every entry that declares
//!   them, bound or not.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::catalog::{ServiceBinding, ServiceCatalog};
use crate::models::ProjectDescriptor;

/// A catalog entry that is active for the current project, with its key
/// attached for template consumption.
/// Optional fields serialize as `null` so templates can test them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceItem {
    pub name: String,
    pub package: Option<String>,
    pub envs: Option<Map<String, Value>>,
    pub compilation_options: Option<String>,
}

impl ServiceItem {
    fn new(key: &str, binding: &ServiceBinding) -> Self {
        Self {
            name: key.to_string(),
            package: binding.package.clone(),
            envs: binding.envs.clone(),
            compilation_options: binding.compilation_options.clone(),
        }
    }
}

/// Output of resolving a catalog against one descriptor
#[derive(Debug, Clone, Default)]
pub struct ResolvedServices {
    /// Packages declared by active entries, in catalog order
    pub packages: Vec<String>,

    /// Env mappings declared by any entry (active or not), in catalog order
    pub envs: Vec<Map<String, Value>>,

    /// Full metadata of active entries (Swift Dockerfile context)
    pub items: Vec<ServiceItem>,

    /// Space-joined, trimmed compilation options of active entries
    pub compilation_options: String,
}

impl ResolvedServices {
    pub fn has_compilation_options(&self) -> bool {
        !self.compilation_options.is_empty()
    }
}

/// Resolve which catalog entries are active for `descriptor`.
///
/// An entry is active iff its key is present in the descriptor's bound
/// flags; a key mapped to `false` still counts as bound. An empty catalog
/// or a descriptor with no bound services yields empty outputs.
pub fn resolve_services(
    catalog: &ServiceCatalog,
    descriptor: &ProjectDescriptor,
) -> ResolvedServices {
    let mut resolved = ResolvedServices::default();
    let mut compilation_options = String::new();

    for (key, binding) in catalog.iter() {
        if descriptor.is_bound(key) {
            if let Some(package) = &binding.package {
                resolved.packages.push(package.clone());
            }
            if let Some(options) = &binding.compilation_options {
                compilation_options.push(' ');
                compilation_options.push_str(options);
            }
            resolved.items.push(ServiceItem::new(key, binding));
        }

        // Not gated on activation.
        if let Some(envs) = &binding.envs {
            resolved.envs.push(envs.clone());
        }
    }

    resolved.compilation_options = compilation_options.trim().to_string();
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Platform;

    fn catalog() -> ServiceCatalog {
        ServiceCatalog::from_json(
            "test",
            r#"{
                "cloudant": {
                    "package": "cloudant",
                    "envs": {"CLOUDANT_URL": "${CLOUDANT_URL}"},
                    "compilationOptions": "-DGENERATE_CLOUDANT"
                },
                "redis": {
                    "package": "redis",
                    "compilationOptions": "-DGENERATE_REDIS"
                },
                "autoscaling": {
                    "envs": {"AUTOSCALING_HOST": "${AUTOSCALING_HOST}"}
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_packages_gated_on_activation() {
        let descriptor = ProjectDescriptor::new("app", Platform::Node).bind("cloudant");
        let resolved = resolve_services(&catalog(), &descriptor);

        assert_eq!(resolved.packages, vec!["cloudant".to_string()]);
        assert_eq!(resolved.items.len(), 1);
        assert_eq!(resolved.items[0].name, "cloudant");
    }

    #[test]
    fn test_envs_collected_regardless_of_activation() {
        // No services bound at all: packages empty, envs still collected
        let descriptor = ProjectDescriptor::new("app", Platform::Node);
        let resolved = resolve_services(&catalog(), &descriptor);

        assert!(resolved.packages.is_empty());
        assert_eq!(resolved.envs.len(), 2);
        assert!(resolved.envs[0].contains_key("CLOUDANT_URL"));
        assert!(resolved.envs[1].contains_key("AUTOSCALING_HOST"));
    }

    #[test]
    fn test_false_flag_still_counts_as_bound() {
        let mut descriptor = ProjectDescriptor::new("app", Platform::Node);
        descriptor.bind_flag("redis", false);
        let resolved = resolve_services(&catalog(), &descriptor);

        assert_eq!(resolved.packages, vec!["redis".to_string()]);
    }

    #[test]
    fn test_compilation_options_joined_and_trimmed() {
        let descriptor = ProjectDescriptor::new("app", Platform::Swift)
            .bind("cloudant")
            .bind("redis");
        let resolved = resolve_services(&catalog(), &descriptor);

        assert_eq!(
            resolved.compilation_options,
            "-DGENERATE_CLOUDANT -DGENERATE_REDIS"
        );
        assert!(resolved.has_compilation_options());
    }

    #[test]
    fn test_catalog_order_is_preserved() {
        let descriptor = ProjectDescriptor::new("app", Platform::Node)
            .bind("redis")
            .bind("cloudant");
        let resolved = resolve_services(&catalog(), &descriptor);

        // Catalog declaration order, not binding order
        assert_eq!(
            resolved.packages,
            vec!["cloudant".to_string(), "redis".to_string()]
        );
    }

    #[test]
    fn test_empty_catalog_yields_empty_outputs() {
        let descriptor = ProjectDescriptor::new("app", Platform::Node).bind("cloudant");
        let resolved = resolve_services(&ServiceCatalog::empty(), &descriptor);

        assert!(resolved.packages.is_empty());
        assert!(resolved.envs.is_empty());
        assert!(resolved.items.is_empty());
        assert!(!resolved.has_compilation_options());
    }
}
