//! Core data models for dockgen
//!
//! Defines the fundamental data structures used throughout dockgen:
//! - `Platform`: the closed set of supported backend platforms
//! - `ProjectDescriptor`: immutable description of one project
//! - `GenerationOptions`: caller-supplied knobs with documented defaults

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DockgenError, DockgenResult};

/// Backend platform of the project being scaffolded.
///
/// This is a closed set: any other identifier is rejected at parse time
/// with `DockgenError::UnsupportedPlatform`, before any file is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Platform {
    Node,
    Java,
    Spring,
    Swift,
    Python,
    Django,
}

impl Platform {
    /// All supported platforms, in documentation order
    pub const ALL: [Platform; 6] = [
        Platform::Node,
        Platform::Java,
        Platform::Spring,
        Platform::Swift,
        Platform::Python,
        Platform::Django,
    ];

    /// Parse an upper-cased platform identifier
    pub fn parse(identifier: &str) -> DockgenResult<Self> {
        match identifier {
            "NODE" => Ok(Platform::Node),
            "JAVA" => Ok(Platform::Java),
            "SPRING" => Ok(Platform::Spring),
            "SWIFT" => Ok(Platform::Swift),
            "PYTHON" => Ok(Platform::Python),
            "DJANGO" => Ok(Platform::Django),
            other => Err(DockgenError::UnsupportedPlatform {
                platform: other.to_string(),
            }),
        }
    }

    /// Canonical identifier, as accepted by `parse`
    pub fn identifier(&self) -> &'static str {
        match self {
            Platform::Node => "NODE",
            Platform::Java => "JAVA",
            Platform::Spring => "SPRING",
            Platform::Swift => "SWIFT",
            Platform::Python => "PYTHON",
            Platform::Django => "DJANGO",
        }
    }

    /// Directory under `templates/` holding this platform's templates.
    ///
    /// Java and Spring share one generation procedure but render from
    /// separate template directories; Django renders from the Python set.
    pub fn template_dir(&self) -> &'static str {
        match self {
            Platform::Node => "node",
            Platform::Java => "java",
            Platform::Spring => "spring",
            Platform::Swift => "swift",
            Platform::Python | Platform::Django => "python",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for Platform {
    type Err = DockgenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Platform::parse(s)
    }
}

/// Immutable description of the project for one generation run.
///
/// Bound services are tracked by key presence: a key mapped to `false`
/// still counts as bound, mirroring the provisioning payloads this tool
/// historically consumed.
#[derive(Debug, Clone)]
pub struct ProjectDescriptor {
    /// Free-form project name; sanitized before use in identifiers
    pub name: String,

    /// Target backend platform
    pub backend_platform: Platform,

    bound_services: HashMap<String, bool>,
}

impl ProjectDescriptor {
    /// Create a descriptor with no bound services
    pub fn new(name: impl Into<String>, backend_platform: Platform) -> Self {
        Self {
            name: name.into(),
            backend_platform,
            bound_services: HashMap::new(),
        }
    }

    /// Builder-style helper to mark a service key as bound
    pub fn bind(mut self, key: impl Into<String>) -> Self {
        self.bound_services.insert(key.into(), true);
        self
    }

    /// Mark a service key as bound with an explicit flag value.
    ///
    /// The value is retained for callers but activation tests presence only.
    pub fn bind_flag(&mut self, key: impl Into<String>, value: bool) {
        self.bound_services.insert(key.into(), value);
    }

    /// Whether a catalog key is bound. Presence, not truthiness, is the
    /// test: `bind_flag(key, false)` still answers `true` here.
    pub fn is_bound(&self, key: &str) -> bool {
        self.bound_services.contains_key(key)
    }

    /// Parse a descriptor from its JSON wire form.
    ///
    /// The payload is an object carrying `name`, `backendPlatform`, and any
    /// number of additional keys; every additional key is treated as a
    /// bound-service flag regardless of its value.
    pub fn from_json(raw: &str) -> DockgenResult<Self> {
        let value: serde_json::Value = serde_json::from_str(raw)?;
        let object = value
            .as_object()
            .ok_or_else(|| DockgenError::InvalidDescriptor {
                message: "expected a JSON object".to_string(),
            })?;

        let name = object
            .get("name")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string();

        let platform_id = object
            .get("backendPlatform")
            .and_then(|v| v.as_str())
            .ok_or_else(|| DockgenError::InvalidDescriptor {
                message: "missing 'backendPlatform'".to_string(),
            })?;
        let backend_platform = Platform::parse(platform_id)?;

        let mut descriptor = ProjectDescriptor::new(name, backend_platform);
        for (key, value) in object {
            if key == "name" || key == "backendPlatform" {
                continue;
            }
            descriptor.bind_flag(key.clone(), value.as_bool().unwrap_or(true));
        }
        Ok(descriptor)
    }
}

/// Caller-supplied generation options. Absent fields take documented
/// defaults: `services` defaults to an empty sequence, `port` to the
/// platform convention.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GenerationOptions {
    /// Names of linked services, in order; drives compose topology and the
    /// choice between Dockerfile and compose entry points
    pub services: Vec<String>,

    /// Application port override (kept as a string, not validated)
    pub port: Option<String>,

    /// Externally-managed test harness flag (Python/Django): degrades
    /// test/debug commands to echo no-ops and suppresses `manage.py`
    pub enable: bool,

    /// Application name override (Java family); defaults to the sanitized
    /// project name
    pub app_name: Option<String>,

    /// Platform surfaces to generate for (Java family); CLI assets are
    /// written when absent or when the set contains `"cli"`
    pub platforms: Option<Vec<String>>,

    /// Liberty version selector (Java family); `"beta"` switches the
    /// templates to the beta base image
    pub liberty_version: Option<String>,
}

impl GenerationOptions {
    /// Whether at least one service is linked
    pub fn has_services(&self) -> bool {
        !self.services.is_empty()
    }

    /// Whether CLI assets should be written (Java family gate)
    pub fn wants_cli_assets(&self) -> bool {
        match &self.platforms {
            Some(platforms) => platforms.iter().any(|p| p == "cli"),
            None => true,
        }
    }
}
