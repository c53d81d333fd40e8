//! Embedded template set
//!
//! All templates ship inside the binary (`include_str!`) and are compiled
//! into a single `tera::Tera` instance at startup. Template ids mirror the
//! `templates/` directory layout, e.g. `node/Dockerfile`.
//!
//! Plain assets (no substitution) are kept out of the Tera set and copied
//! byte-for-byte.

use serde::Serialize;
use tera::Tera;

use crate::error::{DockgenError, DockgenResult};

const TEMPLATES: &[(&str, &str)] = &[
    (
        "cli-config-common.yml",
        include_str!("../templates/cli-config-common.yml"),
    ),
    ("node/Dockerfile", include_str!("../templates/node/Dockerfile")),
    (
        "node/Dockerfile-tools",
        include_str!("../templates/node/Dockerfile-tools"),
    ),
    (
        "node/docker-compose.yml",
        include_str!("../templates/node/docker-compose.yml"),
    ),
    (
        "node/docker-compose-tools.yml",
        include_str!("../templates/node/docker-compose-tools.yml"),
    ),
    ("swift/Dockerfile", include_str!("../templates/swift/Dockerfile")),
    (
        "swift/Dockerfile-tools",
        include_str!("../templates/swift/Dockerfile-tools"),
    ),
    (
        "swift/docker-compose.yml",
        include_str!("../templates/swift/docker-compose.yml"),
    ),
    (
        "swift/docker-compose-tools.yml",
        include_str!("../templates/swift/docker-compose-tools.yml"),
    ),
    (
        "swift/swift-build-linux",
        include_str!("../templates/swift/swift-build-linux"),
    ),
    (
        "swift/swift-test-linux",
        include_str!("../templates/swift/swift-test-linux"),
    ),
    ("python/Dockerfile", include_str!("../templates/python/Dockerfile")),
    (
        "python/Dockerfile-tools",
        include_str!("../templates/python/Dockerfile-tools"),
    ),
    (
        "python/docker-compose.yml",
        include_str!("../templates/python/docker-compose.yml"),
    ),
    (
        "python/docker-compose-tools.yml",
        include_str!("../templates/python/docker-compose-tools.yml"),
    ),
    (
        "java/cli-config.yml",
        include_str!("../templates/java/cli-config.yml"),
    ),
    ("java/Dockerfile", include_str!("../templates/java/Dockerfile")),
    (
        "java/Dockerfile-tools",
        include_str!("../templates/java/Dockerfile-tools"),
    ),
    ("java/dockerignore", include_str!("../templates/java/dockerignore")),
    (
        "spring/cli-config.yml",
        include_str!("../templates/spring/cli-config.yml"),
    ),
    ("spring/Dockerfile", include_str!("../templates/spring/Dockerfile")),
    (
        "spring/Dockerfile-tools",
        include_str!("../templates/spring/Dockerfile-tools"),
    ),
    (
        "spring/dockerignore",
        include_str!("../templates/spring/dockerignore"),
    ),
];

const RAW_ASSETS: &[(&str, &str)] = &[
    ("node/dockerignore", include_str!("../templates/node/dockerignore")),
    (
        "swift/dockerignore",
        include_str!("../templates/swift/dockerignore"),
    ),
    (
        "python/dockerignore",
        include_str!("../templates/python/dockerignore"),
    ),
    ("python/manage.py", include_str!("../templates/python/manage.py")),
];

/// The compiled template set plus plain assets
pub struct TemplateSet {
    tera: Tera,
}

impl TemplateSet {
    /// Compile the embedded templates
    pub fn builtin() -> DockgenResult<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES.to_vec())?;
        Ok(Self { tera })
    }

    /// Render a template with a serializable context
    pub fn render(&self, id: &str, context: &impl Serialize) -> DockgenResult<String> {
        let context = tera::Context::from_serialize(context)?;
        Ok(self.tera.render(id, &context)?)
    }

    /// Look up a plain asset by id
    pub fn raw(&self, id: &str) -> DockgenResult<&'static str> {
        RAW_ASSETS
            .iter()
            .find(|(asset_id, _)| *asset_id == id)
            .map(|(_, content)| *content)
            .ok_or_else(|| DockgenError::UnknownTemplate { id: id.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{CliConfigContext, EntryPoints, NodeDockerContext};

    #[test]
    fn test_builtin_templates_compile() {
        TemplateSet::builtin().unwrap();
    }

    #[test]
    fn test_render_node_dockerfile() {
        let templates = TemplateSet::builtin().unwrap();
        let rendered = templates
            .render(
                "node/Dockerfile",
                &NodeDockerContext {
                    port: "3000".to_string(),
                    services_packages: vec!["cloudant".to_string()],
                },
            )
            .unwrap();

        assert!(rendered.contains("3000"));
        assert!(rendered.contains("cloudant"));
    }

    #[test]
    fn test_render_cli_config_is_valid_yaml() {
        let templates = TemplateSet::builtin().unwrap();
        let context = CliConfigContext {
            cli_config: crate::context::node_cli_config(
                "Sample",
                "3000",
                &EntryPoints::for_services(false),
            ),
        };
        let rendered = templates.render("cli-config-common.yml", &context).unwrap();

        let parsed: serde_json::Value = serde_yaml_ng::from_str(&rendered).unwrap();
        assert_eq!(parsed["container-name-run"], "sample-express-run");
        assert_eq!(parsed["dockerfile-run"], "Dockerfile");
    }

    #[test]
    fn test_raw_asset_lookup() {
        let templates = TemplateSet::builtin().unwrap();
        assert!(templates.raw("python/manage.py").is_ok());

        let err = templates.raw("python/missing.py").unwrap_err();
        assert!(matches!(err, DockgenError::UnknownTemplate { .. }));
    }
}
