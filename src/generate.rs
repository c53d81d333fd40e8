//! Platform dispatcher
//!
//! `Generator::generate` routes one project descriptor to the generation
//! procedure for its backend platform. Each procedure normalizes inputs,
//! resolves services against the platform catalog, builds the template
//! contexts and issues a fixed sequence of conditional writes.
//!
//! The platform set is closed at the type level: an unrecognized identifier
//! is rejected by `Platform::parse` before a generator ever runs.

use std::path::Path;

use crate::catalog::Catalogs;
use crate::context::{
    django_cli_config, node_cli_config, python_cli_config, swift_cli_config, CliConfigContext,
    CompilationOptionsContext, ComposeContext, EntryPoints, JavaContext, NodeDockerContext,
    NodeToolsContext, PythonDockerContext, PythonToolsContext, SwiftDockerContext,
};
use crate::error::DockgenResult;
use crate::fs::{FileSystem, LocalFs};
use crate::models::{GenerationOptions, Platform, ProjectDescriptor};
use crate::naming::{resolve_port, sanitize_alpha_num};
use crate::resolver::resolve_services;
use crate::templates::TemplateSet;
use crate::writer::{ConditionalWriter, GenerationReport};

const FILENAME_CLI_CONFIG: &str = "cli-config.yml";
const FILENAME_DOCKERFILE: &str = "Dockerfile";
const FILENAME_DOCKERFILE_TOOLS: &str = "Dockerfile-tools";
const FILENAME_DOCKERCOMPOSE: &str = "docker-compose.yml";
const FILENAME_DOCKERCOMPOSE_TOOLS: &str = "docker-compose-tools.yml";
const FILENAME_DOCKER_IGNORE: &str = ".dockerignore";
const FILENAME_SWIFT_BUILD: &str = ".swift-build-linux";
const FILENAME_SWIFT_TEST: &str = ".swift-test-linux";
const FILENAME_MANAGEMENT: &str = "manage.py";

/// Scaffolding generator: immutable catalogs and templates plus a file
/// system implementation, reused across runs.
pub struct Generator<F: FileSystem = LocalFs> {
    catalogs: Catalogs,
    templates: TemplateSet,
    fs: F,
}

impl Generator<LocalFs> {
    /// Generator over the local disk with the embedded catalogs/templates
    pub fn new() -> DockgenResult<Self> {
        Self::with_fs(LocalFs::new())
    }
}

impl<F: FileSystem> Generator<F> {
    /// Generator with a custom file system (tests, dry runs)
    pub fn with_fs(fs: F) -> DockgenResult<Self> {
        Ok(Self {
            catalogs: Catalogs::builtin()?,
            templates: TemplateSet::builtin()?,
            fs,
        })
    }

    /// Substitute the service catalogs (synthetic catalogs in tests)
    pub fn with_catalogs(mut self, catalogs: Catalogs) -> Self {
        self.catalogs = catalogs;
        self
    }

    /// Materialize the scaffolding for one project into `dest`.
    ///
    /// Single-threaded, synchronous; files written before an IO failure
    /// remain on disk, and already-existing files are skipped rather than
    /// overwritten.
    pub fn generate(
        &self,
        descriptor: &ProjectDescriptor,
        options: &GenerationOptions,
        dest: &Path,
    ) -> DockgenResult<GenerationReport> {
        let mut writer = ConditionalWriter::new(&self.fs, &self.templates, dest);

        match descriptor.backend_platform {
            Platform::Node => self.generate_node(descriptor, options, &mut writer)?,
            Platform::Java | Platform::Spring => {
                self.generate_java(descriptor, options, &mut writer)?
            }
            Platform::Swift => self.generate_swift(descriptor, options, &mut writer)?,
            Platform::Python => self.generate_python(descriptor, options, &mut writer)?,
            Platform::Django => self.generate_django(descriptor, options, &mut writer)?,
        }

        Ok(writer.into_report())
    }

    fn generate_node(
        &self,
        descriptor: &ProjectDescriptor,
        options: &GenerationOptions,
        writer: &mut ConditionalWriter<'_, F>,
    ) -> DockgenResult<()> {
        let port = resolve_port(options.port.as_deref(), "3000");
        let catalog = self.catalogs.for_platform(Platform::Node).expect("node catalog");
        let resolved = resolve_services(catalog, descriptor);
        let entry = EntryPoints::for_services(options.has_services());

        writer.render(
            FILENAME_CLI_CONFIG,
            "cli-config-common.yml",
            &CliConfigContext {
                cli_config: node_cli_config(&descriptor.name, &port, &entry),
            },
        )?;

        writer.render(
            FILENAME_DOCKERFILE,
            "node/Dockerfile",
            &NodeDockerContext {
                port: port.clone(),
                services_packages: resolved.packages.clone(),
            },
        )?;

        writer.render(
            FILENAME_DOCKERFILE_TOOLS,
            "node/Dockerfile-tools",
            &NodeToolsContext { port: port.clone() },
        )?;

        writer.copy(FILENAME_DOCKER_IGNORE, "node/dockerignore")?;

        if options.has_services() {
            writer.render(
                FILENAME_DOCKERCOMPOSE,
                "node/docker-compose.yml",
                &ComposeContext::run(&descriptor.name, "express", &port, &options.services, &resolved),
            )?;
            writer.render(
                FILENAME_DOCKERCOMPOSE_TOOLS,
                "node/docker-compose-tools.yml",
                &ComposeContext::tools(&descriptor.name, "express", &port, &options.services, &resolved),
            )?;
        }

        Ok(())
    }

    fn generate_swift(
        &self,
        descriptor: &ProjectDescriptor,
        options: &GenerationOptions,
        writer: &mut ConditionalWriter<'_, F>,
    ) -> DockgenResult<()> {
        // Swift runs on a fixed port; a caller-supplied override is ignored.
        let port = "8080";
        let catalog = self
            .catalogs
            .for_platform(Platform::Swift)
            .expect("swift catalog");
        let resolved = resolve_services(catalog, descriptor);
        let entry = EntryPoints::for_services(options.has_services());

        writer.render(
            FILENAME_CLI_CONFIG,
            "cli-config-common.yml",
            &CliConfigContext {
                cli_config: swift_cli_config(&descriptor.name, &descriptor.name, &entry),
            },
        )?;

        let docker_context = SwiftDockerContext {
            executable_name: descriptor.name.clone(),
            service_items: resolved.items.clone(),
        };
        writer.render(FILENAME_DOCKERFILE, "swift/Dockerfile", &docker_context)?;
        writer.render(FILENAME_DOCKERFILE_TOOLS, "swift/Dockerfile-tools", &docker_context)?;

        if resolved.has_compilation_options() {
            let options_context = CompilationOptionsContext {
                compilation_options: resolved.compilation_options.clone(),
            };
            writer.render(FILENAME_SWIFT_BUILD, "swift/swift-build-linux", &options_context)?;
            writer.render(FILENAME_SWIFT_TEST, "swift/swift-test-linux", &options_context)?;
        }

        if options.has_services() {
            writer.render(
                FILENAME_DOCKERCOMPOSE,
                "swift/docker-compose.yml",
                &ComposeContext::run(&descriptor.name, "swift", port, &options.services, &resolved),
            )?;
            writer.render(
                FILENAME_DOCKERCOMPOSE_TOOLS,
                "swift/docker-compose-tools.yml",
                &ComposeContext::tools(&descriptor.name, "swift", port, &options.services, &resolved),
            )?;
        }

        writer.copy(FILENAME_DOCKER_IGNORE, "swift/dockerignore")?;

        Ok(())
    }

    fn generate_java(
        &self,
        descriptor: &ProjectDescriptor,
        options: &GenerationOptions,
        writer: &mut ConditionalWriter<'_, F>,
    ) -> DockgenResult<()> {
        let app_name = options
            .app_name
            .clone()
            .unwrap_or_else(|| sanitize_alpha_num(&descriptor.name));
        let dir = descriptor.backend_platform.template_dir();
        let context = JavaContext {
            app_name,
            liberty_beta: options.liberty_version.as_deref() == Some("beta"),
            liberty_version: options.liberty_version.clone(),
        };

        if options.wants_cli_assets() {
            writer.render(FILENAME_CLI_CONFIG, &format!("{dir}/cli-config.yml"), &context)?;
            writer.render(
                FILENAME_DOCKERFILE_TOOLS,
                &format!("{dir}/Dockerfile-tools"),
                &context,
            )?;
        }

        writer.render(FILENAME_DOCKERFILE, &format!("{dir}/Dockerfile"), &context)?;
        writer.render(FILENAME_DOCKER_IGNORE, &format!("{dir}/dockerignore"), &context)?;

        Ok(())
    }

    fn generate_python(
        &self,
        descriptor: &ProjectDescriptor,
        options: &GenerationOptions,
        writer: &mut ConditionalWriter<'_, F>,
    ) -> DockgenResult<()> {
        let port = resolve_port(options.port.as_deref(), "3000");
        let catalog = self
            .catalogs
            .for_platform(Platform::Python)
            .expect("python catalog");
        let resolved = resolve_services(catalog, descriptor);
        let entry = EntryPoints::for_services(options.has_services());

        if options.has_services() {
            writer.render(
                FILENAME_DOCKERCOMPOSE,
                "python/docker-compose.yml",
                &ComposeContext::run(&descriptor.name, "flask", &port, &options.services, &resolved),
            )?;
            writer.render(
                FILENAME_DOCKERCOMPOSE_TOOLS,
                "python/docker-compose-tools.yml",
                &ComposeContext::tools(&descriptor.name, "flask", &port, &options.services, &resolved),
            )?;
        }

        writer.render(
            FILENAME_CLI_CONFIG,
            "cli-config-common.yml",
            &CliConfigContext {
                cli_config: python_cli_config(&descriptor.name, &port, &entry, options.enable),
            },
        )?;

        writer.render(
            FILENAME_DOCKERFILE,
            "python/Dockerfile",
            &PythonDockerContext {
                port: port.clone(),
                enable: options.enable,
                language: descriptor.backend_platform.identifier().to_string(),
                name: descriptor.name.clone(),
                services_packages: resolved.packages.clone(),
            },
        )?;

        writer.render(
            FILENAME_DOCKERFILE_TOOLS,
            "python/Dockerfile-tools",
            &PythonToolsContext {
                services_packages: resolved.packages.clone(),
                language: descriptor.backend_platform.identifier().to_string(),
                name: descriptor.name.clone(),
            },
        )?;

        // Externally-managed harnesses bring their own manage.py.
        if !options.enable {
            writer.copy(FILENAME_MANAGEMENT, "python/manage.py")?;
        }

        writer.copy(FILENAME_DOCKER_IGNORE, "python/dockerignore")?;

        Ok(())
    }

    fn generate_django(
        &self,
        descriptor: &ProjectDescriptor,
        options: &GenerationOptions,
        writer: &mut ConditionalWriter<'_, F>,
    ) -> DockgenResult<()> {
        let port = resolve_port(options.port.as_deref(), "3000");
        let catalog = self
            .catalogs
            .for_platform(Platform::Django)
            .expect("python catalog");
        let resolved = resolve_services(catalog, descriptor);
        let entry = EntryPoints::for_services(options.has_services());

        writer.render(
            FILENAME_CLI_CONFIG,
            "cli-config-common.yml",
            &CliConfigContext {
                cli_config: django_cli_config(&descriptor.name, &port, &entry, options.enable),
            },
        )?;

        writer.render(
            FILENAME_DOCKERFILE,
            "python/Dockerfile",
            &PythonDockerContext {
                port: port.clone(),
                enable: options.enable,
                language: descriptor.backend_platform.identifier().to_string(),
                name: descriptor.name.clone(),
                services_packages: resolved.packages.clone(),
            },
        )?;

        writer.render(
            FILENAME_DOCKERFILE_TOOLS,
            "python/Dockerfile-tools",
            &PythonToolsContext {
                services_packages: resolved.packages.clone(),
                language: descriptor.backend_platform.identifier().to_string(),
                name: descriptor.name.clone(),
            },
        )?;

        if options.has_services() {
            writer.render(
                FILENAME_DOCKERCOMPOSE,
                "python/docker-compose.yml",
                &ComposeContext::run(&descriptor.name, "django", &port, &options.services, &resolved),
            )?;
            writer.render(
                FILENAME_DOCKERCOMPOSE_TOOLS,
                "python/docker-compose-tools.yml",
                &ComposeContext::tools(&descriptor.name, "django", &port, &options.services, &resolved),
            )?;
        }

        writer.copy(FILENAME_DOCKER_IGNORE, "python/dockerignore")?;

        Ok(())
    }
}
