//! Template context builder
//!
//! Assembles the per-platform configuration records consumed by template
//! rendering. Naming follows the `{name}-{stack}-run` / `{name}-{stack}-tools`
//! convention, where `{name}` is the lower-cased sanitized project name.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::naming::derived_identifier;
use crate::resolver::{ResolvedServices, ServiceItem};

/// Filenames the run/tools entry points of `cli-config.yml` resolve to.
///
/// When at least one service is linked, the compose variants supersede the
/// single-container build files as the entry points.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryPoints {
    pub docker_file_run: &'static str,
    pub docker_file_tools: &'static str,
}

impl EntryPoints {
    pub fn for_services(has_services: bool) -> Self {
        if has_services {
            Self {
                docker_file_run: "docker-compose.yml",
                docker_file_tools: "docker-compose-tools.yml",
            }
        } else {
            Self {
                docker_file_run: "Dockerfile",
                docker_file_tools: "Dockerfile-tools",
            }
        }
    }
}

/// The `cli-config.yml` record shared by the Node, Swift and Python family
/// generators (the Java family renders its CLI config entirely in-template).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CliConfig {
    pub container_name_run: String,
    pub container_name_tools: String,
    pub host_path_run: String,
    pub host_path_tools: String,
    pub container_path_run: String,
    pub container_path_tools: String,
    pub container_port_map: String,
    pub container_port_map_debug: String,
    pub docker_file_run: String,
    pub docker_file_tools: String,
    pub image_name_run: String,
    pub image_name_tools: String,
    pub build_cmd_run: String,
    pub test_cmd: String,
    pub build_cmd_debug: String,
    pub run_cmd: String,
    pub stop_cmd: String,
    /// Serialized as `null` when absent so templates can test it
    pub debug_cmd: Option<String>,
    pub chart_path: String,
}

/// Per-stack constants and commands feeding `CliConfig`
struct StackConfig<'a> {
    tag: &'a str,
    container_path: &'a str,
    port_map: String,
    port_map_debug: &'a str,
    build_cmd_run: String,
    test_cmd: String,
    build_cmd_debug: String,
    stop_cmd: String,
    debug_cmd: Option<String>,
}

fn build_cli_config(name: &str, entry: &EntryPoints, stack: StackConfig<'_>) -> CliConfig {
    let ident = derived_identifier(name);
    let run_name = format!("{ident}-{}-run", stack.tag);
    let tools_name = format!("{ident}-{}-tools", stack.tag);

    CliConfig {
        container_name_run: run_name.clone(),
        container_name_tools: tools_name.clone(),
        host_path_run: ".".to_string(),
        host_path_tools: ".".to_string(),
        container_path_run: stack.container_path.to_string(),
        container_path_tools: stack.container_path.to_string(),
        container_port_map: stack.port_map,
        container_port_map_debug: stack.port_map_debug.to_string(),
        docker_file_run: entry.docker_file_run.to_string(),
        docker_file_tools: entry.docker_file_tools.to_string(),
        image_name_run: run_name,
        image_name_tools: tools_name,
        build_cmd_run: stack.build_cmd_run,
        test_cmd: stack.test_cmd,
        build_cmd_debug: stack.build_cmd_debug,
        run_cmd: String::new(),
        stop_cmd: stack.stop_cmd,
        debug_cmd: stack.debug_cmd,
        chart_path: format!("chart/{ident}"),
    }
}

/// Node (Express) CLI config
pub fn node_cli_config(name: &str, port: &str, entry: &EntryPoints) -> CliConfig {
    build_cli_config(
        name,
        entry,
        StackConfig {
            tag: "express",
            container_path: "/app",
            port_map: format!("{port}:{port}"),
            port_map_debug: "9229:9229",
            build_cmd_run: "npm install --production --unsafe-perm".to_string(),
            test_cmd: "npm run test".to_string(),
            build_cmd_debug: "npm install --unsafe-perm".to_string(),
            stop_cmd: "npm stop".to_string(),
            debug_cmd: None,
        },
    )
}

/// Swift CLI config. The port map is fixed at 8080:8080 and the debug
/// command carries the raw (unsanitized) executable name.
pub fn swift_cli_config(name: &str, executable_name: &str, entry: &EntryPoints) -> CliConfig {
    build_cli_config(
        name,
        entry,
        StackConfig {
            tag: "swift",
            container_path: "/swift-project",
            port_map: "8080:8080".to_string(),
            port_map_debug: "2048:1024,2049:1025",
            build_cmd_run: "/swift-utils/tools-utils.sh build release".to_string(),
            test_cmd: "/swift-utils/tools-utils.sh test".to_string(),
            build_cmd_debug: "/swift-utils/tools-utils.sh build debug".to_string(),
            stop_cmd: String::new(),
            debug_cmd: Some(format!(
                "/swift-utils/tools-utils.sh debug {executable_name} 1024"
            )),
        },
    )
}

/// Python (Flask) CLI config. With `enable` set an externally-managed test
/// harness is assumed and test/debug degrade to echo no-ops.
pub fn python_cli_config(name: &str, port: &str, entry: &EntryPoints, enable: bool) -> CliConfig {
    build_cli_config(
        name,
        entry,
        StackConfig {
            tag: "flask",
            container_path: "/app",
            port_map: format!("{port}:{port}"),
            port_map_debug: "5858:5858",
            build_cmd_run: "python manage.py build".to_string(),
            test_cmd: degradable(enable, "test", "python manage.py test"),
            build_cmd_debug: "python manage.py build".to_string(),
            stop_cmd: String::new(),
            debug_cmd: Some(degradable(enable, "debug", "python manage.py debug")),
        },
    )
}

/// Django CLI config; same degradation rule as Python.
pub fn django_cli_config(name: &str, port: &str, entry: &EntryPoints, enable: bool) -> CliConfig {
    build_cli_config(
        name,
        entry,
        StackConfig {
            tag: "django",
            container_path: "/app",
            port_map: format!("{port}:{port}"),
            port_map_debug: "5858:5858",
            build_cmd_run: "python -m compileall .".to_string(),
            test_cmd: degradable(enable, "test", "python manage.py test"),
            build_cmd_debug: "python -m compileall .".to_string(),
            stop_cmd: String::new(),
            debug_cmd: Some(degradable(
                enable,
                "debug",
                "python manage.py runserver --noreload",
            )),
        },
    )
}

fn degradable(enable: bool, kind: &str, cmd: &str) -> String {
    if enable {
        format!("echo No {kind} command specified in cli-config")
    } else {
        cmd.to_string()
    }
}

/// Wrapper for the common `cli-config.yml` template
#[derive(Debug, Serialize)]
pub struct CliConfigContext {
    pub cli_config: CliConfig,
}

/// Node `Dockerfile` context
#[derive(Debug, Serialize)]
pub struct NodeDockerContext {
    pub port: String,
    pub services_packages: Vec<String>,
}

/// Node `Dockerfile-tools` context
#[derive(Debug, Serialize)]
pub struct NodeToolsContext {
    pub port: String,
}

/// Swift `Dockerfile` / `Dockerfile-tools` context
#[derive(Debug, Serialize)]
pub struct SwiftDockerContext {
    pub executable_name: String,
    pub service_items: Vec<ServiceItem>,
}

/// Swift `.swift-build-linux` / `.swift-test-linux` context
#[derive(Debug, Serialize)]
pub struct CompilationOptionsContext {
    pub compilation_options: String,
}

/// Python-family `Dockerfile` context
#[derive(Debug, Serialize)]
pub struct PythonDockerContext {
    pub port: String,
    pub enable: bool,
    pub language: String,
    pub name: String,
    pub services_packages: Vec<String>,
}

/// Python-family `Dockerfile-tools` context
#[derive(Debug, Serialize)]
pub struct PythonToolsContext {
    pub services_packages: Vec<String>,
    pub language: String,
    pub name: String,
}

/// Java-family context; these templates consume the options directly and
/// resolve their own ports.
#[derive(Debug, Serialize)]
pub struct JavaContext {
    pub app_name: String,
    pub liberty_beta: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub liberty_version: Option<String>,
}

/// Compose file context, shared by the run and tools variants
#[derive(Debug, Serialize)]
pub struct ComposeContext {
    pub container_name: String,
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ports: Option<Vec<String>>,
    pub links: Vec<String>,
    pub envs: Vec<Map<String, Value>>,
    pub images: Vec<String>,
}

impl ComposeContext {
    /// Context for `docker-compose.yml`
    pub fn run(
        name: &str,
        stack_tag: &str,
        port: &str,
        services: &[String],
        resolved: &ResolvedServices,
    ) -> Self {
        let image = format!("{}-{stack_tag}-run", derived_identifier(name));
        Self {
            container_name: image.clone(),
            image,
            port: Some(port.to_string()),
            ports: None,
            links: services.to_vec(),
            envs: resolved.envs.clone(),
            images: services.to_vec(),
        }
    }

    /// Context for `docker-compose-tools.yml`
    pub fn tools(
        name: &str,
        stack_tag: &str,
        port: &str,
        services: &[String],
        resolved: &ResolvedServices,
    ) -> Self {
        let image = format!("{}-{stack_tag}-run", derived_identifier(name));
        Self {
            container_name: image.clone(),
            image,
            port: None,
            ports: Some(vec![port.to_string()]),
            links: Vec::new(),
            envs: resolved.envs.clone(),
            images: services.to_vec(),
        }
    }
}
