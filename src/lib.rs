//! dockgen - Docker scaffolding generator for cloud starter projects
//!
//! Given a backend platform and the services bound to a project, dockgen
//! decides which templated configuration files (Dockerfiles, compose files,
//! CLI config, ignore files) to materialize into the project directory,
//! substituting computed container names, ports and build commands.
//! Existing files are never overwritten; re-runs skip them.

pub mod catalog;
pub mod context;
pub mod error;
pub mod fs;
pub mod generate;
pub mod models;
pub mod naming;
pub mod resolver;
pub mod templates;
pub mod writer;

// Re-exports for convenience
pub use catalog::{Catalogs, ServiceBinding, ServiceCatalog};
pub use error::{DockgenError, DockgenResult};
pub use fs::{FileSystem, LocalFs};
pub use generate::Generator;
pub use models::{GenerationOptions, Platform, ProjectDescriptor};
pub use naming::sanitize_alpha_num;
pub use resolver::{resolve_services, ResolvedServices};
pub use templates::TemplateSet;
pub use writer::GenerationReport;
