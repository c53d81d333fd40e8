//! dockgen CLI - Docker scaffolding generator
//!
//! Usage: dockgen <COMMAND>
//!
//! Commands:
//!   generate   Materialize Docker/CLI scaffolding into a project directory
//!   platforms  List supported backend platforms

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::LevelFilter;

use dockgen::{GenerationOptions, Generator, Platform, ProjectDescriptor};

/// dockgen - Docker scaffolding generator for cloud starter projects
#[derive(Parser, Debug)]
#[command(name = "dockgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Materialize Docker/CLI scaffolding into a project directory
    Generate {
        /// Project name (sanitized for container/image identifiers)
        #[arg(short, long, default_value = "")]
        name: String,

        /// Backend platform: NODE, JAVA, SPRING, SWIFT, PYTHON or DJANGO
        #[arg(short, long, required_unless_present = "descriptor")]
        platform: Option<String>,

        /// Destination project directory
        #[arg(short, long, default_value = ".")]
        dest: PathBuf,

        /// Full project descriptor as a JSON object (overrides --name,
        /// --platform and --bind)
        #[arg(long)]
        descriptor: Option<String>,

        /// Bound service key from the platform catalog (repeatable)
        #[arg(long = "bind")]
        bind: Vec<String>,

        /// Linked service for compose topology (repeatable)
        #[arg(long = "service")]
        services: Vec<String>,

        /// Application port (defaults to the platform convention)
        #[arg(long)]
        port: Option<String>,

        /// Application name override (Java family)
        #[arg(long)]
        app_name: Option<String>,

        /// Assume an externally-managed test harness (Python/Django)
        #[arg(long)]
        enable: bool,

        /// Platform surfaces to generate for (Java family), comma separated
        #[arg(long, value_delimiter = ',')]
        platforms: Option<Vec<String>>,

        /// Liberty version selector (Java family), e.g. "beta"
        #[arg(long)]
        liberty_version: Option<String>,
    },

    /// List supported backend platforms
    Platforms,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .init();

    match cli.command {
        Commands::Generate {
            name,
            platform,
            dest,
            descriptor,
            bind,
            services,
            port,
            app_name,
            enable,
            platforms,
            liberty_version,
        } => {
            let descriptor = match descriptor {
                Some(raw) => ProjectDescriptor::from_json(&raw)?,
                None => {
                    // --platform is required by clap when --descriptor is absent
                    let platform = Platform::parse(platform.as_deref().unwrap_or_default())?;
                    let mut descriptor = ProjectDescriptor::new(name, platform);
                    for key in bind {
                        descriptor.bind_flag(key, true);
                    }
                    descriptor
                }
            };

            let options = GenerationOptions {
                services,
                port,
                enable,
                app_name,
                platforms,
                liberty_version,
            };

            let generator = Generator::new()?;
            let report = generator.generate(&descriptor, &options, &dest)?;

            for file in &report.written {
                println!("  create {}", file.display());
            }
            println!(
                "Generated {} scaffolding: {} file(s) written, {} skipped",
                descriptor.backend_platform,
                report.written.len(),
                report.skipped.len()
            );
            Ok(())
        }

        Commands::Platforms => {
            for platform in Platform::ALL {
                println!("{platform}");
            }
            Ok(())
        }
    }
}
