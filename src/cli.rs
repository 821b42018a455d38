//! # argocdctl
//!
//! Offline command-line tool for ArgoCD manifests. Nothing here talks to a
//! cluster: documents are read from files and written to stdout.
//!
//! ## Usage
//!
//! ```bash
//! # Print the CustomResourceDefinition
//! argocdctl crd --output json
//!
//! # Check that every ArgoCD document in a file decodes
//! argocdctl validate deploy/argocd.yaml deploy/other.yaml
//!
//! # Re-encode a manifest, dropping zero-valued optional fields
//! argocdctl normalize deploy/argocd.yaml --output yaml
//!
//! # Summarise the resources in a manifest
//! argocdctl describe deploy/argocd.yaml
//! ```

use anyhow::{Context, Result};
use argocd_operator_types::codec::{self, Format};
use argocd_operator_types::config::ToolConfig;
use argocd_operator_types::crd::ArgoCD;
use argocd_operator_types::observability;
use clap::{Parser, Subcommand};
use kube::core::CustomResourceExt;
use std::path::{Path, PathBuf};
use tracing::{error, info};

const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("BUILD_GIT_HASH"),
    ", built ",
    env!("BUILD_DATETIME"),
    ")"
);

/// ArgoCD manifest tool
#[derive(Parser)]
#[command(name = "argocdctl")]
#[command(
    about = "Inspect and generate ArgoCD custom resource manifests",
    long_about = None,
    version = VERSION,
    after_help = "\
Examples:
  argocdctl crd | kubectl apply -f -
  argocdctl validate argocd.yaml
  argocdctl normalize argocd.json --output yaml
"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format (defaults to ARGOCD_SCHEMA_OUTPUT, then yaml)
    #[arg(short, long, global = true, value_enum)]
    output: Option<Format>,

    /// Log level when RUST_LOG is unset (defaults to ARGOCD_SCHEMA_LOG_LEVEL, then warn)
    #[arg(long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the ArgoCD CustomResourceDefinition
    Crd,
    /// Decode every ArgoCD document in the given files
    Validate {
        #[arg(value_name = "FILE", required = true)]
        files: Vec<PathBuf>,
    },
    /// Decode and re-encode the ArgoCD documents in a file
    ///
    /// Several resources are printed as a single ArgoCDList.
    Normalize {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Summarise the ArgoCD resources in a file
    Describe {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let mut config = ToolConfig::from_env();
    if let Some(level) = &cli.log_level {
        config.log_level.clone_from(level);
    }
    if let Some(output) = cli.output {
        config.output = output;
    }
    observability::init_tracing(&config);

    let result = match &cli.command {
        Commands::Crd => crd_command(config.output),
        Commands::Validate { files } => validate_command(files),
        Commands::Normalize { file } => normalize_command(file, config.output),
        Commands::Describe { file } => describe_command(file),
    };

    if let Err(e) = result {
        error!("{e:#}");
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn crd_command(output: Format) -> Result<()> {
    let crd = ArgoCD::crd();
    let rendered = codec::encode(&crd, output).context("Failed to render CRD")?;
    print!("{rendered}");
    if output == Format::Json {
        println!();
    }
    Ok(())
}

/// Decode every file, reporting each resource; fails if any file is invalid
fn validate_command(files: &[PathBuf]) -> Result<()> {
    let mut failures = 0usize;
    for file in files {
        match codec::decode_file(file) {
            Ok(resources) => {
                info!(path = %file.display(), count = resources.len(), "decoded");
                for resource in &resources {
                    println!(
                        "{}: ok (phase {})",
                        qualified_name(resource),
                        resource.phase().filter(|p| !p.is_empty()).unwrap_or("<none>")
                    );
                }
            }
            Err(e) => {
                failures += 1;
                println!("{}: invalid: {e}", file.display());
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{failures} of {} file(s) failed validation", files.len());
    }
    Ok(())
}

fn normalize_command(file: &Path, output: Format) -> Result<()> {
    let resources = codec::decode_file(file)
        .with_context(|| format!("Failed to decode '{}'", file.display()))?;

    let rendered = if resources.len() == 1 {
        codec::encode_resource(&resources[0], output)?
    } else {
        codec::encode_resources(&resources, output)?
    };
    print!("{rendered}");
    if output == Format::Json {
        println!();
    }
    Ok(())
}

fn describe_command(file: &Path) -> Result<()> {
    let resources = codec::decode_file(file)
        .with_context(|| format!("Failed to decode '{}'", file.display()))?;

    for (index, argocd) in resources.iter().enumerate() {
        if index > 0 {
            println!();
        }
        let spec = &argocd.spec;
        println!("ArgoCD '{}'", qualified_name(argocd));
        println!(
            "  Phase: {}",
            argocd.phase().filter(|p| !p.is_empty()).unwrap_or("<none>")
        );
        println!("  Image: {}", or_default(&spec.image));
        println!("  Version: {}", or_default(&spec.version));

        println!();
        println!("Components:");
        println!("  Grafana: {}", enabled(spec.grafana.enabled));
        println!("  Prometheus: {}", enabled(spec.prometheus.enabled));
        println!("  Ingress: {}", enabled(spec.ingress.enabled));
        println!("  Dex OpenShift OAuth: {}", enabled(spec.dex.open_shift_oauth));
        println!("  Server autoscaling: {}", enabled(spec.server.autoscale.enabled));
        match spec.server.service_type() {
            Some(service_type) => println!("  Server service type: {service_type}"),
            None => println!("  Server service type: {} (unrecognised)", spec.server.service.r#type),
        }
        if !spec.server.grpc.host.is_empty() {
            println!("  Server GRPC host: {}", spec.server.grpc.host);
        }
        if let Some(import) = &spec.import {
            let own_namespace = argocd.metadata.namespace.as_deref().unwrap_or("default");
            println!(
                "  Import from: {}/{}",
                import.namespace_or(own_namespace),
                import.name
            );
        }
    }
    Ok(())
}

fn qualified_name(argocd: &ArgoCD) -> String {
    let name = argocd.metadata.name.as_deref().unwrap_or("<unnamed>");
    match argocd.metadata.namespace.as_deref() {
        Some(ns) => format!("{ns}/{name}"),
        None => name.to_string(),
    }
}

fn or_default(value: &str) -> &str {
    if value.is_empty() {
        "<operator default>"
    } else {
        value
    }
}

fn enabled(flag: bool) -> &'static str {
    if flag {
        "enabled"
    } else {
        "disabled"
    }
}
