use clap::{Parser, Subcommand, ValueEnum};
use nodeforge::prelude::*;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

/// Define CLI-specific enums for clap to parse.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ArtifactCli {
    Node,
    Credentials,
    Manifest,
    Package,
    Readme,
}

impl From<ArtifactCli> for ArtifactKind {
    fn from(value: ArtifactCli) -> Self {
        match value {
            ArtifactCli::Node => ArtifactKind::Node,
            ArtifactCli::Credentials => ArtifactKind::Credentials,
            ArtifactCli::Manifest => ArtifactKind::Manifest,
            ArtifactCli::Package => ArtifactKind::Package,
            ArtifactCli::Readme => ArtifactKind::Readme,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DispatchCli {
    /// Wire only the first operation of the first resource
    First,
    /// Dispatch every resource/operation pair through a lookup table
    Table,
}

impl From<DispatchCli> for DispatchMode {
    fn from(value: DispatchCli) -> Self {
        match value {
            DispatchCli::First => DispatchMode::FirstOperation,
            DispatchCli::Table => DispatchMode::Table,
        }
    }
}

/// Generate n8n community node packages from a node description
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a fresh node description with default values
    Init {
        /// Where to write the JSON document
        path: PathBuf,
    },
    /// Check a node description and list every problem found
    Validate {
        /// Path to the node description JSON file
        config_path: PathBuf,
    },
    /// Print one generated artifact to stdout
    Preview {
        /// Path to the node description JSON file
        config_path: PathBuf,

        /// The artifact to render
        #[arg(short, long, value_enum, default_value = "node")]
        artifact: ArtifactCli,

        /// How the generated node dispatches requests
        #[arg(short, long, value_enum, default_value = "first")]
        dispatch: DispatchCli,
    },
    /// Generate the whole package into a directory or a tarball
    Export {
        /// Path to the node description JSON file
        config_path: PathBuf,

        /// Output directory
        #[arg(short, long, default_value = "dist-package")]
        out: PathBuf,

        /// Write a .tar.gz archive instead of loose files
        #[arg(long)]
        archive: bool,

        /// Export even if validation reports problems
        #[arg(long)]
        force: bool,

        /// How the generated node dispatches requests
        #[arg(short, long, value_enum, default_value = "first")]
        dispatch: DispatchCli,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Init { path } => run_init(path),
        Command::Validate { config_path } => run_validate(config_path),
        Command::Preview {
            config_path,
            artifact,
            dispatch,
        } => run_preview(config_path, artifact.into(), dispatch.into()),
        Command::Export {
            config_path,
            out,
            archive,
            force,
            dispatch,
        } => run_export(config_path, out, archive, force, dispatch.into()),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config(path: &Path) -> NodeConfig {
    NodeConfig::from_file(path).unwrap_or_else(|e| exit_with_error(&e.to_string()))
}

fn run_init(path: PathBuf) {
    if path.exists() {
        exit_with_error(&format!(
            "Refusing to overwrite existing file '{}'",
            path.display()
        ));
    }
    NodeConfig::default()
        .save(&path)
        .unwrap_or_else(|e| exit_with_error(&e.to_string()));
    println!("Wrote default node description to '{}'", path.display());
}

fn run_validate(config_path: PathBuf) {
    let config = load_config(&config_path);
    match config.validate() {
        Ok(()) => println!("'{}' is valid.", config_path.display()),
        Err(issues) => {
            println!("Found {} problem(s):", issues.len());
            for issue in &issues {
                println!("  - {}", issue);
            }
            std::process::exit(1);
        }
    }
}

fn run_preview(config_path: PathBuf, artifact: ArtifactKind, dispatch: DispatchMode) {
    let config = load_config(&config_path);
    let generator = CodeGenerator::builder().with_dispatch(dispatch).build();
    debug!(%artifact, ?dispatch, "Rendering preview");
    println!("{}", generator.render(artifact, &config));
}

fn run_export(
    config_path: PathBuf,
    out: PathBuf,
    archive: bool,
    force: bool,
    dispatch: DispatchMode,
) {
    let total_start = Instant::now();
    let config = load_config(&config_path);

    if let Err(issues) = config.validate() {
        for issue in &issues {
            warn!("{}", issue);
        }
        if !force {
            exit_with_error(&format!(
                "Validation found {} problem(s); rerun with --force to export anyway",
                issues.len()
            ));
        }
    }

    let generator = CodeGenerator::builder().with_dispatch(dispatch).build();
    let sink: Box<dyn BundleSink> = if archive {
        Box::new(TarGzSink::new(out.clone()))
    } else {
        Box::new(DirectorySink::new(out.clone()))
    };

    let location = generator
        .export(&config, sink.as_ref())
        .unwrap_or_else(|e| exit_with_error(&format!("Export failed: {}", e)));

    println!("\nExport Finished!");
    for path in generator.bundle(&config).paths() {
        println!("  -> {}", path);
    }
    println!("Written to:        {}", location.display());
    println!("Total Execution:   {:?}", total_start.elapsed());
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
