use clap::Parser;
use motionsite::generate::GenerateError;
use motionsite::scan::ScanError;
use motionsite::types::Archive;
use motionsite::{generate, output, scan};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn version_string() -> &'static str {
    if env!("MOTIONSITE_RELEASE_TAG") == "true" {
        return env!("CARGO_PKG_VERSION");
    }
    let hash = env!("MOTIONSITE_GIT_HASH");
    if hash.is_empty() {
        "dev@unknown"
    } else {
        // Leaked once at startup
        Box::leak(format!("dev@{hash}").into_boxed_str())
    }
}

#[derive(Parser)]
#[command(name = "motionsite")]
#[command(about = "Static HTML archive for a day/event photo tree")]
#[command(long_about = "\
Static HTML archive for a day/event photo tree

Reads a three-level directory tree and writes one index.html per level into
the output directory. Pictures are linked in place, never copied.

Input structure:

  archive/
  ├── 2024-01-01/          # Day (sorted by name)
  │   ├── morning/         # Event (listed only if it holds files)
  │   │   ├── a.jpg        # Picture (any file)
  │   │   └── b.jpg
  │   └── empty/           # No files: skipped
  └── 2024-01-02/

Output structure:

  site/
  ├── index.html                       # Arkisto: all days
  └── 2024-01-01/
      ├── index.html                   # Päivä: event previews
      └── morning/index.html           # Tapahtuma: all pictures

Set RUST_LOG=debug to trace every directory read and page written.")]
#[command(version = version_string())]
#[command(arg_required_else_help = true)]
struct Cli {
    /// Archive root containing one directory per day
    #[arg(short, long, value_name = "DIR")]
    input: PathBuf,

    /// Directory to write the generated site into
    #[arg(short, long, value_name = "DIR")]
    output: PathBuf,

    /// Print the scanned archive and the generated pages
    #[arg(short, long)]
    verbose: bool,

    /// Also write the scanned archive as JSON to this file
    #[arg(long, value_name = "FILE")]
    manifest: Option<PathBuf>,
}

#[derive(Error, Debug)]
enum AppError {
    #[error("cannot scan archive: {0}")]
    Scan(#[from] ScanError),
    #[error("cannot write site: {0}")]
    Generate(#[from] GenerateError),
    #[error("cannot write manifest {}: {source}", path.display())]
    Manifest {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot serialize manifest: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    // Usage errors exit with status 2 here, before anything touches the disk.
    let cli = Cli::parse();
    init_tracing();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    let archive = scan::scan(&cli.input)?;
    if cli.verbose {
        output::print_scan_output(&archive, &cli.input);
    }

    if let Some(path) = &cli.manifest {
        write_manifest(path, &archive)?;
    }

    let report = generate::generate(&cli.output, &cli.input, &archive)?;
    if cli.verbose {
        output::print_generate_output(&report, &cli.output);
    }

    info!(
        pages = report.pages.len(),
        output = %cli.output.display(),
        "site generated"
    );
    Ok(())
}

fn write_manifest(path: &Path, archive: &Archive) -> Result<(), AppError> {
    let json = serde_json::to_string_pretty(archive)?;
    std::fs::write(path, json).map_err(|source| AppError::Manifest {
        path: path.to_path_buf(),
        source,
    })
}

/// Diagnostics go to stderr, filtered by `RUST_LOG` (default: warnings only).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
