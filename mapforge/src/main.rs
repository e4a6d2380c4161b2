//! CLI entry point for mapforge.
//!
//! `mapforge compile --input input --output output` compiles every asset
//! kind; `--kind` narrows the selection.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use env_logger::Env;
use log::error;

use mapforge::{Lookups, compile_kind};
use mapforge_data::AssetKind;

#[derive(Parser)]
#[command(author, version, about = "Compiles asset spreadsheets into registration functions.")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile asset tables into the output function tree.
    Compile(CompileArgs),
}

#[derive(Args)]
struct CompileArgs {
    /// Directory containing the exported CSV tables.
    #[arg(long, value_name = "DIR", default_value = "input")]
    input: PathBuf,
    /// Directory receiving the generated function tree.
    #[arg(long, value_name = "DIR", default_value = "output")]
    output: PathBuf,
    /// Asset kinds to compile; defaults to every kind.
    #[arg(long = "kind", value_enum, value_name = "KIND")]
    kinds: Vec<KindArg>,
    /// TOML file overriding the built-in lookup tables.
    #[arg(long, value_name = "FILE")]
    lookups: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum KindArg {
    Island,
    Spawner,
    Teleporter,
    Container,
}

impl From<KindArg> for AssetKind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::Island => AssetKind::Island,
            KindArg::Spawner => AssetKind::Spawner,
            KindArg::Teleporter => AssetKind::Teleporter,
            KindArg::Container => AssetKind::Container,
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    match cli.command {
        Commands::Compile(args) => match run_compile(&args) {
            Ok(true) => ExitCode::SUCCESS,
            Ok(false) => ExitCode::FAILURE,
            Err(e) => {
                error!("{e:#}");
                ExitCode::FAILURE
            },
        },
    }
}

/// Returns `Ok(true)` when every selected kind compiled without a fatal
/// asset error.
fn run_compile(args: &CompileArgs) -> Result<bool> {
    let lookups = match &args.lookups {
        Some(path) => Lookups::from_toml_path(path).context("loading lookup tables")?,
        None => Lookups::default(),
    };

    let kinds: Vec<AssetKind> = if args.kinds.is_empty() {
        vec![
            AssetKind::Island,
            AssetKind::Spawner,
            AssetKind::Teleporter,
            AssetKind::Container,
        ]
    } else {
        args.kinds.iter().map(|&k| k.into()).collect()
    };

    let mut clean = true;
    for kind in kinds {
        let report = compile_kind(kind, &args.input, &args.output, &lookups)
            .with_context(|| format!("compiling {}", kind.name()))?;
        if report.failed_assets > 0 {
            clean = false;
        }
    }
    Ok(clean)
}
