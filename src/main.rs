use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use genesyn_core::config::Config;
use genesyn_core::pipeline::{self, RunPaths};

#[derive(Parser)]
#[command(
    name = "genesyn",
    version,
    about = "Compare gene list B against gene list A, matching through known synonyms"
)]
struct Cli {
    /// Path to the tab-delimited gene_info file (needs `Symbol` and `Synonyms`
    /// columns). Per-organism files can be downloaded from
    /// https://ftp.ncbi.nih.gov/gene/DATA/
    #[arg(long, alias = "gene_info", value_name = "PATH")]
    gene_info: PathBuf,

    /// Path to file A with gene names, one per line.
    #[arg(long, alias = "file_a", value_name = "PATH")]
    file_a: PathBuf,

    /// Path to file B with gene names to compare against file A.
    #[arg(long, alias = "file_b", value_name = "PATH")]
    file_b: PathBuf,

    /// Path to the output file (CSV format).
    #[arg(long, value_name = "PATH")]
    output: PathBuf,

    /// Extra config file layered over the defaults and ~/.config/genesyn/config.toml.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log at debug level (RUST_LOG still takes precedence).
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    let config = Config::load(cli.config.as_deref()).context("failed to load configuration")?;
    let paths = RunPaths {
        gene_info: cli.gene_info,
        file_a: cli.file_a,
        file_b: cli.file_b,
        output: cli.output,
    };

    let summary = pipeline::run(&paths, &config).context("gene comparison failed")?;
    tracing::info!(
        genes_b = summary.genes_b,
        present_in_a = summary.present_b,
        output = %paths.output.display(),
        "processing complete"
    );
    Ok(())
}
