use anyhow::Result;
use clap::Parser;
use importlint_unused::Config;
use log::{debug, info};
use std::io::{BufWriter, Write};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "importlint")]
#[command(about = "Report likely-unused imports in a source tree", long_about = None)]
struct Cli {
    /// Disable colors in the run summary
    #[arg(long)]
    no_color: bool,

    #[command(flatten)]
    config: Config,
}

fn main() -> Result<()> {
    env_logger::init();

    // stdio is blocked by LineWriter, use a BufWriter to reduce syscalls.
    // See https://github.com/rust-lang/rust/issues/60673
    let mut stdout = BufWriter::new(std::io::stdout());

    let cli = Cli::parse();
    debug!("Parsed CLI arguments: {:?}", cli.config);

    if cli.no_color {
        colored::control::set_override(false);
    }

    let start = Instant::now();
    let cfg = cli.config;

    let num_threads = rayon::current_num_threads();
    info!(
        "Running unused import check on {} (*.{}, using {} threads)",
        cfg.root.display(),
        cfg.extension.trim_start_matches('.'),
        num_threads
    );

    // Nothing is written until the whole tree has been scanned
    let result = importlint_unused::run_unused_import_check(cfg.clone())?;
    debug!("Found {} findings", result.findings.len());

    let elapsed_ms = start.elapsed().as_millis();

    importlint_unused::print_report(&mut stdout, &result, cfg.format)?;
    stdout.flush()?;

    let mut stderr = std::io::stderr().lock();
    importlint_unused::print_summary(&mut stderr, &result, elapsed_ms, num_threads)?;

    if cfg.fail_on_findings && !result.findings.is_empty() {
        info!("Findings present and --fail-on-findings set");
        // Non-zero exit to fail CI
        std::process::exit(1);
    }

    Ok(())
}
