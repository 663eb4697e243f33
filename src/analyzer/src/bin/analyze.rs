use std::path::PathBuf;

use analyzer::clean;
use analyzer::compute;
use analyzer::error::AnalyzerError;
use analyzer::report::write_report;
use clap::Parser;
use common::table::read_orders_from_path;
use service::tracing::LogArgs;
use tracing::debug;
use tracing::info;

#[derive(Parser)]
#[command(propagate_version = true)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(flatten)]
    log: LogArgs,
    /// Path to the sales CSV
    #[arg(long)]
    input: PathBuf,
    #[arg(long, default_value = "outputs")]
    outdir: PathBuf,
}

fn main() -> Result<(), anyhow::Error> {
    let args = Args::parse();
    args.log.init()?;

    if !args.input.try_exists()? {
        return Err(AnalyzerError::FileNotFound(format!(
            "input {:?} doesn't exist",
            args.input
        ))
        .into());
    }

    info!("loading {:?}...", args.input);
    let raw = read_orders_from_path(&args.input)?;
    debug!("loaded {} row(s)", raw.len());

    let rows = clean(raw)?;
    info!("{} row(s) after cleaning", rows.len());

    let kpis = compute(&rows)?;
    for (key, value) in kpis.entries() {
        debug!("{key}: {value}");
    }

    write_report(&args.outdir, &kpis)?;
    info!("analysis complete");

    println!("outputs saved to: {}", args.outdir.display());

    Ok(())
}
