use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;
use common::table::write_orders_to_path;
use sales_gen::config::Config;
use sales_gen::generate;
use sales_gen::Catalog;
use sales_gen::CatalogConfig;
use sales_gen::Simulator;
use service::tracing::LogArgs;
use tracing::debug;
use tracing::info;

#[derive(Parser)]
#[command(propagate_version = true)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(flatten)]
    log: LogArgs,
    /// First day of the range, YYYY-MM-DD
    #[arg(long)]
    start: NaiveDate,
    /// Last day of the range (inclusive), YYYY-MM-DD
    #[arg(long)]
    end: NaiveDate,
    #[arg(long, default_value = "42")]
    seed: u64,
    #[arg(long, default_value = "data/sales.csv")]
    out: PathBuf,
    /// TOML file overriding [simulation] and [noise] parameters
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<(), anyhow::Error> {
    let args = Args::parse();
    args.log.init()?;

    let cfg = match &args.config {
        None => Config::default(),
        Some(path) => Config::try_from_file(path)?,
    };
    debug!("simulation: {:?}", cfg.simulation);
    debug!("noise: {:?}", cfg.noise);
    debug!("out path: {:?}", args.out);

    let catalog = Catalog::try_new(CatalogConfig::default())?;
    let simulator = Simulator::new(cfg.simulation.clone(), catalog);

    info!("starting data generation...");
    let orders = generate(args.start, args.end, args.seed, &simulator, &cfg.noise)?;
    write_orders_to_path(&args.out, &orders)?;
    info!("successfully generated!");

    println!("wrote {} with {} rows", args.out.display(), orders.len());

    Ok(())
}
