use std::fmt::Display;
use std::fs;
use std::fs::File;
use std::io;
use std::io::Write;
use std::path::Path;

use rust_decimal::Decimal;

use crate::error::Result;
use crate::kpi::Kpis;

pub const KPIS_FILE: &str = "kpis.txt";
pub const DAILY_REVENUE_FILE: &str = "daily_revenue.csv";
pub const MONTHLY_REVENUE_FILE: &str = "monthly_revenue.csv";
pub const CATEGORY_REVENUE_FILE: &str = "category_revenue.csv";

pub fn write_kpis<W: io::Write>(mut w: W, kpis: &Kpis) -> Result<()> {
    writeln!(w, "=== KPIs ===")?;
    write!(w, "{kpis}")?;
    w.flush()?;

    Ok(())
}

pub fn write_series<W, K>(w: W, key: &str, points: &[(K, Decimal)]) -> Result<()>
where
    W: io::Write,
    K: Display,
{
    let mut wtr = csv::Writer::from_writer(w);
    wtr.write_record([key, "revenue"])?;
    for (k, v) in points {
        wtr.write_record([k.to_string(), v.to_string()])?;
    }
    wtr.flush()?;

    Ok(())
}

pub fn write_report(outdir: &Path, kpis: &Kpis) -> Result<()> {
    fs::create_dir_all(outdir)?;

    write_kpis(File::create(outdir.join(KPIS_FILE))?, kpis)?;
    write_series(
        File::create(outdir.join(DAILY_REVENUE_FILE))?,
        "date",
        &kpis.daily,
    )?;
    write_series(
        File::create(outdir.join(MONTHLY_REVENUE_FILE))?,
        "month",
        &kpis.monthly,
    )?;
    write_series(
        File::create(outdir.join(CATEGORY_REVENUE_FILE))?,
        "category",
        &kpis.categories,
    )?;

    Ok(())
}
