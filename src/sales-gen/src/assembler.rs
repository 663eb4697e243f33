use chrono::NaiveDate;
use common::OrderRecord;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use tracing::debug;
use tracing::info;

use crate::config::Noise;
use crate::error::Result;
use crate::error::SalesGenError;
use crate::noise;
use crate::simulator::Simulator;

pub fn assemble<R: Rng + ?Sized>(
    start: NaiveDate,
    end: NaiveDate,
    simulator: &Simulator,
    rng: &mut R,
) -> Result<Vec<OrderRecord>> {
    if end < start {
        return Err(SalesGenError::InvalidRange { start, end });
    }

    let mut orders = Vec::new();
    let mut date = start;
    loop {
        let day = simulator.simulate_day(date, rng)?;
        debug!("{date}: {} order(s)", day.len());
        orders.extend(day);

        if date == end {
            break;
        }
        date = date
            .succ_opt()
            .ok_or_else(|| SalesGenError::Internal(format!("date overflow after {date}")))?;
    }

    Ok(orders)
}

pub fn generate(
    start: NaiveDate,
    end: NaiveDate,
    seed: u64,
    simulator: &Simulator,
    noise_cfg: &Noise,
) -> Result<Vec<OrderRecord>> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    info!("simulating orders from {start} to {end} (seed {seed})...");
    let mut orders = assemble(start, end, simulator, &mut rng)?;
    info!("simulated {} order(s)", orders.len());

    let injected = noise::inject(&mut orders, &mut rng, noise_cfg);
    debug!(
        "noise: {} missing price(s), {} outlier(s), multiplier {:?}",
        injected.missing.len(),
        injected.outliers.len(),
        injected.multiplier
    );

    Ok(orders)
}
