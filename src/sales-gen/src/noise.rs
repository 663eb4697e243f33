use common::OrderRecord;
use rand::prelude::*;
use rand::seq::index;
use rust_decimal::Decimal;

use crate::config::Noise;

pub const OUTLIER_MULTIPLIER_MIN: i64 = 8;
pub const OUTLIER_MULTIPLIER_MAX: i64 = 20;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Injected {
    pub missing: Vec<usize>,
    pub outliers: Vec<usize>,
    pub multiplier: Option<i64>,
}

fn rows_for(n: usize, frac: f64) -> usize {
    ((n as f64 * frac).floor() as usize).min(n)
}

/// Corrupts a small share of rows in place: drops prices and inflates quantities.
///
/// Outlier revenue is recomputed as the plain product `price * quantity`, so a row
/// that also lost its price ends up with no revenue.
pub fn inject<R: Rng + ?Sized>(orders: &mut [OrderRecord], rng: &mut R, noise: &Noise) -> Injected {
    let n = orders.len();
    if n == 0 {
        return Injected::default();
    }

    let missing = index::sample(rng, n, rows_for(n, noise.frac_missing)).into_vec();
    for &idx in missing.iter() {
        orders[idx].price = None;
    }

    let outliers = index::sample(rng, n, rows_for(n, noise.frac_outliers)).into_vec();
    let multiplier = rng.gen_range(OUTLIER_MULTIPLIER_MIN..OUTLIER_MULTIPLIER_MAX);
    for &idx in outliers.iter() {
        let order = &mut orders[idx];
        order.quantity *= multiplier;
        order.revenue = order.price.map(|p| p * Decimal::from(order.quantity));
    }

    Injected {
        missing,
        outliers,
        multiplier: Some(multiplier),
    }
}
