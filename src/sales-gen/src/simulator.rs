use std::f64::consts::PI;

use chrono::Datelike;
use chrono::NaiveDate;
use common::types::round_money;
use common::OrderRecord;
use rand::prelude::*;
use rand_distr::Poisson;
use rust_decimal::Decimal;

use crate::catalog::Catalog;
use crate::config::Simulation;
use crate::error::Result;
use crate::error::SalesGenError;

pub const TREND_EPOCH_YEAR: i64 = 2000;
// trend is a sawtooth that restarts every 10 years
pub const TREND_PERIOD_MONTHS: i64 = 120;
pub const ORDER_SUFFIX_MIN: u32 = 100_000;
pub const ORDER_SUFFIX_MAX: u32 = 999_999;
pub const CUSTOMER_ID_MIN: i64 = 1000;
pub const CUSTOMER_ID_MAX: i64 = 9999;

pub fn season(date: NaiveDate, params: &Simulation) -> f64 {
    let month = date.month() as f64;
    1. + params.season_amp * (2. * PI * month / 12.).sin()
}

pub fn trend(date: NaiveDate, params: &Simulation) -> f64 {
    let months_since_start = (date.year() as i64 - TREND_EPOCH_YEAR) * 12 + date.month() as i64;
    1. + params.trend_per_month * months_since_start.rem_euclid(TREND_PERIOD_MONTHS) as f64
}

pub fn expected_orders(date: NaiveDate, params: &Simulation) -> f64 {
    params.base_orders * season(date, params) * trend(date, params)
}

// Rounds the exact binary value of `v` to cents, half to even, so 2.675
// (stored as 2.67499...) becomes 2.67.
fn round_price(v: f64) -> Result<Decimal> {
    Decimal::from_f64_retain(v)
        .map(round_money)
        .ok_or_else(|| SalesGenError::Internal(format!("can't represent price {v}")))
}

/// Draws from `rng` in a fixed order: the order count, then per order the id
/// suffix, customer, category, base price, discount and quantity.
pub fn simulate_day<R: Rng + ?Sized>(
    date: NaiveDate,
    params: &Simulation,
    catalog: &Catalog,
    rng: &mut R,
) -> Result<Vec<OrderRecord>> {
    let lam = expected_orders(date, params);
    let orders = if lam > 0. && lam.is_finite() {
        let dist = Poisson::new(lam).map_err(|err| SalesGenError::Internal(err.to_string()))?;
        let n: f64 = dist.sample(rng);
        n.max(0.) as usize
    } else {
        0
    };

    let day = date.format("%Y%m%d").to_string();
    let mut rows = Vec::with_capacity(orders);
    for _ in 0..orders {
        let order_id = format!(
            "{day}-{}",
            rng.gen_range(ORDER_SUFFIX_MIN..ORDER_SUFFIX_MAX)
        );
        let customer_id = rng.gen_range(CUSTOMER_ID_MIN..CUSTOMER_ID_MAX);
        let (category, base_price) = catalog.product_sample(rng);
        let discount = catalog.discount_sample(rng);
        let quantity = catalog.quantity_sample(rng);

        let price = round_price(base_price * discount)?;
        let revenue = round_money(price * Decimal::from(quantity));

        rows.push(OrderRecord {
            date,
            order_id,
            customer_id,
            category,
            price: Some(price),
            quantity,
            revenue: Some(revenue),
        });
    }

    Ok(rows)
}

pub struct Simulator {
    pub params: Simulation,
    pub catalog: Catalog,
}

impl Simulator {
    pub fn new(params: Simulation, catalog: Catalog) -> Self {
        Self { params, catalog }
    }

    pub fn simulate_day<R: Rng + ?Sized>(
        &self,
        date: NaiveDate,
        rng: &mut R,
    ) -> Result<Vec<OrderRecord>> {
        simulate_day(date, &self.params, &self.catalog, rng)
    }
}
