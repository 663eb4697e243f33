use std::collections::BTreeMap;
use std::collections::HashSet;
use std::fmt;

use chrono::Datelike;
use chrono::NaiveDate;
use common::Category;
use common::OrderRecord;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::error::AnalyzerError;
use crate::error::Result;

// guards month-over-month growth against a zero previous month
const MIN_GROWTH_BASE: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month {
    pub year: i32,
    pub month: u32,
}

impl Month {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month())
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Kpis {
    pub total_revenue: Decimal,
    pub total_orders: usize,
    pub total_customers: usize,
    pub avg_basket: f64,
    pub last_month_revenue: Decimal,
    pub mom_growth: f64,
    pub daily: Vec<(NaiveDate, Decimal)>,
    pub monthly: Vec<(Month, Decimal)>,
    // largest first
    pub categories: Vec<(Category, Decimal)>,
}

impl Kpis {
    pub fn daily_series_points(&self) -> usize {
        self.daily.len()
    }

    pub fn monthly_series_points(&self) -> usize {
        self.monthly.len()
    }

    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("total_revenue", self.total_revenue.to_string()),
            ("total_orders", self.total_orders.to_string()),
            ("total_customers", self.total_customers.to_string()),
            ("avg_basket", self.avg_basket.to_string()),
            ("last_month_revenue", self.last_month_revenue.to_string()),
            ("mom_growth", self.mom_growth.to_string()),
            ("daily_series_points", self.daily_series_points().to_string()),
            (
                "monthly_series_points",
                self.monthly_series_points().to_string(),
            ),
        ]
    }
}

impl fmt::Display for Kpis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in self.entries() {
            writeln!(f, "{key}: {value}")?;
        }

        Ok(())
    }
}

fn to_f64(v: Decimal) -> f64 {
    v.to_f64().unwrap_or(f64::NAN)
}

pub fn mom_growth(monthly: &[(Month, Decimal)]) -> f64 {
    match monthly {
        [.., (_, prev), (_, last)] => {
            let prev = to_f64(*prev);
            (to_f64(*last) - prev) / prev.max(MIN_GROWTH_BASE)
        }
        _ => 0.,
    }
}

fn add_revenue(acc: &mut Decimal, revenue: Decimal, what: impl fmt::Display) -> Result<()> {
    *acc = acc.checked_add(revenue).ok_or_else(|| {
        AnalyzerError::Overflow(format!("{what} revenue is out of range"))
    })?;

    Ok(())
}

pub fn compute(rows: &[OrderRecord]) -> Result<Kpis> {
    let mut total_revenue = Decimal::ZERO;
    let mut with_revenue = 0usize;
    let mut daily: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
    let mut monthly: BTreeMap<Month, Decimal> = BTreeMap::new();
    let mut categories: BTreeMap<Category, Decimal> = BTreeMap::new();
    let mut orders = HashSet::new();
    let mut customers = HashSet::new();

    for row in rows {
        orders.insert(row.order_id.as_str());
        customers.insert(row.customer_id);

        // rows without revenue still count as orders and customers
        let Some(revenue) = row.revenue else {
            continue;
        };
        add_revenue(&mut total_revenue, revenue, "total")?;
        with_revenue += 1;
        add_revenue(daily.entry(row.date).or_default(), revenue, row.date)?;
        let month = Month::from_date(row.date);
        add_revenue(monthly.entry(month).or_default(), revenue, month)?;
        add_revenue(
            categories.entry(row.category).or_default(),
            revenue,
            row.category,
        )?;
    }

    let avg_basket = if with_revenue == 0 {
        0.
    } else {
        to_f64(total_revenue) / with_revenue as f64
    };

    let monthly = monthly.into_iter().collect::<Vec<_>>();
    let last_month_revenue = monthly.last().map(|(_, v)| *v).unwrap_or(Decimal::ZERO);
    let mom_growth = mom_growth(&monthly);

    let mut categories = categories.into_iter().collect::<Vec<_>>();
    categories.sort_by(|a, b| b.1.cmp(&a.1));

    Ok(Kpis {
        total_revenue,
        total_orders: orders.len(),
        total_customers: customers.len(),
        avg_basket,
        last_month_revenue,
        mom_growth,
        daily: daily.into_iter().collect(),
        monthly,
        categories,
    })
}
