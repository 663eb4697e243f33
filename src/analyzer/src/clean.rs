use std::collections::HashMap;
use std::collections::HashSet;

use common::Category;
use common::OrderRecord;
use rust_decimal::Decimal;
use tracing::debug;

use crate::error::AnalyzerError;
use crate::error::Result;

pub fn dedup(rows: Vec<OrderRecord>) -> Vec<OrderRecord> {
    let mut seen = HashSet::with_capacity(rows.len());
    rows.into_iter()
        .filter(|row| seen.insert(row.order_id.clone()))
        .collect()
}

fn median(sorted: &[Decimal]) -> Result<Option<Decimal>> {
    let n = sorted.len();
    match n {
        0 => Ok(None),
        _ if n % 2 == 1 => Ok(Some(sorted[n / 2])),
        _ => sorted[n / 2 - 1]
            .checked_add(sorted[n / 2])
            .map(|sum| Some(sum / Decimal::from(2)))
            .ok_or_else(|| {
                AnalyzerError::Overflow(format!(
                    "median of {} and {} is out of range",
                    sorted[n / 2 - 1],
                    sorted[n / 2]
                ))
            }),
    }
}

/// A category without any known price has no entry.
pub fn category_medians(rows: &[OrderRecord]) -> Result<HashMap<Category, Decimal>> {
    let mut prices: HashMap<Category, Vec<Decimal>> = HashMap::new();
    for row in rows {
        if let Some(price) = row.price {
            prices.entry(row.category).or_default().push(price);
        }
    }

    let mut medians = HashMap::with_capacity(prices.len());
    for (category, mut v) in prices {
        v.sort();
        if let Some(m) = median(&v)? {
            medians.insert(category, m);
        }
    }

    Ok(medians)
}

/// Dedup, median price imputation, revenue recompute, then drop rows without
/// a positive price and quantity. Fails if a revenue doesn't fit a `Decimal`.
pub fn clean(raw: Vec<OrderRecord>) -> Result<Vec<OrderRecord>> {
    let total = raw.len();
    let mut rows = dedup(raw);
    let duplicates = total - rows.len();

    let medians = category_medians(&rows)?;
    let mut imputed = 0;
    let mut unresolved = 0;
    for row in rows.iter_mut() {
        if row.price.is_none() {
            row.price = medians.get(&row.category).copied();
            if row.price.is_some() {
                imputed += 1;
            } else {
                unresolved += 1;
            }
        }
        row.revenue = row.line_revenue()?;
    }

    // rows of a category without any known price are still missing one here
    let before_filter = rows.len();
    rows.retain(|row| row.quantity > 0 && row.price.map_or(false, |p| p > Decimal::ZERO));

    debug!(
        "cleaning: {total} row(s), {duplicates} duplicate(s), {imputed} imputed price(s), \
         {unresolved} price(s) without median, {} invalid row(s) dropped",
        before_filter - rows.len()
    );

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_median() {
        let d = |v: i64| Decimal::from(v);
        assert_eq!(median(&[]).unwrap(), None);
        assert_eq!(median(&[d(7)]).unwrap(), Some(d(7)));
        assert_eq!(median(&[d(10), d(30)]).unwrap(), Some(d(20)));
        assert_eq!(median(&[d(1), d(2), d(9)]).unwrap(), Some(d(2)));
        assert_eq!(
            median(&[Decimal::new(1001, 2), Decimal::new(1002, 2)]).unwrap(),
            Some(Decimal::new(10015, 3))
        );
        assert!(matches!(
            median(&[Decimal::MAX, Decimal::MAX]),
            Err(AnalyzerError::Overflow(_))
        ));
    }
}
