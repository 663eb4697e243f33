use analyzer::compute;
use analyzer::error::AnalyzerError;
use analyzer::Month;
use chrono::NaiveDate;
use common::Category;
use common::OrderRecord;
use rust_decimal::Decimal;

fn row(
    date: (i32, u32, u32),
    order_id: &str,
    customer_id: i64,
    category: Category,
    revenue: i64,
) -> OrderRecord {
    OrderRecord {
        date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
        order_id: order_id.to_string(),
        customer_id,
        category,
        price: Some(Decimal::from(revenue)),
        quantity: 1,
        revenue: Some(Decimal::from(revenue)),
    }
}

#[test]
fn test_kpis() {
    let rows = vec![
        row((2023, 1, 5), "o1", 1, Category::Home, 100),
        row((2023, 1, 5), "o2", 2, Category::Toys, 200),
        row((2023, 1, 20), "o3", 1, Category::Home, 300),
        row((2023, 2, 1), "o4", 2, Category::Grocery, 50),
    ];
    let kpis = compute(&rows).unwrap();

    assert_eq!(kpis.total_revenue, Decimal::from(650));
    assert_eq!(kpis.total_orders, 4);
    assert_eq!(kpis.total_customers, 2);
    assert_eq!(kpis.avg_basket, 162.5);
    assert_eq!(kpis.last_month_revenue, Decimal::from(50));
    assert!((kpis.mom_growth - (50. - 600.) / 600.).abs() < 1e-12);
    assert!((kpis.mom_growth + 0.9167).abs() < 1e-4);

    assert_eq!(kpis.monthly, vec![
        (Month::new(2023, 1), Decimal::from(600)),
        (Month::new(2023, 2), Decimal::from(50)),
    ]);
    assert_eq!(kpis.daily, vec![
        (NaiveDate::from_ymd_opt(2023, 1, 5).unwrap(), Decimal::from(300)),
        (NaiveDate::from_ymd_opt(2023, 1, 20).unwrap(), Decimal::from(300)),
        (NaiveDate::from_ymd_opt(2023, 2, 1).unwrap(), Decimal::from(50)),
    ]);
    assert_eq!(kpis.daily_series_points(), 3);
    assert_eq!(kpis.monthly_series_points(), 2);

    assert_eq!(kpis.categories, vec![
        (Category::Home, Decimal::from(400)),
        (Category::Toys, Decimal::from(200)),
        (Category::Grocery, Decimal::from(50)),
    ]);
}

#[test]
fn test_avg_basket_counts_rows() {
    // same customer three times: the basket average is per row, not per customer
    let rows = vec![
        row((2023, 3, 1), "a", 7, Category::Beauty, 100),
        row((2023, 3, 1), "b", 7, Category::Beauty, 200),
        row((2023, 3, 2), "c", 7, Category::Beauty, 300),
        row((2023, 3, 2), "d", 8, Category::Beauty, 50),
    ];
    let kpis = compute(&rows).unwrap();
    assert_eq!(kpis.avg_basket, 162.5);
    assert_eq!(kpis.total_customers, 2);
    assert_eq!(kpis.mom_growth, 0.);
}

#[test]
fn test_example_with_three_rows_in_first_month() {
    let rows = vec![
        row((2023, 4, 1), "a", 1, Category::Home, 100),
        row((2023, 4, 2), "b", 1, Category::Home, 200),
        row((2023, 4, 3), "c", 2, Category::Home, 300),
        row((2023, 5, 1), "d", 2, Category::Home, 50),
    ];
    let kpis = compute(&rows).unwrap();

    assert_eq!(kpis.total_revenue, Decimal::from(650));
    assert_eq!(kpis.total_orders, 4);
    assert_eq!(kpis.total_customers, 2);
    assert_eq!(kpis.avg_basket, 162.5);
    assert_eq!(
        kpis.monthly.iter().map(|(_, v)| *v).collect::<Vec<_>>(),
        vec![Decimal::from(600), Decimal::from(50)]
    );
    assert!((kpis.mom_growth - (-0.916_666_666_666_666_6)).abs() < 1e-12);
}

#[test]
fn test_empty_table() {
    let kpis = compute(&[]).unwrap();
    assert_eq!(kpis.total_revenue, Decimal::ZERO);
    assert_eq!(kpis.total_orders, 0);
    assert_eq!(kpis.avg_basket, 0.);
    assert_eq!(kpis.last_month_revenue, Decimal::ZERO);
    assert_eq!(kpis.mom_growth, 0.);
    assert_eq!(kpis.daily_series_points(), 0);
    assert_eq!(kpis.monthly_series_points(), 0);
}

#[test]
fn test_duplicate_order_ids_count_once() {
    let rows = vec![
        row((2023, 1, 1), "a", 1, Category::Toys, 10),
        row((2023, 1, 1), "a", 1, Category::Toys, 10),
    ];
    let kpis = compute(&rows).unwrap();
    assert_eq!(kpis.total_orders, 1);
    assert_eq!(kpis.total_revenue, Decimal::from(20));
}

#[test]
fn test_report_lines() {
    let rows = vec![
        row((2023, 1, 1), "a", 1, Category::Toys, 10),
        row((2023, 2, 1), "b", 2, Category::Toys, 30),
    ];
    let text = compute(&rows).unwrap().to_string();
    let keys = text
        .lines()
        .map(|l| l.split_once(": ").unwrap().0)
        .collect::<Vec<_>>();
    assert_eq!(keys, vec![
        "total_revenue",
        "total_orders",
        "total_customers",
        "avg_basket",
        "last_month_revenue",
        "mom_growth",
        "daily_series_points",
        "monthly_series_points",
    ]);
    assert!(text.contains("mom_growth: 2\n"));
}

#[test]
fn test_revenue_sum_out_of_range() {
    // each revenue fits, twenty of them don't
    let revenue = Decimal::from(1_000_000_000_000i64) * Decimal::from(9_000_000_000_000_000i64);
    let rows = (0..20)
        .map(|i| OrderRecord {
            date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            order_id: format!("20230101-{}", 100_000 + i),
            customer_id: 1000,
            category: Category::Toys,
            price: Some(Decimal::from(1_000_000_000_000i64)),
            quantity: 9_000_000_000_000_000,
            revenue: Some(revenue),
        })
        .collect::<Vec<_>>();

    assert!(matches!(compute(&rows), Err(AnalyzerError::Overflow(_))));
}
