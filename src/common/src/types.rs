use chrono::NaiveDate;
use chrono::NaiveDateTime;
use enum_iterator::Sequence;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use strum_macros::Display;
use strum_macros::EnumString;

use crate::error::CommonError;
use crate::error::Result;

pub const MONEY_SCALE: u32 = 2;

pub const COLUMN_DATE: &str = "date";
pub const COLUMN_ORDER_ID: &str = "order_id";
pub const COLUMN_CUSTOMER_ID: &str = "customer_id";
pub const COLUMN_CATEGORY: &str = "category";
pub const COLUMN_PRICE: &str = "price";
pub const COLUMN_QUANTITY: &str = "quantity";
pub const COLUMN_REVENUE: &str = "revenue";

pub const COLUMNS: [&str; 7] = [
    COLUMN_DATE,
    COLUMN_ORDER_ID,
    COLUMN_CUSTOMER_ID,
    COLUMN_CATEGORY,
    COLUMN_PRICE,
    COLUMN_QUANTITY,
    COLUMN_REVENUE,
];

#[derive(
    Debug,
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Clone,
    Copy,
    Display,
    EnumString,
    Sequence,
    Serialize,
    Deserialize,
)]
pub enum Category {
    Electronics,
    Home,
    Beauty,
    Toys,
    Grocery,
}

/// Single order row of the sales table.
///
/// `price` and `revenue` are optional because raw tables may carry missing
/// values; a cleaned table always has both set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    #[serde(deserialize_with = "deserialize_date")]
    pub date: NaiveDate,
    pub order_id: String,
    pub customer_id: i64,
    pub category: Category,
    pub price: Option<Decimal>,
    pub quantity: i64,
    pub revenue: Option<Decimal>,
}

impl OrderRecord {
    pub fn line_revenue(&self) -> Result<Option<Decimal>> {
        let Some(price) = self.price else {
            return Ok(None);
        };

        price
            .checked_mul(Decimal::from(self.quantity))
            .map(|v| Some(round_money(v)))
            .ok_or_else(|| {
                CommonError::Overflow(format!(
                    "revenue of order {} ({price} x {}) is out of range",
                    self.order_id, self.quantity
                ))
            })
    }
}

pub fn round_money(v: Decimal) -> Decimal {
    v.round_dp(MONEY_SCALE)
}

/// Parses `YYYY-MM-DD`, tolerating a trailing time part which is dropped.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    let s = s.trim();
    if let Ok(d) = s.parse::<NaiveDate>() {
        return Ok(d);
    }

    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(dt.date());
        }
    }

    Err(CommonError::BadRequest(format!("invalid date {s:?}")))
}

fn deserialize_date<'de, D>(deserializer: D) -> std::result::Result<NaiveDate, D::Error>
where D: Deserializer<'de> {
    let s = String::deserialize(deserializer)?;
    parse_date(&s).map_err(serde::de::Error::custom)
}
