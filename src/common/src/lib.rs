pub mod error;
pub mod table;
pub mod types;

pub use types::Category;
pub use types::OrderRecord;
pub use types::MONEY_SCALE;
