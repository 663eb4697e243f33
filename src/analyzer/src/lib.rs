pub mod clean;
pub mod error;
pub mod kpi;
pub mod report;

pub use clean::clean;
pub use kpi::compute;
pub use kpi::Kpis;
pub use kpi::Month;
