pub mod assembler;
pub mod catalog;
pub mod config;
pub mod error;
pub mod noise;
pub mod simulator;

pub use assembler::assemble;
pub use assembler::generate;
pub use catalog::Catalog;
pub use catalog::CatalogConfig;
pub use simulator::Simulator;
