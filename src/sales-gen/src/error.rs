use std::result;

use chrono::NaiveDate;
use common::error::CommonError;
use thiserror::Error;

pub type Result<T> = result::Result<T, SalesGenError>;

#[derive(Error, Debug)]
pub enum SalesGenError {
    #[error("InvalidRange: end date {end} precedes start date {start}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },
    #[error("InvalidConfig: {0}")]
    InvalidConfig(String),
    #[error("Internal: {0:?}")]
    Internal(String),
    #[error("FileNotFound: {0:?}")]
    FileNotFound(String),
    #[error("ConfigError: {0:?}")]
    ConfigError(#[from] config::ConfigError),
    #[error("CommonError: {0:?}")]
    CommonError(#[from] CommonError),
}
