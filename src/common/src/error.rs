use std::io;
use std::result;

use thiserror::Error;

pub type Result<T> = result::Result<T, CommonError>;

#[derive(Error, Debug)]
pub enum CommonError {
    #[error("CSVError: {0:?}")]
    CSVError(#[from] csv::Error),
    #[error("StdIO: {0:?}")]
    StdIO(#[from] io::Error),
    #[error("BadRequest: {0}")]
    BadRequest(String),
    #[error("Overflow: {0}")]
    Overflow(String),
}
