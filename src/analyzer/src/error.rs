use std::io;
use std::result;

use common::error::CommonError;
use thiserror::Error;

pub type Result<T> = result::Result<T, AnalyzerError>;

#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("FileNotFound: {0:?}")]
    FileNotFound(String),
    #[error("Overflow: {0}")]
    Overflow(String),
    #[error("CSVError: {0:?}")]
    CSVError(#[from] csv::Error),
    #[error("StdIO: {0:?}")]
    StdIO(#[from] io::Error),
    #[error("CommonError: {0:?}")]
    CommonError(#[from] CommonError),
}
