use chrono::NaiveDateTime;
use thiserror::Error;

use crate::Weight;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown vertex label: {0}")]
    UnknownVertex(String),
    #[error("Edge walk moved backwards in time: {start} -> {result}")]
    TimeRegression {
        start: NaiveDateTime,
        result: NaiveDateTime,
    },
    #[error("Edge walk decreased accumulated weight: {start} -> {result}")]
    NegativeWeight { start: Weight, result: Weight },
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
