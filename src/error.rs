use thiserror::Error;

#[derive(Error, Debug)]
pub enum PayStationError {
    #[error("invalid coin: {0}")]
    InvalidCoin(u32),
    #[error("cash box full: {inserted} cents inserted, cannot accept {coin} more")]
    CashBoxFull { inserted: u32, coin: u32 },
    #[error("insert event without a coin value")]
    MissingCoin,
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PayStationError>;
