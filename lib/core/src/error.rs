use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Table not found: {0}")]
    TableNotFound(String),

    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    #[error("Assets cannot be compared: {0}")]
    Incomparable(String),

    #[error("Query execution failed: {0}")]
    Query(String),
}
