use crate::schema::ColumnRole;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BalanceteError {
    #[error("Column '{name}' (bound to {role}) was not found in the report header")]
    ColumnNotFound { role: ColumnRole, name: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BalanceteError>;
