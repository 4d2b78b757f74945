use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("transaction failed: {0}")]
    Transaction(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self {
        Self::NotFound(format!("{} not found", entity))
    }

    /// Human-readable kind name, used verbatim in the HTTP error envelope.
    pub fn kind(&self) -> &'static str {
        match self {
            ServiceError::Validation(_) => "ValidationError",
            ServiceError::NotFound(_) => "NotFoundError",
            ServiceError::Conflict(_) => "ConflictError",
            ServiceError::Transaction(_) => "TransactionError",
            ServiceError::Db(_) | ServiceError::Model(_) => "DataAccessError",
        }
    }
}

impl From<sea_orm::TransactionError<sea_orm::DbErr>> for ServiceError {
    fn from(e: sea_orm::TransactionError<sea_orm::DbErr>) -> Self {
        ServiceError::Transaction(e.to_string())
    }
}
