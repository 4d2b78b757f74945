use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ModelError {
    /// Unique-constraint violations are reported by the driver as plain
    /// strings; this is the authoritative duplicate signal for callers.
    pub fn is_unique_violation(&self) -> bool {
        match self {
            ModelError::Db(msg) => {
                let lower = msg.to_lowercase();
                lower.contains("duplicate key") || lower.contains("unique constraint")
            }
            _ => false,
        }
    }
}
