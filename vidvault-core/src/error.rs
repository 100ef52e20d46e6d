use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

#[cfg(feature = "database")]
impl From<sqlx::Error> for CatalogError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => {
                CatalogError::NotFound("row not found".to_string())
            }
            sqlx::Error::Database(db_err)
                if db_err.is_foreign_key_violation()
                    || db_err.is_unique_violation() =>
            {
                CatalogError::InvalidInput(db_err.message().to_string())
            }
            other => CatalogError::Database(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
