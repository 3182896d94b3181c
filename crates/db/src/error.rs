/// Errors surfaced by the repository layer.
///
/// Unique-constraint violations are a first-class outcome (the caller is
/// expected to translate them into a client error), everything else passes
/// through as an opaque database failure.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// A unique constraint was violated (PostgreSQL error code 23505).
    /// The offending statement had no effect on the store.
    #[error("unique constraint violated: {constraint}")]
    UniqueViolation { constraint: String },

    #[error(transparent)]
    Sqlx(sqlx::Error),
}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.code().as_deref() == Some("23505") {
                return DbError::UniqueViolation {
                    constraint: db_err.constraint().unwrap_or("unknown").to_string(),
                };
            }
        }
        DbError::Sqlx(err)
    }
}
