use thiserror::Error;

/// Storage failures; every variant surfaces as a 500 at the API boundary
#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Database error: {operation} failed: {source}")]
    Operation {
        operation: String,
        #[source]
        source: sea_orm::DbErr,
    },

    #[error("Starting transaction for {operation} failed: {source}")]
    TransactionBegin {
        operation: String,
        #[source]
        source: sea_orm::DbErr,
    },

    #[error("Committing transaction for {operation} failed: {source}")]
    TransactionCommit {
        operation: String,
        #[source]
        source: sea_orm::DbErr,
    },

    #[error("Running migrations failed: {source}")]
    Migration {
        #[source]
        source: sea_orm::DbErr,
    },
}
