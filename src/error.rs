use thiserror::Error;

/// Errors raised by store operations, one variant per failure site.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to open database at {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: rusqlite::Error,
    },

    #[error("failed to create table {table}: {source}")]
    Ddl {
        table: String,
        #[source]
        source: rusqlite::Error,
    },

    #[error("failed to insert into {table}: {source}")]
    Insert {
        table: String,
        #[source]
        source: rusqlite::Error,
    },

    #[error("query failed: {0}")]
    Query(#[source] rusqlite::Error),

    #[error("failed to close database: {0}")]
    Close(#[source] rusqlite::Error),

    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },
}
