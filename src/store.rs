//! Connection lifecycle and all SQL executed against the store.

use std::path::Path;

use rusqlite::{params, Connection};
use tracing::{debug, warn};

use crate::error::StoreError;
use crate::schema::Schema;

/// A city row as listed in the shell.
#[derive(Debug, Clone, PartialEq)]
pub struct City {
    pub id: i64,
    pub title: String,
}

/// One student joined with their city and country.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentRecord {
    pub first_name: String,
    pub last_name: String,
    pub country: String,
    pub city: String,
    pub area: f64,
}

/// Owns the single connection to the embedded database.
pub struct Store {
    conn: Connection,
}

impl Store {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let conn = Connection::open(path).map_err(|source| StoreError::Open {
            path: path.display().to_string(),
            source,
        })?;
        debug!(path = %path.display(), "opened database");
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory().map_err(|source| StoreError::Open {
            path: ":memory:".to_string(),
            source,
        })?;
        Ok(Self { conn })
    }

    /// Create every table in the schema. A table that already exists is
    /// logged and skipped so repeated runs against the same file succeed;
    /// any other DDL failure propagates.
    pub fn initialize(&self, schema: &Schema) -> Result<(), StoreError> {
        for table in &schema.tables {
            match self.conn.execute(&table.to_sql(), []) {
                Ok(_) => debug!(table = %table.name, "created table"),
                Err(source) if already_exists(&source) => {
                    warn!(table = %table.name, "table already exists, skipping");
                }
                Err(source) => {
                    return Err(StoreError::Ddl {
                        table: table.name.clone(),
                        source,
                    })
                }
            }
        }
        Ok(())
    }

    pub fn insert_country(&self, title: &str) -> Result<i64, StoreError> {
        require_non_empty(title, "title")?;
        self.conn
            .execute("INSERT INTO countries (title) VALUES (?1)", params![title])
            .map_err(|source| StoreError::Insert {
                table: "countries".to_string(),
                source,
            })?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn insert_city(
        &self,
        title: &str,
        area: f64,
        country_id: Option<i64>,
    ) -> Result<i64, StoreError> {
        require_non_empty(title, "title")?;
        self.conn
            .execute(
                "INSERT INTO cities (title, area, country_id) VALUES (?1, ?2, ?3)",
                params![title, area, country_id],
            )
            .map_err(|source| StoreError::Insert {
                table: "cities".to_string(),
                source,
            })?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn insert_student(
        &self,
        first_name: &str,
        last_name: &str,
        city_id: Option<i64>,
    ) -> Result<i64, StoreError> {
        require_non_empty(first_name, "first_name")?;
        require_non_empty(last_name, "last_name")?;
        self.conn
            .execute(
                "INSERT INTO students (first_name, last_name, city_id) VALUES (?1, ?2, ?3)",
                params![first_name, last_name, city_id],
            )
            .map_err(|source| StoreError::Insert {
                table: "students".to_string(),
                source,
            })?;
        Ok(self.conn.last_insert_rowid())
    }

    /// All cities in storage order.
    pub fn cities(&self) -> Result<Vec<City>, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, title FROM cities ORDER BY id")
            .map_err(StoreError::Query)?;
        let rows = stmt
            .query_map([], |row| {
                Ok(City {
                    id: row.get(0)?,
                    title: row.get(1)?,
                })
            })
            .map_err(StoreError::Query)?;
        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(StoreError::Query)
    }

    /// Students of one city, each joined with the city and country rows.
    /// Students whose city or country reference is NULL never match the
    /// inner joins.
    pub fn students_by_city(&self, city_id: i64) -> Result<Vec<StudentRecord>, StoreError> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT students.first_name, students.last_name, \
                        countries.title, cities.title, cities.area \
                 FROM students \
                 JOIN cities ON students.city_id = cities.id \
                 JOIN countries ON cities.country_id = countries.id \
                 WHERE cities.id = ?1 \
                 ORDER BY students.id",
            )
            .map_err(StoreError::Query)?;
        let rows = stmt
            .query_map(params![city_id], |row| {
                Ok(StudentRecord {
                    first_name: row.get(0)?,
                    last_name: row.get(1)?,
                    country: row.get(2)?,
                    city: row.get(3)?,
                    area: row.get(4)?,
                })
            })
            .map_err(StoreError::Query)?;
        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(StoreError::Query)
    }

    /// Release the connection. Consumes the store so it cannot be closed
    /// twice or used afterwards.
    pub fn close(self) -> Result<(), StoreError> {
        self.conn.close().map_err(|(_, source)| StoreError::Close(source))
    }
}

// A duplicate CREATE TABLE surfaces at prepare time as SqlInputError; the
// SqliteFailure arm covers execution-time reports.
fn already_exists(err: &rusqlite::Error) -> bool {
    match err {
        rusqlite::Error::SqlInputError { msg, .. } => msg.ends_with("already exists"),
        rusqlite::Error::SqliteFailure(_, Some(msg)) => msg.ends_with("already exists"),
        _ => false,
    }
}

fn require_non_empty(value: &str, field: &'static str) -> Result<(), StoreError> {
    if value.trim().is_empty() {
        return Err(StoreError::EmptyField { field });
    }
    Ok(())
}
