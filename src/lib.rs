//! Embedded SQLite directory of countries, cities and students.
//!
//! # Intention
//!
//! - Keep all SQLite-specific logic, types and error handling in one place.
//! - Expose explicit `Result`s for every store operation so callers can tell
//!   an empty result from a failed one.
//! - Keep seeding, schema setup and the interactive shell decoupled so tests
//!   can run against an isolated in-memory store.
//!
//! # Architectural Boundaries
//!
//! - `store` owns the connection; nothing else touches `rusqlite` directly.
//! - `shell` only reads; all writes happen during schema setup and seeding.

pub mod error;
pub mod schema;
pub mod seed;
pub mod shell;
pub mod store;

pub use error::StoreError;
pub use store::Store;
