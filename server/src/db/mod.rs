//! Storage for colleges, students, events and participation records.
//!
//! Handlers only see the [`CampusStore`] trait; [`SqliteStore`] is the single
//! implementation and works against either a database file or a private
//! in-memory database.

pub mod schema;
pub mod seed;
pub mod sqlite;
pub mod store;

pub use schema::init_schema;
pub use seed::seed_sample_data;
pub use sqlite::SqliteStore;
pub use store::CampusStore;
