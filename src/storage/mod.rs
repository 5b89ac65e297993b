pub mod database;
pub mod documents;
pub mod paths;

pub use database::Database;
pub use documents::DocumentStore;
