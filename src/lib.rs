pub mod analytics;
pub mod api;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod models;
#[cfg(test)]
pub mod test_helpers;

pub use error::JournalError;
