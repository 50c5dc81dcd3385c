use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JournalError {
    /// A `createdAt` value that none of the accepted formats can read.
    #[error("invalid timestamp {0:?}: expected RFC 3339, YYYY-MM-DDTHH:MM[:SS] or YYYY-MM-DD")]
    InvalidTimestamp(String),

    #[error("unknown timezone {0:?}")]
    UnknownTimezone(String),
}
