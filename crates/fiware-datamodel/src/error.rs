//! Error types for the data model crate.

#[derive(Debug, thiserror::Error)]
pub enum DataModelError {
    #[error("too short base name")]
    TooShortBaseName,

    #[error("too short type name")]
    TooShortTypeName,

    #[error("invalid type name: {0}")]
    InvalidTypeName(String),

    #[error("too long id length: {length} (allowed {allowed})")]
    TooLongIdLength { length: usize, allowed: usize },

    #[error("given strings are not location type: {0}")]
    MismatchLocationType(String),

    #[error("empty category name")]
    EmptyCategoryName,

    #[error("unknown {kind} value: {value}")]
    UnknownToken { kind: &'static str, value: String },

    #[error("invalid year-less date: {0}")]
    InvalidDateYearLess(String),

    #[error("invalid URI: {0}")]
    InvalidUri(#[from] url::ParseError),
}

/// Result type for data model operations
pub type Result<T> = std::result::Result<T, DataModelError>;
