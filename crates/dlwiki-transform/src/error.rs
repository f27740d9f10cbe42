use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransformError {
    /// A row lacks a field the category's transform requires.
    #[error("missing expected field {field}")]
    MissingField { field: String },

    /// An enrichment pass could not find the record it must update.
    /// Fatal for the category: the source data violated referential
    /// integrity.
    #[error("no record matching {key} = {value}")]
    LinkTargetNotFound { key: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, TransformError>;
