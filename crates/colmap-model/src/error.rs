use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("unknown attribute type: {0}")]
    UnknownAttributeType(String),
}
