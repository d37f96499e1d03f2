use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid shape name: {0:?}")]
    InvalidShapeName(String),
    #[error("invalid field name: {0:?}")]
    InvalidFieldName(String),
    #[error("duplicate field '{field}' on shape '{shape}'")]
    DuplicateField { shape: String, field: String },
    #[error("shape already registered: {0}")]
    DuplicateShape(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
