use hrmap_model::{FieldName, ModelError, ShapeName};
use thiserror::Error;

use crate::expr::EvalError;

#[derive(Debug, Error)]
pub enum MapError {
    #[error("mapping already registered for {src} -> {dest}")]
    DuplicateMapping { src: ShapeName, dest: ShapeName },
    #[error("no mapping registered for {src} -> {dest}")]
    UnregisteredMapping { src: ShapeName, dest: ShapeName },
    #[error("unknown shape: {0}")]
    UnknownShape(String),
    #[error("shape '{shape}' has no field '{field}'")]
    UnknownField { shape: ShapeName, field: String },
    #[error("source shape '{shape}' has no field '{field}'")]
    UnknownSourceField { shape: ShapeName, field: String },
    #[error("field types differ for copy of '{field}' into '{shape}'")]
    IncompatibleCopy { shape: ShapeName, field: FieldName },
    #[error("field '{field}' of '{shape}' is not a collection")]
    NotACollection { shape: ShapeName, field: FieldName },
    #[error("more than one rule resolves field '{field}' of '{shape}'")]
    DuplicateFieldRule { shape: ShapeName, field: FieldName },
    #[error("no rule resolves field '{field}' of '{shape}'")]
    UnresolvedField { shape: ShapeName, field: FieldName },
    #[error("derivation for field '{field}' failed")]
    Derivation {
        field: FieldName,
        #[source]
        source: EvalError,
    },
    #[error(transparent)]
    Model(#[from] ModelError),
}
