#![deny(unsafe_code)]

//! Value and shape model for HR object transformations.
//!
//! - **ids**: validated [`ShapeName`] and [`FieldName`] newtypes
//! - **value**: the runtime [`Value`] universe and [`Record`] instances
//! - **shape**: [`Shape`] metadata and the [`ShapeCatalog`]

pub mod error;
pub mod ids;
pub mod shape;
pub mod value;

pub use error::{ModelError, Result};
pub use ids::{FieldName, ShapeName};
pub use shape::{FieldDef, FieldType, Shape, ShapeBuilder, ShapeCatalog};
pub use value::{Record, Value};
