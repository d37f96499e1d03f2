#![deny(unsafe_code)]

//! Shape metadata: the named field layouts that records conform to.
//!
//! Shapes are declared once at startup and frozen. A [`ShapeCatalog`] holds
//! every entity and transfer shape known to the configuration; mapping
//! profiles are validated against it when they are built.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::ids::{FieldName, ShapeName};
use crate::value::{Record, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldType {
    Text,
    Int,
    Bool,
    Date,
    Timestamp,
    Record,
    List,
}

impl FieldType {
    /// The value a destination field holds before any rule touches it.
    ///
    /// Dates, timestamps and related records have no neutral literal; they
    /// stay unset until a rule or a lower layer supplies them.
    pub fn default_value(&self) -> Value {
        match self {
            Self::Text => Value::Text(String::new()),
            Self::Int => Value::Int(0),
            Self::Bool => Value::Bool(false),
            Self::Date | Self::Timestamp | Self::Record => Value::Missing,
            Self::List => Value::List(Vec::new()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDef {
    pub name: FieldName,
    pub field_type: FieldType,
    pub optional: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shape {
    name: ShapeName,
    fields: Vec<FieldDef>,
}

impl Shape {
    pub fn builder(name: impl Into<String>) -> ShapeBuilder {
        ShapeBuilder {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    pub fn name(&self) -> &ShapeName {
        &self.name
    }

    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|def| def.name.as_str() == name)
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    /// A fresh instance with every field at its pre-rule state: optional
    /// fields unset, required fields at their type default.
    pub fn default_record(&self) -> Record {
        let mut record = Record::new(self.name.clone());
        for def in &self.fields {
            let value = if def.optional {
                Value::Missing
            } else {
                def.field_type.default_value()
            };
            record.set(def.name.clone(), value);
        }
        record
    }
}

/// Step-wise shape declaration; duplicate fields fail at `build`.
#[derive(Debug)]
pub struct ShapeBuilder {
    name: String,
    fields: Vec<(String, FieldType, bool)>,
}

impl ShapeBuilder {
    pub fn field(mut self, name: impl Into<String>, field_type: FieldType) -> Self {
        self.fields.push((name.into(), field_type, false));
        self
    }

    pub fn optional(mut self, name: impl Into<String>, field_type: FieldType) -> Self {
        self.fields.push((name.into(), field_type, true));
        self
    }

    pub fn build(self) -> Result<Shape, ModelError> {
        let name = ShapeName::new(self.name)?;
        let mut fields = Vec::with_capacity(self.fields.len());
        for (raw, field_type, optional) in self.fields {
            let field = FieldName::new(raw)?;
            if fields.iter().any(|def: &FieldDef| def.name == field) {
                return Err(ModelError::DuplicateField {
                    shape: name.as_str().to_string(),
                    field: field.as_str().to_string(),
                });
            }
            fields.push(FieldDef {
                name: field,
                field_type,
                optional,
            });
        }
        Ok(Shape { name, fields })
    }
}

/// Registry of every shape known to the configuration.
#[derive(Debug, Clone, Default)]
pub struct ShapeCatalog {
    shapes: BTreeMap<ShapeName, Shape>,
}

impl ShapeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, shape: Shape) -> Result<(), ModelError> {
        if self.shapes.contains_key(shape.name()) {
            return Err(ModelError::DuplicateShape(shape.name().as_str().to_string()));
        }
        self.shapes.insert(shape.name().clone(), shape);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Shape> {
        self.shapes.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.shapes.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.values()
    }
}
