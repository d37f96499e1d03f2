#![deny(unsafe_code)]

//! Runtime values and record instances.
//!
//! A [`Record`] is one loaded object: the name of its shape plus a field map.
//! Related objects are nested as [`Value::Record`]; collections as
//! [`Value::List`]. [`Value::Missing`] is the null-equivalent; reading an
//! absent field yields `Missing`, never an error.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{FieldName, ShapeName};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum Value {
    Text(String),
    Int(i64),
    Bool(bool),
    Date(NaiveDate),
    Timestamp(DateTime<Utc>),
    Record(Record),
    List(Vec<Value>),
    Missing,
}

static MISSING: Value = Value::Missing;

impl Value {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// Short tag used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Int(_) => "int",
            Self::Bool(_) => "bool",
            Self::Date(_) => "date",
            Self::Timestamp(_) => "timestamp",
            Self::Record(_) => "record",
            Self::List(_) => "list",
            Self::Missing => "missing",
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Self::Record(record) => Some(record),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    shape: ShapeName,
    fields: BTreeMap<FieldName, Value>,
}

impl Record {
    pub fn new(shape: ShapeName) -> Self {
        Self {
            shape,
            fields: BTreeMap::new(),
        }
    }

    pub fn shape(&self) -> &ShapeName {
        &self.shape
    }

    /// Read a field. Absent fields read as [`Value::Missing`].
    pub fn get(&self, field: &str) -> &Value {
        self.fields.get(field).unwrap_or(&MISSING)
    }

    pub fn set(&mut self, field: FieldName, value: Value) {
        self.fields.insert(field, value);
    }

    /// Builder-style insertion for fixtures and configuration.
    pub fn with(mut self, field: FieldName, value: Value) -> Self {
        self.set(field, value);
        self
    }

    pub fn fields(&self) -> impl Iterator<Item = (&FieldName, &Value)> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
