//! Derivation expressions and their evaluator.
//!
//! Expressions are data: a small serializable tree covering exactly what the
//! rule tables need. Evaluation is a pure function of the expression, the
//! source record and the context clock. Traversal is defensive throughout:
//! an absent link yields [`Value::Missing`] rather than an error, so errors
//! are reserved for genuinely malformed rules (counting over a scalar,
//! taking years since a non-date).

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use hrmap_model::{Record, Value};

use crate::context::MapContext;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("expected a list at '{path}', found {found}")]
    NotAList { path: String, found: &'static str },
    #[error("expected a date at '{path}', found {found}")]
    NotADate { path: String, found: &'static str },
    #[error("filter must evaluate to a boolean, got {found}")]
    NonBooleanFilter { found: &'static str },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    /// Fixed literal.
    Literal(Value),
    /// Projection of one field on the current record.
    Field(String),
    /// Guarded traversal through related records; the first absent link
    /// short-circuits to `Missing`.
    Path(Vec<String>),
    /// Left value unless it is missing.
    Coalesce(Box<Expr>, Box<Expr>),
    /// Text concatenation; missing and empty parts are skipped so a lone
    /// part never gains a stray separator.
    Join { separator: String, parts: Vec<Expr> },
    /// Filtered count over a related collection; an absent collection
    /// counts zero.
    Count {
        over: Vec<String>,
        filter: Option<Box<Expr>>,
    },
    /// Whether the path resolves to a present value.
    Exists(Vec<String>),
    /// Calendar-year difference between the context clock and a date field.
    /// Deliberately ignores month and day, so the result is off by one near
    /// the anniversary.
    YearsSince(Vec<String>),
    /// Inclusive day span between two date fields.
    DaysBetween { start: Vec<String>, end: Vec<String> },
    /// The evaluation-time timestamp.
    Now,
}

impl Expr {
    pub fn literal(value: Value) -> Self {
        Self::Literal(value)
    }

    pub fn text(value: impl Into<String>) -> Self {
        Self::Literal(Value::Text(value.into()))
    }

    pub fn field(name: impl Into<String>) -> Self {
        Self::Field(name.into())
    }

    pub fn path<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Path(segments.into_iter().map(Into::into).collect())
    }

    pub fn coalesce(value: Expr, fallback: Expr) -> Self {
        Self::Coalesce(Box::new(value), Box::new(fallback))
    }

    pub fn join(separator: impl Into<String>, parts: Vec<Expr>) -> Self {
        Self::Join {
            separator: separator.into(),
            parts,
        }
    }

    pub fn count<I, S>(over: I, filter: Option<Expr>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Count {
            over: over.into_iter().map(Into::into).collect(),
            filter: filter.map(Box::new),
        }
    }

    pub fn exists<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Exists(segments.into_iter().map(Into::into).collect())
    }

    pub fn years_since<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::YearsSince(segments.into_iter().map(Into::into).collect())
    }

    pub fn days_between<I, S>(start: I, end: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::DaysBetween {
            start: start.into_iter().map(Into::into).collect(),
            end: end.into_iter().map(Into::into).collect(),
        }
    }

    /// Evaluate against a source record.
    pub fn evaluate(&self, record: &Record, ctx: &MapContext) -> Result<Value, EvalError> {
        match self {
            Self::Literal(value) => Ok(value.clone()),
            Self::Field(name) => Ok(record.get(name).clone()),
            Self::Path(segments) => Ok(resolve_path(record, segments)),
            Self::Coalesce(value, fallback) => {
                let resolved = value.evaluate(record, ctx)?;
                if resolved.is_missing() {
                    fallback.evaluate(record, ctx)
                } else {
                    Ok(resolved)
                }
            }
            Self::Join { separator, parts } => {
                let mut rendered = Vec::new();
                for part in parts {
                    if let Some(text) = render_text(&part.evaluate(record, ctx)?) {
                        rendered.push(text);
                    }
                }
                Ok(Value::Text(rendered.join(separator)))
            }
            Self::Count { over, filter } => {
                let collection = resolve_path(record, over);
                match collection {
                    Value::Missing => Ok(Value::Int(0)),
                    Value::List(items) => {
                        let mut count = 0i64;
                        for item in &items {
                            if element_passes(filter.as_deref(), item, ctx)? {
                                count += 1;
                            }
                        }
                        Ok(Value::Int(count))
                    }
                    other => Err(EvalError::NotAList {
                        path: over.join("."),
                        found: other.kind(),
                    }),
                }
            }
            Self::Exists(segments) => Ok(Value::Bool(!resolve_path(record, segments).is_missing())),
            Self::YearsSince(segments) => match resolve_path(record, segments) {
                Value::Missing => Ok(Value::Missing),
                Value::Date(date) => Ok(Value::Int(i64::from(ctx.now.year() - date.year()))),
                Value::Timestamp(stamp) => {
                    Ok(Value::Int(i64::from(ctx.now.year() - stamp.year())))
                }
                other => Err(EvalError::NotADate {
                    path: segments.join("."),
                    found: other.kind(),
                }),
            },
            Self::DaysBetween { start, end } => {
                let from = match date_at(record, start)? {
                    Some(date) => date,
                    None => return Ok(Value::Missing),
                };
                let to = match date_at(record, end)? {
                    Some(date) => date,
                    None => return Ok(Value::Missing),
                };
                Ok(Value::Int((to - from).num_days() + 1))
            }
            Self::Now => Ok(Value::Timestamp(ctx.now)),
        }
    }

    /// Evaluate as a predicate. `Missing` reads as false; any non-boolean
    /// result is a malformed filter.
    pub fn matches(&self, record: &Record, ctx: &MapContext) -> Result<bool, EvalError> {
        match self.evaluate(record, ctx)? {
            Value::Bool(value) => Ok(value),
            Value::Missing => Ok(false),
            other => Err(EvalError::NonBooleanFilter {
                found: other.kind(),
            }),
        }
    }
}

/// Walk a field path, short-circuiting at the first absent or non-record
/// link. The final segment may hold any value.
fn resolve_path(record: &Record, segments: &[String]) -> Value {
    let mut current = record;
    for (idx, segment) in segments.iter().enumerate() {
        let value = current.get(segment);
        if idx + 1 == segments.len() {
            return value.clone();
        }
        match value {
            Value::Record(next) => current = next,
            _ => return Value::Missing,
        }
    }
    Value::Missing
}

fn date_at(record: &Record, segments: &[String]) -> Result<Option<chrono::NaiveDate>, EvalError> {
    match resolve_path(record, segments) {
        Value::Missing => Ok(None),
        Value::Date(date) => Ok(Some(date)),
        Value::Timestamp(stamp) => Ok(Some(stamp.date_naive())),
        other => Err(EvalError::NotADate {
            path: segments.join("."),
            found: other.kind(),
        }),
    }
}

fn render_text(value: &Value) -> Option<String> {
    match value {
        Value::Text(text) if text.is_empty() => None,
        Value::Text(text) => Some(text.clone()),
        Value::Int(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Date(date) => Some(date.to_string()),
        Value::Timestamp(stamp) => Some(stamp.to_rfc3339()),
        Value::Record(_) | Value::List(_) | Value::Missing => None,
    }
}

pub(crate) fn element_passes(
    filter: Option<&Expr>,
    element: &Value,
    ctx: &MapContext,
) -> Result<bool, EvalError> {
    let Some(filter) = filter else {
        return Ok(true);
    };
    match element {
        Value::Record(record) => filter.matches(record, ctx),
        _ => Ok(false),
    }
}
