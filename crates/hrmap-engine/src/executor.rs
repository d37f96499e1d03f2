//! Rule execution.
//!
//! The executor reads a loaded source record and constructs a fresh
//! destination record; it never fetches data and never mutates its inputs.
//! Every call either returns a fully populated destination or an error,
//! never a partial result.

use hrmap_model::{Record, Shape, ShapeCatalog, ShapeName, Value};

use crate::context::MapContext;
use crate::error::MapError;
use crate::expr::element_passes;
use crate::registry::MappingRegistry;
use crate::rules::{ContextValue, FieldPolicy, FieldRule};

pub struct Executor<'a> {
    registry: &'a MappingRegistry,
    catalog: &'a ShapeCatalog,
    ctx: MapContext,
}

impl<'a> Executor<'a> {
    pub fn new(registry: &'a MappingRegistry, catalog: &'a ShapeCatalog) -> Self {
        Self {
            registry,
            catalog,
            ctx: MapContext::current(),
        }
    }

    /// Pin the evaluation clock, so every context-derived value in one
    /// call (and in tests) sees the same instant.
    pub fn with_context(mut self, ctx: MapContext) -> Self {
        self.ctx = ctx;
        self
    }

    pub fn context(&self) -> &MapContext {
        &self.ctx
    }

    /// Transform one source record into the destination shape.
    pub fn transform(&self, source: &Record, dest: &ShapeName) -> Result<Record, MapError> {
        let profile = self.registry.lookup(source.shape(), dest)?;
        let dest_shape = self
            .catalog
            .get(dest.as_str())
            .ok_or_else(|| MapError::UnknownShape(dest.as_str().to_string()))?;

        let mut out = dest_shape.default_record();
        for rule in profile.rules() {
            self.apply(rule, source, dest_shape, &mut out)?;
        }
        Ok(out)
    }

    /// Transform a slice of source records element-wise.
    pub fn transform_all(
        &self,
        sources: &[Record],
        dest: &ShapeName,
    ) -> Result<Vec<Record>, MapError> {
        sources
            .iter()
            .map(|source| self.transform(source, dest))
            .collect()
    }

    fn apply(
        &self,
        rule: &FieldRule,
        source: &Record,
        dest_shape: &Shape,
        out: &mut Record,
    ) -> Result<(), MapError> {
        match &rule.policy {
            FieldPolicy::Copy { source: from } => {
                let value = source.get(from.as_str());
                // An absent source value leaves the type default in place.
                if !value.is_missing() {
                    out.set(rule.target.clone(), value.clone());
                }
            }
            FieldPolicy::Compute(expr) => {
                let value = expr
                    .evaluate(source, &self.ctx)
                    .map_err(|err| MapError::Derivation {
                        field: rule.target.clone(),
                        source: err,
                    })?;
                if value.is_missing() {
                    // Required fields keep their type default; optional
                    // fields stay unset.
                    let optional = dest_shape
                        .field(rule.target.as_str())
                        .is_some_and(|def| def.optional);
                    if !optional {
                        return Ok(());
                    }
                }
                out.set(rule.target.clone(), value);
            }
            FieldPolicy::Ignore => {}
            FieldPolicy::Constant(value) => {
                out.set(rule.target.clone(), value.clone());
            }
            FieldPolicy::Contextual(ContextValue::Now) => {
                out.set(rule.target.clone(), Value::Timestamp(self.ctx.now));
            }
            FieldPolicy::Collect {
                source: from,
                element_shape,
                filter,
            } => {
                let collected = self.collect(rule, source.get(from.as_str()), element_shape, filter.as_ref())?;
                out.set(rule.target.clone(), Value::List(collected));
            }
        }
        Ok(())
    }

    fn collect(
        &self,
        rule: &FieldRule,
        value: &Value,
        element_shape: &ShapeName,
        filter: Option<&crate::expr::Expr>,
    ) -> Result<Vec<Value>, MapError> {
        let items = match value {
            Value::Missing => return Ok(Vec::new()),
            Value::List(items) => items,
            other => {
                return Err(MapError::Derivation {
                    field: rule.target.clone(),
                    source: crate::expr::EvalError::NotAList {
                        path: rule.target.as_str().to_string(),
                        found: other.kind(),
                    },
                });
            }
        };

        let mut collected = Vec::with_capacity(items.len());
        for item in items {
            let passes =
                element_passes(filter, item, &self.ctx).map_err(|err| MapError::Derivation {
                    field: rule.target.clone(),
                    source: err,
                })?;
            if !passes {
                continue;
            }
            if let Value::Record(record) = item {
                collected.push(Value::Record(self.transform(record, element_shape)?));
            }
        }
        Ok(collected)
    }
}
