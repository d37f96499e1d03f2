//! Profile declaration and validation.
//!
//! [`ProfileBuilder`] collects the explicit field rules for one shape pair,
//! then `build` runs the one-time convention pass and checks full coverage:
//! every destination field ends up with exactly one rule, or the build fails.
//! Nothing is reflected over at execution time; the derived copy rules are
//! frozen into the profile here.

use std::collections::BTreeSet;

use tracing::debug;

use hrmap_model::{FieldName, FieldType, ShapeCatalog, ShapeName, Value};

use crate::error::MapError;
use crate::expr::Expr;
use crate::rules::{ContextValue, FieldPolicy, FieldRule, MappingProfile, RuleOrigin};

#[derive(Debug)]
enum Step {
    Copy {
        target: String,
        source: String,
    },
    Compute {
        target: String,
        expr: Expr,
    },
    Ignore {
        target: String,
    },
    Constant {
        target: String,
        value: Value,
    },
    Contextual {
        target: String,
        value: ContextValue,
    },
    Collect {
        target: String,
        source: String,
        element_shape: String,
        filter: Option<Expr>,
    },
}

impl Step {
    fn target(&self) -> &str {
        match self {
            Self::Copy { target, .. }
            | Self::Compute { target, .. }
            | Self::Ignore { target }
            | Self::Constant { target, .. }
            | Self::Contextual { target, .. }
            | Self::Collect { target, .. } => target,
        }
    }
}

/// Step-wise declaration of one mapping profile.
#[derive(Debug)]
pub struct ProfileBuilder {
    source: String,
    dest: String,
    steps: Vec<Step>,
}

impl ProfileBuilder {
    pub fn new(source: impl Into<String>, dest: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            dest: dest.into(),
            steps: Vec::new(),
        }
    }

    /// Copy a differently named source field into the target.
    pub fn copy_from(mut self, target: impl Into<String>, source: impl Into<String>) -> Self {
        self.steps.push(Step::Copy {
            target: target.into(),
            source: source.into(),
        });
        self
    }

    /// Derive the target from an expression over the source graph.
    pub fn compute(mut self, target: impl Into<String>, expr: Expr) -> Self {
        self.steps.push(Step::Compute {
            target: target.into(),
            expr,
        });
        self
    }

    /// Leave the target untouched; a lower layer owns it.
    pub fn ignore(mut self, target: impl Into<String>) -> Self {
        self.steps.push(Step::Ignore {
            target: target.into(),
        });
        self
    }

    /// Write a fixed literal into the target.
    pub fn constant(mut self, target: impl Into<String>, value: Value) -> Self {
        self.steps.push(Step::Constant {
            target: target.into(),
            value,
        });
        self
    }

    /// Write a context-supplied value into the target.
    pub fn contextual(mut self, target: impl Into<String>, value: ContextValue) -> Self {
        self.steps.push(Step::Contextual {
            target: target.into(),
            value,
        });
        self
    }

    /// Map a collection field element-wise into the given element shape,
    /// keeping only elements the filter accepts.
    pub fn collect(
        mut self,
        target: impl Into<String>,
        source: impl Into<String>,
        element_shape: impl Into<String>,
        filter: Option<Expr>,
    ) -> Self {
        self.steps.push(Step::Collect {
            target: target.into(),
            source: source.into(),
            element_shape: element_shape.into(),
            filter,
        });
        self
    }

    /// Validate the declaration against the catalog and freeze the profile.
    pub fn build(self, catalog: &ShapeCatalog) -> Result<MappingProfile, MapError> {
        let source_name = ShapeName::new(self.source)?;
        let dest_name = ShapeName::new(self.dest)?;
        let source_shape = catalog
            .get(source_name.as_str())
            .ok_or_else(|| MapError::UnknownShape(source_name.as_str().to_string()))?;
        let dest_shape = catalog
            .get(dest_name.as_str())
            .ok_or_else(|| MapError::UnknownShape(dest_name.as_str().to_string()))?;

        let mut resolved: BTreeSet<FieldName> = BTreeSet::new();
        let mut rules = Vec::with_capacity(dest_shape.fields().len());

        for step in self.steps {
            let target = FieldName::new(step.target())?;
            let dest_def =
                dest_shape
                    .field(target.as_str())
                    .ok_or_else(|| MapError::UnknownField {
                        shape: dest_name.clone(),
                        field: target.as_str().to_string(),
                    })?;
            if !resolved.insert(target.clone()) {
                return Err(MapError::DuplicateFieldRule {
                    shape: dest_name.clone(),
                    field: target,
                });
            }

            let policy = match step {
                Step::Copy { source, .. } => {
                    let source = FieldName::new(source)?;
                    let source_def = source_shape.field(source.as_str()).ok_or_else(|| {
                        MapError::UnknownSourceField {
                            shape: source_name.clone(),
                            field: source.as_str().to_string(),
                        }
                    })?;
                    if source_def.field_type != dest_def.field_type {
                        return Err(MapError::IncompatibleCopy {
                            shape: dest_name.clone(),
                            field: target,
                        });
                    }
                    FieldPolicy::Copy { source }
                }
                Step::Compute { expr, .. } => FieldPolicy::Compute(expr),
                Step::Ignore { .. } => FieldPolicy::Ignore,
                Step::Constant { value, .. } => FieldPolicy::Constant(value),
                Step::Contextual { value, .. } => FieldPolicy::Contextual(value),
                Step::Collect {
                    source,
                    element_shape,
                    filter,
                    ..
                } => {
                    let source = FieldName::new(source)?;
                    let source_def = source_shape.field(source.as_str()).ok_or_else(|| {
                        MapError::UnknownSourceField {
                            shape: source_name.clone(),
                            field: source.as_str().to_string(),
                        }
                    })?;
                    if source_def.field_type != FieldType::List {
                        return Err(MapError::NotACollection {
                            shape: source_name.clone(),
                            field: source,
                        });
                    }
                    if dest_def.field_type != FieldType::List {
                        return Err(MapError::NotACollection {
                            shape: dest_name.clone(),
                            field: target,
                        });
                    }
                    let element_shape = ShapeName::new(element_shape)?;
                    if !catalog.contains(element_shape.as_str()) {
                        return Err(MapError::UnknownShape(
                            element_shape.as_str().to_string(),
                        ));
                    }
                    FieldPolicy::Collect {
                        source,
                        element_shape,
                        filter,
                    }
                }
            };

            rules.push(FieldRule {
                target,
                policy,
                origin: RuleOrigin::Declared,
            });
        }

        // Convention pass: same-name, same-type fields copy without being
        // declared. Runs once here; never reflective at execution time.
        for def in dest_shape.fields() {
            if resolved.contains(&def.name) {
                continue;
            }
            if let Some(source_def) = source_shape.field(def.name.as_str())
                && source_def.field_type == def.field_type
            {
                resolved.insert(def.name.clone());
                rules.push(FieldRule {
                    target: def.name.clone(),
                    policy: FieldPolicy::Copy {
                        source: def.name.clone(),
                    },
                    origin: RuleOrigin::Derived,
                });
            }
        }

        // Full coverage: an unresolved destination field is a configuration
        // error, not a silent default.
        for def in dest_shape.fields() {
            if !resolved.contains(&def.name) {
                return Err(MapError::UnresolvedField {
                    shape: dest_name.clone(),
                    field: def.name.clone(),
                });
            }
        }

        let profile = MappingProfile::new(source_name, dest_name, rules);
        debug!(
            source = %profile.source(),
            dest = %profile.dest(),
            declared = profile.declared_count(),
            derived = profile.derived_count(),
            "mapping profile built"
        );
        Ok(profile)
    }
}
