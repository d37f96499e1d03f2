//! The field-rule DSL.
//!
//! A [`MappingProfile`] owns the ordered field rules for one
//! (source shape, destination shape) pair. Profiles are data: built once at
//! startup, serializable for inspection, immutable afterwards.

use serde::{Deserialize, Serialize};

use hrmap_model::{FieldName, ShapeName, Value};

use crate::expr::Expr;

/// One destination field's resolution policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldPolicy {
    /// Verbatim copy of a source field. An absent source value leaves the
    /// destination at its type default.
    Copy { source: FieldName },
    /// Derived from an expression over the source graph.
    Compute(Expr),
    /// The executor must not touch the field; a lower layer owns its value.
    Ignore,
    /// Fixed literal.
    Constant(Value),
    /// Context-supplied value resolved at execution time.
    Contextual(ContextValue),
    /// Element-wise transform of a collection field through the registry,
    /// after applying the filter predicate to each element.
    Collect {
        source: FieldName,
        element_shape: ShapeName,
        filter: Option<Expr>,
    },
}

impl FieldPolicy {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Copy { .. } => "Copy",
            Self::Compute(_) => "Compute",
            Self::Ignore => "Ignore",
            Self::Constant(_) => "Constant",
            Self::Contextual(_) => "Contextual",
            Self::Collect { .. } => "Collect",
        }
    }
}

/// Values the execution context supplies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContextValue {
    /// The evaluation-time timestamp.
    Now,
}

/// Origin of a field rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RuleOrigin {
    /// Explicit in the profile declaration.
    #[default]
    Declared,
    /// Generated by the same-name convention pass at build time.
    Derived,
}

/// A single destination field rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldRule {
    pub target: FieldName,
    pub policy: FieldPolicy,
    pub origin: RuleOrigin,
}

/// The frozen rule set for one (source, destination) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappingProfile {
    source: ShapeName,
    dest: ShapeName,
    rules: Vec<FieldRule>,
}

impl MappingProfile {
    pub(crate) fn new(source: ShapeName, dest: ShapeName, rules: Vec<FieldRule>) -> Self {
        Self {
            source,
            dest,
            rules,
        }
    }

    pub fn source(&self) -> &ShapeName {
        &self.source
    }

    pub fn dest(&self) -> &ShapeName {
        &self.dest
    }

    pub fn rules(&self) -> &[FieldRule] {
        &self.rules
    }

    pub fn rule(&self, target: &str) -> Option<&FieldRule> {
        self.rules.iter().find(|rule| rule.target.as_str() == target)
    }

    /// Rules added by the convention pass rather than declared explicitly.
    pub fn derived_count(&self) -> usize {
        self.rules
            .iter()
            .filter(|rule| rule.origin == RuleOrigin::Derived)
            .count()
    }

    pub fn declared_count(&self) -> usize {
        self.rules.len() - self.derived_count()
    }
}
