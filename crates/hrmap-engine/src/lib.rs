#![deny(unsafe_code)]

//! Rule-driven object-to-object transformation engine.
//!
//! Transformation rules are declared once at startup, one profile per
//! (source shape, destination shape) pair, and executed on demand against
//! loaded source records:
//!
//! - **rules**: the field-rule DSL ([`FieldPolicy`], [`FieldRule`],
//!   [`MappingProfile`])
//! - **builder**: [`ProfileBuilder`] with the one-time same-name convention
//!   pass and full-coverage validation
//! - **expr**: the derivation expression tree and its evaluator
//! - **registry**: [`MappingRegistry`], the frozen profile lookup
//! - **executor**: [`Executor`], which materializes destination records
//! - **context**: [`MapContext`], the injected evaluation clock

pub mod builder;
pub mod context;
pub mod error;
pub mod executor;
pub mod expr;
pub mod registry;
pub mod rules;

pub use builder::ProfileBuilder;
pub use context::MapContext;
pub use error::MapError;
pub use executor::Executor;
pub use expr::{EvalError, Expr};
pub use registry::MappingRegistry;
pub use rules::{ContextValue, FieldPolicy, FieldRule, MappingProfile, RuleOrigin};
