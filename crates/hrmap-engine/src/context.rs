//! Execution context for transformations.

use chrono::{DateTime, Utc};

/// Runtime context handed to every transform call.
///
/// Holds the evaluation-time clock so context-derived values (and tests)
/// see one consistent instant per call.
#[derive(Debug, Clone, Copy)]
pub struct MapContext {
    pub now: DateTime<Utc>,
}

impl MapContext {
    /// A context pinned to the given instant.
    pub fn at(now: DateTime<Utc>) -> Self {
        Self { now }
    }

    /// A context reading the wall clock.
    pub fn current() -> Self {
        Self { now: Utc::now() }
    }
}

impl Default for MapContext {
    fn default() -> Self {
        Self::current()
    }
}
