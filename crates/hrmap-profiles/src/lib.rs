#![deny(unsafe_code)]

//! Entity-to-transfer-shape mapping configuration for the HR administration
//! system.
//!
//! One module per entity declares the read profiles (entity to
//! List/Detail items) and the write profiles (Create/Update payloads to
//! entity). [`TransferMappings::build`] assembles the canonical catalog and
//! registry; any configuration slip (duplicate pair, unresolved destination
//! field, unknown shape) aborts the build.

pub mod catalog;

mod candidate;
mod department;
mod job_application;
mod leave;
mod person;

use hrmap_engine::{Executor, Expr, MapContext, MapError, MappingRegistry};
use hrmap_model::ShapeCatalog;

/// The frozen mapping configuration: catalog plus registry.
#[derive(Debug, Clone)]
pub struct TransferMappings {
    catalog: ShapeCatalog,
    registry: MappingRegistry,
}

impl TransferMappings {
    /// Build and validate the full configuration. Intended to run once at
    /// startup; an error here is a configuration bug and should abort.
    pub fn build() -> Result<Self, MapError> {
        let catalog = catalog::build_catalog()?;
        let mut registry = MappingRegistry::new();
        person::register(&mut registry, &catalog)?;
        department::register(&mut registry, &catalog)?;
        candidate::register(&mut registry, &catalog)?;
        job_application::register(&mut registry, &catalog)?;
        leave::register(&mut registry, &catalog)?;
        Ok(Self { catalog, registry })
    }

    pub fn catalog(&self) -> &ShapeCatalog {
        &self.catalog
    }

    pub fn registry(&self) -> &MappingRegistry {
        &self.registry
    }

    /// An executor reading the wall clock.
    pub fn executor(&self) -> Executor<'_> {
        Executor::new(&self.registry, &self.catalog)
    }

    /// An executor pinned to the given context.
    pub fn executor_at(&self, ctx: MapContext) -> Executor<'_> {
        self.executor().with_context(ctx)
    }
}

/// `first_name` and `last_name` of the current record, space-joined.
pub(crate) fn full_name() -> Expr {
    Expr::join(
        " ",
        vec![Expr::field("first_name"), Expr::field("last_name")],
    )
}

/// Display name of a related person record; empty when the link is unset.
pub(crate) fn related_name(link: &str) -> Expr {
    Expr::join(
        " ",
        vec![
            Expr::path([link, "first_name"]),
            Expr::path([link, "last_name"]),
        ],
    )
}

/// The standard active-record filter used by collection projections.
pub(crate) fn active() -> Expr {
    Expr::field("is_active")
}
