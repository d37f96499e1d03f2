//! Candidate mapping profiles.
//!
//! New candidates enter the pipeline as `"new"`; status transitions are
//! owned by the recruiting workflow, so update payloads never touch it.

use hrmap_engine::{ContextValue, Expr, MapError, MappingRegistry, ProfileBuilder};
use hrmap_model::{ShapeCatalog, Value};

use crate::{active, full_name};

pub(crate) fn register(
    registry: &mut MappingRegistry,
    catalog: &ShapeCatalog,
) -> Result<(), MapError> {
    registry.register(
        ProfileBuilder::new("Candidate", "CandidateListItem")
            .compute("full_name", full_name())
            .compute(
                "open_application_count",
                Expr::count(["applications"], Some(active())),
            )
            .build(catalog)?,
    )?;

    registry.register(
        ProfileBuilder::new("Candidate", "CandidateDetail")
            .compute("full_name", full_name())
            .collect(
                "applications",
                "applications",
                "JobApplicationListItem",
                Some(active()),
            )
            .build(catalog)?,
    )?;

    registry.register(
        ProfileBuilder::new("CandidateCreate", "Candidate")
            .constant("status", Value::text("new"))
            .constant("is_active", Value::Bool(true))
            .ignore("id")
            .ignore("applications")
            .ignore("created_at")
            .ignore("updated_at")
            .build(catalog)?,
    )?;

    registry.register(
        ProfileBuilder::new("CandidateUpdate", "Candidate")
            .contextual("updated_at", ContextValue::Now)
            .ignore("id")
            .ignore("status")
            .ignore("applications")
            .ignore("is_active")
            .ignore("created_at")
            .build(catalog)?,
    )?;

    Ok(())
}
