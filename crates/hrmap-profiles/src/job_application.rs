//! Job application and document mapping profiles.
//!
//! A freshly created application is `"submitted"` and stamped with the
//! evaluation-time instant; the candidate link and uploaded documents are
//! attached by the persistence layer.

use hrmap_engine::{ContextValue, Expr, MapError, MappingRegistry, ProfileBuilder};
use hrmap_model::{ShapeCatalog, Value};

use crate::{active, related_name};

pub(crate) fn register(
    registry: &mut MappingRegistry,
    catalog: &ShapeCatalog,
) -> Result<(), MapError> {
    registry.register(
        ProfileBuilder::new("JobApplication", "JobApplicationListItem")
            .compute("candidate_name", related_name("candidate"))
            .build(catalog)?,
    )?;

    registry.register(
        ProfileBuilder::new("JobApplication", "JobApplicationDetail")
            .compute("candidate_name", related_name("candidate"))
            .compute(
                "document_count",
                Expr::count(["documents"], Some(active())),
            )
            .collect(
                "documents",
                "documents",
                "ApplicationDocumentListItem",
                Some(active()),
            )
            .build(catalog)?,
    )?;

    registry.register(
        ProfileBuilder::new("ApplicationDocument", "ApplicationDocumentListItem")
            .build(catalog)?,
    )?;

    registry.register(
        ProfileBuilder::new("JobApplicationCreate", "JobApplication")
            .constant("status", Value::text("submitted"))
            .constant("is_active", Value::Bool(true))
            .contextual("applied_at", ContextValue::Now)
            .ignore("id")
            .ignore("candidate")
            .ignore("documents")
            .ignore("created_at")
            .ignore("updated_at")
            .build(catalog)?,
    )?;

    registry.register(
        ProfileBuilder::new("JobApplicationUpdate", "JobApplication")
            .contextual("updated_at", ContextValue::Now)
            .ignore("id")
            .ignore("candidate")
            .ignore("applied_at")
            .ignore("documents")
            .ignore("is_active")
            .ignore("created_at")
            .build(catalog)?,
    )?;

    Ok(())
}
