//! Leave request mapping profiles.
//!
//! New requests start `"pending"`. The day span is inclusive of both
//! endpoints, matching how leave balances are debited.

use hrmap_engine::{ContextValue, Expr, MapError, MappingRegistry, ProfileBuilder};
use hrmap_model::{ShapeCatalog, Value};

use crate::related_name;

pub(crate) fn register(
    registry: &mut MappingRegistry,
    catalog: &ShapeCatalog,
) -> Result<(), MapError> {
    registry.register(
        ProfileBuilder::new("Leave", "LeaveListItem")
            .compute("person_name", related_name("person"))
            .build(catalog)?,
    )?;

    registry.register(
        ProfileBuilder::new("Leave", "LeaveDetail")
            .compute("person_name", related_name("person"))
            .compute(
                "duration_days",
                Expr::days_between(["start_date"], ["end_date"]),
            )
            .build(catalog)?,
    )?;

    registry.register(
        ProfileBuilder::new("LeaveCreate", "Leave")
            .constant("status", Value::text("pending"))
            .constant("is_active", Value::Bool(true))
            .ignore("id")
            .ignore("person")
            .ignore("created_at")
            .ignore("updated_at")
            .build(catalog)?,
    )?;

    registry.register(
        ProfileBuilder::new("LeaveUpdate", "Leave")
            .contextual("updated_at", ContextValue::Now)
            .ignore("id")
            .ignore("person")
            .ignore("status")
            .ignore("is_active")
            .ignore("created_at")
            .build(catalog)?,
    )?;

    Ok(())
}
