//! Person and dependent mapping profiles.

use hrmap_engine::{ContextValue, Expr, MapError, MappingRegistry, ProfileBuilder};
use hrmap_model::{ShapeCatalog, Value};

use crate::{active, full_name};

pub(crate) fn register(
    registry: &mut MappingRegistry,
    catalog: &ShapeCatalog,
) -> Result<(), MapError> {
    registry.register(
        ProfileBuilder::new("Person", "PersonListItem")
            .compute("full_name", full_name())
            .compute(
                "department_name",
                Expr::coalesce(Expr::path(["department", "name"]), Expr::text("")),
            )
            .build(catalog)?,
    )?;

    registry.register(
        ProfileBuilder::new("Person", "PersonDetail")
            .compute("full_name", full_name())
            .compute("age", Expr::years_since(["birth_date"]))
            .compute(
                "department_name",
                Expr::coalesce(Expr::path(["department", "name"]), Expr::text("")),
            )
            .compute(
                "active_dependent_count",
                Expr::count(["dependents"], Some(active())),
            )
            .build(catalog)?,
    )?;

    registry.register(ProfileBuilder::new("Dependent", "DependentListItem").build(catalog)?)?;

    registry.register(
        ProfileBuilder::new("PersonCreate", "Person")
            .constant("is_active", Value::Bool(true))
            .ignore("id")
            .ignore("department")
            .ignore("dependents")
            .ignore("created_at")
            .ignore("updated_at")
            .build(catalog)?,
    )?;

    registry.register(
        ProfileBuilder::new("PersonUpdate", "Person")
            .contextual("updated_at", ContextValue::Now)
            .ignore("id")
            .ignore("department")
            .ignore("dependents")
            .ignore("is_active")
            .ignore("created_at")
            .build(catalog)?,
    )?;

    Ok(())
}
