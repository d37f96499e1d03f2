//! Department mapping profiles.

use hrmap_engine::{ContextValue, Expr, MapError, MappingRegistry, ProfileBuilder};
use hrmap_model::{ShapeCatalog, Value};

use crate::{active, related_name};

pub(crate) fn register(
    registry: &mut MappingRegistry,
    catalog: &ShapeCatalog,
) -> Result<(), MapError> {
    registry.register(
        ProfileBuilder::new("Department", "DepartmentListItem")
            .compute("manager_name", related_name("manager"))
            .compute(
                "active_employee_count",
                Expr::count(["employees"], Some(active())),
            )
            .build(catalog)?,
    )?;

    registry.register(
        ProfileBuilder::new("Department", "DepartmentDetail")
            .compute("manager_name", related_name("manager"))
            .compute(
                "parent_name",
                Expr::coalesce(Expr::path(["parent", "name"]), Expr::text("")),
            )
            .compute(
                "active_employee_count",
                Expr::count(["employees"], Some(active())),
            )
            .collect(
                "sub_departments",
                "sub_departments",
                "DepartmentListItem",
                Some(active()),
            )
            .build(catalog)?,
    )?;

    registry.register(
        ProfileBuilder::new("DepartmentCreate", "Department")
            .constant("is_active", Value::Bool(true))
            .ignore("id")
            .ignore("manager")
            .ignore("parent")
            .ignore("sub_departments")
            .ignore("employees")
            .ignore("created_at")
            .ignore("updated_at")
            .build(catalog)?,
    )?;

    registry.register(
        ProfileBuilder::new("DepartmentUpdate", "Department")
            .contextual("updated_at", ContextValue::Now)
            .ignore("id")
            .ignore("manager")
            .ignore("parent")
            .ignore("sub_departments")
            .ignore("employees")
            .ignore("is_active")
            .ignore("created_at")
            .build(catalog)?,
    )?;

    Ok(())
}
