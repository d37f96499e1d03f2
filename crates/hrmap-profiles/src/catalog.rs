//! The canonical shape catalog: persistence entities and the transfer
//! shapes exposed at the API boundary.
//!
//! Related objects (`department`, `manager`, `candidate`, `person`) are
//! nullable navigation fields; collections default to empty. `id`,
//! `created_at` and `updated_at` are owned by the persistence layer and
//! only ever appear as ignore targets in write profiles.

use hrmap_model::{FieldType, ModelError, Shape, ShapeCatalog};

pub fn build_catalog() -> Result<ShapeCatalog, ModelError> {
    let mut catalog = ShapeCatalog::new();
    for shape in person_shapes()? {
        catalog.insert(shape)?;
    }
    for shape in department_shapes()? {
        catalog.insert(shape)?;
    }
    for shape in candidate_shapes()? {
        catalog.insert(shape)?;
    }
    for shape in job_application_shapes()? {
        catalog.insert(shape)?;
    }
    for shape in leave_shapes()? {
        catalog.insert(shape)?;
    }
    Ok(catalog)
}

fn person_shapes() -> Result<Vec<Shape>, ModelError> {
    Ok(vec![
        Shape::builder("Person")
            .field("id", FieldType::Int)
            .field("first_name", FieldType::Text)
            .field("last_name", FieldType::Text)
            .field("email", FieldType::Text)
            .optional("phone", FieldType::Text)
            .optional("birth_date", FieldType::Date)
            .optional("hire_date", FieldType::Date)
            .optional("department", FieldType::Record)
            .field("dependents", FieldType::List)
            .field("is_active", FieldType::Bool)
            .field("created_at", FieldType::Timestamp)
            .field("updated_at", FieldType::Timestamp)
            .build()?,
        Shape::builder("Dependent")
            .field("id", FieldType::Int)
            .field("first_name", FieldType::Text)
            .field("last_name", FieldType::Text)
            .optional("birth_date", FieldType::Date)
            .field("is_active", FieldType::Bool)
            .build()?,
        Shape::builder("PersonListItem")
            .field("id", FieldType::Int)
            .field("full_name", FieldType::Text)
            .field("email", FieldType::Text)
            .field("department_name", FieldType::Text)
            .field("is_active", FieldType::Bool)
            .build()?,
        Shape::builder("PersonDetail")
            .field("id", FieldType::Int)
            .field("first_name", FieldType::Text)
            .field("last_name", FieldType::Text)
            .field("full_name", FieldType::Text)
            .field("email", FieldType::Text)
            .optional("phone", FieldType::Text)
            .optional("birth_date", FieldType::Date)
            .optional("age", FieldType::Int)
            .optional("hire_date", FieldType::Date)
            .field("department_name", FieldType::Text)
            .field("active_dependent_count", FieldType::Int)
            .field("is_active", FieldType::Bool)
            .build()?,
        Shape::builder("DependentListItem")
            .field("id", FieldType::Int)
            .field("first_name", FieldType::Text)
            .field("last_name", FieldType::Text)
            .build()?,
        Shape::builder("PersonCreate")
            .field("first_name", FieldType::Text)
            .field("last_name", FieldType::Text)
            .field("email", FieldType::Text)
            .optional("phone", FieldType::Text)
            .optional("birth_date", FieldType::Date)
            .optional("hire_date", FieldType::Date)
            .build()?,
        Shape::builder("PersonUpdate")
            .field("first_name", FieldType::Text)
            .field("last_name", FieldType::Text)
            .field("email", FieldType::Text)
            .optional("phone", FieldType::Text)
            .optional("birth_date", FieldType::Date)
            .optional("hire_date", FieldType::Date)
            .build()?,
    ])
}

fn department_shapes() -> Result<Vec<Shape>, ModelError> {
    Ok(vec![
        Shape::builder("Department")
            .field("id", FieldType::Int)
            .field("name", FieldType::Text)
            .field("code", FieldType::Text)
            .optional("manager", FieldType::Record)
            .optional("parent", FieldType::Record)
            .field("sub_departments", FieldType::List)
            .field("employees", FieldType::List)
            .field("is_active", FieldType::Bool)
            .field("created_at", FieldType::Timestamp)
            .field("updated_at", FieldType::Timestamp)
            .build()?,
        Shape::builder("DepartmentListItem")
            .field("id", FieldType::Int)
            .field("name", FieldType::Text)
            .field("code", FieldType::Text)
            .field("manager_name", FieldType::Text)
            .field("active_employee_count", FieldType::Int)
            .field("is_active", FieldType::Bool)
            .build()?,
        Shape::builder("DepartmentDetail")
            .field("id", FieldType::Int)
            .field("name", FieldType::Text)
            .field("code", FieldType::Text)
            .field("manager_name", FieldType::Text)
            .field("parent_name", FieldType::Text)
            .field("active_employee_count", FieldType::Int)
            .field("sub_departments", FieldType::List)
            .field("is_active", FieldType::Bool)
            .build()?,
        Shape::builder("DepartmentCreate")
            .field("name", FieldType::Text)
            .field("code", FieldType::Text)
            .build()?,
        Shape::builder("DepartmentUpdate")
            .field("name", FieldType::Text)
            .field("code", FieldType::Text)
            .build()?,
    ])
}

fn candidate_shapes() -> Result<Vec<Shape>, ModelError> {
    Ok(vec![
        Shape::builder("Candidate")
            .field("id", FieldType::Int)
            .field("first_name", FieldType::Text)
            .field("last_name", FieldType::Text)
            .field("email", FieldType::Text)
            .optional("phone", FieldType::Text)
            .optional("source", FieldType::Text)
            .field("status", FieldType::Text)
            .field("applications", FieldType::List)
            .field("is_active", FieldType::Bool)
            .field("created_at", FieldType::Timestamp)
            .field("updated_at", FieldType::Timestamp)
            .build()?,
        Shape::builder("CandidateListItem")
            .field("id", FieldType::Int)
            .field("full_name", FieldType::Text)
            .field("email", FieldType::Text)
            .field("status", FieldType::Text)
            .field("open_application_count", FieldType::Int)
            .field("is_active", FieldType::Bool)
            .build()?,
        Shape::builder("CandidateDetail")
            .field("id", FieldType::Int)
            .field("first_name", FieldType::Text)
            .field("last_name", FieldType::Text)
            .field("full_name", FieldType::Text)
            .field("email", FieldType::Text)
            .optional("phone", FieldType::Text)
            .optional("source", FieldType::Text)
            .field("status", FieldType::Text)
            .field("applications", FieldType::List)
            .field("is_active", FieldType::Bool)
            .build()?,
        Shape::builder("CandidateCreate")
            .field("first_name", FieldType::Text)
            .field("last_name", FieldType::Text)
            .field("email", FieldType::Text)
            .optional("phone", FieldType::Text)
            .optional("source", FieldType::Text)
            .build()?,
        Shape::builder("CandidateUpdate")
            .field("first_name", FieldType::Text)
            .field("last_name", FieldType::Text)
            .field("email", FieldType::Text)
            .optional("phone", FieldType::Text)
            .optional("source", FieldType::Text)
            .build()?,
    ])
}

fn job_application_shapes() -> Result<Vec<Shape>, ModelError> {
    Ok(vec![
        Shape::builder("JobApplication")
            .field("id", FieldType::Int)
            .optional("candidate", FieldType::Record)
            .field("position_title", FieldType::Text)
            .field("status", FieldType::Text)
            .optional("applied_at", FieldType::Timestamp)
            .field("documents", FieldType::List)
            .field("is_active", FieldType::Bool)
            .field("created_at", FieldType::Timestamp)
            .field("updated_at", FieldType::Timestamp)
            .build()?,
        Shape::builder("ApplicationDocument")
            .field("id", FieldType::Int)
            .field("file_name", FieldType::Text)
            .field("content_type", FieldType::Text)
            .optional("uploaded_at", FieldType::Timestamp)
            .field("is_active", FieldType::Bool)
            .build()?,
        Shape::builder("JobApplicationListItem")
            .field("id", FieldType::Int)
            .field("candidate_name", FieldType::Text)
            .field("position_title", FieldType::Text)
            .field("status", FieldType::Text)
            .optional("applied_at", FieldType::Timestamp)
            .build()?,
        Shape::builder("JobApplicationDetail")
            .field("id", FieldType::Int)
            .field("candidate_name", FieldType::Text)
            .field("position_title", FieldType::Text)
            .field("status", FieldType::Text)
            .optional("applied_at", FieldType::Timestamp)
            .field("document_count", FieldType::Int)
            .field("documents", FieldType::List)
            .field("is_active", FieldType::Bool)
            .build()?,
        Shape::builder("ApplicationDocumentListItem")
            .field("id", FieldType::Int)
            .field("file_name", FieldType::Text)
            .field("content_type", FieldType::Text)
            .optional("uploaded_at", FieldType::Timestamp)
            .build()?,
        Shape::builder("JobApplicationCreate")
            .field("position_title", FieldType::Text)
            .build()?,
        Shape::builder("JobApplicationUpdate")
            .field("position_title", FieldType::Text)
            .field("status", FieldType::Text)
            .build()?,
    ])
}

fn leave_shapes() -> Result<Vec<Shape>, ModelError> {
    Ok(vec![
        Shape::builder("Leave")
            .field("id", FieldType::Int)
            .optional("person", FieldType::Record)
            .field("leave_type", FieldType::Text)
            .field("start_date", FieldType::Date)
            .field("end_date", FieldType::Date)
            .field("status", FieldType::Text)
            .optional("reason", FieldType::Text)
            .field("is_active", FieldType::Bool)
            .field("created_at", FieldType::Timestamp)
            .field("updated_at", FieldType::Timestamp)
            .build()?,
        Shape::builder("LeaveListItem")
            .field("id", FieldType::Int)
            .field("person_name", FieldType::Text)
            .field("leave_type", FieldType::Text)
            .field("start_date", FieldType::Date)
            .field("end_date", FieldType::Date)
            .field("status", FieldType::Text)
            .build()?,
        Shape::builder("LeaveDetail")
            .field("id", FieldType::Int)
            .field("person_name", FieldType::Text)
            .field("leave_type", FieldType::Text)
            .field("start_date", FieldType::Date)
            .field("end_date", FieldType::Date)
            .field("duration_days", FieldType::Int)
            .field("status", FieldType::Text)
            .optional("reason", FieldType::Text)
            .field("is_active", FieldType::Bool)
            .build()?,
        Shape::builder("LeaveCreate")
            .field("leave_type", FieldType::Text)
            .field("start_date", FieldType::Date)
            .field("end_date", FieldType::Date)
            .optional("reason", FieldType::Text)
            .build()?,
        Shape::builder("LeaveUpdate")
            .field("leave_type", FieldType::Text)
            .field("start_date", FieldType::Date)
            .field("end_date", FieldType::Date)
            .optional("reason", FieldType::Text)
            .build()?,
    ])
}
