use std::collections::BTreeSet;

use chrono::{NaiveDate, TimeZone, Utc};

use hrmap_engine::{MapContext, MapError};
use hrmap_model::{FieldName, Record, ShapeName, Value};
use hrmap_profiles::TransferMappings;

fn field(name: &str) -> FieldName {
    FieldName::new(name).unwrap()
}

fn shape(name: &str) -> ShapeName {
    ShapeName::new(name).unwrap()
}

fn ctx() -> MapContext {
    MapContext::at(Utc.with_ymd_and_hms(2024, 6, 15, 9, 30, 0).unwrap())
}

fn date(year: i32, month: u32, day: u32) -> Value {
    Value::Date(NaiveDate::from_ymd_opt(year, month, day).unwrap())
}

fn dependent(id: i64, name: &str, active: bool) -> Value {
    Value::Record(
        Record::new(shape("Dependent"))
            .with(field("id"), Value::Int(id))
            .with(field("first_name"), Value::text(name))
            .with(field("last_name"), Value::text("Lovelace"))
            .with(field("is_active"), Value::Bool(active)),
    )
}

fn person(id: i64, first: &str, last: &str) -> Record {
    Record::new(shape("Person"))
        .with(field("id"), Value::Int(id))
        .with(field("first_name"), Value::text(first))
        .with(field("last_name"), Value::text(last))
        .with(field("email"), Value::text("person@example.org"))
        .with(field("is_active"), Value::Bool(true))
}

fn ada() -> Record {
    let department = Record::new(shape("Department"))
        .with(field("id"), Value::Int(30))
        .with(field("name"), Value::text("Engineering"));
    person(1, "Ada", "Lovelace")
        .with(field("birth_date"), date(1815, 12, 10))
        .with(field("hire_date"), date(2020, 2, 1))
        .with(field("department"), Value::Record(department))
        .with(
            field("dependents"),
            Value::List(vec![
                dependent(10, "Byron", true),
                dependent(11, "Annabella", false),
                dependent(12, "Ralph", true),
            ]),
        )
}

#[test]
fn registry_builds_and_covers_every_destination_field_exactly_once() {
    let mappings = TransferMappings::build().unwrap();
    assert_eq!(mappings.registry().len(), 22);

    for profile in mappings.registry().iter() {
        let dest = mappings
            .catalog()
            .get(profile.dest().as_str())
            .unwrap_or_else(|| panic!("missing shape {}", profile.dest()));

        let mut targets = BTreeSet::new();
        for rule in profile.rules() {
            assert!(
                targets.insert(rule.target.clone()),
                "field {} of {} resolved twice",
                rule.target,
                profile.dest()
            );
        }
        for def in dest.fields() {
            assert!(
                targets.contains(&def.name),
                "field {} of {} has no rule",
                def.name,
                profile.dest()
            );
        }
        assert_eq!(targets.len(), dest.fields().len());
    }
}

#[test]
fn person_list_item_concatenates_name_and_reads_department() {
    let mappings = TransferMappings::build().unwrap();
    let executor = mappings.executor_at(ctx());

    let item = executor
        .transform(&ada(), &shape("PersonListItem"))
        .unwrap();
    assert_eq!(item.get("full_name"), &Value::text("Ada Lovelace"));
    assert_eq!(item.get("department_name"), &Value::text("Engineering"));
    assert_eq!(item.get("id"), &Value::Int(1));
}

#[test]
fn person_without_department_gets_empty_department_name() {
    let mappings = TransferMappings::build().unwrap();
    let executor = mappings.executor_at(ctx());

    let item = executor
        .transform(&person(2, "Grace", "Hopper"), &shape("PersonListItem"))
        .unwrap();
    assert_eq!(item.get("department_name"), &Value::text(""));
}

#[test]
fn person_detail_computes_age_and_active_dependent_count() {
    let mappings = TransferMappings::build().unwrap();
    let executor = mappings.executor_at(ctx());

    let detail = executor.transform(&ada(), &shape("PersonDetail")).unwrap();
    // Calendar-year subtraction: 2024 - 1815, regardless of the December
    // birthday not having occurred yet.
    assert_eq!(detail.get("age"), &Value::Int(209));
    assert_eq!(detail.get("active_dependent_count"), &Value::Int(2));
    assert_eq!(detail.get("full_name"), &Value::text("Ada Lovelace"));
}

#[test]
fn person_detail_without_birth_date_leaves_age_unset() {
    let mappings = TransferMappings::build().unwrap();
    let executor = mappings.executor_at(ctx());

    let detail = executor
        .transform(&person(3, "Alan", "Turing"), &shape("PersonDetail"))
        .unwrap();
    assert!(detail.get("age").is_missing());
    assert_eq!(detail.get("active_dependent_count"), &Value::Int(0));
}

#[test]
fn department_detail_filters_sub_departments_in_order() {
    let mappings = TransferMappings::build().unwrap();
    let executor = mappings.executor_at(ctx());

    let sub = |id: i64, name: &str, active: bool| {
        Value::Record(
            Record::new(shape("Department"))
                .with(field("id"), Value::Int(id))
                .with(field("name"), Value::text(name))
                .with(field("code"), Value::text(name))
                .with(field("is_active"), Value::Bool(active)),
        )
    };
    let manager = person(9, "Jean", "Bartik");
    let root = Record::new(shape("Department"))
        .with(field("id"), Value::Int(100))
        .with(field("name"), Value::text("Research"))
        .with(field("code"), Value::text("RES"))
        .with(field("manager"), Value::Record(manager))
        .with(
            field("sub_departments"),
            Value::List(vec![
                sub(101, "Compilers", true),
                sub(102, "Archive", false),
                sub(103, "Runtime", true),
            ]),
        )
        .with(field("is_active"), Value::Bool(true));

    let detail = executor
        .transform(&root, &shape("DepartmentDetail"))
        .unwrap();
    assert_eq!(detail.get("manager_name"), &Value::text("Jean Bartik"));
    assert_eq!(detail.get("parent_name"), &Value::text(""));

    let subs = detail.get("sub_departments").as_list().unwrap();
    let names: Vec<&str> = subs
        .iter()
        .map(|value| value.as_record().unwrap().get("name").as_text().unwrap())
        .collect();
    assert_eq!(names, vec!["Compilers", "Runtime"]);
    assert_eq!(subs[0].as_record().unwrap().shape().as_str(), "DepartmentListItem");
}

#[test]
fn candidate_detail_projects_active_applications() {
    let mappings = TransferMappings::build().unwrap();
    let executor = mappings.executor_at(ctx());

    let application = |id: i64, title: &str, active: bool| {
        Value::Record(
            Record::new(shape("JobApplication"))
                .with(field("id"), Value::Int(id))
                .with(field("position_title"), Value::text(title))
                .with(field("status"), Value::text("screening"))
                .with(field("is_active"), Value::Bool(active)),
        )
    };
    let candidate = Record::new(shape("Candidate"))
        .with(field("id"), Value::Int(5))
        .with(field("first_name"), Value::text("Radia"))
        .with(field("last_name"), Value::text("Perlman"))
        .with(field("email"), Value::text("radia@example.org"))
        .with(field("status"), Value::text("interviewing"))
        .with(
            field("applications"),
            Value::List(vec![
                application(51, "Network Engineer", true),
                application(52, "Intern", false),
            ]),
        )
        .with(field("is_active"), Value::Bool(true));

    let list_item = executor
        .transform(&candidate, &shape("CandidateListItem"))
        .unwrap();
    assert_eq!(list_item.get("open_application_count"), &Value::Int(1));

    let detail = executor
        .transform(&candidate, &shape("CandidateDetail"))
        .unwrap();
    let applications = detail.get("applications").as_list().unwrap();
    assert_eq!(applications.len(), 1);
    let first = applications[0].as_record().unwrap();
    assert_eq!(first.shape().as_str(), "JobApplicationListItem");
    assert_eq!(first.get("position_title"), &Value::text("Network Engineer"));
    // The application has no candidate link loaded; the guarded join
    // degrades to an empty name.
    assert_eq!(first.get("candidate_name"), &Value::text(""));
}

#[test]
fn job_application_detail_counts_and_projects_documents() {
    let mappings = TransferMappings::build().unwrap();
    let executor = mappings.executor_at(ctx());

    let document = |id: i64, name: &str, active: bool| {
        Value::Record(
            Record::new(shape("ApplicationDocument"))
                .with(field("id"), Value::Int(id))
                .with(field("file_name"), Value::text(name))
                .with(field("content_type"), Value::text("application/pdf"))
                .with(field("is_active"), Value::Bool(active)),
        )
    };
    let application = Record::new(shape("JobApplication"))
        .with(field("id"), Value::Int(51))
        .with(
            field("candidate"),
            Value::Record(
                Record::new(shape("Candidate"))
                    .with(field("first_name"), Value::text("Radia"))
                    .with(field("last_name"), Value::text("Perlman")),
            ),
        )
        .with(field("position_title"), Value::text("Network Engineer"))
        .with(field("status"), Value::text("screening"))
        .with(
            field("documents"),
            Value::List(vec![
                document(501, "resume.pdf", true),
                document(502, "old-resume.pdf", false),
                document(503, "cover-letter.pdf", true),
            ]),
        )
        .with(field("is_active"), Value::Bool(true));

    let detail = executor
        .transform(&application, &shape("JobApplicationDetail"))
        .unwrap();
    assert_eq!(detail.get("candidate_name"), &Value::text("Radia Perlman"));
    assert_eq!(detail.get("document_count"), &Value::Int(2));

    let documents = detail.get("documents").as_list().unwrap();
    let names: Vec<&str> = documents
        .iter()
        .map(|value| value.as_record().unwrap().get("file_name").as_text().unwrap())
        .collect();
    assert_eq!(names, vec!["resume.pdf", "cover-letter.pdf"]);
}

#[test]
fn create_mappings_set_active_flag_and_leave_audit_fields_unset() {
    let mappings = TransferMappings::build().unwrap();
    let executor = mappings.executor_at(ctx());

    let payload = Record::new(shape("PersonCreate"))
        .with(field("first_name"), Value::text("Ada"))
        .with(field("last_name"), Value::text("Lovelace"))
        .with(field("email"), Value::text("ada@example.org"));

    let entity = executor.transform(&payload, &shape("Person")).unwrap();
    assert_eq!(entity.get("is_active"), &Value::Bool(true));
    assert_eq!(entity.get("id"), &Value::Int(0));
    assert!(entity.get("created_at").is_missing());
    assert!(entity.get("updated_at").is_missing());
    assert_eq!(entity.get("first_name"), &Value::text("Ada"));
}

#[test]
fn job_application_create_gets_initial_status_and_submission_instant() {
    let mappings = TransferMappings::build().unwrap();
    let ctx = ctx();
    let executor = mappings.executor_at(ctx);

    let payload = Record::new(shape("JobApplicationCreate"))
        .with(field("position_title"), Value::text("Network Engineer"));

    let entity = executor
        .transform(&payload, &shape("JobApplication"))
        .unwrap();
    assert_eq!(entity.get("status"), &Value::text("submitted"));
    assert_eq!(entity.get("applied_at"), &Value::Timestamp(ctx.now));
    assert_eq!(entity.get("is_active"), &Value::Bool(true));
    assert!(entity.get("created_at").is_missing());
}

#[test]
fn leave_create_starts_pending() {
    let mappings = TransferMappings::build().unwrap();
    let executor = mappings.executor_at(ctx());

    let payload = Record::new(shape("LeaveCreate"))
        .with(field("leave_type"), Value::text("vacation"))
        .with(field("start_date"), date(2024, 7, 1))
        .with(field("end_date"), date(2024, 7, 5));

    let entity = executor.transform(&payload, &shape("Leave")).unwrap();
    assert_eq!(entity.get("status"), &Value::text("pending"));
    assert_eq!(entity.get("is_active"), &Value::Bool(true));
    assert_eq!(entity.get("start_date"), &date(2024, 7, 1));
}

#[test]
fn update_mappings_stamp_updated_at_and_leave_created_at_alone() {
    let mappings = TransferMappings::build().unwrap();
    let ctx = ctx();
    let executor = mappings.executor_at(ctx);

    let payload = Record::new(shape("PersonUpdate"))
        .with(field("first_name"), Value::text("Ada"))
        .with(field("last_name"), Value::text("King"))
        .with(field("email"), Value::text("ada@example.org"));

    let entity = executor.transform(&payload, &shape("Person")).unwrap();
    assert_eq!(entity.get("updated_at"), &Value::Timestamp(ctx.now));
    assert!(entity.get("created_at").is_missing());
    assert_eq!(entity.get("last_name"), &Value::text("King"));
}

#[test]
fn leave_detail_reports_inclusive_duration() {
    let mappings = TransferMappings::build().unwrap();
    let executor = mappings.executor_at(ctx());

    let leave = Record::new(shape("Leave"))
        .with(field("id"), Value::Int(70))
        .with(field("person"), Value::Record(person(1, "Ada", "Lovelace")))
        .with(field("leave_type"), Value::text("vacation"))
        .with(field("start_date"), date(2024, 7, 1))
        .with(field("end_date"), date(2024, 7, 5))
        .with(field("status"), Value::text("approved"))
        .with(field("is_active"), Value::Bool(true));

    let detail = executor.transform(&leave, &shape("LeaveDetail")).unwrap();
    assert_eq!(detail.get("duration_days"), &Value::Int(5));
    assert_eq!(detail.get("person_name"), &Value::text("Ada Lovelace"));
}

#[test]
fn unregistered_pair_is_a_hard_error() {
    let mappings = TransferMappings::build().unwrap();
    let executor = mappings.executor_at(ctx());

    let result = executor.transform(&ada(), &shape("CandidateListItem"));
    assert!(matches!(result, Err(MapError::UnregisteredMapping { .. })));
}

#[test]
fn transform_all_preserves_input_order() {
    let mappings = TransferMappings::build().unwrap();
    let executor = mappings.executor_at(ctx());

    let people = vec![person(1, "Ada", "Lovelace"), person(2, "Grace", "Hopper")];
    let items = executor
        .transform_all(&people, &shape("PersonListItem"))
        .unwrap();
    assert_eq!(items[0].get("full_name"), &Value::text("Ada Lovelace"));
    assert_eq!(items[1].get("full_name"), &Value::text("Grace Hopper"));
}
