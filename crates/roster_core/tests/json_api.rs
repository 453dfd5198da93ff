use roster_core::db::open_db_in_memory;
use roster_core::db::seed::seed_department;
use roster_core::{
    insert_person_flat_json, insert_person_json, PersonRepository, PersonService, ServiceError,
    SqliteDepartmentRepository, SqlitePersonRepository,
};
use serde_json::{json, Value};

#[test]
fn insert_json_matches_documented_example() {
    let conn = open_db_in_memory().unwrap();
    seed_department(&conn, 1, "IT").unwrap();
    let service = PersonService::new(
        SqlitePersonRepository::try_new(&conn).unwrap(),
        SqliteDepartmentRepository::try_new(&conn).unwrap(),
    );

    let response =
        insert_person_json(&service, r#"{"name":"Ana","salary":3000.0,"department":{"id":1}}"#)
            .unwrap();
    let mut value: Value = serde_json::from_str(&response).unwrap();

    assert!(value["id"].is_i64());
    value["id"] = json!(0);
    assert_eq!(
        value,
        json!({
            "id": 0,
            "name": "Ana",
            "salary": 3000.0,
            "department": {"id": 1, "name": "IT"}
        })
    );
}

#[test]
fn malformed_bodies_are_validation_errors_without_writes() {
    let conn = open_db_in_memory().unwrap();
    seed_department(&conn, 1, "IT").unwrap();
    let service = PersonService::new(
        SqlitePersonRepository::try_new(&conn).unwrap(),
        SqliteDepartmentRepository::try_new(&conn).unwrap(),
    );

    for body in [
        r#"{"salary":3000.0,"department":{"id":1}}"#,
        r#"{"name":"Ana","department":{"id":1}}"#,
        r#"{"name":"Ana","salary":3000.0}"#,
        r#"{"name":"Ana","salary":3000.0,"department":{}}"#,
        r#"{"name":"Ana","salary":"lots","department":{"id":1}}"#,
        r#"{"name":"Ana","salary":3000.0,"department":{"id":"one"}}"#,
        "not json",
    ] {
        let err = insert_person_json(&service, body).unwrap_err();
        assert!(
            matches!(err, ServiceError::Validation(_)),
            "body {body} gave {err}"
        );
    }

    let persons = SqlitePersonRepository::try_new(&conn).unwrap();
    assert_eq!(persons.count_persons().unwrap(), 0);
}

#[test]
fn insert_json_with_unknown_department_is_not_found() {
    let conn = open_db_in_memory().unwrap();
    let service = PersonService::new(
        SqlitePersonRepository::try_new(&conn).unwrap(),
        SqliteDepartmentRepository::try_new(&conn).unwrap(),
    );

    let err = insert_person_json(
        &service,
        r#"{"name":"Ana","salary":3000.0,"department":{"id":1,"name":"IT"}}"#,
    )
    .unwrap_err();
    assert!(matches!(err, ServiceError::DepartmentNotFound(1)));
}

#[test]
fn insert_flat_json_uses_department_id_key() {
    let conn = open_db_in_memory().unwrap();
    seed_department(&conn, 4, "Ops").unwrap();
    let service = PersonService::new(
        SqlitePersonRepository::try_new(&conn).unwrap(),
        SqliteDepartmentRepository::try_new(&conn).unwrap(),
    );

    let response = insert_person_flat_json(
        &service,
        r#"{"name":"Dee","salary":250.25,"departmentId":4}"#,
    )
    .unwrap();
    let value: Value = serde_json::from_str(&response).unwrap();

    assert_eq!(value["name"], "Dee");
    assert_eq!(value["salary"], 250.25);
    assert_eq!(value["departmentId"], 4);
    assert!(value.get("department").is_none());
}
