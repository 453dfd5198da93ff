//! Person repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Persist new person rows linked to an existing department.
//! - Read persons back joined with their department's stored fields.
//!
//! # Invariants
//! - Write paths call `NewPerson::validate()` before SQL mutations.
//! - Identifiers come from SQLite `AUTOINCREMENT` and are never reused.
//! - A foreign-key violation surfaces as `RepoError::MissingDepartment`.

use super::department_repo::parse_department;
use super::schema::{ensure_connection_ready, DEPARTMENTS_TABLE, PERSONS_TABLE};
use super::{RepoError, RepoResult};
use crate::model::person::{NewPerson, Person, PersonId};
use rusqlite::{ffi, params, Connection, ErrorCode, Row};

const PERSON_SELECT_SQL: &str = "SELECT
    p.id AS id,
    p.name AS name,
    p.salary AS salary,
    d.id AS department_id,
    d.name AS department_name
FROM persons p
JOIN departments d ON d.id = p.department_id";

/// Repository interface for person persistence.
pub trait PersonRepository {
    /// Inserts one person and returns it with the generated id.
    fn create_person(&self, person: &NewPerson) -> RepoResult<Person>;
    /// Loads one person joined with its department.
    fn get_person(&self, id: PersonId) -> RepoResult<Option<Person>>;
    /// Lists all persons ordered by id.
    fn list_persons(&self) -> RepoResult<Vec<Person>>;
    /// Returns the number of stored persons.
    fn count_persons(&self) -> RepoResult<u64>;
}

/// SQLite-backed person repository.
pub struct SqlitePersonRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePersonRepository<'conn> {
    /// Creates repository from migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, &[DEPARTMENTS_TABLE, PERSONS_TABLE])?;
        Ok(Self { conn })
    }
}

impl PersonRepository for SqlitePersonRepository<'_> {
    fn create_person(&self, person: &NewPerson) -> RepoResult<Person> {
        person.validate()?;

        let department_id = person.department.id();
        self.conn
            .execute(
                "INSERT INTO persons (name, salary, department_id) VALUES (?1, ?2, ?3);",
                params![person.name.as_str(), person.salary, department_id],
            )
            .map_err(|err| {
                if is_foreign_key_violation(&err) {
                    RepoError::MissingDepartment(department_id)
                } else {
                    RepoError::from(err)
                }
            })?;

        Ok(Person::from_new(self.conn.last_insert_rowid(), person))
    }

    fn get_person(&self, id: PersonId) -> RepoResult<Option<Person>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PERSON_SELECT_SQL} WHERE p.id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_person_row(row)?));
        }
        Ok(None)
    }

    fn list_persons(&self) -> RepoResult<Vec<Person>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PERSON_SELECT_SQL} ORDER BY p.id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut persons = Vec::new();
        while let Some(row) = rows.next()? {
            persons.push(parse_person_row(row)?);
        }
        Ok(persons)
    }

    fn count_persons(&self) -> RepoResult<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM persons;", [], |row| row.get(0))?;
        u64::try_from(count)
            .map_err(|_| RepoError::InvalidData(format!("negative person count `{count}`")))
    }
}

fn parse_person_row(row: &Row<'_>) -> RepoResult<Person> {
    let department = parse_department(row.get("department_id")?, row.get("department_name")?)?;
    let person = Person {
        id: row.get("id")?,
        name: row.get("name")?,
        salary: row.get("salary")?,
        department,
    };
    person.validate().map_err(|err| {
        RepoError::InvalidData(format!("person {} failed validation: {err}", person.id))
    })?;
    Ok(person)
}

fn is_foreign_key_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(inner, _)
            if inner.code == ErrorCode::ConstraintViolation
                && inner.extended_code == ffi::SQLITE_CONSTRAINT_FOREIGNKEY
    )
}
