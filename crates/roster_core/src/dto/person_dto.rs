use super::DepartmentDto;
use crate::model::department::DepartmentId;
use crate::model::person::{Person, PersonId};
use serde::{Deserialize, Serialize};

/// Flattened person view: scalar fields plus the raw department id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PersonId>,
    pub name: String,
    pub salary: f64,
    #[serde(rename = "departmentId")]
    pub department_id: DepartmentId,
}

impl From<&Person> for PersonDto {
    fn from(person: &Person) -> Self {
        Self {
            id: Some(person.id),
            name: person.name.clone(),
            salary: person.salary,
            department_id: person.department.id(),
        }
    }
}

/// Nested person view embedding the department's id and name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonDepartmentDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PersonId>,
    pub name: String,
    pub salary: f64,
    pub department: DepartmentDto,
}

impl PersonDepartmentDto {
    /// Builds an insert request referencing a department by id only.
    pub fn request(name: impl Into<String>, salary: f64, department_id: DepartmentId) -> Self {
        Self {
            id: None,
            name: name.into(),
            salary,
            department: DepartmentDto::reference(department_id),
        }
    }
}

impl From<&Person> for PersonDepartmentDto {
    fn from(person: &Person) -> Self {
        Self {
            id: Some(person.id),
            name: person.name.clone(),
            salary: person.salary,
            department: DepartmentDto::from(person),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DepartmentDto, PersonDepartmentDto, PersonDto};
    use crate::model::department::Department;
    use crate::model::person::Person;
    use serde_json::json;

    fn stored_person() -> Person {
        Person {
            id: 7,
            name: "Ana".to_string(),
            salary: 3000.0,
            department: Department::from_storage(1, "IT".to_string()),
        }
    }

    #[test]
    fn nested_view_copies_stored_department() {
        let dto = PersonDepartmentDto::from(&stored_person());
        assert_eq!(
            serde_json::to_value(&dto).unwrap(),
            json!({
                "id": 7,
                "name": "Ana",
                "salary": 3000.0,
                "department": {"id": 1, "name": "IT"}
            })
        );
    }

    #[test]
    fn flattened_view_uses_camel_case_department_id() {
        let dto = PersonDto::from(&stored_person());
        assert_eq!(
            serde_json::to_value(&dto).unwrap(),
            json!({"id": 7, "name": "Ana", "salary": 3000.0, "departmentId": 1})
        );
    }

    #[test]
    fn department_view_of_person_uses_stored_department() {
        let dto = DepartmentDto::from(&stored_person());
        assert_eq!(
            dto,
            DepartmentDto {
                id: 1,
                name: Some("IT".to_string())
            }
        );
    }

    #[test]
    fn request_without_ids_omits_them_on_output() {
        let dto = PersonDepartmentDto::request("Bob", 10.0, 2);
        assert_eq!(
            serde_json::to_value(&dto).unwrap(),
            json!({"name": "Bob", "salary": 10.0, "department": {"id": 2}})
        );
    }

    #[test]
    fn request_rejects_missing_department_id() {
        let body = json!({"name": "Ana", "salary": 1.0, "department": {"name": "IT"}});
        assert!(serde_json::from_value::<PersonDepartmentDto>(body).is_err());
    }
}
