//! In-memory employee directory
//!
//! Records are `{id, firstName, lastName, age}`. Names are trimmed, `age`
//! must be a non-negative integer, and no two employees may share the same
//! case-insensitive first and last name together with the same age.

use std::collections::HashMap;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info};

const DUPLICATE_ON_CREATE: &str = "Employee with same firstName, lastName and age already exists";
const DUPLICATE_ON_UPDATE: &str = "Another employee with same firstName, lastName and age exists";

/// A stored employee
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub age: i64,
}

/// Employee directory errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    /// One or more field validation failures, in field order
    #[error("{}", .0.join(", "))]
    Invalid(Vec<String>),

    #[error("{0}")]
    Duplicate(&'static str),

    #[error("Employee not found")]
    NotFound,
}

/// An `age` value as supplied by a client, before validation
#[derive(Debug, Clone, PartialEq)]
pub enum AgeInput {
    /// JSON number; fractional values are truncated
    Number(serde_json::Number),
    /// Text that must hold an integer, surrounding whitespace allowed
    Text(String),
    /// Anything else (null, booleans, arrays, objects)
    Invalid,
}

impl AgeInput {
    fn from_json(value: &Value) -> Self {
        match value {
            Value::Number(n) => AgeInput::Number(n.clone()),
            Value::String(s) => AgeInput::Text(s.clone()),
            _ => AgeInput::Invalid,
        }
    }

    /// The integer value, or `None` if there is no integer reading
    pub fn to_age(&self) -> Option<i64> {
        match self {
            AgeInput::Number(n) => n.as_i64().or_else(|| {
                n.as_f64()
                    .filter(|f| f.is_finite())
                    .map(f64::trunc)
                    .filter(|f| *f >= i64::MIN as f64 && *f <= i64::MAX as f64)
                    .map(|f| f as i64)
            }),
            AgeInput::Text(s) => s.trim().parse().ok(),
            AgeInput::Invalid => None,
        }
    }
}

/// Unvalidated employee fields
///
/// `None` means the client did not supply the field. On create that is the
/// same as an empty value; on update the stored value is kept.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeDraft {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub age: Option<AgeInput>,
}

impl EmployeeDraft {
    /// Read fields from a parsed JSON body
    ///
    /// A body that is not an object supplies no fields. A `null` or `false`
    /// name counts as absent; other non-string names use their JSON text.
    /// A present `age` key is always supplied, even when `null`.
    pub fn from_json(body: &Value) -> Self {
        let Some(object) = body.as_object() else {
            return Self::default();
        };

        Self {
            first_name: object.get("firstName").and_then(name_from_json),
            last_name: object.get("lastName").and_then(name_from_json),
            age: object.get("age").map(AgeInput::from_json),
        }
    }

    /// Read fields from form or query parameters
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        Self {
            first_name: params.get("firstName").cloned(),
            last_name: params.get("lastName").cloned(),
            age: params.get("age").cloned().map(AgeInput::Text),
        }
    }
}

fn name_from_json(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Collect validation messages for normalised fields
fn validate(first_name: &str, last_name: &str, age: Option<i64>) -> Vec<String> {
    let mut errors = Vec::new();
    if first_name.is_empty() {
        errors.push("firstName is required".to_string());
    }
    if last_name.is_empty() {
        errors.push("lastName is required".to_string());
    }
    if !matches!(age, Some(a) if a >= 0) {
        errors.push("age must be a non-negative integer".to_string());
    }
    errors
}

struct DirectoryInner {
    next_id: u64,
    employees: Vec<Employee>,
}

impl DirectoryInner {
    fn is_duplicate(&self, first_name: &str, last_name: &str, age: i64, except: Option<u64>) -> bool {
        let first_name = first_name.to_lowercase();
        let last_name = last_name.to_lowercase();
        self.employees.iter().any(|e| {
            Some(e.id) != except
                && e.age == age
                && e.first_name.to_lowercase() == first_name
                && e.last_name.to_lowercase() == last_name
        })
    }

    fn position(&self, id: u64) -> Result<usize, DirectoryError> {
        self.employees
            .iter()
            .position(|e| e.id == id)
            .ok_or(DirectoryError::NotFound)
    }
}

/// Lock-guarded employee list
///
/// Ids start at 1 and advance only on a successful create, so a deleted
/// id is never handed out again.
pub struct EmployeeDirectory {
    inner: Mutex<DirectoryInner>,
}

impl EmployeeDirectory {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(DirectoryInner {
                next_id: 1,
                employees: Vec::new(),
            }),
        }
    }

    /// All employees in insertion order
    pub fn list(&self) -> Vec<Employee> {
        self.inner.lock().employees.clone()
    }

    pub fn get(&self, id: u64) -> Option<Employee> {
        let inner = self.inner.lock();
        inner.employees.iter().find(|e| e.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Validate and insert a new employee
    pub fn create(&self, draft: EmployeeDraft) -> Result<Employee, DirectoryError> {
        let first_name = draft.first_name.unwrap_or_default().trim().to_string();
        let last_name = draft.last_name.unwrap_or_default().trim().to_string();
        let age = draft.age.as_ref().and_then(AgeInput::to_age);

        let errors = validate(&first_name, &last_name, age);
        let Some(age) = age.filter(|_| errors.is_empty()) else {
            return Err(DirectoryError::Invalid(errors));
        };

        let mut inner = self.inner.lock();
        if inner.is_duplicate(&first_name, &last_name, age, None) {
            return Err(DirectoryError::Duplicate(DUPLICATE_ON_CREATE));
        }

        let employee = Employee {
            id: inner.next_id,
            first_name,
            last_name,
            age,
        };
        inner.employees.push(employee.clone());
        inner.next_id += 1;
        drop(inner);

        info!(employee_id = employee.id, "created employee");
        Ok(employee)
    }

    /// Apply supplied fields over the stored employee
    pub fn update(&self, id: u64, draft: EmployeeDraft) -> Result<Employee, DirectoryError> {
        let mut inner = self.inner.lock();
        let index = inner.position(id)?;
        let current = &inner.employees[index];

        let first_name = draft
            .first_name
            .unwrap_or_else(|| current.first_name.clone())
            .trim()
            .to_string();
        let last_name = draft
            .last_name
            .unwrap_or_else(|| current.last_name.clone())
            .trim()
            .to_string();
        let age = match &draft.age {
            Some(input) => input.to_age(),
            None => Some(current.age),
        };

        let errors = validate(&first_name, &last_name, age);
        let Some(age) = age.filter(|_| errors.is_empty()) else {
            return Err(DirectoryError::Invalid(errors));
        };

        if inner.is_duplicate(&first_name, &last_name, age, Some(id)) {
            return Err(DirectoryError::Duplicate(DUPLICATE_ON_UPDATE));
        }

        let employee = &mut inner.employees[index];
        employee.first_name = first_name;
        employee.last_name = last_name;
        employee.age = age;
        let updated = employee.clone();
        drop(inner);

        debug!(employee_id = id, "updated employee");
        Ok(updated)
    }

    /// Remove an employee, returning the removed record
    pub fn delete(&self, id: u64) -> Result<Employee, DirectoryError> {
        let mut inner = self.inner.lock();
        let index = inner.position(id)?;
        let removed = inner.employees.remove(index);
        drop(inner);

        info!(employee_id = id, "deleted employee");
        Ok(removed)
    }
}

impl Default for EmployeeDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EmployeeDirectory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.lock();
        f.debug_struct("EmployeeDirectory")
            .field("next_id", &inner.next_id)
            .field("employees", &inner.employees.len())
            .finish()
    }
}
