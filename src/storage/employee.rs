use std::fmt::Display;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single employee record.
///
/// `id` and `join_date` are fixed at construction; the remaining fields can be
/// replaced through [EmployeeStore::update](super::EmployeeStore::update).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    id: String,
    pub name: String,
    pub department: String,
    pub position: String,
    pub salary: f64,
    join_date: DateTime<Utc>,
}

impl Employee {
    /// Creates a new record joined at the current time.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        department: impl Into<String>,
        position: impl Into<String>,
        salary: f64,
    ) -> Self {
        Self::joined_at(id, name, department, position, salary, Utc::now())
    }

    /// Creates a new record with an explicit join timestamp.
    pub fn joined_at(
        id: impl Into<String>,
        name: impl Into<String>,
        department: impl Into<String>,
        position: impl Into<String>,
        salary: f64,
        join_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            department: department.into(),
            position: position.into(),
            salary,
            join_date,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn join_date(&self) -> DateTime<Utc> {
        self.join_date
    }
}

impl Display for Employee {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ID: {} | Name: {} | Dept: {} | Position: {} | Salary: ₹{:.2} | Joined: {}",
            self.id,
            self.name,
            self.department,
            self.position,
            self.salary,
            self.join_date.format("%Y-%m-%d")
        )
    }
}
