use std::collections::HashMap;

use log::debug;

use super::{employee::Employee, Result, StoreError};

/// Salary figures computed over every record in a store.
#[derive(Debug, Clone, PartialEq)]
pub struct SalaryReport {
    pub count: usize,
    pub total: f64,
    pub average: f64,
    pub highest: f64,
    pub lowest: f64,
}

/// In-memory collection of employees.
///
/// Records are kept in insertion order alongside an index from id to
/// position, both updated together by every mutation.
#[derive(Debug, Default)]
pub struct EmployeeStore {
    records: Vec<Employee>,
    index: HashMap<String, usize>,
}

impl EmployeeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from previously persisted records, keeping their order.
    ///
    /// Fails with [StoreError::AlreadyExists] if two records share an id.
    pub fn from_records(records: Vec<Employee>) -> Result<Self> {
        let mut store = Self::new();
        for employee in records {
            store.insert(employee)?;
        }
        Ok(store)
    }

    /// Adds a new employee joined now.
    ///
    /// # Params
    ///
    /// - `id`: Unique identifier for the record.
    pub fn add(
        &mut self,
        id: &str,
        name: &str,
        department: &str,
        position: &str,
        salary: f64,
    ) -> Result<&Employee> {
        self.insert(Employee::new(id, name, department, position, salary))
    }

    /// Inserts a fully built record.
    pub fn insert(&mut self, employee: Employee) -> Result<&Employee> {
        if self.index.contains_key(employee.id()) {
            return Err(StoreError::AlreadyExists(employee.id().to_string()));
        }
        check_salary(employee.id(), employee.salary)?;

        debug!("Inserting employee `{}`", employee.id());
        let position = self.records.len();
        self.index.insert(employee.id().to_string(), position);
        self.records.push(employee);

        Ok(&self.records[position])
    }

    pub fn find(&self, id: &str) -> Option<&Employee> {
        self.index.get(id).map(|&position| &self.records[position])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Replaces every mutable field of an existing record.
    ///
    /// `id` and the join date are left untouched.
    pub fn update(
        &mut self,
        id: &str,
        name: &str,
        department: &str,
        position: &str,
        salary: f64,
    ) -> Result<()> {
        let slot = *self
            .index
            .get(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        check_salary(id, salary)?;

        debug!("Updating employee `{id}`");
        let employee = &mut self.records[slot];
        employee.name = name.to_string();
        employee.department = department.to_string();
        employee.position = position.to_string();
        employee.salary = salary;

        Ok(())
    }

    pub fn remove(&mut self, id: &str) -> Result<Employee> {
        let slot = self
            .index
            .remove(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        debug!("Removing employee `{id}`");
        let removed = self.records.remove(slot);
        for (position, employee) in self.records.iter().enumerate().skip(slot) {
            self.index.insert(employee.id().to_string(), position);
        }

        Ok(removed)
    }

    /// All records in insertion order.
    pub fn list(&self) -> &[Employee] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Computes salary statistics, or `None` for an empty store.
    pub fn aggregate(&self) -> Option<SalaryReport> {
        let first = self.records.first()?.salary;

        let (total, highest, lowest) = self.records.iter().fold(
            (0.0, first, first),
            |(total, highest, lowest), employee| {
                (
                    total + employee.salary,
                    highest.max(employee.salary),
                    lowest.min(employee.salary),
                )
            },
        );
        let count = self.records.len();

        // the total can overflow to infinity even though every salary is finite
        let average = if total.is_finite() {
            total / count as f64
        } else {
            self.records
                .iter()
                .map(|employee| employee.salary / count as f64)
                .sum::<f64>()
        };

        Some(SalaryReport {
            count,
            total,
            average,
            highest,
            lowest,
        })
    }
}

/// Salaries must survive a trip through the data file, so NaN and
/// infinities are refused.
pub(crate) fn check_salary(id: &str, salary: f64) -> Result<()> {
    if salary.is_finite() {
        Ok(())
    } else {
        Err(StoreError::InvalidSalary {
            id: id.to_string(),
            salary,
        })
    }
}
