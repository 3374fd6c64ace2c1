pub mod employee;
pub mod file;
pub mod store;

use std::path::PathBuf;

pub use employee::Employee;
pub use file::JsonFile;
pub use store::{EmployeeStore, SalaryReport};

pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors returned by the record store and its persistence layer
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Returned when adding a record whose id is already taken
    #[error("employee `{0}` already exists")]
    AlreadyExists(String),
    /// Returned when the id given for an operation does not exist
    #[error("employee `{0}` not found")]
    NotFound(String),
    /// Returned when a salary is NaN or infinite
    #[error("employee `{id}` has a non-finite salary `{salary}`")]
    InvalidSalary { id: String, salary: f64 },
    /// Returned when there is no persisted file to load
    #[error("no data file at `{}`", .0.display())]
    MissingFile(PathBuf),
    #[error("i/o failure; {0}")]
    Io(#[from] std::io::Error),
    /// Returned when the persisted file exists but cannot be decoded
    #[error("invalid data file; {0}")]
    Decode(#[from] serde_json::Error),
}

pub trait Persistence {
    /// Replaces the persisted collection with `records`
    ///
    /// # Params
    ///
    /// - `records`: Every record in the store, in display order.
    fn save(&self, records: &[Employee]) -> Result<()>;

    /// Reads back the full persisted collection
    fn load(&self) -> Result<Vec<Employee>>;
}
