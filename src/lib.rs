mod repl;
mod storage;

pub use repl::*;
pub use storage::{
    Employee, EmployeeStore, JsonFile, Persistence, Result, SalaryReport, StoreError,
};
