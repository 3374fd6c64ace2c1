use std::{
    fs::{self, File},
    io::{self, BufReader, BufWriter, ErrorKind, Write},
    path::{Path, PathBuf},
};

use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::{employee::Employee, store::check_salary, Persistence, Result, StoreError};

/// On-disk document holding the whole collection.
#[derive(Deserialize)]
struct Document {
    employees: Vec<Employee>,
}

#[derive(Serialize)]
struct DocumentRef<'a> {
    employees: &'a [Employee],
}

/// Persists employees as a single JSON document.
///
/// Saves go to a sibling `.tmp` file first which is then renamed over the
/// target, so a failed save never leaves a half written file behind.
#[derive(Debug, Clone)]
pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl Persistence for JsonFile {
    fn save(&self, records: &[Employee]) -> Result<()> {
        for employee in records {
            check_salary(employee.id(), employee.salary)?;
        }

        let staging = self.staging_path();
        debug!("Writing {} employees to `{}`", records.len(), staging.display());

        let written = write_document(&staging, records)
            .and_then(|()| fs::rename(&staging, &self.path));
        if let Err(e) = written {
            if let Err(cleanup) = fs::remove_file(&staging) {
                debug!("Could not remove `{}`; {cleanup}", staging.display());
            }
            return Err(e.into());
        }

        info!("Saved {} employees to `{}`", records.len(), self.path.display());

        Ok(())
    }

    fn load(&self) -> Result<Vec<Employee>> {
        let file = File::open(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => StoreError::MissingFile(self.path.clone()),
            _ => StoreError::Io(e),
        })?;

        let document: Document = serde_json::from_reader(BufReader::new(file))?;
        info!(
            "Loaded {} employees from `{}`",
            document.employees.len(),
            self.path.display()
        );

        Ok(document.employees)
    }
}

fn write_document(path: &Path, records: &[Employee]) -> io::Result<()> {
    let document = DocumentRef { employees: records };
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, &document)?;
    writer.flush()?;
    writer.into_inner().map_err(|e| e.into_error())?.sync_all()
}

#[cfg(test)]
mod test {
    use assert_fs::{prelude::*, TempDir};
    use chrono::{TimeZone, Utc};

    use super::*;

    fn sample() -> Vec<Employee> {
        let joined = Utc.with_ymd_and_hms(2023, 11, 2, 8, 30, 15).unwrap();
        vec![
            Employee::joined_at("E2", "Bob", "Ops", "SRE", 5000.5, joined),
            Employee::joined_at("E1", "Alice", "Eng", "Dev", 1000.0, joined),
            Employee::new("E3", "Carol", "HR", "Lead", 3000.25),
        ]
    }

    #[test]
    fn save_then_load_restores_records() {
        let dir = TempDir::new().unwrap();
        let file = JsonFile::new(dir.child("employees.json").path());

        let records = sample();
        file.save(&records).unwrap();
        let loaded = file.load().unwrap();

        assert_eq!(loaded, records);
        dir.close().unwrap();
    }

    #[test]
    fn save_overwrites_previous_contents() {
        let dir = TempDir::new().unwrap();
        let file = JsonFile::new(dir.child("employees.json").path());

        file.save(&sample()).unwrap();
        file.save(&sample()[..1]).unwrap();

        let loaded = file.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id(), "E2");
        dir.child("employees.json.tmp").assert(predicates::path::missing());
        dir.close().unwrap();
    }

    #[test]
    fn staging_file_sits_next_to_target() {
        let file = JsonFile::new("data/employees.json");

        assert_eq!(file.path(), Path::new("data/employees.json"));
        assert_eq!(file.staging_path(), PathBuf::from("data/employees.json.tmp"));
    }

    #[test]
    fn load_missing_file() {
        let dir = TempDir::new().unwrap();
        let file = JsonFile::new(dir.child("absent.json").path());

        assert!(matches!(file.load(), Err(StoreError::MissingFile(_))));
        dir.close().unwrap();
    }

    #[test]
    fn load_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let child = dir.child("employees.json");
        child.write_str("{\"employees\": [ {\"id\": \"E1\"").unwrap();

        let file = JsonFile::new(child.path());
        assert!(matches!(file.load(), Err(StoreError::Decode(_))));
        dir.close().unwrap();
    }

    #[test]
    fn save_refuses_non_finite_salary() {
        let dir = TempDir::new().unwrap();
        let child = dir.child("employees.json");
        let file = JsonFile::new(child.path());
        file.save(&sample()).unwrap();

        let mut records = sample();
        records.push(Employee::new("E4", "Dan", "Eng", "Dev", f64::NAN));

        assert!(matches!(
            file.save(&records),
            Err(StoreError::InvalidSalary { id, .. }) if id == "E4"
        ));

        // the previous save is left in place
        let loaded = file.load().unwrap();
        assert_eq!(loaded.len(), 3);
        assert!(loaded.iter().all(|employee| employee.id() != "E4"));
        dir.child("employees.json.tmp").assert(predicates::path::missing());
        dir.close().unwrap();
    }

    #[test]
    fn failed_rename_removes_staging_file() {
        let dir = TempDir::new().unwrap();
        let child = dir.child("employees.json");
        child.create_dir_all().unwrap();
        child.child("keep").touch().unwrap();

        let file = JsonFile::new(child.path());
        assert!(matches!(file.save(&sample()), Err(StoreError::Io(_))));
        dir.child("employees.json.tmp").assert(predicates::path::missing());
        dir.close().unwrap();
    }

    #[test]
    fn save_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let file = JsonFile::new(dir.child("nested/missing/employees.json").path());

        assert!(matches!(file.save(&sample()), Err(StoreError::Io(_))));
        dir.close().unwrap();
    }
}
