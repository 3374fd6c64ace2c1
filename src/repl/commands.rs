use std::io::{self, BufRead, Write};

use log::{info, warn};

use crate::storage::{EmployeeStore, Persistence};

use super::{
    console::Console,
    input::{parse_salary, parse_text},
};

/// Entries of the main menu, numbered as they are displayed
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MenuChoice {
    Add,
    View,
    Search,
    Update,
    Delete,
    Report,
    /// Persist the store and close the session
    SaveAndExit,
}

/// What the session does after a menu entry ran
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Flow {
    Continue,
    Exit,
}

pub const MENU: &str = "
===== EMPLOYEE MANAGEMENT SYSTEM =====
1. Add Employee
2. View All Employees
3. Search Employee
4. Update Employee
5. Delete Employee
6. Generate Report
7. Save & Exit";

impl MenuChoice {
    pub fn execute<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
        store: &mut EmployeeStore,
        persistence: &impl Persistence,
    ) -> io::Result<Flow> {
        match self {
            Self::Add => add(console, store)?,
            Self::View => {
                if store.is_empty() {
                    console.say("No employees found!")?;
                }
                for employee in store.list() {
                    console.say(employee)?;
                }
            }
            Self::Search => {
                if let Some(id) = console.prompt("Enter Employee ID: ")? {
                    match store.find(&parse_text(&id)) {
                        Some(employee) => console.say(employee)?,
                        None => console.say("Employee not found!")?,
                    }
                }
            }
            Self::Update => update(console, store)?,
            Self::Delete => {
                if let Some(id) = console.prompt("Enter Employee ID: ")? {
                    match store.remove(&parse_text(&id)) {
                        Ok(_) => console.say("Employee Deleted Successfully!")?,
                        Err(_) => console.say("Employee not found!")?,
                    }
                }
            }
            Self::Report => match store.aggregate() {
                None => console.say("No employees available.")?,
                Some(report) => {
                    console.say("\n===== REPORT =====")?;
                    console.say(format!("Total Employees: {}", report.count))?;
                    console.say(format!("Total Salary: ₹{:.2}", report.total))?;
                    console.say(format!("Average Salary: ₹{:.2}", report.average))?;
                    console.say(format!("Highest Salary: ₹{:.2}", report.highest))?;
                    console.say(format!("Lowest Salary: ₹{:.2}", report.lowest))?;
                }
            },
            Self::SaveAndExit => {
                if let Err(e) = persistence.save(store.list()) {
                    warn!("Failed to save {} employees; {e}", store.len());
                    console.say("Error saving file!")?;
                }
                console.say("Data Saved. Exiting...")?;
                return Ok(Flow::Exit);
            }
        }

        Ok(Flow::Continue)
    }
}

struct Details {
    name: String,
    department: String,
    position: String,
    salary: f64,
}

/// Prompts for every mutable field; `None` if input ran out midway.
fn read_details<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    labels: [&str; 4],
) -> io::Result<Option<Details>> {
    let Some(name) = console.prompt(labels[0])? else {
        return Ok(None);
    };
    let Some(department) = console.prompt(labels[1])? else {
        return Ok(None);
    };
    let Some(position) = console.prompt(labels[2])? else {
        return Ok(None);
    };
    let Some(salary) = console.prompt_parsed(labels[3], parse_salary)? else {
        return Ok(None);
    };

    Ok(Some(Details {
        name: parse_text(&name),
        department: parse_text(&department),
        position: parse_text(&position),
        salary,
    }))
}

fn add<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &mut EmployeeStore,
) -> io::Result<()> {
    let Some(id) = console.prompt("Enter ID: ")? else {
        return Ok(());
    };
    let id = parse_text(&id);

    if store.contains(&id) {
        return console.say("Employee already exists!");
    }

    let labels = [
        "Enter Name: ",
        "Enter Department: ",
        "Enter Position: ",
        "Enter Salary: ",
    ];
    let Some(details) = read_details(console, labels)? else {
        return Ok(());
    };

    match store.add(
        &id,
        &details.name,
        &details.department,
        &details.position,
        details.salary,
    ) {
        Ok(employee) => {
            info!("Added employee `{}`", employee.id());
            console.say("Employee Added Successfully!")
        }
        Err(_) => console.say("Employee already exists!"),
    }
}

fn update<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &mut EmployeeStore,
) -> io::Result<()> {
    let Some(id) = console.prompt("Enter Employee ID: ")? else {
        return Ok(());
    };
    let id = parse_text(&id);

    if !store.contains(&id) {
        return console.say("Employee not found!");
    }

    let labels = ["New Name: ", "New Department: ", "New Position: ", "New Salary: "];
    let Some(details) = read_details(console, labels)? else {
        return Ok(());
    };

    match store.update(
        &id,
        &details.name,
        &details.department,
        &details.position,
        details.salary,
    ) {
        Ok(()) => console.say("Employee Updated Successfully!"),
        Err(_) => console.say("Employee not found!"),
    }
}

impl TryFrom<i64> for MenuChoice {
    type Error = String;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(MenuChoice::Add),
            2 => Ok(MenuChoice::View),
            3 => Ok(MenuChoice::Search),
            4 => Ok(MenuChoice::Update),
            5 => Ok(MenuChoice::Delete),
            6 => Ok(MenuChoice::Report),
            7 => Ok(MenuChoice::SaveAndExit),
            v => Err(format!("unknown menu entry `{v}`.")),
        }
    }
}
