use std::fmt::Display;

/// Reasons a line of console input was rejected
#[derive(Debug, Clone, PartialEq)]
pub enum InputError {
    /// Input is not a whole number
    InvalidNumber(String),
    /// Input is not a finite decimal number
    InvalidSalary(String),
}

impl Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            Self::InvalidNumber(_) => "Enter valid number!",
            Self::InvalidSalary(_) => "Enter valid salary!",
        };

        write!(f, "{}", msg)
    }
}

impl std::error::Error for InputError {}

/// Parses a menu selection.
///
/// Any integer is accepted here, including ones that name no menu entry.
pub fn parse_choice(line: &str) -> Result<i64, InputError> {
    let line = line.trim();
    line.parse().map_err(|_| InputError::InvalidNumber(line.to_string()))
}

/// Parses a salary amount.
///
/// NaN and infinities are rejected since they cannot be written to the data
/// file. Negative amounts are accepted.
pub fn parse_salary(line: &str) -> Result<f64, InputError> {
    let line = line.trim();
    match line.parse::<f64>() {
        Ok(salary) if salary.is_finite() => Ok(salary),
        _ => Err(InputError::InvalidSalary(line.to_string())),
    }
}

/// Normalizes a free text field.
pub fn parse_text(line: &str) -> String {
    line.trim().to_string()
}
