//! Data models for the roster editor

use std::fmt;

use crate::error::ValidationError;

/// Identifier assigned by the store. Never reused, even after a delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EmployeeId(pub u32);

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A committed employee record
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub role: String,
    pub department: String,
    pub salary: f64,
}

impl Employee {
    pub(crate) fn new(id: EmployeeId, fields: EmployeeFields) -> Self {
        Self {
            id,
            name: fields.name,
            role: fields.role,
            department: fields.department,
            salary: fields.salary,
        }
    }

    /// Overwrite the mutable fields, keeping the id
    pub fn apply(&mut self, fields: EmployeeFields) {
        self.name = fields.name;
        self.role = fields.role;
        self.department = fields.department;
        self.salary = fields.salary;
    }

    /// Salary formatted for display, e.g. `$45,000` or `$1,250.50`.
    /// Cents appear only when the salary has a fractional part.
    pub fn salary_label(&self) -> String {
        let cents = (self.salary * 100.0).round() as u64;
        let digits = (cents / 100).to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 4);
        out.push('$');
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(ch);
        }
        if self.salary.fract() != 0.0 {
            out.push_str(&format!(".{:02}", cents % 100));
        }
        out
    }
}

/// The four mutable fields of a record, as submitted to the store
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeFields {
    pub name: String,
    pub role: String,
    pub department: String,
    pub salary: f64,
}

impl EmployeeFields {
    pub fn new(
        name: impl Into<String>,
        role: impl Into<String>,
        department: impl Into<String>,
        salary: f64,
    ) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            department: department.into(),
            salary,
        }
    }

    /// Check the fields and return them trimmed.
    ///
    /// Whitespace-only text counts as empty. Salary must be finite and > 0.
    pub fn validate(self) -> Result<Self, ValidationError> {
        let name = self.name.trim();
        let role = self.role.trim();
        let department = self.department.trim();

        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if role.is_empty() {
            return Err(ValidationError::EmptyRole);
        }
        if department.is_empty() {
            return Err(ValidationError::EmptyDepartment);
        }
        if !self.salary.is_finite() || self.salary <= 0.0 {
            return Err(ValidationError::InvalidSalary);
        }

        Ok(Self {
            name: name.to_string(),
            role: role.to_string(),
            department: department.to_string(),
            salary: self.salary,
        })
    }
}

/// Form field selector for scratch edits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Role,
    Department,
    Salary,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Role,
        FormField::Department,
        FormField::Salary,
    ];

    pub fn placeholder(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Role => "Role",
            FormField::Department => "Department",
            FormField::Salary => "Salary",
        }
    }
}

/// Uncommitted scratch fields held while creating or editing.
///
/// Kept as text because that is what the form inputs produce.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeDraft {
    pub name: String,
    pub role: String,
    pub department: String,
    pub salary: String,
}

impl EmployeeDraft {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Role => &self.role,
            FormField::Department => &self.department,
            FormField::Salary => &self.salary,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.name = value,
            FormField::Role => self.role = value,
            FormField::Department => self.department = value,
            FormField::Salary => self.salary = value,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Convert to validated fields
    pub fn parse(&self) -> Result<EmployeeFields, ValidationError> {
        let salary = self
            .salary
            .trim()
            .parse::<f64>()
            .map_err(|_| ValidationError::InvalidSalary)?;
        EmployeeFields::new(
            self.name.clone(),
            self.role.clone(),
            self.department.clone(),
            salary,
        )
        .validate()
    }
}

impl From<&Employee> for EmployeeDraft {
    fn from(employee: &Employee) -> Self {
        Self {
            name: employee.name.clone(),
            role: employee.role.clone(),
            department: employee.department.clone(),
            salary: employee.salary.to_string(),
        }
    }
}

/// The fixed roster every session starts from
pub fn seed_employees() -> Vec<Employee> {
    [
        (1, "John", "Developer", "IT", 50000.0),
        (2, "Alice", "Designer", "UI/UX", 45000.0),
        (3, "Mark", "Manager", "HR", 60000.0),
    ]
    .into_iter()
    .map(|(id, name, role, department, salary)| {
        Employee::new(
            EmployeeId(id),
            EmployeeFields::new(name, role, department, salary),
        )
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_trims_and_accepts() {
        let fields = EmployeeFields::new("  Zoe ", "QA", " Eng", 40000.0)
            .validate()
            .unwrap();
        assert_eq!(fields.name, "Zoe");
        assert_eq!(fields.department, "Eng");
    }

    #[test]
    fn validate_rejects_blank_text() {
        let err = EmployeeFields::new("   ", "QA", "Eng", 1.0).validate();
        assert_eq!(err, Err(ValidationError::EmptyName));
        let err = EmployeeFields::new("Zoe", "", "Eng", 1.0).validate();
        assert_eq!(err, Err(ValidationError::EmptyRole));
        let err = EmployeeFields::new("Zoe", "QA", "", 1.0).validate();
        assert_eq!(err, Err(ValidationError::EmptyDepartment));
    }

    #[test]
    fn validate_rejects_bad_salary() {
        for salary in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let err = EmployeeFields::new("Zoe", "QA", "Eng", salary).validate();
            assert_eq!(err, Err(ValidationError::InvalidSalary));
        }
    }

    #[test]
    fn draft_parse_requires_numeric_salary() {
        let mut draft = EmployeeDraft::default();
        draft.set(FormField::Name, "Zoe");
        draft.set(FormField::Role, "QA");
        draft.set(FormField::Department, "Eng");
        draft.set(FormField::Salary, "forty");
        assert_eq!(draft.parse(), Err(ValidationError::InvalidSalary));

        draft.set(FormField::Salary, " 40000 ");
        let fields = draft.parse().unwrap();
        assert_eq!(fields.salary, 40000.0);
    }

    #[test]
    fn draft_from_employee_copies_fields() {
        let seed = seed_employees();
        let draft = EmployeeDraft::from(&seed[1]);
        assert_eq!(draft.get(FormField::Name), "Alice");
        assert_eq!(draft.get(FormField::Salary), "45000");
        assert_eq!(draft.parse().unwrap().salary, 45000.0);
    }

    #[test]
    fn salary_label_groups_thousands() {
        let seed = seed_employees();
        assert_eq!(seed[0].salary_label(), "$50,000");
        let mut big = seed[0].clone();
        big.salary = 1_234_567.0;
        assert_eq!(big.salary_label(), "$1,234,567");
        big.salary = 999.0;
        assert_eq!(big.salary_label(), "$999");
    }

    #[test]
    fn salary_label_shows_cents_when_fractional() {
        let mut employee = seed_employees().remove(0);
        employee.salary = 0.4;
        assert_eq!(employee.salary_label(), "$0.40");
        employee.salary = 1250.5;
        assert_eq!(employee.salary_label(), "$1,250.50");
        employee.salary = 2000.0;
        assert_eq!(employee.salary_label(), "$2,000");
    }
}
