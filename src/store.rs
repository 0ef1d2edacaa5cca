//! In-memory employee store
//!
//! Owns the ordered sequence of records. Every mutation either fully applies
//! or leaves the sequence untouched; rejected input and unknown ids are
//! logged and reported through the return value, never raised.

use tracing::{debug, info};

use crate::models::{seed_employees, Employee, EmployeeFields, EmployeeId};

#[derive(Debug, Clone)]
pub struct EmployeeStore {
    employees: Vec<Employee>,
    // `None` once every u32 id has been handed out
    next_id: Option<u32>,
}

impl Default for EmployeeStore {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl EmployeeStore {
    /// Build a store from existing records. The id counter starts above the
    /// highest id present.
    pub fn new(employees: Vec<Employee>) -> Self {
        let next_id = match employees.iter().map(|e| e.id.0).max() {
            Some(max) => max.checked_add(1),
            None => Some(1),
        };
        Self { employees, next_id }
    }

    /// Store holding the fixed seed roster
    pub fn seeded() -> Self {
        Self::new(seed_employees())
    }

    pub fn list(&self) -> &[Employee] {
        &self.employees
    }

    pub fn get(&self, id: EmployeeId) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Append a new record. Returns `None` and changes nothing when the
    /// fields are rejected.
    pub fn add(&mut self, fields: EmployeeFields) -> Option<Employee> {
        let fields = match fields.validate() {
            Ok(fields) => fields,
            Err(err) => {
                debug!(%err, "add rejected");
                return None;
            }
        };

        let Some(raw_id) = self.next_id else {
            debug!("add rejected: employee ids exhausted");
            return None;
        };
        self.next_id = raw_id.checked_add(1);
        let id = EmployeeId(raw_id);
        let employee = Employee::new(id, fields);
        info!(%id, name = %employee.name, "employee added");
        self.employees.push(employee.clone());
        Some(employee)
    }

    /// Overwrite the mutable fields of `id` in place
    pub fn update(&mut self, id: EmployeeId, fields: EmployeeFields) -> bool {
        let Some(employee) = self.employees.iter_mut().find(|e| e.id == id) else {
            debug!(%id, "update skipped: unknown id");
            return false;
        };
        match fields.validate() {
            Ok(fields) => {
                employee.apply(fields);
                info!(%id, "employee updated");
                true
            }
            Err(err) => {
                debug!(%id, %err, "update rejected");
                false
            }
        }
    }

    /// Remove the record with `id`, keeping the order of the rest
    pub fn remove(&mut self, id: EmployeeId) -> bool {
        match self.employees.iter().position(|e| e.id == id) {
            Some(index) => {
                self.employees.remove(index);
                info!(%id, "employee removed");
                true
            }
            None => {
                debug!(%id, "remove skipped: unknown id");
                false
            }
        }
    }
}
