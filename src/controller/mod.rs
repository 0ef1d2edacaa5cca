//! Coordination between the header, the list view and the store
//!
//! These types hold no gpui state. The presentation layer renders from them
//! and forwards user intent to them.

mod confirm;
mod employee_list;
mod header;

pub use confirm::DialogConfirm;
pub use employee_list::{EmployeeList, FormState};
pub use header::HeaderBar;
