//! UI components for the roster window
//!
//! These modules extend the `App` struct with rendering methods.
//! They are imported for their side effects (impl blocks).

mod employee_list;
mod form;
mod header;
