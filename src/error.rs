//! Error types for roster mutations

use thiserror::Error;

/// Why a set of employee fields was rejected.
///
/// Rejections are never surfaced to the user as failures. The store logs
/// them and leaves its state unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,
    #[error("role must not be empty")]
    EmptyRole,
    #[error("department must not be empty")]
    EmptyDepartment,
    #[error("salary must be a positive number")]
    InvalidSalary,
}
