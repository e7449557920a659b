//! Employee model and related types.
//!
//! This module defines the Employee struct and EmploymentType enum
//! for representing the people on a business's payroll.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents the type of employment arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmploymentType {
    /// Full-time employment.
    FullTime,
    /// Part-time employment.
    PartTime,
    /// Independent contractor.
    Contractor,
}

/// Represents an employee as recorded by the business owner.
///
/// Employees are owned by an external record store and are treated as
/// immutable input by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's display name.
    pub name: String,
    /// The employee's job title or role.
    pub role: String,
    /// Optional department the employee belongs to.
    #[serde(default)]
    pub department: Option<String>,
    /// The type of employment arrangement.
    pub employment_type: EmploymentType,
    /// Gross annual salary.
    pub annual_salary: Decimal,
    /// Annual employer-paid benefits. Zero when not provided.
    #[serde(default)]
    pub annual_benefits: Decimal,
}
