//! Request types for the cost engine API.
//!
//! Both endpoints accept the same snapshot body. Request types mirror the
//! domain models but are more forgiving about omitted fields.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{
    BusinessSnapshot, Employee, EmploymentType, FinancialDocument, OverheadCosts, RevenueRange,
    SoftwareCost,
};

/// Request body for `/employee-costs` and `/ebitda`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnapshotRequest {
    /// The employee roster.
    #[serde(default)]
    pub employees: Vec<EmployeeRequest>,
    /// The overhead record, if one exists.
    #[serde(default)]
    pub overhead: Option<OverheadRequest>,
    /// Uploaded financial documents.
    #[serde(default)]
    pub documents: Vec<FinancialDocument>,
    /// The business profile revenue range, if set.
    #[serde(default)]
    pub revenue_range: Option<RevenueRange>,
}

/// Employee information in a snapshot request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's display name.
    pub name: String,
    /// The employee's job title.
    pub role: String,
    /// Optional department.
    #[serde(default)]
    pub department: Option<String>,
    /// The type of employment arrangement.
    pub employment_type: EmploymentType,
    /// Gross annual salary.
    pub annual_salary: Decimal,
    /// Annual benefits. Null and omitted both mean "not specified".
    #[serde(default)]
    pub annual_benefits: Option<Decimal>,
}

/// Overhead information in a snapshot request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverheadRequest {
    /// Monthly rent.
    #[serde(default)]
    pub monthly_rent: Option<Decimal>,
    /// Monthly utilities.
    #[serde(default)]
    pub monthly_utilities: Option<Decimal>,
    /// Monthly insurance.
    #[serde(default)]
    pub monthly_insurance: Option<Decimal>,
    /// Other fixed monthly costs.
    #[serde(default)]
    pub other_monthly_costs: Option<Decimal>,
    /// Software subscriptions.
    #[serde(default)]
    pub software_costs: Vec<SoftwareCost>,
    /// When the overhead record was last changed.
    pub updated_at: DateTime<Utc>,
}

impl From<EmployeeRequest> for Employee {
    fn from(req: EmployeeRequest) -> Self {
        Employee {
            id: req.id,
            name: req.name,
            role: req.role,
            department: req.department,
            employment_type: req.employment_type,
            annual_salary: req.annual_salary,
            annual_benefits: req.annual_benefits.unwrap_or(Decimal::ZERO),
        }
    }
}

impl From<OverheadRequest> for OverheadCosts {
    fn from(req: OverheadRequest) -> Self {
        OverheadCosts {
            monthly_rent: req.monthly_rent.unwrap_or(Decimal::ZERO),
            monthly_utilities: req.monthly_utilities.unwrap_or(Decimal::ZERO),
            monthly_insurance: req.monthly_insurance.unwrap_or(Decimal::ZERO),
            other_monthly_costs: req.other_monthly_costs.unwrap_or(Decimal::ZERO),
            software_costs: req.software_costs,
            updated_at: req.updated_at,
        }
    }
}

impl From<SnapshotRequest> for BusinessSnapshot {
    fn from(req: SnapshotRequest) -> Self {
        BusinessSnapshot {
            employees: req.employees.into_iter().map(Into::into).collect(),
            overhead: req.overhead.map(Into::into),
            documents: req.documents,
            revenue_range: req.revenue_range,
        }
    }
}
