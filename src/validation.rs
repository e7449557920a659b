//! Input validation for snapshots arriving from outside the process.
//!
//! The calculations accept any decimal, but a negative salary or rent is a
//! data-entry error rather than a business fact. These checks run at the HTTP
//! boundary before the engine sees a snapshot.
//!
//! Every amount is also capped at [`MAX_AMOUNT`]. Annualizing and summing
//! amounts below the cap stays well inside `Decimal`'s range.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{BusinessSnapshot, Employee, FinancialDocument, OverheadCosts};

/// The largest accepted amount: one quadrillion (10^15).
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0xA4C6_8000, 0x0003_8D7E, 0, false, 0);

/// Returns a description of what is wrong with an amount, if anything.
fn amount_problem(value: Decimal) -> Option<String> {
    if value < Decimal::ZERO {
        Some(format!("must not be negative, got {}", value))
    } else if value > MAX_AMOUNT {
        Some(format!("must not exceed {}, got {}", MAX_AMOUNT, value))
    } else {
        None
    }
}

/// Validates every record in a snapshot, returning the first problem found.
///
/// Employees are checked first, then overhead, then documents.
///
/// # Example
///
/// ```
/// use cost_engine::models::BusinessSnapshot;
/// use cost_engine::validation::validate_snapshot;
///
/// assert!(validate_snapshot(&BusinessSnapshot::default()).is_ok());
/// ```
pub fn validate_snapshot(snapshot: &BusinessSnapshot) -> EngineResult<()> {
    for employee in &snapshot.employees {
        validate_employee(employee)?;
    }
    if let Some(overhead) = &snapshot.overhead {
        validate_overhead(overhead)?;
    }
    for document in &snapshot.documents {
        validate_document(document)?;
    }
    Ok(())
}

/// Validates a single employee record.
pub fn validate_employee(employee: &Employee) -> EngineResult<()> {
    if employee.id.trim().is_empty() {
        return Err(invalid_employee(employee, "id", "must not be empty"));
    }
    let fields = [
        ("annual_salary", employee.annual_salary),
        ("annual_benefits", employee.annual_benefits),
    ];
    for (field, value) in fields {
        if let Some(message) = amount_problem(value) {
            return Err(invalid_employee(employee, field, &message));
        }
    }
    Ok(())
}

/// Validates an overhead record.
pub fn validate_overhead(overhead: &OverheadCosts) -> EngineResult<()> {
    let fields = [
        ("monthly_rent", overhead.monthly_rent),
        ("monthly_utilities", overhead.monthly_utilities),
        ("monthly_insurance", overhead.monthly_insurance),
        ("other_monthly_costs", overhead.other_monthly_costs),
    ];
    for (field, value) in fields {
        if let Some(message) = amount_problem(value) {
            return Err(EngineError::InvalidOverhead {
                field: field.to_string(),
                message,
            });
        }
    }

    for (index, software) in overhead.software_costs.iter().enumerate() {
        if let Some(message) = amount_problem(software.monthly_cost) {
            return Err(EngineError::InvalidOverhead {
                field: format!("software_costs[{}].monthly_cost", index),
                message: format!("'{}' {}", software.name, message),
            });
        }
    }
    Ok(())
}

/// Validates a financial document's identity and extracted totals.
///
/// Revenue and expense totals must lie between zero and [`MAX_AMOUNT`].
pub fn validate_document(document: &FinancialDocument) -> EngineResult<()> {
    if document.document_id.trim().is_empty() {
        return Err(EngineError::InvalidDocument {
            document_id: document.document_id.clone(),
            message: "document_id must not be empty".to_string(),
        });
    }
    let extraction = &document.extraction;
    let totals = [
        ("revenue total", extraction.revenue.total),
        ("expense total", extraction.expenses.total),
    ];
    for (label, value) in totals {
        if let Some(problem) = amount_problem(value) {
            return Err(EngineError::InvalidDocument {
                document_id: document.document_id.clone(),
                message: format!("{} {}", label, problem),
            });
        }
    }
    Ok(())
}

fn invalid_employee(employee: &Employee, field: &str, message: &str) -> EngineError {
    EngineError::InvalidEmployee {
        employee_id: employee.id.clone(),
        field: field.to_string(),
        message: message.to_string(),
    }
}
