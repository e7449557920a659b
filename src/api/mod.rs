//! HTTP API module for the cost engine.
//!
//! This module exposes the engine's two calculations as JSON endpoints.
//! Inputs are validated here; the engine itself never rejects a snapshot.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{EmployeeRequest, OverheadRequest, SnapshotRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
