//! HTTP API module for the attendance reconciliation engine.
//!
//! This module provides the REST API endpoints for reconciling raw feed
//! records into classified attendance records and weekly summaries.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{RawRecordRequest, ReconcileRequest, WeeklyRequest, WindowRequest};
pub use response::ApiError;
pub use state::AppState;
