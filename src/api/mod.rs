//! HTTP API module for the quote engine.
//!
//! This module provides the REST API endpoints for pricing a consulting
//! project from a company snapshot.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::QuoteRequest;
pub use response::ApiError;
pub use state::AppState;
