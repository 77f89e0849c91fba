//! HTTP API module for the MinWinTid mock service.
//!
//! This module provides the mock endpoints: the legacy and ORDS time-data
//! routes, the OAuth token stub, and the liveness probe. The two wire
//! schemas live in [`legacy`] and [`ords`].

mod handlers;
pub mod legacy;
pub mod ords;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::TiddataParams;
pub use response::ApiError;
pub use state::AppState;
