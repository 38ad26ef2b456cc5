//! API module for HTTP endpoints
//!
//! This module provides the REST facade over the league and event stores.

pub mod http;
pub mod rest;
pub mod state;

pub use http::create_router;
pub use state::AppState;
