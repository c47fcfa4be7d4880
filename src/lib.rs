//! probe-service: a minimal web service with a greeting, a health probe and
//! a runtime-info probe.
//!
//! The binary in `main.rs` wires these modules together; they are exposed as
//! a library so the router can be exercised in-process by the test suite.

pub mod config;
pub mod error;
pub mod logging;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use config::AppConfig;
pub use routes::create_router;
pub use state::AppState;
