//! HTTP server module.
//!
//! Binds the listening socket and serves the router until SIGINT or SIGTERM,
//! at which point in-flight requests are drained before returning.

mod listener;
mod shutdown;

pub use listener::{bind, serve, ServerError};
pub use shutdown::shutdown_signal;
