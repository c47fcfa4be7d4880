//! Greeting page handler.

use crate::config::GREETING;

/// `GET /` handler. Plain text, no inputs.
pub async fn hello() -> &'static str {
    GREETING
}
