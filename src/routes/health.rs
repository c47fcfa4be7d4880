//! Health check endpoint for container orchestration.
//!
//! Provides a liveness probe that returns 200 OK when the process is running,
//! together with the wall-clock time and host it was answered from. Used by
//! Kubernetes, ECS, systemd, and load balancers to verify the service is alive.

use axum::Json;
use chrono::{Local, SecondsFormat};
use serde::Serialize;

use crate::config::{HEALTH_STATUS, SERVICE_VERSION, UNKNOWN_HOSTNAME};

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
    pub hostname: String,
    pub version: &'static str,
}

/// Health check handler.
///
/// Timestamp and hostname are read on every call; nothing is cached.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: HEALTH_STATUS,
        timestamp: Local::now().to_rfc3339_opts(SecondsFormat::Micros, false),
        hostname: current_hostname(),
        version: SERVICE_VERSION,
    })
}

/// Host name as reported by the operating system.
pub fn current_hostname() -> String {
    match hostname::get().map(|name| name.into_string()) {
        Ok(Ok(name)) => name,
        Ok(Err(raw)) => {
            tracing::warn!(hostname = ?raw, "Hostname is not valid UTF-8");
            UNKNOWN_HOSTNAME.to_string()
        }
        Err(e) => {
            tracing::warn!(error = %e, "Failed to resolve hostname");
            UNKNOWN_HOSTNAME.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[tokio::test]
    async fn test_health_fields() {
        let Json(body) = health().await;
        assert_eq!(body.status, "healthy");
        assert_eq!(body.version, "1.0.0");
        assert!(!body.hostname.is_empty());
        assert!(DateTime::parse_from_rfc3339(&body.timestamp).is_ok());
    }

    #[test]
    fn test_current_hostname_is_stable() {
        assert_eq!(current_hostname(), current_hostname());
    }
}
