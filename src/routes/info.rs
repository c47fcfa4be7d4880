//! Runtime and build metadata for diagnostics.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::config::{FRAMEWORK_VERSION, RUNTIME_VERSION};
use crate::state::AppState;

#[derive(Debug, Clone, Serialize)]
pub struct InfoResponse {
    pub runtime_version: &'static str,
    pub framework_version: &'static str,
    pub environment: String,
}

/// Info probe handler. The environment is looked up per request so a
/// changed variable is picked up without a restart.
pub async fn info(State(state): State<AppState>) -> Json<InfoResponse> {
    Json(InfoResponse {
        runtime_version: RUNTIME_VERSION,
        framework_version: FRAMEWORK_VERSION,
        environment: state.config.app.environment(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AppConfig, AppSettings};

    fn state_with_var(var: &str) -> AppState {
        AppState::new(AppConfig {
            app: AppSettings {
                environment_var: var.to_string(),
                ..AppSettings::default()
            },
            ..AppConfig::default()
        })
    }

    #[tokio::test]
    async fn test_info_defaults_to_development() {
        let Json(body) = info(State(state_with_var("PROBE_SERVICE_INFO_UNSET"))).await;
        assert_eq!(body.environment, "development");
        assert_eq!(body.framework_version, FRAMEWORK_VERSION);
        assert!(!body.runtime_version.is_empty());
    }

    #[tokio::test]
    async fn test_info_reads_configured_variable() {
        std::env::set_var("PROBE_SERVICE_INFO_SET", "production");
        let Json(body) = info(State(state_with_var("PROBE_SERVICE_INFO_SET"))).await;
        assert_eq!(body.environment, "production");
    }
}
