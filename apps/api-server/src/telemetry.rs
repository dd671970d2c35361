//! Telemetry initialization - tracing subscriber setup.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::AppEnv;

/// Telemetry configuration.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Enable JSON logging (for production).
    pub json_logs: bool,
    /// Filter used when `RUST_LOG` is not set.
    pub default_filter: &'static str,
    /// Service name attached to the startup event.
    pub service_name: String,
}

impl TelemetryConfig {
    /// Derive settings from the deployment environment.
    ///
    /// `dev` logs at debug level in pretty format, `prod` at info level as JSON.
    /// `LOG_FORMAT=json|pretty` overrides the format.
    pub fn for_env(env: AppEnv) -> Self {
        let json_logs = match std::env::var("LOG_FORMAT") {
            Ok(format) => format.eq_ignore_ascii_case("json"),
            Err(_) => env == AppEnv::Prod,
        };

        Self {
            json_logs,
            default_filter: match env {
                AppEnv::Dev => "debug",
                AppEnv::Prod => "info",
            },
            service_name: std::env::var("SERVICE_NAME").unwrap_or_else(|_| "quire-api".to_string()),
        }
    }
}

/// Initialize the global tracing subscriber.
pub fn init_telemetry(config: &TelemetryConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_filter));

    if config.json_logs {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }

    tracing::info!(
        service = %config.service_name,
        json_logs = config.json_logs,
        "Telemetry initialized"
    );
}
