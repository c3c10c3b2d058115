//! # Wallet-Auth Telemetry
//!
//! Structured logging and Prometheus metrics shared by every crate in the
//! workspace.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use wa_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     init_telemetry(&TelemetryConfig::from_env())?;
//!     // Logs and metrics are now being collected
//!     Ok(())
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `WA_SERVICE_NAME` | `wallet-auth` | Service name in startup logs |
//! | `WA_LOG_LEVEL` / `RUST_LOG` | `info` | Log level filter |
//! | `WA_JSON_LOGS` | `false` | JSON log output |

pub mod config;
pub mod logging;
pub mod metrics;

pub use config::TelemetryConfig;
pub use logging::{build_filter, init_logging};
pub use metrics::{
    gather_metrics, register_collectors, register_metrics, HistogramTimer, AUTH_ATTEMPTS, AUTH_DURATION,
    AUTH_FAILURES, NONCES_ISSUED, SELF_TEST_RUNS, SIGNATURE_RECOVERIES,
};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TelemetryError {
    #[error("Failed to initialize logging: {0}")]
    LoggingInit(String),

    #[error("Failed to initialize Prometheus metrics: {0}")]
    MetricsInit(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Register metrics and install the logging subscriber.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    // Metrics first
    register_metrics()?;
    init_logging(config)
}

/// Convenience macro for recording a metric increment.
#[macro_export]
macro_rules! metric_inc {
    ($metric:expr) => {
        $metric.inc()
    };
    ($metric:expr, $labels:expr) => {
        $metric.with_label_values($labels).inc()
    };
}
