//! Prometheus metrics for the authentication pipeline.
//!
//! All metrics follow the naming convention: `wa_<area>_<metric>_<unit>`

use lazy_static::lazy_static;
use prometheus::{
    exponential_buckets, Counter, CounterVec, Encoder, Histogram, HistogramOpts, Opts, Registry,
    TextEncoder,
};
use std::sync::OnceLock;

use crate::TelemetryError;

lazy_static! {
    /// Global metrics registry
    pub static ref REGISTRY: Registry = Registry::new();

    // =========================================================================
    // AUTHENTICATION METRICS
    // =========================================================================

    /// Sign-in attempts by outcome
    pub static ref AUTH_ATTEMPTS: CounterVec = CounterVec::new(
        Opts::new("wa_auth_attempts_total", "Total SIWE authentication attempts"),
        &["outcome"]  // outcome: success/failure
    ).expect("metric creation failed");

    /// Sign-in failures by reason
    pub static ref AUTH_FAILURES: CounterVec = CounterVec::new(
        Opts::new("wa_auth_failures_total", "Failed SIWE authentications by reason"),
        &["reason"]
    ).expect("metric creation failed");

    /// Time spent in the verification pipeline
    pub static ref AUTH_DURATION: Histogram = Histogram::with_opts(
        HistogramOpts::new(
            "wa_auth_verification_duration_seconds",
            "Time spent verifying one sign-in"
        ).buckets(exponential_buckets(0.0001, 2.0, 14).expect("valid buckets"))
    ).expect("metric creation failed");

    /// Nonces handed out
    pub static ref NONCES_ISSUED: Counter = Counter::new(
        "wa_auth_nonces_issued_total",
        "Total nonces generated"
    ).expect("metric creation failed");

    // =========================================================================
    // SIGNATURE METRICS
    // =========================================================================

    /// Signature recoveries by result
    pub static ref SIGNATURE_RECOVERIES: CounterVec = CounterVec::new(
        Opts::new("wa_signature_recoveries_total", "Total signature recoveries"),
        &["result"]  // result: recovered/rejected
    ).expect("metric creation failed");

    // =========================================================================
    // STARTUP METRICS
    // =========================================================================

    /// Self-test runs by result
    pub static ref SELF_TEST_RUNS: CounterVec = CounterVec::new(
        Opts::new("wa_self_test_runs_total", "Cryptographic self-test runs"),
        &["result"]  // result: passed/failed
    ).expect("metric creation failed");
}

static REGISTRATION: OnceLock<Result<(), TelemetryError>> = OnceLock::new();

/// Register all metrics with `registry`.
///
/// A metric that is already registered counts as registered.
pub fn register_collectors(registry: &Registry) -> Result<(), TelemetryError> {
    let metrics: Vec<Box<dyn prometheus::core::Collector>> = vec![
        // Authentication
        Box::new(AUTH_ATTEMPTS.clone()),
        Box::new(AUTH_FAILURES.clone()),
        Box::new(AUTH_DURATION.clone()),
        Box::new(NONCES_ISSUED.clone()),
        // Signatures
        Box::new(SIGNATURE_RECOVERIES.clone()),
        // Startup
        Box::new(SELF_TEST_RUNS.clone()),
    ];

    for metric in metrics {
        match registry.register(metric) {
            Ok(()) | Err(prometheus::Error::AlreadyReg) => {}
            Err(e) => return Err(TelemetryError::MetricsInit(e.to_string())),
        }
    }
    Ok(())
}

/// Register all metrics with the global registry.
///
/// Registration runs once; every call returns that first outcome.
pub fn register_metrics() -> Result<(), TelemetryError> {
    REGISTRATION
        .get_or_init(|| register_collectors(&REGISTRY))
        .clone()
}

/// Encode all metrics as Prometheus text format.
pub fn gather_metrics() -> Result<String, TelemetryError> {
    register_metrics()?;

    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| TelemetryError::MetricsInit(e.to_string()))?;
    String::from_utf8(buffer).map_err(|e| TelemetryError::MetricsInit(e.to_string()))
}

/// Timer guard for automatic histogram observation.
pub struct HistogramTimer {
    histogram: Histogram,
    start: std::time::Instant,
}

impl HistogramTimer {
    /// Start a new timer for the given histogram.
    pub fn new(histogram: &Histogram) -> Self {
        Self {
            histogram: histogram.clone(),
            start: std::time::Instant::now(),
        }
    }
}

impl Drop for HistogramTimer {
    fn drop(&mut self) {
        let duration = self.start.elapsed().as_secs_f64();
        self.histogram.observe(duration);
    }
}

/// Start timing for a histogram. Observation happens on drop.
#[macro_export]
macro_rules! time_histogram {
    ($histogram:expr) => {
        $crate::metrics::HistogramTimer::new(&$histogram)
    };
}
