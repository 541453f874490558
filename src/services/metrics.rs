//! Metrics Service
//!
//! Prometheus-backed metrics sink. Gauges are registered with an async
//! supplier that is re-evaluated on every render, so a scrape always
//! reflects live state; nothing is cached between scrapes.

use std::sync::Arc;

use futures::future::BoxFuture;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusRecorder};
use parking_lot::RwLock;

/// Async value supplier polled at every scrape
pub type GaugeSupplier = Arc<dyn Fn() -> BoxFuture<'static, f64> + Send + Sync>;

#[derive(Clone)]
struct LiveGauge {
    name: String,
    supplier: GaugeSupplier,
}

/// Metrics sink with per-scrape live gauges
///
/// Owns its own recorder rather than installing a global one, so several
/// instances can coexist in one process (tests spin up one per server).
#[derive(Clone)]
pub struct MetricsService {
    recorder: Arc<PrometheusRecorder>,
    gauges: Arc<RwLock<Vec<LiveGauge>>>,
}

impl MetricsService {
    pub fn new() -> Self {
        Self {
            recorder: Arc::new(PrometheusBuilder::new().build_recorder()),
            gauges: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Register a live gauge
    ///
    /// The description shows up as the `# HELP` line of the exposition.
    pub fn register_gauge(
        &self,
        name: &'static str,
        description: &'static str,
        supplier: GaugeSupplier,
    ) {
        metrics::with_local_recorder(self.recorder.as_ref(), || {
            metrics::describe_gauge!(name, description);
        });
        self.gauges.write().push(LiveGauge {
            name: name.to_string(),
            supplier,
        });
        tracing::debug!(gauge = name, "Registered live gauge");
    }

    /// Evaluate every registered supplier, then render the exposition text
    pub async fn render(&self) -> String {
        let gauges: Vec<LiveGauge> = self.gauges.read().clone();
        for gauge in gauges {
            let value = (gauge.supplier)().await;
            metrics::with_local_recorder(self.recorder.as_ref(), || {
                metrics::gauge!(gauge.name.clone()).set(value);
            });
        }
        self.recorder.handle().render()
    }
}

impl Default for MetricsService {
    fn default() -> Self {
        Self::new()
    }
}
