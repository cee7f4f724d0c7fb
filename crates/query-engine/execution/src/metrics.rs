//! Metrics setup and update for our node.

use prometheus::core::{AtomicU64, GenericCounter};
use prometheus::{Histogram, HistogramOpts, IntCounter, Opts, Registry};

/// The collection of all metrics exposed through the `/metrics` endpoint.
#[derive(Debug, Clone)]
pub struct Metrics {
    query_total: GenericCounter<AtomicU64>,
    query_error_total: GenericCounter<AtomicU64>,
    rows_total: GenericCounter<AtomicU64>,
    item_error_total: GenericCounter<AtomicU64>,
    query_duration_seconds: Histogram,
}

impl Metrics {
    /// Set up counters and histograms used to produce Prometheus metrics.
    pub fn initialize(metrics_registry: &mut Registry) -> Result<Self, prometheus::Error> {
        let query_total = add_int_counter_metric(
            metrics_registry,
            "google_ads_node_query_total",
            "Total successful queries.",
        )?;

        let query_error_total = add_int_counter_metric(
            metrics_registry,
            "google_ads_node_query_error_total",
            "Total queries rejected by Google Ads or failing to reach it.",
        )?;

        let rows_total = add_int_counter_metric(
            metrics_registry,
            "google_ads_node_rows_total",
            "Total result rows returned by Google Ads.",
        )?;

        let item_error_total = add_int_counter_metric(
            metrics_registry,
            "google_ads_node_item_error_total",
            "Total input items that failed, whether or not execution continued.",
        )?;

        let query_duration_seconds = add_histogram_metric(
            metrics_registry,
            "google_ads_node_query_duration_seconds",
            "Time taken by a Google Ads query, including all result pages, in seconds.",
        )?;

        Ok(Self {
            query_total,
            query_error_total,
            rows_total,
            item_error_total,
            query_duration_seconds,
        })
    }

    pub fn record_successful_query(&self, rows: usize) {
        self.query_total.inc();
        self.rows_total.inc_by(rows as u64);
    }

    pub fn record_failed_query(&self) {
        self.query_error_total.inc();
    }

    pub fn record_item_error(&self) {
        self.item_error_total.inc();
    }

    pub fn time_query(&self) -> prometheus::HistogramTimer {
        self.query_duration_seconds.start_timer()
    }
}

/// Create a new int counter metric and register it with the provided Prometheus Registry
fn add_int_counter_metric(
    metrics_registry: &mut Registry,
    metric_name: &str,
    metric_description: &str,
) -> Result<GenericCounter<AtomicU64>, prometheus::Error> {
    let int_counter = IntCounter::with_opts(Opts::new(metric_name, metric_description))?;
    register_collector(metrics_registry, int_counter)
}

/// Create a new histogram metric and register it with the provided Prometheus Registry
fn add_histogram_metric(
    metrics_registry: &mut Registry,
    metric_name: &str,
    metric_description: &str,
) -> Result<Histogram, prometheus::Error> {
    let histogram = Histogram::with_opts(HistogramOpts::new(metric_name, metric_description))?;
    register_collector(metrics_registry, histogram)
}

/// Register a new collector with the registry, and return it for later use.
fn register_collector<Collector: prometheus::core::Collector + std::clone::Clone + 'static>(
    metrics_registry: &mut Registry,
    collector: Collector,
) -> Result<Collector, prometheus::Error> {
    metrics_registry.register(Box::new(collector.clone()))?;
    Ok(collector)
}
