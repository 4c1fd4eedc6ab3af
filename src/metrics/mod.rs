use prometheus::{Counter, CounterVec, Gauge, Histogram, HistogramOpts, Opts, Registry};
use std::sync::Arc;

/// Prometheus metrics for the metadata store
#[derive(Clone)]
pub struct StoreMetrics {
    // Counters
    pub records_indexed: Counter,
    pub records_replaced: Counter,
    pub records_deleted: Counter,
    pub searches_total: CounterVec,

    // Gauges
    pub total_records: Gauge,

    // Histograms
    pub search_latency: Histogram,

    // Registry
    registry: Arc<Registry>,
}

impl StoreMetrics {
    /// Create a new StoreMetrics instance
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        // Counters
        let records_indexed = Counter::with_opts(Opts::new(
            "metadex_records_indexed_total",
            "Total number of records created",
        ))?;
        registry.register(Box::new(records_indexed.clone()))?;

        let records_replaced = Counter::with_opts(Opts::new(
            "metadex_records_replaced_total",
            "Total number of records replaced",
        ))?;
        registry.register(Box::new(records_replaced.clone()))?;

        let records_deleted = Counter::with_opts(Opts::new(
            "metadex_records_deleted_total",
            "Total number of records deleted",
        ))?;
        registry.register(Box::new(records_deleted.clone()))?;

        let searches_total = CounterVec::new(
            Opts::new(
                "metadex_searches_total",
                "Total number of searches by outcome",
            ),
            &["outcome"],
        )?;
        registry.register(Box::new(searches_total.clone()))?;

        // Gauges
        let total_records = Gauge::with_opts(Opts::new(
            "metadex_total_records",
            "Current number of records in the store",
        ))?;
        registry.register(Box::new(total_records.clone()))?;

        // Histograms
        let search_latency = Histogram::with_opts(
            HistogramOpts::new("metadex_search_latency_seconds", "Search operation latency")
                .buckets(vec![0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0]),
        )?;
        registry.register(Box::new(search_latency.clone()))?;

        Ok(Self {
            records_indexed,
            records_replaced,
            records_deleted,
            searches_total,
            total_records,
            search_latency,
            registry: Arc::new(registry),
        })
    }

    /// Get the metrics registry for the exposition endpoint
    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}
