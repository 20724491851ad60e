use metrics::{counter, describe_counter};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};

/// Install the Prometheus exporter as the global recorder and register the
/// service's counters. Returns the handle whose `render()` produces the
/// scrape payload.
pub fn init_metrics(models: &[String]) -> Result<PrometheusHandle, BuildError> {
    let handle = PrometheusBuilder::new().install_recorder()?;

    describe_counter!("stats_reads_total", "Stats computations per model");
    describe_counter!("stats_read_failures_total", "Stats computations that hit a read error");
    describe_counter!("recent_trades_failures_total", "Recent-trade reads that hit a read error");

    // Pre-register so every model shows up before its first request.
    for model in models {
        counter!("stats_reads_total", "model" => model.clone()).absolute(0);
    }

    Ok(handle)
}

/// A handle backed by a recorder that is not installed globally. Renders an
/// empty payload; used where a process-wide recorder may already exist.
pub fn detached_handle() -> PrometheusHandle {
    PrometheusBuilder::new().build_recorder().handle()
}
