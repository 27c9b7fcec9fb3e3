use prometheus_client::metrics::{
    counter::Counter, family::Family, gauge::Gauge, histogram::Histogram,
};
use prometheus_client::registry::Registry;
use prometheus_client_derive_encode::{EncodeLabelSet, EncodeLabelValue};
use std::{
    sync::{Arc, atomic::AtomicU64},
    time::{Duration, SystemTime, UNIX_EPOCH},
};
use sysinfo::{Pid, ProcessRefreshKind, ProcessesToUpdate, System};

const SAMPLE_INTERVAL: Duration = Duration::from_secs(15);

/// Resource usage of the running server, sampled by [`run_metrics_collector`].
#[derive(Debug, Clone, Default)]
pub struct ProcessMetrics {
    pub resident_memory_bytes: Gauge,
    pub virtual_memory_bytes: Gauge,
    pub cpu_usage_percent: Gauge<f64, AtomicU64>,
    pub start_time_seconds: Gauge,
}

impl ProcessMetrics {
    pub fn new() -> Self {
        let metrics = Self::default();
        let started = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        metrics.start_time_seconds.set(started as i64);
        metrics
    }

    pub fn register(&self, registry: &mut Registry) {
        registry.register(
            "process_resident_memory_bytes",
            "Resident memory of the coffee shop server",
            self.resident_memory_bytes.clone(),
        );
        registry.register(
            "process_virtual_memory_bytes",
            "Virtual memory of the coffee shop server",
            self.virtual_memory_bytes.clone(),
        );
        registry.register(
            "process_cpu_usage_percent",
            "CPU usage of the coffee shop server since the previous sample",
            self.cpu_usage_percent.clone(),
        );
        registry.register(
            "process_start_time_seconds",
            "Start time of the process since unix epoch in seconds",
            self.start_time_seconds.clone(),
        );
    }

    /// Refreshes this process only. CPU usage needs two refreshes of the same
    /// `System` before it reads non-zero.
    pub fn sample(&self, sys: &mut System) {
        let pid = Pid::from_u32(std::process::id());
        sys.refresh_processes_specifics(
            ProcessesToUpdate::Some(&[pid]),
            true,
            ProcessRefreshKind::nothing().with_memory().with_cpu(),
        );

        if let Some(process) = sys.process(pid) {
            self.resident_memory_bytes.set(process.memory() as i64);
            self.virtual_memory_bytes
                .set(process.virtual_memory() as i64);
            self.cpu_usage_percent.set(f64::from(process.cpu_usage()));
        }
    }
}

pub async fn run_metrics_collector(metrics: Arc<ProcessMetrics>) {
    let mut sys = System::new();
    let mut interval = tokio::time::interval(SAMPLE_INTERVAL);
    loop {
        interval.tick().await;
        metrics.sample(&mut sys);
    }
}

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, EncodeLabelValue)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, EncodeLabelValue)]
pub enum Status {
    Success,
    Error,
}

/// `operation` is the span name, e.g. `CreateItem` or `GenerateInvoice`.
#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct Labels {
    pub operation: String,
    pub method: Method,
    pub status: Status,
}

#[derive(Clone, Debug)]
pub struct Metrics {
    pub request_counter: Family<Labels, Counter>,
    pub request_duration: Family<Labels, Histogram>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            request_counter: Family::default(),
            // Dynamo round trips sit in the tens of milliseconds; uploads and
            // invoices run longer.
            request_duration: Family::new_with_constructor(|| {
                Histogram::new([0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0].into_iter())
            }),
        }
    }

    pub fn record(&self, operation: &str, method: Method, status: Status, duration_secs: f64) {
        let labels = Labels {
            operation: operation.to_string(),
            method,
            status,
        };
        self.request_counter.get_or_create(&labels).inc();
        self.request_duration
            .get_or_create(&labels)
            .observe(duration_secs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prometheus_client::encoding::text::encode;

    fn labels(operation: &str, method: Method, status: Status) -> Labels {
        Labels {
            operation: operation.to_string(),
            method,
            status,
        }
    }

    #[test]
    fn operations_are_counted_separately() {
        let metrics = Metrics::new();
        metrics.record("FindItem", Method::Get, Status::Success, 0.01);
        metrics.record("FindItem", Method::Get, Status::Success, 0.02);
        metrics.record("SearchItems", Method::Get, Status::Success, 0.02);
        metrics.record("DeleteOrder", Method::Delete, Status::Error, 0.5);

        let count = |l: Labels| metrics.request_counter.get_or_create(&l).get();
        assert_eq!(count(labels("FindItem", Method::Get, Status::Success)), 2);
        assert_eq!(count(labels("SearchItems", Method::Get, Status::Success)), 1);
        assert_eq!(count(labels("DeleteOrder", Method::Delete, Status::Error)), 1);
    }

    #[test]
    fn operation_label_is_encoded() {
        let mut registry = Registry::default();
        let metrics = Metrics::new();
        registry.register(
            "order_service_request_counter",
            "Total number of requests",
            metrics.request_counter.clone(),
        );
        metrics.record("CreateOrder", Method::Post, Status::Success, 0.1);

        let mut buffer = String::new();
        encode(&mut buffer, &registry).unwrap();

        assert!(buffer.contains("order_service_request_counter_total"));
        assert!(buffer.contains("operation=\"CreateOrder\""));
        assert!(buffer.contains("method=\"Post\""));
    }

    #[test]
    fn sampling_reads_this_process() {
        let metrics = ProcessMetrics::new();
        let mut sys = System::new();
        metrics.sample(&mut sys);

        assert!(metrics.resident_memory_bytes.get() > 0);
        assert!(metrics.start_time_seconds.get() > 0);

        let mut registry = Registry::default();
        metrics.register(&mut registry);
        let mut buffer = String::new();
        encode(&mut buffer, &registry).unwrap();
        assert!(buffer.contains("process_resident_memory_bytes"));
    }
}
