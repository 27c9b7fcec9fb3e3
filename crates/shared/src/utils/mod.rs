mod logs;
mod metrics;
mod otel;
mod shutdown;

pub use self::logs::init_logger;
pub use self::metrics::{Method, Metrics, ProcessMetrics, Status, run_metrics_collector};
pub use self::otel::{OperationTracer, Telemetry, TelemetryProviders, TracingContext};
pub use self::shutdown::shutdown_signal;
