//! Observability: per-thread counters and the sink abstraction.
//!
//! Structured logs go through `tracing`; this crate never installs a
//! subscriber.

pub(crate) mod metrics;
pub(crate) mod sink;

// re-exports
pub use metrics::{EditCounters, EventReport, SessionCounters};
pub use sink::{
    EditOutcome, MetricsEvent, MetricsSink, metrics_report, metrics_reset_all, with_metrics_sink,
};
