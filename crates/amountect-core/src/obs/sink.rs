//! Metrics sink boundary.
//!
//! Session logic MUST NOT touch obs::metrics directly.
//! All instrumentation flows through MetricsEvent and MetricsSink.
use crate::obs::metrics::{self, EventReport};
use derive_more::Display;
use std::{cell::RefCell, rc::Rc};

thread_local! {
    static SINK_OVERRIDE: RefCell<Option<Rc<dyn MetricsSink>>> = RefCell::new(None);
}

///
/// EditOutcome
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum EditOutcome {
    #[display("accepted")]
    Accepted,
    #[display("truncated")]
    Truncated,
    #[display("cleared")]
    Cleared,
    #[display("rejected")]
    Rejected,
}

///
/// MetricsEvent
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MetricsEvent {
    Edit { outcome: EditOutcome },
    DecimalsChanged { recomputed: bool },
    Forced { valid: bool },
    Reset,
}

///
/// MetricsSink
///

pub trait MetricsSink {
    fn record(&self, event: MetricsEvent);
}

/// GlobalMetricsSink
/// Default sink that writes into the thread-local counters.
/// Acts as the concrete sink when no scoped override is installed.

pub(crate) struct GlobalMetricsSink;

impl MetricsSink for GlobalMetricsSink {
    fn record(&self, event: MetricsEvent) {
        metrics::with_state_mut(|m| match event {
            MetricsEvent::Edit { outcome } => {
                let counter = match outcome {
                    EditOutcome::Accepted => &mut m.edits.accepted,
                    EditOutcome::Truncated => &mut m.edits.truncated,
                    EditOutcome::Cleared => &mut m.edits.cleared,
                    EditOutcome::Rejected => &mut m.edits.rejected,
                };
                *counter = counter.saturating_add(1);
            }

            MetricsEvent::DecimalsChanged { recomputed } => {
                m.session.decimals_changes = m.session.decimals_changes.saturating_add(1);
                if recomputed {
                    m.session.decimals_recomputes =
                        m.session.decimals_recomputes.saturating_add(1);
                }
            }

            MetricsEvent::Forced { valid } => {
                m.session.forced = m.session.forced.saturating_add(1);
                if !valid {
                    m.session.forced_invalid = m.session.forced_invalid.saturating_add(1);
                }
            }

            MetricsEvent::Reset => {
                m.session.resets = m.session.resets.saturating_add(1);
            }
        });
    }
}

pub(crate) const GLOBAL_METRICS_SINK: GlobalMetricsSink = GlobalMetricsSink;

pub(crate) fn record(event: MetricsEvent) {
    // clone out of the slot so a sink may itself call record
    let sink = SINK_OVERRIDE.with(|cell| cell.borrow().clone());

    match sink {
        Some(sink) => sink.record(event),
        None => GLOBAL_METRICS_SINK.record(event),
    }
}

/// Snapshot the current metrics state.
#[must_use]
pub fn metrics_report() -> EventReport {
    metrics::report()
}

/// Reset all metrics state.
pub fn metrics_reset_all() {
    metrics::reset_all();
}

/// Run a closure with a temporary metrics sink override.
///
/// The previous sink is restored on every exit, including unwind.
pub fn with_metrics_sink<T>(sink: Rc<dyn MetricsSink>, f: impl FnOnce() -> T) -> T {
    struct Guard(Option<Rc<dyn MetricsSink>>);

    impl Drop for Guard {
        fn drop(&mut self) {
            let prev = self.0.take();
            SINK_OVERRIDE.with(|cell| {
                *cell.borrow_mut() = prev;
            });
        }
    }

    let prev = SINK_OVERRIDE.with(|cell| cell.borrow_mut().replace(sink));
    let _guard = Guard(prev);

    f()
}

///
/// TESTS
///
