use serde::{Deserialize, Serialize};
use std::cell::RefCell;

///
/// EventReport
/// Ephemeral, in-memory counters for amount-session transitions.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct EventReport {
    pub edits: EditCounters,
    pub session: SessionCounters,
}

///
/// EditCounters
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct EditCounters {
    pub accepted: u64,
    pub truncated: u64,
    pub cleared: u64,
    pub rejected: u64,
}

impl EditCounters {
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.accepted
            .saturating_add(self.truncated)
            .saturating_add(self.cleared)
            .saturating_add(self.rejected)
    }
}

///
/// SessionCounters
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct SessionCounters {
    // decimals changes, and how many of them re-derived the base unit
    pub decimals_changes: u64,
    pub decimals_recomputes: u64,

    // external force-set instructions
    pub forced: u64,
    pub forced_invalid: u64,
    pub resets: u64,
}

thread_local! {
    static EVENT_STATE: RefCell<EventReport> = RefCell::new(EventReport::default());
}

/// Borrow metrics immutably.
pub(crate) fn with_state<R>(f: impl FnOnce(&EventReport) -> R) -> R {
    EVENT_STATE.with(|m| f(&m.borrow()))
}

/// Borrow metrics mutably.
pub(crate) fn with_state_mut<R>(f: impl FnOnce(&mut EventReport) -> R) -> R {
    EVENT_STATE.with(|m| f(&mut m.borrow_mut()))
}

/// Reset all counters.
pub(crate) fn reset_all() {
    with_state_mut(|m| *m = EventReport::default());
}

/// Snapshot the current counters.
pub(crate) fn report() -> EventReport {
    with_state(Clone::clone)
}
