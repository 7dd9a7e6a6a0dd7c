//! ## Crate layout
//! - `core`: literal grammar, conversions, the amount session, sanitizers,
//!   validators, config and observability.
//! - `shell`: line commands for driving a session interactively
//!   (feature `shell`, see the `amount_shell` binary).
//!
//! The `prelude` module carries what a form host needs to wire one amount
//! field.

pub use amountect_core as core;

#[cfg(feature = "shell")]
pub mod shell;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use core::Error;

///
/// Prelude
///

pub mod prelude {
    pub use crate::core::{
        obs::{MetricsEvent, MetricsSink, metrics_report, with_metrics_sink},
        prelude::*,
        validate::{Gt, Gte, Lt, Lte, NonNegative, NotInvalid, Required, Validator},
    };
}
