//! Amount-entry session.
//!
//! One [`AmountSession`] backs one amount field for as long as it is mounted.
//! It owns the display text, the derived base-unit value, and enough history
//! to keep the two consistent when the asset's decimals change under it or a
//! caller forces a value in.
//!
//! Transitions return an [`AmountChange`] describing what the host should
//! forward to its form; the session itself never calls out.

use crate::{
    config::AmountConfig,
    convert::{MAX_DECIMALS, to_base_unit, to_display},
    literal::is_valid_decimal_literal,
    obs::sink::{self, EditOutcome, MetricsEvent},
    sanitize::{self, MaxInputLen, NormalizeSeparator, Sanitizer},
    value::AmountValue,
};
use derive_more::Display;
use tracing::{debug, warn};

///
/// ChangeOrigin
///
/// Why a value was emitted. Hosts fire their "input changed" callback for
/// `UserEdit` and their "side effect" callback for the others.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum ChangeOrigin {
    #[display("user_edit")]
    UserEdit,
    #[display("decimals_changed")]
    DecimalsChanged,
    #[display("forced")]
    Forced,
}

impl ChangeOrigin {
    #[must_use]
    pub const fn is_side_effect(self) -> bool {
        !matches!(self, Self::UserEdit)
    }
}

///
/// AmountChange
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AmountChange {
    pub value: AmountValue,
    pub origin: ChangeOrigin,
}

impl AmountChange {
    #[must_use]
    pub const fn new(value: AmountValue, origin: ChangeOrigin) -> Self {
        Self { value, origin }
    }
}

///
/// AmountSession
///
/// `decimals` is what the next conversion uses; `recorded_decimals` only
/// moves when a decimals change re-derives the value.
///
/// Decimals above [`MAX_DECIMALS`] are clamped on the way in.
///

#[derive(Clone, Debug)]
pub struct AmountSession {
    config: AmountConfig,
    display: String,
    value: AmountValue,
    decimals: u32,
    recorded_decimals: u32,
    dirty: bool,
}

impl AmountSession {
    #[must_use]
    pub fn new(initial_display: impl Into<String>, decimals: u32) -> Self {
        Self::with_config(AmountConfig::default(), initial_display, decimals)
    }

    #[must_use]
    pub fn with_config(
        config: AmountConfig,
        initial_display: impl Into<String>,
        decimals: u32,
    ) -> Self {
        let decimals = clamp_decimals(decimals);
        let display = initial_display.into();
        let value = if display.is_empty() {
            AmountValue::Cleared
        } else {
            to_base_unit(&display, decimals)
        };

        Self {
            config,
            display,
            value,
            decimals,
            recorded_decimals: decimals,
            dirty: false,
        }
    }

    ///
    /// ACCESSORS
    ///

    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    #[must_use]
    pub const fn value(&self) -> &AmountValue {
        &self.value
    }

    #[must_use]
    pub const fn decimals(&self) -> u32 {
        self.decimals
    }

    #[must_use]
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    #[must_use]
    pub const fn config(&self) -> &AmountConfig {
        &self.config
    }

    /// Max length the host widget should allow for the current display.
    #[must_use]
    pub fn max_input_len(&self) -> usize {
        sanitize::max_input_len(&self.display, self.decimals, self.config.integer_max_len)
    }

    ///
    /// TRANSITIONS
    ///

    /// Apply text typed by the user.
    pub fn on_user_edit(&mut self, raw: &str) -> AmountChange {
        self.dirty = true;

        let (value, outcome) = self.apply_edit(raw);
        sink::record(MetricsEvent::Edit { outcome });
        debug!(
            decimals = self.decimals,
            %outcome,
            display = %self.display,
            value = %value,
            "amount edit"
        );

        AmountChange::new(value, ChangeOrigin::UserEdit)
    }

    /// Record new decimals, re-deriving the value only once the user has
    /// interacted and the decimals actually moved.
    pub fn on_decimals_changed(&mut self, decimals: u32) -> Option<AmountChange> {
        let decimals = clamp_decimals(decimals);
        self.decimals = decimals;

        let recompute = self.dirty && decimals != self.recorded_decimals;
        sink::record(MetricsEvent::DecimalsChanged {
            recomputed: recompute,
        });

        if !recompute {
            debug!(decimals, dirty = self.dirty, "decimals changed, value kept");
            return None;
        }

        let display = self.display.clone();
        let (value, outcome) = self.apply_edit(&display);
        self.recorded_decimals = decimals;
        debug!(decimals, %outcome, value = %value, "decimals changed, value re-derived");

        Some(AmountChange::new(value, ChangeOrigin::DecimalsChanged))
    }

    /// Force a base-unit value in from outside, or reset with `None`.
    ///
    /// The emitted value is the caller's string unchanged; only the display
    /// is derived from it. An empty string is ignored. A reset emits nothing;
    /// the host owns its own form value.
    pub fn force_set(&mut self, external: Option<&str>) -> Option<AmountChange> {
        match external {
            None => {
                self.dirty = false;
                self.display.clear();
                self.value = AmountValue::Cleared;
                sink::record(MetricsEvent::Reset);
                debug!("amount reset");

                None
            }

            Some("") => {
                debug!("empty forced amount ignored");

                None
            }

            Some(external) => {
                let value = AmountValue::from_external(external);

                self.dirty = true;
                self.display = to_display(external, self.decimals);
                self.value = value.clone();

                sink::record(MetricsEvent::Forced {
                    valid: !value.is_invalid(),
                });
                debug!(
                    decimals = self.decimals,
                    display = %self.display,
                    value = %value,
                    "amount forced"
                );

                Some(AmountChange::new(value, ChangeOrigin::Forced))
            }
        }
    }

    // Shared edit pipeline: clear, normalize, validate, truncate, convert.
    // Leaves the display untouched when the text is rejected.
    fn apply_edit(&mut self, raw: &str) -> (AmountValue, EditOutcome) {
        if raw.is_empty() {
            self.display.clear();
            self.value = AmountValue::Cleared;

            return (AmountValue::Cleared, EditOutcome::Cleared);
        }

        let mut text = raw.to_string();

        if self.config.normalize_comma
            && let Err(err) = NormalizeSeparator.sanitize(&mut text)
        {
            warn!(%err, "separator normalization failed");
            return self.reject();
        }

        if !is_valid_decimal_literal(&text) {
            return self.reject();
        }

        let len = text.len();
        if let Err(err) =
            MaxInputLen::new(self.decimals, self.config.integer_max_len).sanitize(&mut text)
        {
            warn!(%err, "length sanitizer failed");
            return self.reject();
        }

        let outcome = if text.len() < len {
            EditOutcome::Truncated
        } else {
            EditOutcome::Accepted
        };

        let value = to_base_unit(&text, self.decimals);
        self.display = text;
        self.value = value.clone();

        (value, outcome)
    }

    fn reject(&mut self) -> (AmountValue, EditOutcome) {
        self.value = AmountValue::Invalid;

        (AmountValue::Invalid, EditOutcome::Rejected)
    }
}

fn clamp_decimals(decimals: u32) -> u32 {
    if decimals > MAX_DECIMALS {
        warn!(decimals, max = MAX_DECIMALS, "decimals clamped");
        return MAX_DECIMALS;
    }

    decimals
}

///
/// TESTS
///
