//! Filter diagnostics.
//!
//! Each report renders the classic rsync message through the `logging` crate
//! when the `filter` debug level is high enough. With the `tracing` feature
//! enabled each report also produces exactly one structured event: match
//! decisions at `debug`, list changes at `trace`.

use logging::{DebugFlag, debug_gte, emit_debug};

use crate::{FilterAction, FilterRule};

/// Target name for structured tracing events.
#[cfg(feature = "tracing")]
const FILTER_TARGET: &str = "rsync::filter";

/// Level at which match decisions are reported.
pub(crate) const MATCH_LEVEL: u8 = 1;

/// Level at which list mutations are reported.
pub(crate) const LIST_LEVEL: u8 = 2;

/// Reports that `raw` was appended with `default_action` as its polarity.
pub(crate) fn report_rule_added(raw: &str, default_action: FilterAction) {
    trace_rule_added(raw, default_action);
    if debug_gte(DebugFlag::Filter, LIST_LEVEL) {
        emit_debug(
            DebugFlag::Filter,
            LIST_LEVEL,
            format!("add_exclude({raw},{default_action})"),
        );
    }
}

/// Reports that a list was emptied by a `!` entry.
pub(crate) fn report_list_cleared() {
    trace_list_cleared();
    if debug_gte(DebugFlag::Filter, LIST_LEVEL) {
        emit_debug(
            DebugFlag::Filter,
            LIST_LEVEL,
            "clearing exclude list".to_owned(),
        );
    }
}

/// Reports the rule that decided the fate of `name`.
pub(crate) fn report_match(name: &str, rule: &FilterRule, is_dir: bool) {
    trace_match(name, rule, is_dir);
    if debug_gte(DebugFlag::Filter, MATCH_LEVEL) {
        let verb = if rule.is_include() {
            "including"
        } else {
            "excluding"
        };
        let kind = if is_dir { "directory" } else { "file" };
        emit_debug(
            DebugFlag::Filter,
            MATCH_LEVEL,
            format!(
                "{verb} {kind} {name} because of pattern {}",
                rule.display_pattern()
            ),
        );
    }
}

#[cfg(feature = "tracing")]
#[inline]
fn trace_rule_added(raw: &str, default_action: FilterAction) {
    tracing::trace!(
        target: FILTER_TARGET,
        pattern = %raw,
        default_action = %default_action,
        "filter_rule_added"
    );
}

#[cfg(not(feature = "tracing"))]
#[inline]
const fn trace_rule_added(_raw: &str, _default_action: FilterAction) {}

#[cfg(feature = "tracing")]
#[inline]
fn trace_list_cleared() {
    tracing::trace!(target: FILTER_TARGET, "filter_list_cleared");
}

#[cfg(not(feature = "tracing"))]
#[inline]
const fn trace_list_cleared() {}

#[cfg(feature = "tracing")]
#[inline]
fn trace_match(name: &str, rule: &FilterRule, is_dir: bool) {
    tracing::debug!(
        target: FILTER_TARGET,
        path = %name,
        pattern = %rule.display_pattern(),
        is_dir = is_dir,
        is_include = rule.is_include(),
        "filter_rule_matched"
    );
}

#[cfg(not(feature = "tracing"))]
#[inline]
const fn trace_match(_name: &str, _rule: &FilterRule, _is_dir: bool) {}
