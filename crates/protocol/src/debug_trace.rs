//! Protocol diagnostics for the exclude list exchange.
//!
//! Reports go through the `logging` crate under the `proto` debug flag and,
//! with the `tracing` feature, also as structured events.

use logging::{DebugFlag, debug_gte, emit_debug};

#[cfg(feature = "tracing")]
const PROTOCOL_TARGET: &str = "rsync::protocol";

const EXCHANGE_LEVEL: u8 = 1;

/// Reports an exclude list written to the peer.
pub(crate) fn report_list_sent(entries: usize, protocol: u8) {
    #[cfg(feature = "tracing")]
    tracing::debug!(
        target: PROTOCOL_TARGET,
        entries = entries,
        protocol = protocol,
        "exclude_list_sent"
    );
    if debug_gte(DebugFlag::Proto, EXCHANGE_LEVEL) {
        emit_debug(
            DebugFlag::Proto,
            EXCHANGE_LEVEL,
            format!("sent exclude list: {entries} entries (protocol {protocol})"),
        );
    }
}

/// Reports an exclude list read from the peer.
pub(crate) fn report_list_received(entries: usize) {
    #[cfg(feature = "tracing")]
    tracing::debug!(
        target: PROTOCOL_TARGET,
        entries = entries,
        "exclude_list_received"
    );
    if debug_gte(DebugFlag::Proto, EXCHANGE_LEVEL) {
        emit_debug(
            DebugFlag::Proto,
            EXCHANGE_LEVEL,
            format!("received exclude list: {entries} entries"),
        );
    }
}

/// Reports a rule left out of the exchange.
pub(crate) fn report_rule_skipped(pattern: &str) {
    #[cfg(feature = "tracing")]
    tracing::debug!(target: PROTOCOL_TARGET, pattern = %pattern, "exclude_rule_skipped");
    if debug_gte(DebugFlag::Proto, EXCHANGE_LEVEL) {
        emit_debug(
            DebugFlag::Proto,
            EXCHANGE_LEVEL,
            format!("not sending exclude rule [{pattern}]"),
        );
    }
}

#[cfg(test)]
mod tests {
    use logging::VerbosityConfig;

    use super::*;

    #[test]
    fn reports_need_proto_level_one() {
        logging::init(VerbosityConfig::from_verbose_level(2));
        logging::drain_events();
        report_list_sent(3, 29);
        assert!(logging::drain_events().is_empty());

        logging::init(VerbosityConfig::from_verbose_level(3));
        report_list_sent(3, 29);
        report_list_received(2);
        report_rule_skipped("");
        let messages: Vec<_> = logging::drain_events()
            .into_iter()
            .map(|event| event.message().to_owned())
            .collect();
        assert_eq!(
            messages,
            [
                "sent exclude list: 3 entries (protocol 29)",
                "received exclude list: 2 entries",
                "not sending exclude rule []",
            ]
        );
        logging::init(VerbosityConfig::default());
    }
}
