//! crates/logging/src/tracing_bridge.rs
//! Bridge between rsync's verbosity flags and the `tracing` ecosystem.
//!
//! Warnings recorded through [`emit_warning`](crate::emit_warning) are
//! forwarded to `tracing`. Debug reports are not: the crates that produce them
//! emit one structured event per report under the target of their
//! [`DebugFlag`], at `debug` for level 1 and `trace` above. [`init_tracing`]
//! installs a formatting subscriber whose filter mirrors a
//! [`VerbosityConfig`] using the same mapping.
//!
//! ```rust,ignore
//! use logging::{VerbosityConfig, init_tracing};
//!
//! init_tracing(&VerbosityConfig::from_verbose_level(2))?;
//! ```

use super::config::VerbosityConfig;
use super::levels::DebugFlag;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::util::TryInitError;

pub(crate) fn forward_warning(message: &str) {
    tracing::warn!(target: "rsync::filter", "{message}");
}

/// Builds the `EnvFilter` directive string matching `config`.
///
/// Categories at level 0 are silenced, level 1 maps to `debug` and anything
/// higher to `trace`. Warnings always pass.
#[must_use]
pub fn filter_directives(config: &VerbosityConfig) -> String {
    let mut directives = vec![String::from("warn")];
    for flag in DebugFlag::ALL {
        let level = match config.debug.get(flag) {
            0 => continue,
            1 => "debug",
            _ => "trace",
        };
        directives.push(format!("{}={level}", flag.target()));
    }
    directives.join(",")
}

/// Installs a global `tracing` subscriber configured from `config`.
///
/// Also initialises the thread-local verbosity so gated call sites agree with
/// the subscriber filter.
pub fn init_tracing(config: &VerbosityConfig) -> Result<(), TryInitError> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    crate::init(config.clone());

    tracing_subscriber::registry()
        .with(EnvFilter::new(filter_directives(config)))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .try_init()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use tracing_subscriber::Layer;
    use tracing_subscriber::layer::{Context, SubscriberExt};

    use super::*;

    struct EventCounter(Arc<AtomicUsize>);

    impl<S: tracing::Subscriber> Layer<S> for EventCounter {
        fn on_event(&self, _event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn only_warnings_are_forwarded() {
        let count = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry().with(EventCounter(Arc::clone(&count)));

        tracing::subscriber::with_default(subscriber, || {
            crate::emit_debug(DebugFlag::Filter, 1, "local only".to_owned());
            crate::emit_warning("forwarded".to_owned());
        });
        crate::drain_events();

        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn quiet_config_only_passes_warnings() {
        assert_eq!(filter_directives(&VerbosityConfig::default()), "warn");
    }

    #[test]
    fn verbose_config_enables_filter_target() {
        let directives = filter_directives(&VerbosityConfig::from_verbose_level(2));
        assert_eq!(directives, "warn,rsync::filter=debug");
    }

    #[test]
    fn high_levels_map_to_trace() {
        let directives = filter_directives(&VerbosityConfig::from_verbose_level(3));
        assert!(directives.contains("rsync::filter=trace"));
        assert!(directives.contains("rsync::protocol=debug"));
    }
}
