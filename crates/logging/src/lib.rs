#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` implements the verbosity flag system shared by the filter engine
//! and the exclude list codec. Diagnostics are grouped into [`DebugFlag`]
//! categories whose levels are configured per thread, either from a classic
//! `-v` count ([`VerbosityConfig::from_verbose_level`]) or from individual
//! `--debug=FLAG[N]` tokens ([`apply_debug_flag`]).
//!
//! # Design
//!
//! Call sites gate message construction with [`debug_gte`] and then record the
//! rendered text with [`emit_debug`]. Events accumulate in a thread-local
//! buffer that front ends drain with [`drain_events`] and print in order.
//! Warnings bypass the level check and are always recorded.
//!
//! With the `tracing` feature enabled warnings are also forwarded to the
//! `tracing` crate, and [`init_tracing`] installs a subscriber whose filter
//! mirrors the verbosity configuration for the flag targets
//! (`rsync::filter`, `rsync::protocol`) that reporting crates emit their
//! structured events under.
//!
//! # Examples
//!
//! ```
//! use logging::{DebugFlag, DiagnosticEvent, VerbosityConfig};
//!
//! logging::init(VerbosityConfig::from_verbose_level(2));
//! if logging::debug_gte(DebugFlag::Filter, 1) {
//!     logging::emit_debug(DebugFlag::Filter, 1, "excluding file a.o".to_owned());
//! }
//!
//! let events = logging::drain_events();
//! assert_eq!(events.len(), 1);
//! assert_eq!(events[0].message(), "excluding file a.o");
//! ```

mod config;
mod levels;
mod thread_local;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use config::VerbosityConfig;
pub use levels::{DebugFlag, DebugLevels};
pub use thread_local::{
    DiagnosticEvent, apply_debug_flag, debug_gte, drain_events, emit_debug, emit_warning, init,
};
#[cfg(feature = "tracing")]
pub use tracing_bridge::{filter_directives, init_tracing};
