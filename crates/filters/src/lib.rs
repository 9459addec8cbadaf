#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `filters` decides which names take part in a transfer. It compiles
//! rsync's classic include/exclude patterns, matches them against relative
//! paths with fnmatch semantics, and maintains the ordered rule lists built
//! from command-line options, rule files and the CVS ignore defaults.
//!
//! # Design
//!
//! - [`FilterRule`] is a compiled pattern. Compilation strips the `"+ "` or
//!   `"- "` polarity prefix and the directory-only trailing `/`, and records
//!   the wildcard, `**` and slash information the matcher relies on.
//! - [`FilterRule::matches`] applies one rule to one name. Rules without a
//!   slash match the final component only, a leading `/` anchors a rule at
//!   the transfer root, and `**` may cross directory boundaries while `*`
//!   and `?` may not.
//! - [`FilterList`] is an ordered list of rules. The entry `!` clears it.
//! - [`FilterContext`] owns the global list and the loader configuration.
//!   [`is_excluded`] consults the global list first and an optional
//!   per-directory list second.
//!
//! # Invariants
//!
//! - The first matching rule decides; later rules are never consulted.
//! - The root name `.` is never excluded.
//! - Names that match no rule are included.
//! - Rule files are read completely before any of their rules is added.
//!
//! # Errors
//!
//! Loading rule files reports [`FilterError`], which maps to the
//! [`ExitCode::FileIo`] process status through [`HasExitCode`].
//!
//! # Examples
//!
//! ```
//! use filters::{FilterAction, FilterContext};
//!
//! let mut filters = FilterContext::default();
//! filters.add_pattern("+ important.o", FilterAction::Exclude);
//! filters.add_pattern("*.o", FilterAction::Exclude);
//! filters.add_pattern("/build/", FilterAction::Exclude);
//!
//! assert!(filters.allows("src/important.o", None, false));
//! assert!(!filters.allows("src/main.o", None, false));
//! assert!(!filters.allows("build", None, true));
//! assert!(filters.allows("src/build", None, true));
//! ```

mod action;
mod config;
mod context;
pub mod cvs;
mod debug_filter;
mod decision;
mod error;
mod exit_code;
mod list;
mod matcher;
mod merge;
mod probe;
mod rule;
mod tokens;
pub mod wildmatch;

pub use action::FilterAction;
pub use config::{
    DEFAULT_IGNORE_ENV, DEFAULT_IGNORE_FILE, FilterConfig, LineTerminator, MAX_PATH_LEN,
};
pub use context::FilterContext;
pub use cvs::{CVS_DEFAULT_PATTERNS, cvs_default_patterns, cvs_exclusion_rules};
pub use decision::{ROOT_NAME, deciding_rule, is_excluded};
pub use error::FilterError;
pub use exit_code::{ExitCode, HasExitCode};
pub use list::{CLEAR_TOKEN, FilterList};
pub use merge::{FileRequirement, read_rule_lines};
pub use rule::FilterRule;
pub use tokens::{RuleTokens, rule_tokens};
pub use wildmatch::{MatchMode, wildmatch, wildmatch_bytes};
