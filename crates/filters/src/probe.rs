//! One-time sanity check of separator-aware matching.
//!
//! The first `**` rule compiled in a process verifies that a segment-mode
//! star refuses to cross `/`. A failure is only reported; matching is never
//! altered by the outcome.

use std::sync::OnceLock;

use logging::emit_warning;

use crate::wildmatch::{MatchMode, wildmatch};

static SEGMENT_MATCH_BROKEN: OnceLock<bool> = OnceLock::new();

/// Runs the probe on first call and returns whether matching is broken.
///
/// Subsequent calls return the cached outcome without warning again.
pub(crate) fn check_segment_matching() -> bool {
    *SEGMENT_MATCH_BROKEN.get_or_init(|| {
        let broken = wildmatch("a/b/*", "a/b/c/d", MatchMode::Segment);
        if broken {
            emit_warning("WARNING: fnmatch FNM_PATHNAME is broken on your system".to_owned());
        }
        broken
    })
}
