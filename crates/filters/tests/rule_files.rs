//! Loading rules from files (`--exclude-from`, `--include-from`).

use std::fs;
use std::path::Path;

use filters::{
    ExitCode, FileRequirement, FilterAction, FilterConfig, FilterContext, FilterError,
    HasExitCode, LineTerminator,
};
use tempfile::TempDir;

fn write_rules(dir: &TempDir, name: &str, contents: &[u8]) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn rendered(filters: &FilterContext) -> Vec<String> {
    filters.global().iter().map(ToString::to_string).collect()
}

#[test]
fn exclude_file_lines_become_rules_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_rules(&dir, "excludes", b"*.o\n; note\n# note\n\n+ keep.o\r/tmp/");

    let mut filters = FilterContext::default();
    let count = filters
        .add_file(&path, FilterAction::Exclude, FileRequirement::Required)
        .unwrap();

    assert_eq!(count, 3);
    assert_eq!(rendered(&filters), ["- *.o", "+ keep.o", "- /tmp/"]);
}

#[test]
fn include_file_defaults_to_include() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_rules(&dir, "includes", b"*.c\n- *.h\n");

    let mut filters = FilterContext::default();
    filters
        .add_file(&path, FilterAction::Include, FileRequirement::Required)
        .unwrap();

    assert_eq!(rendered(&filters), ["+ *.c", "- *.h"]);
}

#[test]
fn lines_keep_inner_spaces() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_rules(&dir, "spaces", b"My Documents/\n");

    let mut filters = FilterContext::default();
    filters
        .add_file(&path, FilterAction::Exclude, FileRequirement::Required)
        .unwrap();

    assert!(filters.is_excluded("home/My Documents", None, true));
}

#[test]
fn nul_terminated_files() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_rules(&dir, "nul", b"a\nb\0c\0");

    let config = FilterConfig::default().with_line_terminator(LineTerminator::Nul);
    let mut filters = FilterContext::new(config);
    filters
        .add_file(&path, FilterAction::Exclude, FileRequirement::Required)
        .unwrap();

    let patterns: Vec<_> = filters.global().iter().map(|rule| rule.pattern()).collect();
    assert_eq!(patterns, ["a\nb", "c"]);
}

#[test]
fn missing_required_file_is_file_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing");

    let mut filters = FilterContext::default();
    let error = filters
        .add_file(&path, FilterAction::Exclude, FileRequirement::Required)
        .unwrap_err();

    assert!(matches!(error, FilterError::Open { .. }));
    assert_eq!(error.path(), path.as_path());
    assert_eq!(error.exit_code(), ExitCode::FileIo);
    assert!(error.to_string().contains("exclude file"));
}

#[test]
fn missing_optional_file_is_silent() {
    let dir = tempfile::tempdir().unwrap();

    let mut filters = FilterContext::default();
    filters.add_pattern("core", FilterAction::Exclude);
    let count = filters
        .add_file(
            &dir.path().join("missing"),
            FilterAction::Exclude,
            FileRequirement::Optional,
        )
        .unwrap();

    assert_eq!(count, 0);
    assert_eq!(rendered(&filters), ["- core"]);
}

#[test]
fn directory_as_rule_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();

    let mut filters = FilterContext::default();
    assert!(
        filters
            .add_file(dir.path(), FilterAction::Exclude, FileRequirement::Required)
            .is_err()
    );
    assert!(filters.global().is_empty());
}

#[test]
fn empty_file_name_is_a_no_op() {
    let mut filters = FilterContext::default();
    let count = filters
        .add_file(Path::new(""), FilterAction::Exclude, FileRequirement::Required)
        .unwrap();
    assert_eq!(count, 0);
}

#[test]
fn overlong_line_rejects_whole_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut contents = b"first\n".to_vec();
    contents.extend(std::iter::repeat_n(b'x', 4096));
    contents.push(b'\n');
    let path = write_rules(&dir, "long", &contents);

    let mut filters = FilterContext::default();
    let error = filters
        .add_file(&path, FilterAction::Exclude, FileRequirement::Required)
        .unwrap_err();

    assert!(matches!(
        error,
        FilterError::LineTooLong {
            line: 2,
            limit: 4096,
            ..
        }
    ));
    assert!(filters.global().is_empty());
}

#[test]
fn longest_accepted_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_rules(&dir, "edge", &[b'y'; 4095]);

    let mut filters = FilterContext::default();
    filters
        .add_file(&path, FilterAction::Exclude, FileRequirement::Required)
        .unwrap();
    assert_eq!(filters.global().rules()[0].pattern().len(), 4095);
}

#[test]
fn overlong_line_in_optional_file_adds_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_rules(&dir, "long", &[b'z'; 5000]);

    let mut filters = FilterContext::default();
    let count = filters
        .add_file(&path, FilterAction::Exclude, FileRequirement::Optional)
        .unwrap();
    assert_eq!(count, 0);
    assert!(filters.global().is_empty());
}
