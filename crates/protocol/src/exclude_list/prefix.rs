//! Wire text of a single rule.

use filters::{CLEAR_TOKEN, FilterAction, FilterRule, MAX_PATH_LEN};

use crate::{ExcludeListError, ProtocolVersion};

/// Builds the text sent to the peer for `rule`, or `None` when the rule is
/// left out of the exchange.
///
/// The text is the pattern with its directory-only slash restored. Include
/// rules carry a `"+ "` prefix. Under a protocol that understands prefixes,
/// an exclude rule whose text already starts with `"+ "` or `"- "`, or is the
/// list-clearing `!`, gets an explicit `"- "` so the peer keeps it as a rule.
/// Only rules with empty text are skipped.
///
/// # Errors
///
/// Returns [`ExcludeListError::IncludeUnsupported`] for an include rule when
/// `protocol` predates include syntax, and [`ExcludeListError::RuleTooLong`]
/// when the text would not fit the peer's entry limit.
///
/// # Examples
///
/// ```
/// use filters::FilterRule;
/// use protocol::{ProtocolVersion, rule_wire_text};
///
/// let text = rule_wire_text(&FilterRule::include("src/"), ProtocolVersion::NEWEST)?;
/// assert_eq!(text.as_deref(), Some("+ src/"));
///
/// let text = rule_wire_text(&FilterRule::exclude("*.o"), ProtocolVersion::new(18))?;
/// assert_eq!(text.as_deref(), Some("*.o"));
/// # Ok::<(), protocol::ExcludeListError>(())
/// ```
pub fn rule_wire_text(
    rule: &FilterRule,
    protocol: ProtocolVersion,
) -> Result<Option<String>, ExcludeListError> {
    let body = rule.display_pattern();
    if body.is_empty() {
        return Ok(None);
    }

    if rule.is_include() && !protocol.supports_include_rules() {
        return Err(ExcludeListError::IncludeUnsupported {
            protocol,
            rule: rule.to_string(),
        });
    }

    let prefix = match rule.action() {
        FilterAction::Include => Some(FilterAction::Include.prefix()),
        FilterAction::Exclude if protocol.supports_include_rules() && needs_polarity(&body) => {
            Some(FilterAction::Exclude.prefix())
        }
        FilterAction::Exclude => None,
    };

    let length = body.len() + prefix.map_or(0, str::len);
    if length >= MAX_PATH_LEN {
        return Err(ExcludeListError::RuleTooLong {
            length,
            limit: MAX_PATH_LEN,
        });
    }

    let mut text = String::with_capacity(length);
    if let Some(prefix) = prefix {
        text.push_str(prefix);
    }
    text.push_str(&body);
    Ok(Some(text))
}

/// Returns `true` when bare exclude text would be read back as something
/// other than an exclude rule.
fn needs_polarity(body: &str) -> bool {
    body == CLEAR_TOKEN || FilterAction::strip_prefix(body).is_some()
}
