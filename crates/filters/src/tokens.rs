//! Whitespace tokenisation of command-line and environment rule lists.

/// Iterator over the rule tokens of a single line.
///
/// Tokens are separated by ASCII whitespace. A token that begins with `"+ "`
/// or `"- "` keeps that embedded space so the polarity prefix stays attached
/// to its pattern.
#[derive(Clone, Debug)]
pub struct RuleTokens<'a> {
    rest: &'a str,
}

/// Splits `line` into rule tokens.
///
/// # Examples
///
/// ```
/// use filters::rule_tokens;
///
/// let tokens: Vec<_> = rule_tokens("*.o  + keep.o\tcore").collect();
/// assert_eq!(tokens, ["*.o", "+ keep.o", "core"]);
/// ```
#[must_use]
pub fn rule_tokens(line: &str) -> RuleTokens<'_> {
    RuleTokens { rest: line }
}

const fn is_space(byte: u8) -> bool {
    // C isspace() also covers vertical tab.
    byte.is_ascii_whitespace() || byte == 0x0b
}

impl<'a> Iterator for RuleTokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.rest.as_bytes();
        let start = bytes.iter().position(|&byte| !is_space(byte))?;
        let token = &self.rest[start..];

        let skip = if token.starts_with("+ ") || token.starts_with("- ") {
            2
        } else {
            0
        };
        let len = token.as_bytes()[skip..]
            .iter()
            .position(|&byte| is_space(byte))
            .map_or(token.len(), |end| skip + end);

        self.rest = &token[len..];
        Some(&token[..len])
    }
}

impl std::iter::FusedIterator for RuleTokens<'_> {}
