//! Shell-style wildcard matching over raw bytes.
//!
//! The dialect is the one rule files have always used: `*` matches any run
//! of bytes, `?` a single byte, `[...]` a bracket class (with `!` or `^`
//! negation, ranges and `[:name:]` character classes) and `\` quotes the
//! following byte. There is no brace expansion and no special `**` token; a
//! double star is simply two stars, which only differs from one when
//! [`MatchMode::Whole`] lets wildcards run across `/`.
//!
//! Malformed patterns behave like the C library's `fnmatch`:
//!
//! - an unterminated `[` is an ordinary byte, unless the bracket ends in a
//!   dangling range (`[a-`) or escape (`[a\`), which never matches;
//! - a trailing lone `\` never matches;
//! - in [`MatchMode::Segment`] a `*` directly followed by an escaped `\/`
//!   never matches.

/// How wildcards treat the `/` separator.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MatchMode {
    /// `*`, `?` and bracket classes never match `/`; a slash in the text must
    /// be matched by a literal slash in the pattern.
    Segment,
    /// `/` is an ordinary byte, so wildcards may span directories.
    Whole,
}

impl MatchMode {
    const fn stops_at_slash(self) -> bool {
        matches!(self, Self::Segment)
    }
}

enum Token {
    Star,
    Any,
    Byte(u8),
    Class { matched: bool },
    /// Malformed construct that fails the whole match.
    Never,
}

/// Returns `true` when `pattern` matches all of `text`.
///
/// # Examples
///
/// ```
/// use filters::{MatchMode, wildmatch};
///
/// assert!(wildmatch("*.o", "util.o", MatchMode::Segment));
/// assert!(!wildmatch("*/bar", "x/y/bar", MatchMode::Segment));
/// assert!(wildmatch("**/bar", "x/y/bar", MatchMode::Whole));
/// ```
#[must_use]
pub fn wildmatch(pattern: &str, text: &str, mode: MatchMode) -> bool {
    wildmatch_bytes(pattern.as_bytes(), text.as_bytes(), mode)
}

/// Byte-slice variant of [`wildmatch`].
#[must_use]
pub fn wildmatch_bytes(pattern: &[u8], text: &[u8], mode: MatchMode) -> bool {
    let mut pat_index = 0usize;
    let mut text_index = 0usize;
    // Pattern index just past the most recent star, and the text index that
    // star currently extends to.
    let mut star: Option<(usize, usize)> = None;

    loop {
        if pat_index < pattern.len() {
            let current = text.get(text_index).copied();
            let (token, next) = next_token(pattern, pat_index, current, mode);
            match token {
                Token::Star => {
                    let mut after = next;
                    while pattern.get(after) == Some(&b'*') {
                        after += 1;
                    }
                    let escaped_slash = pattern.get(after..after + 2) == Some(b"\\/".as_slice());
                    if mode.stops_at_slash() && escaped_slash {
                        return false;
                    }
                    if after == pattern.len() {
                        let rest = &text[text_index..];
                        return !mode.stops_at_slash() || !rest.contains(&b'/');
                    }
                    star = Some((after, text_index));
                    pat_index = after;
                    continue;
                }
                Token::Any => {
                    if let Some(byte) = current {
                        if !(mode.stops_at_slash() && byte == b'/') {
                            pat_index = next;
                            text_index += 1;
                            continue;
                        }
                    }
                }
                Token::Byte(expected) => {
                    if current == Some(expected) {
                        pat_index = next;
                        text_index += 1;
                        continue;
                    }
                }
                Token::Class { matched } => {
                    if matched {
                        pat_index = next;
                        text_index += 1;
                        continue;
                    }
                }
                Token::Never => return false,
            }
        } else if text_index == text.len() {
            return true;
        }

        // Mismatch: let the most recent star swallow one more byte.
        let Some((resume, extent)) = star else {
            return false;
        };
        match text.get(extent) {
            None => return false,
            // A star that cannot cross '/' can never realign past it, and
            // earlier stars are confined to earlier segments.
            Some(b'/') if mode.stops_at_slash() => return false,
            Some(_) => {
                star = Some((resume, extent + 1));
                pat_index = resume;
                text_index = extent + 1;
            }
        }
    }
}

/// Decodes the pattern token at `index`, evaluating bracket classes against
/// `current` immediately.
fn next_token(pattern: &[u8], index: usize, current: Option<u8>, mode: MatchMode) -> (Token, usize) {
    match pattern[index] {
        b'*' => (Token::Star, index + 1),
        b'?' => (Token::Any, index + 1),
        b'\\' => match pattern.get(index + 1) {
            Some(&escaped) => (Token::Byte(escaped), index + 2),
            None => (Token::Never, index + 1),
        },
        b'[' => match parse_class(pattern, index + 1) {
            Bracket::Class(class, next) => {
                let matched = current.is_some_and(|byte| {
                    !(mode.stops_at_slash() && byte == b'/') && class.contains(byte)
                });
                (Token::Class { matched }, next)
            }
            Bracket::Literal => (Token::Byte(b'['), index + 1),
            Bracket::Dangling => (Token::Never, index + 1),
        },
        byte => (Token::Byte(byte), index + 1),
    }
}

struct Class<'a> {
    negated: bool,
    body: &'a [u8],
}

impl Class<'_> {
    fn contains(&self, byte: u8) -> bool {
        let body = self.body;
        let mut found = false;
        let mut i = 0usize;

        while i < body.len() {
            if body[i] == b'[' && body.get(i + 1) == Some(&b':') {
                if let Some(len) = find_class_name_end(&body[i + 2..]) {
                    let name = &body[i + 2..i + 2 + len];
                    found |= named_class_contains(name, byte);
                    i += len + 4;
                    continue;
                }
            }

            let (low, width) = class_byte(body, i);
            i += width;

            if body.get(i) == Some(&b'-') && i + 1 < body.len() {
                let (high, high_width) = class_byte(body, i + 1);
                found |= (low..=high).contains(&byte);
                i += 1 + high_width;
            } else {
                found |= low == byte;
            }
        }

        found != self.negated
    }
}

/// Reads one (possibly escaped) member byte from a class body.
fn class_byte(body: &[u8], i: usize) -> (u8, usize) {
    if body[i] == b'\\' && i + 1 < body.len() {
        (body[i + 1], 2)
    } else {
        (body[i], 1)
    }
}

enum Bracket<'a> {
    /// A complete class and the index just past its `]`.
    Class(Class<'a>, usize),
    /// Unterminated; the `[` is an ordinary byte.
    Literal,
    /// Unterminated with a range or escape cut off by the pattern end.
    Dangling,
}

/// Locates the closing `]` of a class whose body starts at `start`.
fn parse_class(pattern: &[u8], start: usize) -> Bracket<'_> {
    let mut i = start;
    let negated = matches!(pattern.get(i), Some(b'!' | b'^'));
    if negated {
        i += 1;
    }
    let body_start = i;

    // A ']' in first position is a member, not the terminator.
    if pattern.get(i) == Some(&b']') {
        i += 1;
    }

    while i < pattern.len() {
        match pattern[i] {
            b']' => {
                let class = Class {
                    negated,
                    body: &pattern[body_start..i],
                };
                return Bracket::Class(class, i + 1);
            }
            b'\\' => i += 2,
            b'[' if pattern.get(i + 1) == Some(&b':') => {
                match find_class_name_end(&pattern[i + 2..]) {
                    Some(len) => i += len + 4,
                    None => i += 1,
                }
            }
            _ => i += 1,
        }
    }

    if ends_mid_member(pattern, body_start) {
        Bracket::Dangling
    } else {
        Bracket::Literal
    }
}

/// Walks the members of an unterminated class and reports whether the
/// pattern ends inside a range or an escape.
fn ends_mid_member(pattern: &[u8], mut i: usize) -> bool {
    loop {
        match pattern.get(i) {
            None => return false,
            Some(b'\\') if i + 1 == pattern.len() => return true,
            Some(b'\\') => i += 2,
            Some(b'[') if pattern.get(i + 1) == Some(&b':') => {
                i += find_class_name_end(&pattern[i + 2..]).map_or(1, |len| len + 4);
            }
            Some(_) => i += 1,
        }

        if pattern.get(i) == Some(&b'-') && pattern.get(i + 1) != Some(&b']') {
            match pattern.get(i + 1) {
                None => return true,
                Some(b'\\') if i + 2 == pattern.len() => return true,
                Some(b'\\') => i += 3,
                Some(_) => i += 2,
            }
        }
    }
}

/// Length of a `[:name:]` class name, given the bytes after `[:`.
fn find_class_name_end(rest: &[u8]) -> Option<usize> {
    let len = rest.iter().position(|byte| !byte.is_ascii_lowercase())?;
    (rest.get(len..len + 2) == Some(b":]".as_slice())).then_some(len)
}

fn named_class_contains(name: &[u8], byte: u8) -> bool {
    match name {
        b"alnum" => byte.is_ascii_alphanumeric(),
        b"alpha" => byte.is_ascii_alphabetic(),
        b"blank" => byte == b' ' || byte == b'\t',
        b"cntrl" => byte.is_ascii_control(),
        b"digit" => byte.is_ascii_digit(),
        b"graph" => byte.is_ascii_graphic(),
        b"lower" => byte.is_ascii_lowercase(),
        b"print" => byte.is_ascii_graphic() || byte == b' ',
        b"punct" => byte.is_ascii_punctuation(),
        b"space" => byte.is_ascii_whitespace() || byte == 0x0b,
        b"upper" => byte.is_ascii_uppercase(),
        b"xdigit" => byte.is_ascii_hexdigit(),
        _ => false,
    }
}
