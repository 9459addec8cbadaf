//! Exclude list framing.

use std::io::{Read, Write};

use filters::{FilterAction, FilterList, MAX_PATH_LEN};

use super::prefix::rule_wire_text;
use crate::debug_trace::{report_list_received, report_list_sent, report_rule_skipped};
use crate::io::{read_int, write_int};
use crate::{ExcludeListError, ProtocolVersion, SessionOptions};

/// Rule appended for non-recursive listings so only the top level is shown.
pub const LISTING_DEPTH_GUARD: &str = "/*/*";

/// Writes `list` followed by the terminator.
///
/// Every rule is converted before anything is written, so a rule the peer
/// cannot accept leaves the stream untouched. Returns the number of entries
/// written, terminator excluded.
///
/// # Errors
///
/// Returns [`ExcludeListError::IncludeUnsupported`] when `list` holds an
/// include rule and `protocol` predates include syntax,
/// [`ExcludeListError::RuleTooLong`] when a rule exceeds the entry limit, and
/// [`ExcludeListError::Io`] when the writer fails.
pub fn write_exclude_list<W: Write + ?Sized>(
    writer: &mut W,
    list: &FilterList,
    protocol: ProtocolVersion,
) -> Result<usize, ExcludeListError> {
    let mut entries = Vec::with_capacity(list.len());
    for rule in list {
        match rule_wire_text(rule, protocol)? {
            Some(text) => entries.push(text),
            None => report_rule_skipped(&rule.display_pattern()),
        }
    }

    for entry in &entries {
        // Entries are shorter than MAX_PATH_LEN, so the length fits.
        write_int(writer, entry.len() as i32)?;
        writer.write_all(entry.as_bytes())?;
    }
    write_int(writer, 0)?;

    Ok(entries.len())
}

/// Reads entries up to the terminator and returns their text.
///
/// # Errors
///
/// Returns [`ExcludeListError::Overflow`] for a negative length or one of
/// [`MAX_PATH_LEN`] bytes or more, and [`ExcludeListError::Io`] when the
/// reader fails or ends early.
pub fn read_exclude_list<R: Read + ?Sized>(reader: &mut R) -> Result<Vec<String>, ExcludeListError> {
    let mut entries = Vec::new();
    loop {
        let length = read_int(reader)?;
        if length == 0 {
            return Ok(entries);
        }

        let size = usize::try_from(length)
            .ok()
            .filter(|&size| size < MAX_PATH_LEN)
            .ok_or(ExcludeListError::Overflow {
                length,
                limit: MAX_PATH_LEN,
            })?;

        let mut buf = vec![0u8; size];
        reader.read_exact(&mut buf)?;
        entries.push(String::from_utf8_lossy(&buf).into_owned());
    }
}

/// Sends the exclude list for a session.
///
/// Non-recursive listings first append [`LISTING_DEPTH_GUARD`] to `list` as
/// an exclude rule.
///
/// # Errors
///
/// See [`write_exclude_list`].
///
/// # Examples
///
/// ```
/// use filters::{FilterAction, FilterList};
/// use protocol::{ProtocolVersion, SessionOptions, send_exclude_list};
///
/// let mut list = FilterList::new();
/// list.push_pattern("*.o", FilterAction::Exclude);
///
/// let mut wire = Vec::new();
/// send_exclude_list(&mut wire, &mut list, &SessionOptions::new(ProtocolVersion::NEWEST))?;
/// assert_eq!(wire, b"\x03\x00\x00\x00*.o\x00\x00\x00\x00");
/// # Ok::<(), protocol::ExcludeListError>(())
/// ```
pub fn send_exclude_list<W: Write + ?Sized>(
    writer: &mut W,
    list: &mut FilterList,
    options: &SessionOptions,
) -> Result<usize, ExcludeListError> {
    if options.limits_listing_depth() {
        list.push_pattern(LISTING_DEPTH_GUARD, FilterAction::Exclude);
    }

    let count = write_exclude_list(writer, list, options.protocol)?;
    report_list_sent(count, options.protocol.as_u8());
    Ok(count)
}

/// Receives the peer's exclude list and appends it to `list`.
///
/// Entries are compiled with exclude as the default polarity, so an embedded
/// `"+ "` prefix still yields an include rule. Nothing is appended unless the
/// whole list was read. Returns the number of entries received.
///
/// # Errors
///
/// See [`read_exclude_list`].
pub fn recv_exclude_list<R: Read + ?Sized>(
    reader: &mut R,
    list: &mut FilterList,
) -> Result<usize, ExcludeListError> {
    let entries = read_exclude_list(reader)?;
    for entry in &entries {
        list.push_pattern(entry, FilterAction::Exclude);
    }
    report_list_received(entries.len());
    Ok(entries.len())
}
