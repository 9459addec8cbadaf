//! Exclude list wire protocol encoding and decoding.
//!
//! The sending side transmits its rule list so the peer can apply the same
//! filtering while it builds the file list.
//!
//! ## Wire Format
//!
//! Each rule is encoded as:
//! 1. **Length** (4-byte little-endian int): bytes of text that follow
//! 2. **Text**: optional `"+ "`/`"- "` polarity prefix, then the pattern and
//!    its directory-only `/`
//!
//! The list is terminated with a zero length.
//!
//! ## Prefix Format
//!
//! | Prefix | Meaning | Protocol |
//! |--------|---------|----------|
//! | none | Exclude rule | All |
//! | `+ ` | Include rule | 19+ |
//! | `- ` | Exclude rule whose text starts with a prefix | 19+ |
//!
//! Sending an include rule to a peer older than protocol 19 is refused.
//! Received entries are compiled with exclude as the default polarity.

mod prefix;
mod wire;

pub use prefix::rule_wire_text;
pub use wire::{
    LISTING_DEPTH_GUARD, read_exclude_list, recv_exclude_list, send_exclude_list,
    write_exclude_list,
};
