#![deny(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(missing_docs)]

//! Exclude list exchange for the Rust `rsync` exclude engine.
//!
//! A client sends its include/exclude rules to the server before the file
//! list is built, and the server compiles them into its own rule list. This
//! crate frames that exchange: each rule travels as a 4-byte little-endian
//! length followed by its text, and a zero length ends the list. Whether
//! include rules may be sent depends on the negotiated [`ProtocolVersion`].
//!
//! Errors are reported as [`ExcludeListError`]; every variant maps to a
//! process exit status through [`filters::HasExitCode`].
//!
//! # Examples
//!
//! Send a list and receive it on the other side:
//!
//! ```
//! use filters::{FilterAction, FilterList};
//! use protocol::{ProtocolVersion, SessionOptions, recv_exclude_list, send_exclude_list};
//!
//! let mut local = FilterList::new();
//! local.push_pattern("+ *.c", FilterAction::Exclude);
//! local.push_pattern("build/", FilterAction::Exclude);
//!
//! let mut wire = Vec::new();
//! send_exclude_list(&mut wire, &mut local, &SessionOptions::new(ProtocolVersion::NEWEST))?;
//!
//! let mut remote = FilterList::new();
//! recv_exclude_list(&mut wire.as_slice(), &mut remote)?;
//! assert_eq!(remote, local);
//! # Ok::<(), protocol::ExcludeListError>(())
//! ```

mod debug_trace;
mod error;
mod exclude_list;
mod io;
mod session;
mod version;

pub use error::ExcludeListError;
pub use exclude_list::{
    LISTING_DEPTH_GUARD, read_exclude_list, recv_exclude_list, rule_wire_text,
    send_exclude_list, write_exclude_list,
};
pub use io::{read_int, write_int};
pub use session::SessionOptions;
pub use version::ProtocolVersion;
