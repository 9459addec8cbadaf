//! Fixed-width integer framing.
//!
//! Lengths in the exclude list exchange are 32-bit little-endian integers,
//! the same encoding as upstream `io.c` `write_int()`/`read_int()`.

use std::io::{self, Read, Write};

/// Writes a 32-bit integer using rsync's fixed 4-byte little-endian format.
pub fn write_int<W: Write + ?Sized>(writer: &mut W, value: i32) -> io::Result<()> {
    writer.write_all(&value.to_le_bytes())
}

/// Reads a 32-bit integer using rsync's fixed 4-byte little-endian format.
pub fn read_int<R: Read + ?Sized>(reader: &mut R) -> io::Result<i32> {
    let mut buf = [0u8; 4];
    reader.read_exact(&mut buf)?;
    Ok(i32::from_le_bytes(buf))
}
