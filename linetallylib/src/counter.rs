//! Newline counting over a fixed-size read buffer.
//!
//! Counts occurrences of the byte `0x0A` across a file's entire byte
//! stream. No encoding decode, no special-casing of binary content, no
//! distinct handling for a missing trailing newline - the count is exactly
//! the number of newline bytes, whatever the chunking.

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use crate::error::LinetallyError;
use crate::Result;

/// Count newline bytes in a file, reading through a buffer of `buffer_size`
/// bytes.
///
/// Convenience wrapper that allocates the buffer per call; workers hold one
/// buffer for their lifetime and use [`count_newlines_with`] instead.
pub fn count_newlines(path: &Path, buffer_size: usize) -> Result<u64> {
    if buffer_size == 0 {
        return Err(LinetallyError::InvalidBufferSize);
    }
    let mut buf = vec![0u8; buffer_size];
    count_newlines_with(path, &mut buf)
}

/// Count newline bytes in a file, reusing the caller's buffer across reads.
///
/// A file that is gone at open time fails with `FileNotFound`; any other
/// open or read failure is reported as `FileRead`. Either way no partial
/// count escapes.
pub fn count_newlines_with(path: &Path, buf: &mut [u8]) -> Result<u64> {
    if buf.is_empty() {
        return Err(LinetallyError::InvalidBufferSize);
    }

    let mut file = File::open(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            LinetallyError::FileNotFound(path.to_path_buf())
        } else {
            LinetallyError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    let mut total: u64 = 0;
    loop {
        let n = file.read(buf).map_err(|e| LinetallyError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        if n == 0 {
            break;
        }
        // The final chunk is scanned only up to the bytes actually read
        total += bytecount::count(&buf[..n], b'\n') as u64;
    }

    Ok(total)
}
