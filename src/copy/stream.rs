//! The byte transfer loop.
//!
//! [`transfer`] moves bytes from any [`Read`] to any [`Write`] through a
//! fixed [`TRANSFER_BUFFER_SIZE`] buffer. It is generic so the chunking
//! behavior can be tested with readers that return short or failing reads.

use std::io::{self, Read, Write};

/// Capacity of the transfer buffer in bytes.
///
/// Every copy allocates exactly one buffer of this size on the stack. The
/// buffer is never shared between calls.
pub const TRANSFER_BUFFER_SIZE: usize = 1024;

/// Totals from a completed transfer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Transferred {
    /// Bytes written to the destination
    pub bytes: u64,
    /// Number of non-empty reads
    pub chunks: u64,
}

/// Which side of the transfer failed.
#[derive(Debug)]
pub(crate) enum StreamError {
    Read(io::Error),
    Write(io::Error),
}

/// Copy `reader` to `writer` until end of input.
///
/// A read of zero bytes is the only normal termination. Only the first `n`
/// bytes of the buffer are written after a read of `n`, so bytes left over
/// from a previous, longer read never reach the output.
///
/// `on_chunk` receives the running byte total after each write.
///
/// `Interrupted` reads are retried; any other error stops the transfer
/// immediately and is returned with the side it came from. Bytes already
/// handed to `writer` stay there.
pub(crate) fn transfer<R, W, F>(
    reader: &mut R,
    writer: &mut W,
    mut on_chunk: F,
) -> Result<Transferred, StreamError>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
    F: FnMut(u64),
{
    let mut buffer = [0u8; TRANSFER_BUFFER_SIZE];
    let mut done = Transferred::default();

    loop {
        let n = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(StreamError::Read(e)),
        };

        writer
            .write_all(&buffer[..n])
            .map_err(StreamError::Write)?;

        done.bytes += n as u64;
        done.chunks += 1;
        on_chunk(done.bytes);
    }

    Ok(done)
}

// =============================================================================
// Tests
// =============================================================================
