//! Binary-to-text record encoding.
//!
//! This module provides the [`Encoder`] struct, which turns a raw byte source
//! into a sequence of fixed-width checksummed record lines followed by the
//! end-of-file sentinel.
//!
//! # Fixed-Width Records
//!
//! Every emitted data record carries exactly `width` payload bytes, including
//! the final one: when the source runs out mid-record the tail is padded with
//! zero bytes rather than the count field shrinking. Constant-width records
//! are a deliberate format variant (downstream consumers may rely on the
//! fixed shape), and every record stays internally consistent since zero
//! padding contributes nothing to the checksum sum.
//! Decoding such output therefore reproduces the input zero-padded to the
//! next multiple of `width`.
//!
//! # Example
//!
//! ```
//! use bin2ihex::Encoder;
//!
//! let encoder = Encoder::new(2)?;
//! let mut hex = Vec::new();
//! let summary = encoder.encode(&[0x01, 0x02, 0x03][..], &mut hex)?;
//!
//! assert_eq!(summary.bytes_read, 3);
//! assert_eq!(summary.data_records, 2);
//! assert_eq!(
//!     String::from_utf8(hex).unwrap(),
//!     ":020000000102fb\n:020002000300f9\n:00000001ff\n"
//! );
//! # Ok::<(), bin2ihex::IhexError>(())
//! ```

use std::io::{ErrorKind, Read, Write};

use crate::error::{IhexError, Result};
use crate::record::{AddressCounter, Record, EOF_RECORD_LINE};

/// Default payload width per record.
pub const DEFAULT_RECORD_WIDTH: u8 = 1;

/// Summary of one completed encode session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeSummary {
    /// Number of bytes consumed from the source (padding excluded).
    pub bytes_read: usize,
    /// Number of data records emitted (the end-of-file record excluded).
    pub data_records: usize,
}

/// Binary-to-text record encoder.
///
/// The encoder itself holds only the configured payload width; the address
/// counter lives inside each [`encode`](Encoder::encode) call, so one encoder
/// value can run any number of sessions (concurrently or in sequence) without
/// state bleeding between them.
///
/// # Example
///
/// ```
/// use bin2ihex::Encoder;
///
/// let encoder = Encoder::new(16)?;
/// let mut hex = Vec::new();
/// encoder.encode(&[0u8; 40][..], &mut hex)?;
/// # Ok::<(), bin2ihex::IhexError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Encoder {
    width: u8,
}

impl Encoder {
    /// Creates an encoder with the given payload width per record.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `width` is 0. The `u8` type bounds the
    /// upper end at 255, the largest value the count field can carry.
    ///
    /// # Example
    ///
    /// ```
    /// use bin2ihex::Encoder;
    ///
    /// assert!(Encoder::new(16).is_ok());
    /// assert!(Encoder::new(0).is_err());
    /// ```
    pub fn new(width: u8) -> Result<Self> {
        if width == 0 {
            return Err(IhexError::invalid_parameter(
                "width",
                "must be greater than 0",
            ));
        }
        Ok(Self { width })
    }

    /// Returns the configured payload width.
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Encodes the whole byte source into record lines on the sink.
    ///
    /// Reads `width`-byte chunks from `source` and writes one data record
    /// line per chunk, addressed by a running 16-bit counter that starts at 0
    /// and wraps at 65536. A short final chunk is zero-padded to the full
    /// width. After the source is exhausted the literal end-of-file line
    /// `:00000001ff` is written. Each line is terminated with `\n`.
    ///
    /// # Errors
    ///
    /// Returns `IhexError::Io` if reading the source or writing the sink
    /// fails. The codec defines no failure modes of its own on this path.
    ///
    /// # Example
    ///
    /// ```
    /// use bin2ihex::Encoder;
    ///
    /// let encoder = Encoder::new(4)?;
    /// let mut hex = Vec::new();
    /// let summary = encoder.encode(&[0xde, 0xad, 0xbe, 0xef][..], &mut hex)?;
    /// assert_eq!(summary.data_records, 1);
    /// # Ok::<(), bin2ihex::IhexError>(())
    /// ```
    pub fn encode<R: Read, W: Write>(&self, mut source: R, mut sink: W) -> Result<EncodeSummary> {
        let mut address = AddressCounter::new();
        let mut buffer = vec![0u8; usize::from(self.width)];
        let mut summary = EncodeSummary {
            bytes_read: 0,
            data_records: 0,
        };

        loop {
            // Zero the buffer first so a short final chunk comes out padded.
            buffer.fill(0);
            let filled = fill_chunk(&mut source, &mut buffer)?;
            if filled == 0 {
                break;
            }

            let record = Record::data(address.value(), buffer.clone())?;
            writeln!(sink, "{}", record.to_line())?;

            summary.bytes_read += filled;
            summary.data_records += 1;
            address.advance(self.width);
        }

        writeln!(sink, "{}", EOF_RECORD_LINE)?;
        Ok(summary)
    }
}

impl Default for Encoder {
    /// Returns an encoder with [`DEFAULT_RECORD_WIDTH`] (1 byte per record).
    fn default() -> Self {
        Self {
            width: DEFAULT_RECORD_WIDTH,
        }
    }
}

/// Reads from `source` until the buffer is full or the source is exhausted.
///
/// Returns the number of bytes actually read. Interrupted reads are retried.
fn fill_chunk<R: Read>(source: &mut R, buffer: &mut [u8]) -> Result<usize> {
    let mut filled = 0;
    while filled < buffer.len() {
        match source.read(&mut buffer[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(IhexError::Io(e)),
        }
    }
    Ok(filled)
}
