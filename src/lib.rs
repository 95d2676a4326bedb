//! # bin2ihex
//!
//! A Rust library for converting between raw binary data and a checksummed,
//! record-oriented text representation — a subset of the Intel HEX format
//! used to ship firmware and data images as ASCII text.
//!
//! This is a **codec-only** library: no command-line parsing, no file-type
//! detection, no file handling. Callers bring any `std::io` source and sink;
//! the crate reasons only about the bytes and text that flow through them.
//!
//! ## Features
//!
//! - **Bidirectional** — [`Encoder`] for binary → text, [`Decoder`] for
//!   text → binary
//! - **Self-checking** — every record carries a two's-complement checksum
//! - **Tolerant** — checksum mismatches are reported per record, never fatal
//! - **No panics** — all failures returned as `Result<T, IhexError>`
//! - **Stateless values** — sessions own their state, so encoders and
//!   decoders can be reused and shared freely
//!
//! ## Quick Start
//!
//! ```
//! use bin2ihex::{Decoder, Encoder};
//!
//! fn main() -> bin2ihex::Result<()> {
//!     // Encode three bytes as two-byte records
//!     let encoder = Encoder::new(2)?;
//!     let mut hex = Vec::new();
//!     encoder.encode(&[0x01, 0x02, 0x03][..], &mut hex)?;
//!
//!     // Decode them back (the short final record was zero-padded)
//!     let mut bytes = Vec::new();
//!     let summary = Decoder::new().decode(&hex[..], &mut bytes)?;
//!     assert_eq!(bytes, [0x01, 0x02, 0x03, 0x00]);
//!     assert!(summary.is_clean());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Record Format
//!
//! Each record is one line of lowercase hex text:
//!
//! ```text
//! :CCAAAATT[DD...]SS
//! ```
//!
//! | Field | Description |
//! |-------|-------------|
//! | `:` | Record start marker |
//! | `CC` | Payload byte count (0 marks the end-of-file record) |
//! | `AAAA` | 16-bit address, big-endian |
//! | `TT` | Record type (`00` = data; not validated when decoding) |
//! | `DD...` | Payload bytes |
//! | `SS` | Two's-complement checksum |
//!
//! A stream always terminates with the literal line `:00000001ff`. See
//! [`Record`] for the exact checksum coverage of this format variant.
//!
//! ## Format Variant Notes
//!
//! Two behaviors differ from strict Intel HEX and are preserved on purpose:
//!
//! 1. **Fixed-width records.** The encoder never shrinks the final record;
//!    a short tail is zero-padded to the configured width, so decoding
//!    reproduces the input zero-padded to the next width multiple.
//! 2. **Unvalidated type field.** The decoder classifies records purely by
//!    their count field: count 0 terminates the stream, anything else is
//!    data, whatever the type byte says.
//!
//! ## Error Handling
//!
//! Fatal problems (framing failures, I/O) surface as [`IhexError`]; checksum
//! mismatches are warnings collected in the [`DecodeSummary`] and emitted as
//! `tracing` events, matching the format's tolerant-but-reported validation.
//!
//! ```
//! use bin2ihex::{Decoder, IhexError};
//!
//! let mut bytes = Vec::new();
//! match Decoder::new().decode("not a record\n".as_bytes(), &mut bytes) {
//!     Ok(summary) => {
//!         for warning in &summary.warnings {
//!             eprintln!("{}", warning);
//!         }
//!     }
//!     Err(IhexError::MalformedRecord { line, reason }) => {
//!         eprintln!("line {}: {}", line, reason);
//!     }
//!     Err(e) => eprintln!("{}", e),
//! }
//! ```

#![warn(clippy::all)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod checksum;
mod decoder;
mod encoder;
mod error;
mod record;

// Public re-exports
pub use decoder::{ChecksumWarning, DecodeSummary, Decoder};
pub use encoder::{EncodeSummary, Encoder, DEFAULT_RECORD_WIDTH};
pub use error::{IhexError, Result};
pub use record::{
    AddressCounter, Record, RecordType, EOF_RECORD_LINE, MAX_PAYLOAD_LEN, RECORD_MARKER,
};
