//! Text-to-binary record decoding.
//!
//! This module provides the [`Decoder`] struct, which replays a stream of
//! record lines back into raw bytes while validating each record's checksum.
//!
//! # Tolerant Validation
//!
//! A checksum mismatch does not abort decoding: the payload bytes are written
//! as read, a [`ChecksumWarning`] naming the record's input line is collected
//! in the summary, and a `tracing` warning is emitted. Only framing failures
//! are fatal: a non-blank line that does not start with `:`, a line truncated
//! inside a required field, non-hex digits where a field is parsed, trailing
//! junk after the checksum, or input that ends before the end-of-file record.
//!
//! # Replay Order
//!
//! Payload bytes are written in the order their records appear in the input.
//! The address field participates in the checksum but does not position the
//! output: a stream whose records are out of address order decodes in file
//! order. File-order replay is deliberate format behavior, not a gap.
//!
//! # Example
//!
//! ```
//! use bin2ihex::Decoder;
//!
//! let hex = ":020000000102fb\n:020002000300f9\n:00000001ff\n";
//! let mut bytes = Vec::new();
//! let summary = Decoder::new().decode(hex.as_bytes(), &mut bytes)?;
//!
//! assert_eq!(bytes, [0x01, 0x02, 0x03, 0x00]);
//! assert_eq!(summary.data_records, 2);
//! assert!(summary.is_clean());
//! # Ok::<(), bin2ihex::IhexError>(())
//! ```

use std::fmt;
use std::io::{BufRead, Write};

use crate::checksum;
use crate::error::{IhexError, Result};
use crate::record::RECORD_MARKER;

/// A non-fatal checksum mismatch observed while decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChecksumWarning {
    /// 1-based input line number of the affected record.
    pub line: usize,
    /// Checksum recomputed from the record's fields.
    pub expected: u8,
    /// Checksum embedded in the record.
    pub found: u8,
}

impl fmt::Display for ChecksumWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {}: checksum mismatch, expected 0x{:02x}, found 0x{:02x}",
            self.line, self.expected, self.found
        )
    }
}

/// Summary of one completed decode session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeSummary {
    /// Number of payload bytes written to the sink.
    pub bytes_written: usize,
    /// Number of data records decoded (the end-of-file record excluded).
    pub data_records: usize,
    /// Checksum mismatches encountered, in input order.
    pub warnings: Vec<ChecksumWarning>,
}

impl DecodeSummary {
    /// Returns whether the session completed without checksum warnings.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// A data record parsed from one input line.
struct ParsedRecord {
    payload: Vec<u8>,
    embedded_checksum: u8,
    computed_checksum: u8,
}

/// Outcome of parsing one non-blank record line.
enum ParsedLine {
    Data(ParsedRecord),
    EndOfFile,
}

/// Text-to-binary record decoder.
///
/// The decoder takes no parameters: each record declares its own payload
/// width through the count field. All session state lives inside
/// [`decode`](Decoder::decode), so one decoder value can run any number of
/// sessions.
///
/// # Example
///
/// ```
/// use bin2ihex::Decoder;
///
/// let mut bytes = Vec::new();
/// let summary = Decoder::new().decode(":01000000ff00\n:00000001ff\n".as_bytes(), &mut bytes)?;
/// assert_eq!(bytes, [0xff]);
/// # Ok::<(), bin2ihex::IhexError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Decoder;

impl Decoder {
    /// Creates a new decoder.
    pub fn new() -> Self {
        Self
    }

    /// Decodes a record stream into raw bytes on the sink.
    ///
    /// Lines are read until a record with count 0 (end-of-file) is seen;
    /// blank lines between records are skipped. Payload bytes are written in
    /// file order as each record is parsed, so on a fatal error the sink
    /// keeps whatever was decoded before the failure.
    ///
    /// # Errors
    ///
    /// - `IhexError::MalformedRecord` if a non-blank line does not start
    ///   with `:`, is truncated inside a field, contains non-hex digits in a
    ///   parsed field, has trailing characters after the checksum, or if the
    ///   input ends before an end-of-file record.
    /// - `IhexError::Io` if reading the source or writing the sink fails.
    ///
    /// Checksum mismatches are not errors; see [`DecodeSummary::warnings`].
    ///
    /// # Example
    ///
    /// ```
    /// use bin2ihex::{Decoder, IhexError};
    ///
    /// let mut bytes = Vec::new();
    /// let result = Decoder::new().decode("garbage\n".as_bytes(), &mut bytes);
    /// assert!(matches!(result, Err(IhexError::MalformedRecord { line: 1, .. })));
    /// ```
    pub fn decode<R: BufRead, W: Write>(&self, source: R, mut sink: W) -> Result<DecodeSummary> {
        let mut summary = DecodeSummary {
            bytes_written: 0,
            data_records: 0,
            warnings: Vec::new(),
        };
        let mut line_no = 0;

        for line in source.lines() {
            line_no += 1;
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            match parse_line(line, line_no)? {
                ParsedLine::EndOfFile => return Ok(summary),
                ParsedLine::Data(record) => {
                    // Written before the checksum verdict: mismatched
                    // records still contribute their bytes as read.
                    sink.write_all(&record.payload)?;
                    summary.bytes_written += record.payload.len();
                    summary.data_records += 1;

                    if record.computed_checksum != record.embedded_checksum {
                        let warning = ChecksumWarning {
                            line: line_no,
                            expected: record.computed_checksum,
                            found: record.embedded_checksum,
                        };
                        tracing::warn!(
                            line = warning.line,
                            expected = warning.expected,
                            found = warning.found,
                            "checksum may not be valid, continuing"
                        );
                        summary.warnings.push(warning);
                    }
                }
            }
        }

        Err(IhexError::malformed_record(
            line_no + 1,
            "input ended before end-of-file record",
        ))
    }
}

/// Parses one trimmed, non-blank record line.
fn parse_line(line: &str, line_no: usize) -> Result<ParsedLine> {
    if !line.starts_with(RECORD_MARKER) {
        return Err(IhexError::malformed_record(
            line_no,
            "expected ':' record marker",
        ));
    }

    let count = parse_hex_byte(line, 1, "count", line_no)?;
    let address_hi = parse_hex_byte(line, 3, "address", line_no)?;
    let address_lo = parse_hex_byte(line, 5, "address", line_no)?;

    // The type field must be present but its value is never validated: any
    // type is treated as data unless the count is 0. It is also outside
    // checksum coverage in this format variant.
    if line.len() < 9 {
        return Err(IhexError::malformed_record(
            line_no,
            "truncated inside record type field",
        ));
    }

    if count == 0 {
        // Clean end-of-file; the rest of the line is not inspected.
        return Ok(ParsedLine::EndOfFile);
    }

    let mut fields = Vec::with_capacity(3 + usize::from(count));
    fields.push(count);
    fields.push(address_hi);
    fields.push(address_lo);
    for i in 0..usize::from(count) {
        let byte = parse_hex_byte(line, 9 + 2 * i, "payload", line_no)?;
        fields.push(byte);
    }

    let checksum_pos = 9 + 2 * usize::from(count);
    let embedded_checksum = parse_hex_byte(line, checksum_pos, "checksum", line_no)?;

    // Anything after the checksum would desynchronize record framing.
    if line.len() > checksum_pos + 2 {
        return Err(IhexError::malformed_record(
            line_no,
            "trailing characters after checksum",
        ));
    }

    Ok(ParsedLine::Data(ParsedRecord {
        payload: fields[3..].to_vec(),
        computed_checksum: checksum::checksum(&fields),
        embedded_checksum,
    }))
}

/// Parses the two hex digits at `pos` into a byte.
///
/// Upper and lower case are both accepted; output is always lowercase.
fn parse_hex_byte(line: &str, pos: usize, field: &str, line_no: usize) -> Result<u8> {
    let digits = line.get(pos..pos + 2).ok_or_else(|| {
        IhexError::malformed_record(line_no, format!("truncated inside {} field", field))
    })?;
    u8::from_str_radix(digits, 16).map_err(|_| {
        IhexError::malformed_record(
            line_no,
            format!("invalid hex digits '{}' in {} field", digits, field),
        )
    })
}
