//! Record model and text serialization.
//!
//! This module defines the record structure exchanged on the text side of the
//! codec, along with the running address counter shared by conversion
//! sessions.
//!
//! # Record Line Structure
//!
//! Each record is one line of lowercase hex text:
//!
//! | Field | Width | Description |
//! |-------|-------|-------------|
//! | `:` | 1 | Record start marker |
//! | `CC` | 2 | Payload byte count (0-255; 0 is reserved for end-of-file) |
//! | `AAAA` | 4 | 16-bit address, big-endian (high byte first) |
//! | `TT` | 2 | Record type (00 = data) |
//! | `DD...` | 2×CC | Payload bytes |
//! | `SS` | 2 | Two's-complement checksum over `CC`, `AAAA`, `DD...` |
//!
//! The end-of-file record is always the literal line `:00000001ff`.
//!
//! # Checksum Coverage
//!
//! Unlike strict Intel HEX, the checksum of a data record in this variant
//! covers the count, address bytes, and payload but not the record-type
//! field. Since the data type code is `00` the two schemes agree on every
//! data record; they differ only on non-data types, which this codec never
//! emits. The fixed end-of-file line carries `ff`, the strict-coverage value
//! for its fields.
//!
//! # Example
//!
//! ```
//! use bin2ihex::{Record, RecordType};
//!
//! let record = Record::data(0x0000, vec![0x01, 0x02]).unwrap();
//! assert_eq!(record.record_type(), RecordType::Data);
//! assert_eq!(record.checksum(), 0xfb);
//! assert_eq!(record.to_line(), ":020000000102fb");
//!
//! let eof = Record::end_of_file();
//! assert_eq!(eof.to_line(), ":00000001ff");
//! ```

use crate::checksum;
use crate::error::{IhexError, Result};

/// Record start marker character.
pub const RECORD_MARKER: char = ':';

/// Maximum payload bytes per record (the count field is one byte).
pub const MAX_PAYLOAD_LEN: usize = 255;

/// The fixed end-of-file record line (count 0, address 0, type 01).
pub const EOF_RECORD_LINE: &str = ":00000001ff";

/// Record type code emitted for data records.
pub(crate) const DATA_TYPE_CODE: u8 = 0x00;

/// Kind of a record.
///
/// Only these two variants exist on the wire as far as this codec is
/// concerned; the decoder classifies records solely by their count field
/// (`count == 0` means end-of-file) and never by the type byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordType {
    /// A record carrying payload bytes.
    Data,
    /// The terminating sentinel record (empty payload).
    EndOfFile,
}

/// One checksummed record, immutable once constructed.
///
/// Records exist only transiently between encode/decode steps; the checksum
/// is derived from the other fields rather than stored.
///
/// # Example
///
/// ```
/// use bin2ihex::Record;
///
/// let record = Record::data(0x0100, vec![0xde, 0xad]).unwrap();
/// assert_eq!(record.address(), 0x0100);
/// assert_eq!(record.payload(), &[0xde, 0xad]);
/// assert_eq!(record.to_line(), ":02010000dead72");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    record_type: RecordType,
    address: u16,
    payload: Vec<u8>,
}

impl Record {
    /// Creates a data record at the given address.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the payload is empty (a zero count is
    /// reserved for the end-of-file record) or longer than
    /// [`MAX_PAYLOAD_LEN`].
    ///
    /// # Example
    ///
    /// ```
    /// use bin2ihex::Record;
    ///
    /// let record = Record::data(0, vec![0x42]).unwrap();
    /// assert!(Record::data(0, vec![]).is_err());
    /// assert!(Record::data(0, vec![0; 256]).is_err());
    /// ```
    pub fn data(address: u16, payload: Vec<u8>) -> Result<Self> {
        if payload.is_empty() {
            return Err(IhexError::invalid_parameter(
                "payload",
                "must not be empty (count 0 is reserved for end-of-file)",
            ));
        }
        if payload.len() > MAX_PAYLOAD_LEN {
            return Err(IhexError::invalid_parameter(
                "payload",
                format!("must not exceed {} bytes", MAX_PAYLOAD_LEN),
            ));
        }

        Ok(Self {
            record_type: RecordType::Data,
            address,
            payload,
        })
    }

    /// Creates the end-of-file sentinel record.
    pub fn end_of_file() -> Self {
        Self {
            record_type: RecordType::EndOfFile,
            address: 0,
            payload: Vec::new(),
        }
    }

    /// Returns the record type.
    pub fn record_type(&self) -> RecordType {
        self.record_type
    }

    /// Returns the 16-bit address of the first payload byte.
    pub fn address(&self) -> u16 {
        self.address
    }

    /// Returns the payload bytes.
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Computes the record checksum.
    ///
    /// For data records this is the two's complement of the sum of the count,
    /// the address bytes, and the payload bytes. The end-of-file record has
    /// the fixed value `0xff` carried by its literal line.
    pub fn checksum(&self) -> u8 {
        match self.record_type {
            RecordType::Data => {
                let [hi, lo] = self.address.to_be_bytes();
                let mut fields = Vec::with_capacity(3 + self.payload.len());
                fields.push(self.payload.len() as u8);
                fields.push(hi);
                fields.push(lo);
                fields.extend_from_slice(&self.payload);
                checksum::checksum(&fields)
            }
            RecordType::EndOfFile => 0xff,
        }
    }

    /// Renders the record as one line of lowercase hex text (no terminator).
    ///
    /// # Example
    ///
    /// ```
    /// use bin2ihex::Record;
    ///
    /// let record = Record::data(0x0002, vec![0x03, 0x00]).unwrap();
    /// assert_eq!(record.to_line(), ":020002000300f9");
    /// assert_eq!(Record::end_of_file().to_line(), ":00000001ff");
    /// ```
    pub fn to_line(&self) -> String {
        match self.record_type {
            RecordType::Data => {
                let mut line = String::with_capacity(11 + 2 * self.payload.len());
                line.push(RECORD_MARKER);
                line.push_str(&format!("{:02x}", self.payload.len()));
                line.push_str(&format!("{:04x}", self.address));
                line.push_str(&format!("{:02x}", DATA_TYPE_CODE));
                for byte in &self.payload {
                    line.push_str(&format!("{:02x}", byte));
                }
                line.push_str(&format!("{:02x}", self.checksum()));
                line
            }
            RecordType::EndOfFile => EOF_RECORD_LINE.to_string(),
        }
    }
}

/// Running 16-bit address for one conversion session.
///
/// Starts at 0, advances by the payload width after each data record, and
/// wraps silently at 65536 to match the two-byte address field. Wrapping is
/// format behavior, not an error.
///
/// # Example
///
/// ```
/// use bin2ihex::AddressCounter;
///
/// let mut counter = AddressCounter::new();
/// counter.advance(16);
/// assert_eq!(counter.value(), 16);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AddressCounter(u16);

impl AddressCounter {
    /// Creates a counter starting at address 0.
    pub fn new() -> Self {
        Self(0)
    }

    /// Returns the current address.
    pub fn value(self) -> u16 {
        self.0
    }

    /// Advances the counter by one record's payload width, wrapping at 65536.
    pub fn advance(&mut self, width: u8) {
        self.0 = self.0.wrapping_add(u16::from(width));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_record_fields() {
        let record = Record::data(0x1234, vec![0xaa, 0xbb]).unwrap();
        assert_eq!(record.record_type(), RecordType::Data);
        assert_eq!(record.address(), 0x1234);
        assert_eq!(record.payload(), &[0xaa, 0xbb]);
    }

    #[test]
    fn test_data_record_empty_payload_rejected() {
        let result = Record::data(0, vec![]);
        assert!(matches!(result, Err(IhexError::InvalidParameter { .. })));
    }

    #[test]
    fn test_data_record_oversized_payload_rejected() {
        assert!(Record::data(0, vec![0; MAX_PAYLOAD_LEN]).is_ok());
        let result = Record::data(0, vec![0; MAX_PAYLOAD_LEN + 1]);
        assert!(matches!(result, Err(IhexError::InvalidParameter { .. })));
    }

    #[test]
    fn test_data_record_checksum() {
        // count=2, address=0x0000, payload=[0x01, 0x02]: sum 5, complement 0xfb.
        let record = Record::data(0x0000, vec![0x01, 0x02]).unwrap();
        assert_eq!(record.checksum(), 0xfb);
    }

    #[test]
    fn test_data_record_checksum_covers_address_bytes() {
        let record = Record::data(0x0100, vec![0x00]).unwrap();
        // sum = 1 + 0x01 + 0x00 + 0x00 = 2
        assert_eq!(record.checksum(), 0xfe);
    }

    #[test]
    fn test_to_line_lowercase_hex() {
        let record = Record::data(0xbeef, vec![0xca, 0xfe]).unwrap();
        let line = record.to_line();
        assert_eq!(&line[..1], ":");
        assert_eq!(line, line.to_lowercase());
        assert_eq!(line.len(), 11 + 4);
    }

    #[test]
    fn test_to_line_concrete() {
        let record = Record::data(0x0000, vec![0x01, 0x02]).unwrap();
        assert_eq!(record.to_line(), ":020000000102fb");
    }

    #[test]
    fn test_eof_record_line_is_fixed() {
        let eof = Record::end_of_file();
        assert_eq!(eof.record_type(), RecordType::EndOfFile);
        assert_eq!(eof.to_line(), ":00000001ff");
        assert_eq!(eof.checksum(), 0xff);
    }

    #[test]
    fn test_address_counter_advances() {
        let mut counter = AddressCounter::new();
        assert_eq!(counter.value(), 0);
        counter.advance(16);
        counter.advance(16);
        assert_eq!(counter.value(), 32);
    }

    #[test]
    fn test_address_counter_wraps_at_65536() {
        let mut counter = AddressCounter::new();
        for _ in 0..256 {
            counter.advance(255);
        }
        // 256 * 255 = 65280
        assert_eq!(counter.value(), 65280);
        counter.advance(255);
        counter.advance(1);
        assert_eq!(counter.value(), 0);
    }
}
