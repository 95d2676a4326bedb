//! Two's-complement checksum helpers.
//!
//! Every record carries a one-byte checksum: the two's complement of the sum
//! of its `count`, address high byte, address low byte, and payload bytes,
//! taken modulo 256. A record is valid when the unsigned sum of all fields
//! including the checksum itself is congruent to 0 modulo 256.
//!
//! # Example
//!
//! ```
//! use bin2ihex::checksum::{checksum, is_valid};
//!
//! // count=2, address=0x0000, payload=[0x01, 0x02]
//! let fields = [0x02, 0x00, 0x00, 0x01, 0x02];
//! let sum = checksum(&fields);
//! assert_eq!(sum, 0xfb);
//! assert!(is_valid(&fields, sum));
//! ```

/// Computes the two's-complement checksum of the given field bytes.
///
/// Returns `(~sum) + 1` truncated to 8 bits, where `sum` is the wrapping sum
/// of all input bytes. Pure and total: any byte values are acceptable.
///
/// # Example
///
/// ```
/// use bin2ihex::checksum::checksum;
///
/// assert_eq!(checksum(&[]), 0x00);
/// assert_eq!(checksum(&[0x01]), 0xff);
/// assert_eq!(checksum(&[0x02, 0x00, 0x00, 0x01, 0x02]), 0xfb);
/// ```
#[inline]
pub fn checksum(fields: &[u8]) -> u8 {
    fields
        .iter()
        .fold(0u8, |sum, &byte| sum.wrapping_add(byte))
        .wrapping_neg()
}

/// Returns whether an embedded checksum is valid for the given field bytes.
///
/// Valid means the sum of all fields plus the checksum wraps to zero.
///
/// # Example
///
/// ```
/// use bin2ihex::checksum::is_valid;
///
/// let fields = [0x02, 0x00, 0x00, 0x01, 0x02];
/// assert!(is_valid(&fields, 0xfb));
/// assert!(!is_valid(&fields, 0xfc));
/// ```
#[inline]
pub fn is_valid(fields: &[u8], embedded: u8) -> bool {
    checksum(fields) == embedded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum_empty() {
        assert_eq!(checksum(&[]), 0x00);
    }

    #[test]
    fn test_checksum_single_byte() {
        assert_eq!(checksum(&[0x01]), 0xff);
        assert_eq!(checksum(&[0xff]), 0x01);
        assert_eq!(checksum(&[0x80]), 0x80);
    }

    #[test]
    fn test_checksum_wraps_modulo_256() {
        // 0xff + 0xff = 0x1fe, truncated to 0xfe; two's complement = 0x02.
        assert_eq!(checksum(&[0xff, 0xff]), 0x02);
        // 256 ones sum to 0 modulo 256.
        assert_eq!(checksum(&[0x01; 256]), 0x00);
    }

    #[test]
    fn test_checksum_field_sum_cancels() {
        let fields = [0x10, 0x01, 0x00, 0xde, 0xad, 0xbe, 0xef];
        let sum = checksum(&fields);
        let total = fields
            .iter()
            .fold(sum, |acc, &byte| acc.wrapping_add(byte));
        assert_eq!(total, 0);
    }

    #[test]
    fn test_is_valid() {
        let fields = [0x02, 0x00, 0x00, 0x01, 0x02];
        assert!(is_valid(&fields, 0xfb));
        assert!(!is_valid(&fields, 0x0d));
        assert!(is_valid(&[], 0x00));
    }
}
