//! # Return Encoder
//!
//! Encodes state manager return values.
//!
//! Dynamic payloads (contract code) use the standard ABI layout for a single
//! `bytes` return value:
//!
//! ```text
//! [0x00..0x20)  offset of the dynamic segment (always 0x20)
//! [0x20..0x40)  payload length
//! [0x40..)      payload, zero-padded to a multiple of 32 bytes
//! ```
//!
//! Fixed-width returns (nonce, hashes, storage values) are raw words.

use crate::domain::value_objects::{Bytes, Word, U256, WORD_SIZE};
use crate::errors::AbiError;

/// Encodes `value` as a big-endian word with the high 24 bytes zero.
#[must_use]
pub fn encode_u64_word(value: u64) -> Word {
    let mut word = [0u8; WORD_SIZE];
    word[WORD_SIZE - 8..].copy_from_slice(&value.to_be_bytes());
    word
}

/// Frames `payload` as a single ABI dynamic `bytes` return value.
#[must_use]
pub fn encode_dynamic_bytes(payload: &[u8]) -> Bytes {
    let padded_len = payload.len().div_ceil(WORD_SIZE) * WORD_SIZE;
    let total = 2 * WORD_SIZE + padded_len;

    let mut out = Vec::with_capacity(total);
    out.extend_from_slice(&encode_u64_word(WORD_SIZE as u64));
    out.extend_from_slice(&encode_u64_word(payload.len() as u64));
    out.extend_from_slice(payload);
    out.resize(total, 0);
    Bytes::from(out)
}

/// Decodes a buffer holding a single ABI dynamic `bytes` value.
///
/// Follows the head offset rather than assuming `0x20`, so it accepts any
/// well-formed encoding, not only ours.
///
/// # Errors
///
/// Returns an [`AbiError`] if the offset or length fields point outside the
/// buffer or do not fit in `usize`.
pub fn decode_dynamic_bytes(buf: &[u8]) -> Result<Bytes, AbiError> {
    let offset = word_to_usize(read_word(buf, 0)?).ok_or_else(|| {
        AbiError::OffsetOutOfRange("offset exceeds usize".to_string())
    })?;
    if offset > buf.len() {
        return Err(AbiError::OffsetOutOfRange(format!(
            "offset {offset} past buffer of {} bytes",
            buf.len()
        )));
    }

    let len = word_to_usize(read_word(buf, offset)?)
        .ok_or_else(|| AbiError::LengthOutOfRange("length exceeds usize".to_string()))?;

    let start = offset + WORD_SIZE;
    let end = start.checked_add(len).ok_or_else(|| {
        AbiError::LengthOutOfRange(format!("length {len} overflows from offset {offset}"))
    })?;

    buf.get(start..end)
        .map(Bytes::from_slice)
        .ok_or(AbiError::Truncated {
            needed: end,
            available: buf.len(),
        })
}

fn read_word(buf: &[u8], at: usize) -> Result<&[u8], AbiError> {
    let end = at
        .checked_add(WORD_SIZE)
        .ok_or_else(|| AbiError::OffsetOutOfRange(format!("word at {at} overflows")))?;
    buf.get(at..end).ok_or(AbiError::Truncated {
        needed: end,
        available: buf.len(),
    })
}

fn word_to_usize(word: &[u8]) -> Option<usize> {
    let value = U256::from_big_endian(word);
    if value.bits() > 64 {
        return None;
    }
    usize::try_from(value.low_u64()).ok()
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_u64_word() {
        let word = encode_u64_word(0x0102_0304_0506_0708);
        assert_eq!(&word[..24], &[0u8; 24]);
        assert_eq!(&word[24..], &[1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_encode_empty_payload() {
        let encoded = encode_dynamic_bytes(&[]);
        assert_eq!(encoded.len(), 64);
        assert_eq!(encoded.as_slice()[31], 0x20);
        assert!(encoded.as_slice()[32..].iter().all(|b| *b == 0));
    }

    #[test]
    fn test_encode_matches_standard_layout() {
        let encoded = encode_dynamic_bytes(&[0xde, 0xad, 0xbe, 0xef]);
        let expected = format!(
            "{:064x}{:064x}{}{}",
            0x20,
            4,
            "deadbeef",
            "0".repeat(56)
        );
        assert_eq!(hex::encode(encoded.as_slice()), expected);
    }

    #[test]
    fn test_encode_pads_to_word_boundary() {
        for (len, total) in [(1, 96), (31, 96), (32, 96), (33, 128), (64, 128)] {
            let payload = vec![0xffu8; len];
            let encoded = encode_dynamic_bytes(&payload);
            assert_eq!(encoded.len(), total, "payload length {len}");
            assert!(encoded.as_slice()[64 + len..].iter().all(|b| *b == 0));
        }
    }

    #[test]
    fn test_decode_follows_offset() {
        // Offset 0x40 with a spare word before the length.
        let mut buf = encode_u64_word(0x40).to_vec();
        buf.extend_from_slice(&[0u8; 32]);
        buf.extend_from_slice(&encode_u64_word(2));
        buf.extend_from_slice(&[0xaa, 0xbb]);
        buf.resize(buf.len() + 30, 0);

        let decoded = decode_dynamic_bytes(&buf).unwrap();
        assert_eq!(decoded.as_slice(), &[0xaa, 0xbb]);
    }

    #[test]
    fn test_decode_rejects_truncated_payload() {
        let mut buf = encode_dynamic_bytes(&[1, 2, 3]).into_vec();
        buf.truncate(66);
        assert!(matches!(
            decode_dynamic_bytes(&buf),
            Err(AbiError::Truncated {
                needed: 67,
                available: 66
            })
        ));
    }

    #[test]
    fn test_decode_rejects_huge_offset() {
        let buf = [0xffu8; 64];
        assert!(matches!(
            decode_dynamic_bytes(&buf),
            Err(AbiError::OffsetOutOfRange(_))
        ));
    }

    #[test]
    fn test_decode_rejects_short_head() {
        assert!(matches!(
            decode_dynamic_bytes(&[0u8; 10]),
            Err(AbiError::Truncated {
                needed: 32,
                available: 10
            })
        ));
    }
}
