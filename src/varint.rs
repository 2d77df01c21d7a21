//! VarInt codec for message length prefixes.
//!
//! Encoding: low 7 bits per byte, least-significant group first, bit 7 set
//! while more bytes follow. 0x35 encodes as [0x35]; 5248 encodes as
//! [0x80, 0x29]. The domain ceiling 0x7FFFFFFF encodes as
//! [0xFF, 0xFF, 0xFF, 0xFF, 0x07], so a prefix is never longer than 5 bytes
//! and the fifth byte's payload never exceeds 0x07.

use crate::cursor::ByteCursor;
use crate::error::LengthError;
use tracing::trace;

/// Largest encodable length (2^31 - 1); payloads must stay under 2GB.
pub const MAX_LENGTH: u32 = 0x7FFF_FFFF;

/// Maximum encoded width of a length prefix.
pub const MAX_PREFIX_BYTES: usize = 5;

/// Encode `len` as a VarInt, appending 1-5 bytes to `out`.
///
/// Rejects lengths above [`MAX_LENGTH`] instead of emitting an over-wide
/// prefix no decoder would accept.
pub fn encode_length(len: u32, out: &mut Vec<u8>) -> Result<(), LengthError> {
    if len > MAX_LENGTH {
        return Err(LengthError::OutOfRange);
    }

    let mut remaining = len;
    while remaining >= 0x80 {
        out.push((remaining as u8) | 0x80);
        remaining >>= 7;
    }
    out.push(remaining as u8);

    trace!("Encoded length {} as {} prefix byte(s)", len, encoded_width(len));
    Ok(())
}

/// Number of bytes [`encode_length`] emits for an in-range `len`.
pub fn encoded_width(len: u32) -> usize {
    match len {
        0..=0x7F => 1,
        0x80..=0x3FFF => 2,
        0x4000..=0x001F_FFFF => 3,
        0x0020_0000..=0x0FFF_FFFF => 4,
        _ => 5,
    }
}

/// Decode one VarInt length, advancing `cursor` past exactly the bytes
/// consumed.
///
/// Fails with `Truncated` the moment the buffer runs out mid-prefix, with
/// `Malformed` if the fifth byte still has its continuation bit set, and
/// with `OutOfRange` if the fifth byte's payload exceeds 0x07 (a decoded
/// value above [`MAX_LENGTH`]).
pub fn decode_length(cursor: &mut ByteCursor<'_>) -> Result<u32, LengthError> {
    let mut value: u32 = 0;
    let mut index = 0;

    loop {
        let byte = cursor.read_u8().ok_or(LengthError::Truncated)?;
        let group = u32::from(byte & 0x7F);
        let last = byte & 0x80 == 0;

        if index == MAX_PREFIX_BYTES - 1 {
            if !last {
                return Err(LengthError::Malformed);
            }
            // Only 3 of the fifth byte's 7 payload bits fit in the 31-bit
            // domain; checked before the shift so the accumulator cannot wrap.
            if group > 0x07 {
                return Err(LengthError::OutOfRange);
            }
        }

        value |= group << (7 * index);
        index += 1;

        if last {
            trace!("Decoded length {} from {} prefix byte(s)", value, index);
            return Ok(value);
        }
    }
}

/// Decode one VarInt length from the front of `buf`, returning the value and
/// the number of bytes consumed.
pub fn decode_length_prefix(buf: &[u8]) -> Result<(u32, usize), LengthError> {
    let mut cursor = ByteCursor::new(buf);
    let value = decode_length(&mut cursor)?;
    Ok((value, cursor.position()))
}
