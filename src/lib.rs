//! VarInt length-prefix codec for framed message streams.
//!
//! Every framed message on the wire starts with its payload length encoded
//! as a VarInt: 1-5 bytes, least-significant 7-bit group first, bit 7 of
//! each byte marking whether another byte follows. The largest supported
//! length is 0x7FFFFFFF, so payloads must stay under 2GB.
//!
//! The codec is a pure leaf: the surrounding framing layer owns the byte
//! stream and decides what to do with a decoded length or a failed decode.

mod cursor;
mod error;
mod varint;

pub use cursor::ByteCursor;
pub use error::LengthError;
pub use varint::{
    decode_length, decode_length_prefix, encode_length, encoded_width, MAX_LENGTH,
    MAX_PREFIX_BYTES,
};
