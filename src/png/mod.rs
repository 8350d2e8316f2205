pub mod chunk;
pub mod encoder;
pub mod inspect;

pub const SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Largest value allowed in a chunk length or IHDR dimension field.
pub const MAX_FIELD_VALUE: u32 = i32::MAX as u32;
