use std::fmt;
use num_enum::TryFromPrimitive;

/// Render a raw registry id as its enum variant name, or hex when unknown.
///
/// Used for log fields where the raw value came off the wire.
pub fn enum_name_or_hex<T>(raw: T::Primitive) -> String
where
    T: TryFromPrimitive + fmt::Debug,
    T::Primitive: fmt::LowerHex,
{
    match T::try_from_primitive(raw) {
        Ok(variant) => format!("{:?}", variant),
        Err(_) => format!("0x{:x}", raw),
    }
}

/// Number of zero bytes that bring `len` up to the next multiple of 16.
///
/// `(16 - len % 16) % 16`: zero when already aligned.
#[inline]
pub const fn pad16_len(len: usize) -> usize {
    (16 - len % 16) % 16
}
