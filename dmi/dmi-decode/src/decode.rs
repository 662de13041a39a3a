//! # Field decoders
//!
//! Each decoder takes the owning record and the field's header-inclusive
//! offset and returns the formatted value, or `None` when the field holds no
//! value. Decoders never index out of bounds: a formatted area that is
//! shorter than the field yields `None`.

mod chassis;
mod processor;
mod revision;
mod string;
mod uuid;

pub use chassis::{CHASSIS_TYPES, ChassisTypeByte, chassis_type_name, decode_chassis_type};
pub use processor::{PROCESSOR_FAMILIES, decode_family, decode_frequency, family_name};
pub use revision::decode_revision;
pub use string::{decode_string, string_field};
pub use uuid::{decode_uuid, format_uuid};

use dmi_table::{HEADER_LEN, Record};

/// String index 0 or past the end of the string set.
pub const NOT_SPECIFIED: &str = "Not Specified";

/// Enumerated value outside the range the standard defines.
pub const OUT_OF_SPEC: &str = "<OUT OF SPEC>";

/// Index into the header-stripped formatted area for a header-inclusive offset.
#[inline]
fn formatted_index(offset: u8) -> Option<usize> {
    usize::from(offset).checked_sub(HEADER_LEN)
}

/// The byte at a header-inclusive offset.
#[inline]
fn byte_at(record: &Record, offset: u8) -> Option<u8> {
    record.formatted.get(formatted_index(offset)?).copied()
}

/// `N` bytes starting at a header-inclusive offset.
#[inline]
fn bytes_at<const N: usize>(record: &Record, offset: u8) -> Option<[u8; N]> {
    let start = formatted_index(offset)?;
    record.formatted.get(start..start + N)?.try_into().ok()
}

/// Little-endian word at a header-inclusive offset.
#[inline]
fn word_at(record: &Record, offset: u8) -> Option<u16> {
    bytes_at::<2>(record, offset).map(u16::from_le_bytes)
}

#[cfg(test)]
fn record(record_type: u8, formatted: &[u8], strings: &[&str]) -> Record {
    Record {
        record_type,
        length: u8::try_from(formatted.len() + HEADER_LEN).unwrap(),
        handle: 0,
        formatted: formatted.to_vec(),
        strings: strings.iter().map(|s| (*s).to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_are_header_inclusive() {
        let r = record(0, &[0xAA, 0xBB, 0xCC], &[]);
        assert_eq!(byte_at(&r, 0x04), Some(0xAA));
        assert_eq!(byte_at(&r, 0x06), Some(0xCC));
        assert_eq!(byte_at(&r, 0x07), None);
        assert_eq!(byte_at(&r, 0x03), None);
        assert_eq!(word_at(&r, 0x05), Some(0xCCBB));
        assert_eq!(word_at(&r, 0x06), None);
    }
}
