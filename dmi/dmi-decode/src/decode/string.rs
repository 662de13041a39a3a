use super::{NOT_SPECIFIED, byte_at};
use dmi_table::Record;

/// Resolve the string referenced by the index byte at `offset`.
///
/// Index 0 and indices past the end of the string set resolve to
/// [`NOT_SPECIFIED`]. `None` only if the index byte itself is missing.
#[must_use]
pub fn string_field(record: &Record, offset: u8) -> Option<&str> {
    let index = byte_at(record, offset)?;
    Some(record.string(index).unwrap_or(NOT_SPECIFIED))
}

#[must_use]
pub fn decode_string(record: &Record, offset: u8) -> Option<String> {
    string_field(record, offset).map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::record;

    #[test]
    fn resolves_one_based_index() {
        let r = record(0, &[0x02, 0x01], &["Acme", "1.0.3"]);
        assert_eq!(decode_string(&r, 0x04).as_deref(), Some("1.0.3"));
        assert_eq!(decode_string(&r, 0x05).as_deref(), Some("Acme"));
    }

    #[test]
    fn zero_index_is_not_specified() {
        let r = record(0, &[0x00], &["Acme"]);
        assert_eq!(decode_string(&r, 0x04).as_deref(), Some(NOT_SPECIFIED));
    }

    #[test]
    fn index_past_string_set_is_not_specified() {
        let r = record(0, &[0x03], &["a", "b"]);
        assert_eq!(decode_string(&r, 0x04).as_deref(), Some(NOT_SPECIFIED));

        let r = record(0, &[0x01], &[]);
        assert_eq!(decode_string(&r, 0x04).as_deref(), Some(NOT_SPECIFIED));
    }

    #[test]
    fn missing_index_byte() {
        let r = record(0, &[0x01], &["a"]);
        assert_eq!(decode_string(&r, 0x05), None);
    }
}
