use super::byte_at;
use dmi_table::Record;

/// Byte value marking a revision the firmware does not report.
const UNSUPPORTED: u8 = 0xFF;

/// Decode a `major.minor` pair stored in the two bytes ending at `offset`.
///
/// Either byte being `0xFF` means the BIOS does not support the field.
#[must_use]
pub fn decode_revision(record: &Record, offset: u8) -> Option<String> {
    let major = byte_at(record, offset.checked_sub(1)?)?;
    let minor = byte_at(record, offset)?;

    if major == UNSUPPORTED || minor == UNSUPPORTED {
        return None;
    }

    Some(format!("{major}.{minor}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::record;

    #[test]
    fn formats_decimal_pair() {
        let r = record(0, &[0x00, 0x02, 0x01], &[]);
        assert_eq!(decode_revision(&r, 0x06).as_deref(), Some("2.1"));

        let r = record(0, &[0x00, 0x0A, 0x10], &[]);
        assert_eq!(decode_revision(&r, 0x06).as_deref(), Some("10.16"));
    }

    #[test]
    fn ff_marks_unsupported() {
        let r = record(0, &[0x00, 0xFF, 0x01], &[]);
        assert_eq!(decode_revision(&r, 0x06), None);

        let r = record(0, &[0x00, 0x02, 0xFF], &[]);
        assert_eq!(decode_revision(&r, 0x06), None);
    }

    #[test]
    fn bios_and_firmware_revision_offsets() {
        // Formatted area of a type 0 record long enough for both revision pairs.
        let mut formatted = [0u8; 0x14];
        formatted[0x14 - 4] = 2;
        formatted[0x15 - 4] = 7;
        formatted[0x16 - 4] = 0xFF;
        formatted[0x17 - 4] = 0xFF;
        let r = record(0, &formatted, &[]);

        assert_eq!(decode_revision(&r, 0x15).as_deref(), Some("2.7"));
        assert_eq!(decode_revision(&r, 0x17), None);
    }
}
