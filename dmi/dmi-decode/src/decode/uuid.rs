use super::bytes_at;
use core::fmt::Write;
use dmi_table::{Record, VersionInfo};

/// Storage order of the emitted bytes when the first three fields are little-endian.
const LE_FIELD_ORDER: [usize; 16] = [3, 2, 1, 0, 5, 4, 7, 6, 8, 9, 10, 11, 12, 13, 14, 15];

/// Storage order of the emitted bytes when all bytes are taken verbatim.
const STORAGE_ORDER: [usize; 16] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15];

/// Decode the 16-byte system UUID at `offset`.
///
/// SMBIOS 2.6 made the first three fields little-endian; older tables store
/// every byte in display order.
#[must_use]
pub fn decode_uuid(record: &Record, offset: u8, version: &VersionInfo) -> Option<String> {
    let bytes = bytes_at::<16>(record, offset)?;

    if bytes.iter().all(|&b| b == 0xFF) {
        return Some("Not Present".to_owned());
    }

    if bytes.iter().all(|&b| b == 0x00) {
        return Some("Not Settable".to_owned());
    }

    Some(format_uuid(&bytes, version.is_at_least(2, 6)))
}

/// Format 16 raw bytes as a lowercase `8-4-4-4-12` UUID.
#[must_use]
pub fn format_uuid(bytes: &[u8; 16], little_endian_fields: bool) -> String {
    let order = if little_endian_fields {
        &LE_FIELD_ORDER
    } else {
        &STORAGE_ORDER
    };

    let mut out = String::with_capacity(36);
    for (i, &idx) in order.iter().enumerate() {
        if matches!(i, 4 | 6 | 8 | 10) {
            out.push('-');
        }
        // Writing into a String cannot fail.
        let _ = write!(out, "{:02x}", bytes[idx]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::record;

    const RAW: [u8; 16] = [
        0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xAA, 0xBB, 0xCC, 0xDD, 0xEE,
        0xFF,
    ];

    fn system_record(uuid: [u8; 16]) -> Record {
        // Manufacturer, product, version and serial string indices precede the UUID.
        let mut formatted = vec![0u8; 4];
        formatted.extend_from_slice(&uuid);
        record(1, &formatted, &[])
    }

    #[test]
    fn byte_order_depends_on_version() {
        let r = system_record(RAW);

        let v26 = VersionInfo::new(2, 6, 0, 0, 0);
        assert_eq!(
            decode_uuid(&r, 0x08, &v26).as_deref(),
            Some("33221100-5544-7766-8899-aabbccddeeff")
        );

        let v30 = VersionInfo::new(3, 0, 0, 0, 0);
        assert_eq!(
            decode_uuid(&r, 0x08, &v30).as_deref(),
            Some("33221100-5544-7766-8899-aabbccddeeff")
        );

        let v25 = VersionInfo::new(2, 5, 0, 0, 0);
        assert_eq!(
            decode_uuid(&r, 0x08, &v25).as_deref(),
            Some("00112233-4455-6677-8899-aabbccddeeff")
        );
    }

    #[test]
    fn sentinels() {
        let v = VersionInfo::new(2, 8, 0, 0, 0);
        assert_eq!(
            decode_uuid(&system_record([0xFF; 16]), 0x08, &v).as_deref(),
            Some("Not Present")
        );
        assert_eq!(
            decode_uuid(&system_record([0x00; 16]), 0x08, &v).as_deref(),
            Some("Not Settable")
        );
    }

    #[test]
    fn mixed_ff_and_zero_is_formatted() {
        let mut raw = [0xFF; 16];
        raw[15] = 0x00;
        let v = VersionInfo::new(2, 4, 0, 0, 0);
        assert_eq!(
            decode_uuid(&system_record(raw), 0x08, &v).as_deref(),
            Some("ffffffff-ffff-ffff-ffff-ffffffffff00")
        );
    }

    #[test]
    fn short_record_has_no_uuid() {
        let r = record(1, &[0, 0, 0, 0, 1, 2, 3], &[]);
        let v = VersionInfo::new(2, 8, 0, 0, 0);
        assert_eq!(decode_uuid(&r, 0x08, &v), None);
    }
}
