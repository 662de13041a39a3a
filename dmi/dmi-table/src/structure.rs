//! # SMBIOS structures
//!
//! Every structure in the table has the same wire layout:
//!
//! ```text
//! +------+--------+--------+------------------+--------------------------+
//! | type | length | handle | formatted area   | "str1\0str2\0...\0" "\0" |
//! |  u8  |   u8   | u16 LE | length - 4 bytes | string set               |
//! +------+--------+--------+------------------+--------------------------+
//! ```
//!
//! `length` covers the header and the formatted area, never the strings.

use crate::{TableSourceError, read_u16_le};

/// Size of the structure header (type, length, handle).
pub const HEADER_LEN: usize = 4;

/// Type of the end-of-table structure.
pub const END_OF_TABLE: u8 = 127;

/// One decoded SMBIOS structure.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Record {
    pub record_type: u8,

    /// Total length of header plus formatted area.
    pub length: u8,

    pub handle: u16,

    /// Formatted area with the header stripped.
    pub formatted: Vec<u8>,

    /// String set; string number `n` on the wire lives at index `n - 1`.
    pub strings: Vec<String>,
}

impl Record {
    /// Look up a string by its 1-based wire index.
    ///
    /// Index 0 means "no string" and yields `None`.
    #[must_use]
    pub fn string(&self, index: u8) -> Option<&str> {
        let i = usize::from(index).checked_sub(1)?;
        self.strings.get(i).map(String::as_str)
    }
}

/// Decode all structures contained in `table`.
///
/// Decoding stops after the end-of-table structure (type 127) or once all
/// input has been consumed, whichever comes first.
///
/// # Errors
/// Returns an error if a structure is truncated, declares a length shorter
/// than its header, or its string set is not terminated.
pub fn decode_structures(table: &[u8]) -> Result<Vec<Record>, TableSourceError> {
    let mut records = Vec::new();
    let mut pos = 0;

    while pos < table.len() {
        let (record, next) = decode_one(table, pos)?;
        let record_type = record.record_type;
        records.push(record);
        pos = next;

        if record_type == END_OF_TABLE {
            break;
        }
    }

    log::debug!("Decoded {} SMBIOS structures", records.len());
    Ok(records)
}

/// Decode the structure starting at `start`; returns it and the offset of the next one.
fn decode_one(table: &[u8], start: usize) -> Result<(Record, usize), TableSourceError> {
    let header = table
        .get(start..start + HEADER_LEN)
        .ok_or(TableSourceError::TruncatedStructure { offset: start })?;

    let record_type = header[0];
    let length = header[1];
    let handle = read_u16_le(header, 2).unwrap_or_default();

    if usize::from(length) < HEADER_LEN {
        return Err(TableSourceError::InvalidStructureLength {
            offset: start,
            length,
        });
    }

    let formatted_end = start + usize::from(length);
    let formatted = table
        .get(start + HEADER_LEN..formatted_end)
        .ok_or(TableSourceError::TruncatedStructure { offset: start })?
        .to_vec();

    let (strings, next) = decode_strings(table, formatted_end)
        .ok_or(TableSourceError::UnterminatedStrings { offset: start })?;

    Ok((
        Record {
            record_type,
            length,
            handle,
            formatted,
            strings,
        },
        next,
    ))
}

/// Decode the string set at `pos`; returns the strings and the offset past the terminator.
fn decode_strings(table: &[u8], mut pos: usize) -> Option<(Vec<String>, usize)> {
    let mut strings = Vec::new();

    // An empty string set is encoded as two NUL bytes.
    if table.get(pos..pos + 2)? == [0, 0] {
        return Some((strings, pos + 2));
    }

    loop {
        let rest = table.get(pos..)?;
        let nul = rest.iter().position(|&b| b == 0)?;
        strings.push(String::from_utf8_lossy(&rest[..nul]).into_owned());
        pos += nul + 1;

        if *table.get(pos)? == 0 {
            return Some((strings, pos + 1));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_only() {
        let got = decode_structures(&[127, 0x04, 0x01, 0x00, 0x00, 0x00]).unwrap();
        assert_eq!(
            got,
            vec![Record {
                record_type: 127,
                length: 4,
                handle: 1,
                formatted: vec![],
                strings: vec![],
            }]
        );
    }

    #[test]
    fn strings_are_one_indexed() {
        let got = decode_structures(&[
            1, 0x06, 0x01, 0x00, 0x01, 0x02, b'a', b'b', b'c', b'd', 0x00, b'1', b'2', b'3', b'4',
            0x00, 0x00,
        ])
        .unwrap();

        assert_eq!(got.len(), 1);
        assert_eq!(got[0].formatted, vec![1, 2]);
        assert_eq!(got[0].strings, vec!["abcd".to_string(), "1234".to_string()]);
        assert_eq!(got[0].string(0), None);
        assert_eq!(got[0].string(1), Some("abcd"));
        assert_eq!(got[0].string(2), Some("1234"));
        assert_eq!(got[0].string(3), None);
    }

    #[test]
    fn stops_at_end_of_table() {
        #[rustfmt::skip]
        let got = decode_structures(&[
            0x00, 0x05, 0x01, 0x00,
            0xff,
            0x00, 0x00,

            127, 0x04, 0x02, 0x00,
            0x00, 0x00,

            // Trailing garbage after the end-of-table marker is never looked at.
            0x01, 0x02,
        ])
        .unwrap();

        assert_eq!(got.len(), 2);
        assert_eq!(got[0].formatted, vec![0xff]);
        assert_eq!(got[1].record_type, END_OF_TABLE);
    }

    #[test]
    fn truncated_formatted_area() {
        let err = decode_structures(&[0x01, 0x10, 0x01, 0x00, 0xaa]).unwrap_err();
        assert!(matches!(
            err,
            TableSourceError::TruncatedStructure { offset: 0 }
        ));
    }

    #[test]
    fn invalid_length() {
        let err = decode_structures(&[0x01, 0x02, 0x01, 0x00, 0x00, 0x00]).unwrap_err();
        assert!(matches!(
            err,
            TableSourceError::InvalidStructureLength {
                offset: 0,
                length: 2
            }
        ));
    }

    #[test]
    fn unterminated_strings() {
        let err = decode_structures(&[0x01, 0x04, 0x01, 0x00, b'a', b'b']).unwrap_err();
        assert!(matches!(
            err,
            TableSourceError::UnterminatedStrings { offset: 0 }
        ));
    }
}
