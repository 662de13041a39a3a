use crate::Error;
use crate::decode::{
    decode_chassis_type, decode_family, decode_frequency, decode_revision, decode_string,
    decode_uuid,
};
use crate::keyword::Keyword;
use crate::registry::{self, FieldDescriptor, FieldKind};
use dmi_table::{Decoder, Record, TableSource, VersionInfo};

/// An immutable snapshot of the SMBIOS table, queried by keyword.
///
/// Construction reads the table once; every query afterwards is a pure
/// lookup over the owned records and never fails. Absent values come back
/// as an empty string.
#[derive(Debug, Clone)]
pub struct DmiTable {
    version: VersionInfo,
    records: Vec<Record>,
}

impl DmiTable {
    /// Open `source` and decode every structure it yields.
    ///
    /// # Errors
    /// [`Error::Open`] if the source cannot be opened, [`Error::Decode`] if the
    /// table cannot be read or is malformed.
    pub fn new<S: TableSource>(source: &S) -> Result<Self, Error> {
        let (stream, version) = source.open().map_err(Error::Open)?;
        let records = Decoder::new(stream).decode().map_err(Error::Decode)?;
        log::info!("{version}");
        Ok(Self::from_parts(version, records))
    }

    /// Wrap records that were decoded elsewhere.
    #[must_use]
    pub const fn from_parts(version: VersionInfo, records: Vec<Record>) -> Self {
        Self { version, records }
    }

    /// The version line, e.g. `SMBIOS 3.2.0 - table: address: 0x7aed3000, size: 4017`.
    #[must_use]
    pub fn version(&self) -> String {
        self.version.to_string()
    }

    #[must_use]
    pub const fn version_info(&self) -> &VersionInfo {
        &self.version
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// The first record of the given type, in table order.
    #[must_use]
    pub fn find_record(&self, record_type: u8) -> Option<&Record> {
        self.records.iter().find(|r| r.record_type == record_type)
    }

    /// Resolve a keyword name. Unknown names resolve to `""`.
    #[must_use]
    pub fn query(&self, keyword: &str) -> String {
        registry::lookup(keyword).map_or_else(
            || {
                log::debug!("Unknown keyword {keyword:?}");
                String::new()
            },
            |field| self.resolve(field),
        )
    }

    #[must_use]
    pub fn query_keyword(&self, keyword: Keyword) -> String {
        self.resolve(keyword.descriptor())
    }

    /// Every keyword with its resolved value, in [`Keyword::ALL`] order.
    pub fn entries(&self) -> impl Iterator<Item = (Keyword, String)> + '_ {
        registry::fields()
            .iter()
            .map(|field| (field.keyword, self.resolve(field)))
    }

    fn resolve(&self, field: &FieldDescriptor) -> String {
        let Some(record) = self.find_record(field.record_type.as_u8()) else {
            log::debug!("{}: no type {} structure", field.keyword, field.record_type.as_u8());
            return String::new();
        };

        if field.offset >= record.length {
            log::debug!(
                "{}: offset {:#04x} is past the structure length {:#04x}",
                field.keyword,
                field.offset,
                record.length
            );
            return String::new();
        }

        let value = match field.kind {
            FieldKind::String => decode_string(record, field.offset),
            FieldKind::Revision => decode_revision(record, field.offset),
            FieldKind::Uuid => decode_uuid(record, field.offset, &self.version),
            FieldKind::ChassisType => decode_chassis_type(record, field.offset),
            FieldKind::ProcessorFamily => decode_family(record, field.offset, &self.version),
            FieldKind::ProcessorFrequency => decode_frequency(record, field.offset),
        };

        value.unwrap_or_default()
    }
}
