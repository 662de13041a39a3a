//! # Table sources
//!
//! Platform-facing half of the crate: where the entry point and the raw
//! structure table are read from.

use crate::entry_point::{has_anchor, parse_entry_point};
use crate::{Record, TableSourceError, VersionInfo, decode_structures};
use std::fs::File;
use std::io::{self, Cursor, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

/// Default Linux sysfs directory exporting the SMBIOS entry point and table.
pub const SYSFS_DMI_DIR: &str = "/sys/firmware/dmi/tables";

/// Default physical memory device.
pub const DEV_MEM: &str = "/dev/mem";

/// Start of the legacy BIOS area that is scanned for an entry point.
const SCAN_START: u64 = 0x000F_0000;

/// End (exclusive) of the legacy BIOS area.
const SCAN_END: u64 = 0x0010_0000;

/// Entry points are aligned on 16-byte paragraphs.
const PARAGRAPH_SIZE: usize = 16;

/// Entry points are never larger than this.
const MAX_ENTRY_POINT_LEN: usize = 64;

/// Something that can locate and open the SMBIOS structure table.
///
/// Opening may block and may require elevated privileges. The returned stream
/// yields the raw structure table; [`Decoder`] turns it into [`Record`]s.
pub trait TableSource {
    type Stream: Read;

    /// Locate the table and return its stream along with the entry point's version info.
    ///
    /// # Errors
    /// Returns an error if the table is unavailable or its entry point is malformed.
    fn open(&self) -> Result<(Self::Stream, VersionInfo), TableSourceError>;
}

/// Decodes SMBIOS structures from a byte stream.
pub struct Decoder<R: Read> {
    stream: R,
}

impl<R: Read> Decoder<R> {
    pub const fn new(stream: R) -> Self {
        Self { stream }
    }

    /// Read the whole stream and split it into records.
    ///
    /// # Errors
    /// Returns an error if reading fails or the table is malformed.
    pub fn decode(mut self) -> Result<Vec<Record>, TableSourceError> {
        let mut table = Vec::new();
        self.stream.read_to_end(&mut table)?;
        decode_structures(&table)
    }
}

/// Reads `smbios_entry_point` and `DMI` from the Linux sysfs DMI directory.
#[derive(Debug, Clone)]
pub struct SysfsSource {
    dir: PathBuf,
}

impl SysfsSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn entry_point_path(&self) -> PathBuf {
        self.dir.join("smbios_entry_point")
    }

    fn table_path(&self) -> PathBuf {
        self.dir.join("DMI")
    }

    /// Whether the directory exports an entry point at all.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.entry_point_path().exists()
    }
}

impl Default for SysfsSource {
    fn default() -> Self {
        Self::new(SYSFS_DMI_DIR)
    }
}

impl TableSource for SysfsSource {
    type Stream = File;

    fn open(&self) -> Result<(Self::Stream, VersionInfo), TableSourceError> {
        let entry_point = std::fs::read(self.entry_point_path())?;
        let version = parse_entry_point(&entry_point)?.version_info();
        let table = File::open(self.table_path())?;
        log::debug!("Reading SMBIOS table from {}", self.dir.display());
        Ok((table, version))
    }
}

/// Scans the legacy BIOS area of a physical memory device for the entry point.
#[derive(Debug, Clone)]
pub struct DevMemSource {
    path: PathBuf,
}

impl DevMemSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn is_available(&self) -> bool {
        self.path.exists()
    }
}

impl Default for DevMemSource {
    fn default() -> Self {
        Self::new(DEV_MEM)
    }
}

impl TableSource for DevMemSource {
    type Stream = io::Take<File>;

    fn open(&self) -> Result<(Self::Stream, VersionInfo), TableSourceError> {
        let mut mem = File::open(&self.path)?;
        let address = find_entry_point(&mut mem, SCAN_START, SCAN_END)?;
        log::debug!("Found SMBIOS entry point at {address:#x} in {}", self.path.display());

        let mut buf = [0u8; MAX_ENTRY_POINT_LEN];
        mem.seek(SeekFrom::Start(address))?;
        let n = read_up_to(&mut mem, &mut buf)?;
        let version = parse_entry_point(&buf[..n])?.version_info();

        let (table_address, table_size) = version.location();
        mem.seek(SeekFrom::Start(table_address))?;
        Ok((mem.take(u64::from(table_size)), version))
    }
}

/// Reads a binary dump as written by `dmidecode --dump-bin`.
///
/// The file starts with the entry point; its table address field holds the
/// file offset of the structure table.
#[derive(Debug, Clone)]
pub struct DumpFileSource {
    path: PathBuf,
}

impl DumpFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TableSource for DumpFileSource {
    type Stream = io::Take<File>;

    fn open(&self) -> Result<(Self::Stream, VersionInfo), TableSourceError> {
        let mut file = File::open(&self.path)?;

        let mut buf = [0u8; MAX_ENTRY_POINT_LEN];
        let n = read_up_to(&mut file, &mut buf)?;
        let version = parse_entry_point(&buf[..n])?.version_info();

        let (offset, size) = version.location();
        file.seek(SeekFrom::Start(offset))?;
        log::debug!(
            "Reading SMBIOS table from dump {} at offset {offset:#x}",
            self.path.display()
        );
        Ok((file.take(u64::from(size)), version))
    }
}

/// Entry point and structure table held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    entry_point: Vec<u8>,
    table: Vec<u8>,
}

impl MemorySource {
    pub fn new(entry_point: impl Into<Vec<u8>>, table: impl Into<Vec<u8>>) -> Self {
        Self {
            entry_point: entry_point.into(),
            table: table.into(),
        }
    }
}

impl TableSource for MemorySource {
    type Stream = Cursor<Vec<u8>>;

    fn open(&self) -> Result<(Self::Stream, VersionInfo), TableSourceError> {
        let version = parse_entry_point(&self.entry_point)?.version_info();
        Ok((Cursor::new(self.table.clone()), version))
    }
}

/// Platform default: sysfs when exported, `/dev/mem` otherwise.
#[derive(Debug, Clone, Default)]
pub struct PlatformSource {
    sysfs: SysfsSource,
    dev_mem: DevMemSource,
}

impl PlatformSource {
    #[must_use]
    pub const fn new(sysfs: SysfsSource, dev_mem: DevMemSource) -> Self {
        Self { sysfs, dev_mem }
    }
}

impl TableSource for PlatformSource {
    type Stream = Box<dyn Read>;

    fn open(&self) -> Result<(Self::Stream, VersionInfo), TableSourceError> {
        if self.sysfs.is_available() {
            let (stream, version) = self.sysfs.open()?;
            return Ok((Box::new(stream), version));
        }

        if self.dev_mem.is_available() {
            log::warn!("sysfs DMI tables not available, falling back to physical memory scan");
            let (stream, version) = self.dev_mem.open()?;
            return Ok((Box::new(stream), version));
        }

        Err(TableSourceError::EntryPointNotFound)
    }
}

/// Scan `[start, end)` of `mem` on paragraph boundaries for an entry point anchor.
fn find_entry_point<R: Read + Seek>(mem: &mut R, start: u64, end: u64) -> Result<u64, TableSourceError> {
    mem.seek(SeekFrom::Start(start))?;

    let mut buf = [0u8; PARAGRAPH_SIZE];
    let mut addr = start;
    while addr < end {
        mem.read_exact(&mut buf)?;
        if has_anchor(&buf) {
            return Ok(addr);
        }
        addr += PARAGRAPH_SIZE as u64;
    }

    Err(TableSourceError::EntryPointNotFound)
}

/// Fill as much of `buf` as the reader provides; returns the number of bytes read.
fn read_up_to<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_anchor_in_second_paragraph() {
        let mut mem = vec![0xffu8; 0x40];
        mem[0x10..0x14].copy_from_slice(b"_SM_");
        let mut cursor = Cursor::new(mem);

        let addr = find_entry_point(&mut cursor, 0, 0x40).unwrap();
        assert_eq!(addr, 0x10);
    }

    #[test]
    fn reports_missing_anchor() {
        let mut cursor = Cursor::new(vec![0xffu8; 0x20]);
        let err = find_entry_point(&mut cursor, 0, 0x20).unwrap_err();
        assert!(matches!(err, TableSourceError::EntryPointNotFound));
    }

    #[test]
    fn read_up_to_stops_at_eof() {
        let mut cursor = Cursor::new(vec![1u8, 2, 3]);
        let mut buf = [0u8; 8];
        assert_eq!(read_up_to(&mut cursor, &mut buf).unwrap(), 3);
        assert_eq!(&buf[..3], &[1, 2, 3]);
    }

    #[test]
    fn missing_sysfs_dir_is_unavailable() {
        let source = SysfsSource::new("/nonexistent/dmi/tables");
        assert!(!source.is_available());
        assert!(matches!(source.open(), Err(TableSourceError::Io(_))));
    }
}
