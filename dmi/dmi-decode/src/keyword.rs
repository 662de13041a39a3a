use core::fmt;
use core::str::FromStr;

/// A queryable hardware field, named as `dmidecode -s` names it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Keyword {
    BiosVendor,
    BiosVersion,
    BiosReleaseDate,
    BiosRevision,
    FirmwareRevision,
    SystemManufacturer,
    SystemProductName,
    SystemVersion,
    SystemSerialNumber,
    SystemUuid,
    SystemFamily,
    BaseboardManufacturer,
    BaseboardProductName,
    BaseboardVersion,
    BaseboardSerialNumber,
    BaseboardAssetTag,
    ChassisManufacturer,
    ChassisType,
    ChassisVersion,
    ChassisSerialNumber,
    ChassisAssetTag,
    ProcessorFamily,
    ProcessorManufacturer,
    ProcessorVersion,
    ProcessorFrequency,
}

impl Keyword {
    /// All keywords, in the order `dmidecode` lists them.
    pub const ALL: [Self; 25] = [
        Self::BiosVendor,
        Self::BiosVersion,
        Self::BiosReleaseDate,
        Self::BiosRevision,
        Self::FirmwareRevision,
        Self::SystemManufacturer,
        Self::SystemProductName,
        Self::SystemVersion,
        Self::SystemSerialNumber,
        Self::SystemUuid,
        Self::SystemFamily,
        Self::BaseboardManufacturer,
        Self::BaseboardProductName,
        Self::BaseboardVersion,
        Self::BaseboardSerialNumber,
        Self::BaseboardAssetTag,
        Self::ChassisManufacturer,
        Self::ChassisType,
        Self::ChassisVersion,
        Self::ChassisSerialNumber,
        Self::ChassisAssetTag,
        Self::ProcessorFamily,
        Self::ProcessorManufacturer,
        Self::ProcessorVersion,
        Self::ProcessorFrequency,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BiosVendor => "bios-vendor",
            Self::BiosVersion => "bios-version",
            Self::BiosReleaseDate => "bios-release-date",
            Self::BiosRevision => "bios-revision",
            Self::FirmwareRevision => "firmware-revision",
            Self::SystemManufacturer => "system-manufacturer",
            Self::SystemProductName => "system-product-name",
            Self::SystemVersion => "system-version",
            Self::SystemSerialNumber => "system-serial-number",
            Self::SystemUuid => "system-uuid",
            Self::SystemFamily => "system-family",
            Self::BaseboardManufacturer => "baseboard-manufacturer",
            Self::BaseboardProductName => "baseboard-product-name",
            Self::BaseboardVersion => "baseboard-version",
            Self::BaseboardSerialNumber => "baseboard-serial-number",
            Self::BaseboardAssetTag => "baseboard-asset-tag",
            Self::ChassisManufacturer => "chassis-manufacturer",
            Self::ChassisType => "chassis-type",
            Self::ChassisVersion => "chassis-version",
            Self::ChassisSerialNumber => "chassis-serial-number",
            Self::ChassisAssetTag => "chassis-asset-tag",
            Self::ProcessorFamily => "processor-family",
            Self::ProcessorManufacturer => "processor-manufacturer",
            Self::ProcessorVersion => "processor-version",
            Self::ProcessorFrequency => "processor-frequency",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The string is not one of the 25 known keywords.
#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
#[error("invalid string keyword: {0}")]
pub struct UnknownKeyword(pub String);

impl FromStr for Keyword {
    type Err = UnknownKeyword;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| UnknownKeyword(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_roundtrip() {
        for k in Keyword::ALL {
            assert_eq!(k.as_str().parse::<Keyword>(), Ok(k));
            assert_eq!(k.to_string(), k.as_str());
        }
    }

    #[test]
    fn names_are_unique() {
        for (i, a) in Keyword::ALL.iter().enumerate() {
            for b in &Keyword::ALL[i + 1..] {
                assert_ne!(a.as_str(), b.as_str());
            }
        }
    }

    #[test]
    fn parsing_is_exact() {
        assert!("BIOS-VENDOR".parse::<Keyword>().is_err());
        assert!(" bios-vendor".parse::<Keyword>().is_err());
        assert_eq!(
            "not-a-real-keyword".parse::<Keyword>(),
            Err(UnknownKeyword("not-a-real-keyword".into()))
        );
    }
}
