use dmi_decode::{Keyword, UnknownKeyword};
use std::path::PathBuf;

pub const USAGE: &str = "\
Usage: dmidecode [OPTIONS]

Options:
  -s, --string KEYWORD   Only display the value of the given DMI string
      --from-dump FILE   Read the DMI data from a binary dump file
  -v, --verbose          Log which table source was used and how it decoded
  -h, --help             Display this help text and exit

Without -s, the SMBIOS version and every keyword are printed.";

/// What to print.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Command {
    /// Version line followed by every keyword.
    DumpAll,
    String(Keyword),
    Help,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Options {
    pub command: Command,
    pub dump_file: Option<PathBuf>,
    pub verbose: bool,
}

#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
pub enum ArgsError {
    #[error("Option -s requires an argument")]
    MissingKeyword,

    #[error("Invalid string keyword: {0}")]
    InvalidKeyword(String),

    #[error("Option --from-dump requires an argument")]
    MissingDumpFile,

    #[error("Unrecognized option: {0}")]
    UnknownOption(String),
}

impl ArgsError {
    /// Whether the valid keywords should be listed after the message.
    #[must_use]
    pub const fn lists_keywords(&self) -> bool {
        matches!(self, Self::MissingKeyword | Self::InvalidKeyword(_))
    }
}

/// Parse the command line, excluding the program name.
pub fn parse<I, S>(args: I) -> Result<Options, ArgsError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut args = args.into_iter().map(Into::<String>::into);
    let mut options = Options {
        command: Command::DumpAll,
        dump_file: None,
        verbose: false,
    };

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-s" | "--string" => {
                let keyword = args.next().ok_or(ArgsError::MissingKeyword)?;
                let keyword = keyword
                    .parse::<Keyword>()
                    .map_err(|UnknownKeyword(name)| ArgsError::InvalidKeyword(name))?;
                options.command = Command::String(keyword);
            }
            "--from-dump" => {
                let path = args.next().ok_or(ArgsError::MissingDumpFile)?;
                options.dump_file = Some(PathBuf::from(path));
            }
            "-v" | "--verbose" => options.verbose = true,
            "-h" | "--help" => {
                options.command = Command::Help;
                return Ok(options);
            }
            _ => return Err(ArgsError::UnknownOption(arg)),
        }
    }

    Ok(options)
}
