mod args;
mod logger;

use args::{ArgsError, Command, Options};
use dmi_decode::{DmiTable, Keyword};
use dmi_table::{DumpFileSource, PlatformSource};
use log::LevelFilter;
use logger::StderrLogger;
use std::process::ExitCode;

/// Bad command line.
const EXIT_USAGE: u8 = 2;

fn main() -> ExitCode {
    let options = match args::parse(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(e) => return usage_error(&e),
    };

    if options.command == Command::Help {
        println!("{}", args::USAGE);
        return ExitCode::SUCCESS;
    }

    let level = if options.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    if let Err(e) = StderrLogger::new(level).init() {
        eprintln!("failed to install logger: {e}");
    }

    match run(&options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(options: &Options) -> Result<(), dmi_decode::Error> {
    let table = match &options.dump_file {
        Some(path) => DmiTable::new(&DumpFileSource::new(path))?,
        None => DmiTable::new(&PlatformSource::default())?,
    };

    match options.command {
        Command::String(keyword) => println!("{}", table.query_keyword(keyword)),
        Command::DumpAll => {
            println!("{}", table.version());
            for (keyword, value) in table.entries() {
                println!("[{keyword}] {value}");
            }
        }
        Command::Help => {}
    }

    Ok(())
}

fn usage_error(e: &ArgsError) -> ExitCode {
    eprintln!("{e}");
    if e.lists_keywords() {
        eprintln!("Valid string keywords are:");
        for keyword in Keyword::ALL {
            eprintln!("  {keyword}");
        }
    } else {
        eprintln!("{}", args::USAGE);
    }
    ExitCode::from(EXIT_USAGE)
}
