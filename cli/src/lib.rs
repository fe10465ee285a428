//! Command-line driver for the phone directory.
//!
//! Builds one [`Directory`] from the sample dataset and any `--entry`
//! records, then prints the dump or the requested lookups.

pub mod error;
mod output;

use std::io::Write;

use clap::Parser;
use clap::Subcommand;
use phonebook_directory::Directory;
use phonebook_directory::DirectoryConfig;
use phonebook_directory::OwnedRecord;
use phonebook_directory::PhoneType;
use tracing::debug;
use tracing::info;
use tracing::warn;

use crate::error::Result;
use crate::output::Printer;

/// In-memory phone directory with lookup by name and reverse lookup by number
#[derive(Parser, Debug)]
#[command(name = "phonebook")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Do not load the sample dataset
    #[arg(long, env = "PHONEBOOK_NO_SAMPLE")]
    pub no_sample: bool,

    /// Maintain a number-keyed index for reverse lookups
    #[arg(long, env = "PHONEBOOK_REVERSE_INDEX")]
    pub reverse_index: bool,

    /// Print records as JSON lines
    #[arg(long)]
    pub json: bool,

    /// Extra record as "name,number[,type]"; may be repeated
    #[arg(
        short,
        long = "entry",
        value_name = "ENTRY",
        env = "PHONEBOOK_ENTRIES",
        value_delimiter = ';'
    )]
    pub entries: Vec<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print every record (default)
    Dump,
    /// Look up records by name, case-insensitively
    Name {
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Look up records by exact phone number
    Number {
        #[arg(required = true)]
        numbers: Vec<String>,
    },
    /// Replay the demonstration run
    Demo,
}

impl Cli {
    pub const fn directory_config(&self) -> DirectoryConfig {
        DirectoryConfig {
            reverse_index: self.reverse_index,
        }
    }

    /// Directory holding the `--entry` records and, unless disabled, the
    /// sample dataset.
    ///
    /// Blank entries are ignored. Entries with a bad phone type are skipped
    /// with a warning; entries that cannot be split into name and number
    /// are an error.
    pub fn build_directory(&self) -> Result<Directory> {
        let mut directory = Directory::with_config(self.directory_config());
        for text in self.entries.iter().filter(|text| !text.trim().is_empty()) {
            match text.parse::<OwnedRecord>() {
                Ok(record) => directory.insert_record(&record),
                Err(e) if e.is_phone_type() => {
                    warn!(entry = %text, error = %e, "Error specifying phone type, ignoring input");
                }
                Err(e) => return Err(e.into()),
            }
        }
        if !self.no_sample {
            directory.populate_sample();
        }
        Ok(directory)
    }
}

/// Execute the parsed command line, writing results to `out`.
pub fn run(cli: &Cli, out: impl Write) -> Result<()> {
    let mut printer = Printer::new(out, cli.json);
    match cli.command.clone().unwrap_or(Command::Dump) {
        Command::Dump => {
            let directory = cli.build_directory()?;
            dump(&directory, &mut printer)?;
        }
        Command::Name { names } => {
            let directory = cli.build_directory()?;
            for name in &names {
                by_name(&directory, &mut printer, name)?;
            }
        }
        Command::Number { numbers } => {
            let directory = cli.build_directory()?;
            for number in &numbers {
                by_number(&directory, &mut printer, number)?;
            }
        }
        Command::Demo => demo(cli.directory_config(), &mut printer)?,
    }
    Ok(())
}

fn dump<W: Write>(directory: &Directory, printer: &mut Printer<W>) -> Result<()> {
    info!(records = directory.len(), "Dumping directory");
    printer.section(
        "Printing directory contents ...",
        None,
        directory.dump_all().enumerate().map(|(idx, r)| (idx + 1, r)),
    )
}

fn by_name<W: Write>(directory: &Directory, printer: &mut Printer<W>, name: &str) -> Result<()> {
    printer.section(
        &format!("Printing records with name: \"{name}\""),
        Some(name),
        directory.lookup_by_name_positioned(name),
    )
}

fn by_number<W: Write>(directory: &Directory, printer: &mut Printer<W>, number: &str) -> Result<()> {
    printer.section(
        &format!("Printing records with phone number: [{number}]"),
        Some(number),
        directory.lookup_by_number_positioned(number),
    )
}

/// The scripted demonstration: a few hand-entered records (one with an
/// out-of-range type code), the sample dataset, then a dump and lookups.
fn demo<W: Write>(config: DirectoryConfig, printer: &mut Printer<W>) -> Result<()> {
    let mut directory = Directory::with_config(config);

    directory.insert("Chandresh", "+91 5566778899", PhoneType::Cell);
    directory.insert("Sharma", "(022)(223344556)", PhoneType::Home);
    directory.insert("Sam", "789-897-778", PhoneType::Home);
    if let Err(e) = directory.insert_code("Sam", "(123)-456 789", 4) {
        debug!(error = %e, "Demo record rejected");
    }

    directory.populate_sample();
    dump(&directory, printer)?;

    for name in ["FFFfF", "BbBBb", "CCCcC"] {
        by_name(&directory, printer, name)?;
    }
    for number in ["111111111", "555555555", "(022)(223344556)"] {
        by_number(&directory, printer, number)?;
    }
    Ok(())
}
