use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
};

use located_error::prelude::*;

use clap::{Parser, Subcommand, Args};
use serde::{Serialize, Deserialize};

mod error;
pub use error::ParserError;

#[derive(Parser, Debug, Serialize, Deserialize)]
#[clap(name="hopla-config", author, version, about, long_about = None)]
#[clap(propagate_version = true)]
/// hopla-config: Generate Hopla configuration files from a pedigree definition.
pub struct Cli {
    ///Set the verbosity level (-v -vv -vvv)
    ///
    /// Set the verbosity level of this program. Multiple levels allowed {n}
    ///
    /// -v: Info  |  -vv: Debug  | -vvv: Trace {n}
    ///
    /// Note that the program will still output warnings by default, even when this flag is off.
    /// Use The --quiet/-q to disable them
    #[clap(short='v', long, parse(from_occurrences), global=true)]
    pub verbose: u8,

    /// Disable warnings.
    ///
    /// By default, warnings are emmited and redirected to the console, even when verbose mode is off.
    /// Use this argument to disable this. Only errors will be displayed.
    #[clap(short='q', long, global=true)]
    pub quiet: bool,

    #[clap(subcommand)]
    pub commands: Commands,
}

impl Cli {
    /// Serialize command line arguments as `.yaml`.
    ///
    /// # Errors
    /// if `serde_yaml` fails to serialize `Self`.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(ParserError::Serialize).loc("While serializing command line arguments")
    }

    /// Verbosity level handed to the logger: 0 when `--quiet`, otherwise one level above warnings per `-v`.
    #[must_use]
    pub fn verbosity(&self) -> u8 {
        if self.quiet { 0 } else { self.verbose.saturating_add(1) }
    }
}

#[derive(Subcommand, Debug, Serialize, Deserialize)]
pub enum Commands {
    /// Generate a complete Hopla configuration file from a pedigree definition.
    Generate {
        #[clap(flatten)]
        generate: Generate,
    },

    /// Print the per-category sample ID lists of a pedigree definition.
    ///
    /// Output only contains 'key=value' lines, without any comment nor settings.
    Lists {
        /// Input pedigree definition file (.yaml)
        #[clap(short='p', long, parse(try_from_os_str=valid_input_file))]
        pedigree: PathBuf,

        #[clap(flatten)]
        output: Output,
    },

    /// Write a blank pedigree definition template.
    ///
    /// The template defines all six grandparent and parent roles, with default sample IDs,
    /// and may then be filled in and provided to 'generate'.
    Template {
        #[clap(flatten)]
        output: Output,
    },
}

#[derive(Args, Debug, Serialize, Deserialize)]
pub struct Generate {
    /// Input pedigree definition file (.yaml)
    ///
    /// Must define the 'paternal_grandfather', 'paternal_grandmother', 'maternal_grandfather',
    /// 'maternal_grandmother', 'father' and 'mother' roles. 'siblings' and 'embryos' are optional lists.
    #[clap(short='p', long, parse(try_from_os_str=valid_input_file))]
    pub pedigree: PathBuf,

    /// Optional settings file (.yaml)
    ///
    /// Any key defined within this file overrides the default filter and merlin settings.
    /// Keys missing from this file keep their default value.
    #[clap(short='s', long, parse(try_from_os_str=valid_input_file))]
    pub settings: Option<PathBuf>,

    /// Family name written in the configuration file.
    ///
    /// Takes precedence over the 'family' key of --settings.
    #[clap(short='f', long)]
    pub family: Option<String>,

    #[clap(flatten)]
    pub output: Output,
}

#[derive(Args, Debug, Serialize, Deserialize)]
pub struct Output {
    /// Output file. Results are written to the standard output when unspecified.
    ///
    /// Missing parent directories are created.
    #[clap(short='o', long)]
    pub output: Option<PathBuf>,

    /// Overwrite existing output files.
    ///
    /// By default, the program refuses to overwrite an existing --output file.
    #[clap(short='w', long)]
    pub overwrite: bool,
}

/// Ensure the provided path exists, and is a file.
fn assert_file_is_valid(path: &Path) -> Result<(), ParserError> {
    if ! path.exists() {
        return Err(ParserError::MissingFile(path.to_path_buf()))
    }
    if ! path.is_file() {
        return Err(ParserError::NotAFile(path.to_path_buf()))
    }
    Ok(())
}

fn valid_input_file(s: &OsStr) -> Result<PathBuf> {
    let path = PathBuf::from(s);
    assert_file_is_valid(&path).loc("While checking for file validity")?;
    Ok(path)
}
