use std::path::Path;

use parser::{Cli, Commands, Generate, Output};
use pedigree::{CategoryLists, PedigreeDescription};
use composer::{ConfigText, Settings};
use hopla_io::{read::PedigreeReader, write::GenericWriter, parse::prepare_output_file};

use located_error::prelude::*;
use log::info;

/// Run the requested subcommand.
///
/// # Errors
/// Propagates any reading, composing or writing error, along with its location.
pub fn run(cli: Cli) -> Result<()> {
    match cli.commands {
        Commands::Generate{generate}      => self::generate(&generate).loc("While generating configuration file"),
        Commands::Lists{pedigree, output} => self::lists(&pedigree, &output).loc("While listing sample IDs"),
        Commands::Template{output}        => self::template(&output).loc("While writing pedigree template"),
    }
}

/// Compose the full configuration text of a pedigree definition, using optional user settings.
///
/// # Errors
/// - if the pedigree or settings file is invalid.
pub fn compose(pedigree: &Path, settings: Option<&Path>, family: Option<&str>) -> Result<ConfigText> {
    let pedigree = PedigreeReader::from_path(pedigree)?;
    let mut settings = match settings {
        Some(path) => Settings::load(path)?,
        None       => Settings::default(),
    };
    if let Some(family) = family {
        settings = settings.with_family(family);
    }
    Ok(ConfigText::compose(&pedigree, &settings))
}

fn generate(args: &Generate) -> Result<()> {
    let text = compose(&args.pedigree, args.settings.as_deref(), args.family.as_deref())?;
    open_output(&args.output)?.write_str(&text.to_string())
}

fn lists(pedigree: &Path, output: &Output) -> Result<()> {
    let pedigree = PedigreeReader::from_path(pedigree)?;
    let lists    = CategoryLists::from_pedigree(&pedigree);
    open_output(output)?.write_iter(ConfigText::from_lists(&lists).lines())
}

fn template(output: &Output) -> Result<()> {
    let template = PedigreeReader::to_yaml(&PedigreeDescription::default())?;
    open_output(output)?.write_str(&template)
}

/// Writer targeting `--output`, or stdout. An existing file is only replaced when `--overwrite` is set.
fn open_output<'a>(output: &Output) -> Result<GenericWriter<'a>> {
    if let Some(path) = &output.output {
        prepare_output_file(output.overwrite, path)?;
        info!("Writing to {}", path.display());
    }
    GenericWriter::new(output.output.as_ref())
}
