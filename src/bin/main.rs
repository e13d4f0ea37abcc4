use std::process;
use clap::Parser;

#[macro_use]
extern crate log;

/// Parse command line arguments and run `hopla_config::run()`
fn main() {
    // ----------------------------- Run CLI Parser
    let cli = parser::Cli::parse();

    // ----------------------------- Init logger.
    if let Err(e) = logger::Logger::init(cli.verbosity()) {
        eprintln!("{e}");
        process::exit(1);
    }

    // ----------------------------- Log command line arguments
    match cli.to_yaml() {
        Ok(yaml) => debug!("\n---- Command line args ----\n{yaml}\n---"),
        Err(e)   => warn!("{e:?}"),
    }

    // ----------------------------- unpack Cli and run the appropriate command.
    if let Err(e) = hopla_config::run(cli) {
        error!("{:?}", e);
        process::exit(1);
    };
}
