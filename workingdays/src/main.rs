//! `workingdays` - print the working days left in a month.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use crossterm::tty::IsTty;

use workingdays::cli::{self, logging, Args, Invocation};
use workingdays::config::ConfigFile;
use workingdays::holidays::BuiltinHolidays;

fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;

    let args = Args::parse();
    logging::init(args.verbose);

    let config = ConfigFile::discover(args.config.as_deref())?;
    let mut invocation = Invocation::resolve(&args, &config);
    invocation.color = io::stdout().is_tty();

    let outcome = cli::run(
        &invocation,
        BuiltinHolidays,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )?;
    Ok(outcome.exit_code())
}
