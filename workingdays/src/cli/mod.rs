//! Command-line interface module.
//!
//! Provides argument parsing, option resolution and the report printed by
//! the `workingdays` binary.

pub mod args;
pub mod logging;
pub mod report;

use std::io::{self, Write};
use std::process::ExitCode;

use tracing::info;

use wd_core::Settings;
use wd_holidays::HolidayLookup;

use crate::calculator::WorkingDaysCalculator;
use crate::config::ConfigFile;
pub use args::Args;

/// Fully resolved options for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Date as typed, `DD/MM/YYYY`.
    pub date: String,
    /// Country identifier.
    pub country: String,
    /// Subdivision identifier, or `"None"`.
    pub subdivision: String,
    /// Defaults in effect, used for the mismatch hint.
    pub settings: Settings,
    /// Colour the banner.
    pub color: bool,
}

impl Invocation {
    /// Combine command-line (and environment) values with the config file.
    /// Anything not given on the command line falls back to the config
    /// file, then to the built-in defaults.
    pub fn resolve(args: &Args, config: &ConfigFile) -> Self {
        let settings = config.settings();
        let country = args
            .country
            .clone()
            .unwrap_or_else(|| settings.default_country().to_owned());
        let subdivision = args
            .subdiv
            .clone()
            .unwrap_or_else(|| settings.default_subdivision().to_owned());
        Self {
            date: args.date.clone(),
            country,
            subdivision,
            settings,
            color: false,
        }
    }
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The result was printed.
    Success,
    /// A date or jurisdiction error was printed.
    Failure,
}

impl Outcome {
    /// Process exit code for this outcome.
    pub fn exit_code(self) -> ExitCode {
        match self {
            Outcome::Success => ExitCode::SUCCESS,
            Outcome::Failure => ExitCode::FAILURE,
        }
    }
}

/// Run one calculation and print the report to `out`, or the error to
/// `err_out`. Only I/O failures are returned as errors.
pub fn run<L: HolidayLookup>(
    invocation: &Invocation,
    lookup: L,
    out: &mut impl Write,
    err_out: &mut impl Write,
) -> io::Result<Outcome> {
    let calculator = WorkingDaysCalculator::with_lookup(invocation.settings.clone(), lookup);
    match calculator.working_days_in(&invocation.date, &invocation.country, &invocation.subdivision) {
        Ok(working_days) => {
            report::write_banner(out, invocation.color)?;
            report::write_result(
                out,
                &invocation.date,
                working_days,
                &invocation.country,
                &invocation.subdivision,
            )?;
            Ok(Outcome::Success)
        }
        Err(error) => {
            info!(%error, "calculation failed");
            report::write_error(err_out, &error, &invocation.settings, &invocation.subdivision)?;
            Ok(Outcome::Failure)
        }
    }
}
