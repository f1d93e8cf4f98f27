//! Terminal output: banner, result and error messages.

use std::io::{self, Write};

use crossterm::style::Stylize;

use wd_core::{Error, Settings, NO_SUBDIVISION};

const BANNER: &str = r"__        __         _    _               ____
\ \      / /__  _ __| | _(_)_ __   __ _  |  _ \  __ _ _   _ ___
 \ \ /\ / / _ \| '__| |/ / | '_ \ / _` | | | | |/ _` | | | / __|
  \ V  V / (_) | |  |   <| | | | | (_| | | |_| | (_| | |_| \__ \
   \_/\_/ \___/|_|  |_|\_\_|_| |_|\__, | |____/ \__,_|\__, |___/
                                  |___/               |___/
";

/// Write the "Working Days" banner, green when `color` is set.
pub fn write_banner(out: &mut impl Write, color: bool) -> io::Result<()> {
    writeln!(out)?;
    if color {
        writeln!(out, "{}", BANNER.green())
    } else {
        writeln!(out, "{BANNER}")
    }
}

/// Write the successful result.
pub fn write_result(
    out: &mut impl Write,
    date: &str,
    working_days: u32,
    country: &str,
    subdivision: &str,
) -> io::Result<()> {
    writeln!(
        out,
        "\nThe remaining number of working days in the month after {date} is {working_days}.\n"
    )?;
    writeln!(out, "The country used for this calculation was {country}.")?;
    if subdivision != NO_SUBDIVISION {
        writeln!(out, "And the subdivision was {subdivision}.")?;
    }
    writeln!(out)
}

/// Write a calculation error. `subdivision` is the one the user asked for;
/// when it is still the default, a mismatch also gets a hint about
/// choosing a subdivision that belongs to the new country.
pub fn write_error(
    err_out: &mut impl Write,
    error: &Error,
    settings: &Settings,
    subdivision: &str,
) -> io::Result<()> {
    match error {
        Error::DateFormat { .. } => {
            writeln!(err_out, "\n{error}.\nPlease correct the issue and try again.\n")
        }
        Error::SubdivisionMismatch { .. } if subdivision == settings.default_subdivision() => {
            writeln!(err_out, "\nError: {error}. Please correct the issue and try again.\n")?;
            writeln!(
                err_out,
                "Note that {} is the default country and {} is the default subdivision.",
                settings.default_country(),
                settings.default_subdivision()
            )?;
            writeln!(
                err_out,
                "So if you choose a different country you also need to choose an associated subdivision."
            )?;
            writeln!(err_out, "Or, if the selected country doesn't have subdivisions, use None.\n")
        }
        _ => writeln!(err_out, "\nError: {error}. Please correct the issue and try again.\n"),
    }
}
