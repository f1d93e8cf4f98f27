//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

/// Working Days - count the working days left in a month
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Date in DD/MM/YYYY format
    pub date: String,

    /// Country code or name [default: GB]
    #[arg(short, long, env = "WORKINGDAYS_COUNTRY")]
    pub country: Option<String>,

    /// Subdivision code or name, or None [default: England]
    #[arg(short, long, env = "WORKINGDAYS_SUBDIV")]
    pub subdiv: Option<String>,

    /// Path to a TOML config file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
