//! # workingdays
//!
//! Count the working days left in a month after a given date, skipping
//! weekends and the public holidays of a country and subdivision.
//!
//! This crate is a **façade** over the workspace crates and also hosts the
//! `workingdays` command-line tool.
//!
//! ## Quick start
//!
//! ```rust
//! use workingdays::calculate_working_days;
//!
//! // Friday 3 June 2022 is the Platinum Jubilee bank holiday.
//! let n = calculate_working_days("01/06/2022", "GB", "England").unwrap();
//! assert_eq!(n, 19);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error type and default settings.
pub use wd_core as core;

/// Dates, weekdays, months and Easter.
pub use wd_time as time;

/// Public holiday calendars.
pub use wd_holidays as holidays;

/// Working-day counting.
pub mod calculator;

/// Command-line front end.
pub mod cli;

/// Config file loading.
pub mod config;

pub use calculator::{calculate_working_days, count_after, WorkingDaysCalculator};
pub use wd_core::{Error, Result, Settings};
