//! Error types for workingdays.
//!
//! Every failure a working-day calculation can hit is a variant of the
//! single [`Error`] enum below. None of them is retried: the calculation
//! stops at the first error and hands it back to the caller.

use thiserror::Error;

/// The top-level error type used throughout workingdays.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input does not parse as a real `DD/MM/YYYY` date.
    #[error("'{input}' is not a valid date. The format should be DD/MM/YYYY")]
    DateFormat {
        /// The offending input string.
        input: String,
    },

    /// The holiday provider does not know this country.
    #[error("Country {country} not available")]
    Jurisdiction {
        /// The country identifier as supplied by the caller.
        country: String,
    },

    /// The subdivision is not part of the resolved country.
    #[error("Country {country} does not have subdivision '{subdivision}'")]
    SubdivisionMismatch {
        /// The country identifier as supplied by the caller.
        country: String,
        /// The subdivision identifier as supplied by the caller.
        subdivision: String,
    },

    /// Date construction or arithmetic went out of range.
    #[error("date error: {0}")]
    Date(String),
}

impl Error {
    /// Build a [`Error::DateFormat`] for `input`.
    pub fn date_format(input: impl Into<String>) -> Self {
        Error::DateFormat {
            input: input.into(),
        }
    }

    /// Build a [`Error::Jurisdiction`] for `country`.
    pub fn unknown_country(country: impl Into<String>) -> Self {
        Error::Jurisdiction {
            country: country.into(),
        }
    }

    /// Build a [`Error::SubdivisionMismatch`] for `country` / `subdivision`.
    pub fn subdivision_mismatch(country: impl Into<String>, subdivision: impl Into<String>) -> Self {
        Error::SubdivisionMismatch {
            country: country.into(),
            subdivision: subdivision.into(),
        }
    }
}

/// Shorthand `Result` type used throughout workingdays.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Date(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use wd_core::{ensure, errors::Result};
/// fn month(m: u8) -> Result<u8> {
///     ensure!((1..=12).contains(&m), "month {m} out of range [1, 12]");
///     Ok(m)
/// }
/// assert!(month(3).is_ok());
/// assert!(month(13).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Date(format!($($msg)*)));
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_format_message_names_input() {
        let err = Error::date_format("55/04/2023");
        assert_eq!(
            err.to_string(),
            "'55/04/2023' is not a valid date. The format should be DD/MM/YYYY"
        );
    }

    #[test]
    fn jurisdiction_message() {
        assert_eq!(
            Error::unknown_country("Atlantis").to_string(),
            "Country Atlantis not available"
        );
    }

    #[test]
    fn subdivision_mismatch_message() {
        assert_eq!(
            Error::subdivision_mismatch("US", "England").to_string(),
            "Country US does not have subdivision 'England'"
        );
    }
}
