//! Country / subdivision keys.

use wd_core::NO_SUBDIVISION;

/// Which part of a country's holiday calendar to use.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Subdivision {
    /// Country-wide holidays only.
    Nationwide,
    /// A named subdivision (ISO 3166-2 code or recognised name).
    Named(String),
}

impl Subdivision {
    /// Parse the command-line form: the literal `"None"` means
    /// [`Subdivision::Nationwide`], anything else names a subdivision.
    pub fn from_arg(value: &str) -> Self {
        if value == NO_SUBDIVISION {
            Subdivision::Nationwide
        } else {
            Subdivision::Named(value.to_owned())
        }
    }

    /// The subdivision name, or `None` for [`Subdivision::Nationwide`].
    pub fn name(&self) -> Option<&str> {
        match self {
            Subdivision::Nationwide => None,
            Subdivision::Named(name) => Some(name),
        }
    }
}

/// A (country, subdivision) pair identifying one holiday calendar.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Jurisdiction {
    country: String,
    subdivision: Subdivision,
}

impl Jurisdiction {
    /// Build a jurisdiction from its command-line form. A `subdivision` of
    /// `"None"` selects country-wide holidays.
    pub fn new(country: impl Into<String>, subdivision: &str) -> Self {
        Self {
            country: country.into(),
            subdivision: Subdivision::from_arg(subdivision),
        }
    }

    /// A jurisdiction covering a whole country.
    pub fn nationwide(country: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            subdivision: Subdivision::Nationwide,
        }
    }

    /// The country identifier as supplied.
    pub fn country(&self) -> &str {
        &self.country
    }

    /// The subdivision.
    pub fn subdivision(&self) -> &Subdivision {
        &self.subdivision
    }
}

impl std::fmt::Display for Jurisdiction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.subdivision {
            Subdivision::Nationwide => write!(f, "{}", self.country),
            Subdivision::Named(name) => write!(f, "{}/{}", self.country, name),
        }
    }
}
