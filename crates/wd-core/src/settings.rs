//! Default jurisdiction settings.
//!
//! [`Settings`] carries the country and subdivision used when a caller does
//! not name one. It is an ordinary value: build it once at start-up and pass
//! it to whatever needs it.

/// Country used when none is given.
pub const DEFAULT_COUNTRY: &str = "GB";

/// Subdivision used when none is given.
pub const DEFAULT_SUBDIVISION: &str = "England";

/// Literal subdivision meaning "country-wide holidays only".
pub const NO_SUBDIVISION: &str = "None";

/// Default jurisdiction for working-day calculations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    default_country: String,
    default_subdivision: String,
}

impl Settings {
    /// Create settings with explicit defaults.
    pub fn new(country: impl Into<String>, subdivision: impl Into<String>) -> Self {
        Self {
            default_country: country.into(),
            default_subdivision: subdivision.into(),
        }
    }

    /// The default country identifier.
    pub fn default_country(&self) -> &str {
        &self.default_country
    }

    /// The default subdivision identifier (may be [`NO_SUBDIVISION`]).
    pub fn default_subdivision(&self) -> &str {
        &self.default_subdivision
    }

    /// Return a copy with a different default country.
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.default_country = country.into();
        self
    }

    /// Return a copy with a different default subdivision.
    pub fn with_subdivision(mut self, subdivision: impl Into<String>) -> Self {
        self.default_subdivision = subdivision.into();
        self
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new(DEFAULT_COUNTRY, DEFAULT_SUBDIVISION)
    }
}
