//! crates/levels/src/severity.rs
//! The ordered severity enumeration and its stable raw encoding.

use std::error::Error;
use std::fmt;
use std::str::FromStr;

/// Ordered logging severity.
///
/// The order is `Off < Error < Warning < Info < Debug < Verbose < All`.
/// `Off` suppresses everything for a component and `All` is the sentinel
/// meaning "everything enabled"; the five levels in between are the ones
/// messages are actually tagged with.
///
/// The discriminants form the stable small-integer encoding used wherever a
/// severity is stored or exchanged; [`as_raw`](Self::as_raw) and
/// [`from_raw`](Self::from_raw) convert between the two representations.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Severity {
    /// Nothing is emitted for the component.
    Off = 0,
    /// Unrecoverable failures.
    Error = 1,
    /// Recoverable problems worth surfacing.
    Warning = 2,
    /// High-level progress information.
    Info = 3,
    /// Diagnostic detail for development.
    Debug = 4,
    /// Very chatty diagnostic detail.
    Verbose = 5,
    /// Everything is emitted for the component.
    All = 6,
}

impl Severity {
    /// All severities in ascending order.
    pub const ALL_VALUES: [Self; 7] = [
        Self::Off,
        Self::Error,
        Self::Warning,
        Self::Info,
        Self::Debug,
        Self::Verbose,
        Self::All,
    ];

    /// Returns the stable small-integer encoding of this severity.
    #[must_use]
    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    /// Decodes a severity from its raw encoding.
    ///
    /// Returns `None` for values outside `0..=6`.
    #[must_use]
    pub const fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::Off),
            1 => Some(Self::Error),
            2 => Some(Self::Warning),
            3 => Some(Self::Info),
            4 => Some(Self::Debug),
            5 => Some(Self::Verbose),
            6 => Some(Self::All),
            _ => None,
        }
    }

    /// Returns the human-readable name of this severity.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Off => "Off",
            Self::Error => "Error",
            Self::Warning => "Warning",
            Self::Info => "Info",
            Self::Debug => "Debug",
            Self::Verbose => "Verbose",
            Self::All => "All",
        }
    }

    /// Indicates whether a message of severity `message` passes a component
    /// configured at `self`.
    ///
    /// `Off` suppresses every message regardless of its severity; otherwise a
    /// message passes when its severity is at or below the configured one.
    #[must_use]
    pub fn permits(self, message: Self) -> bool {
        self != Self::Off && message <= self
    }
}

impl Default for Severity {
    /// The conventional process baseline, `Warning`.
    fn default() -> Self {
        Self::Warning
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    /// Parses a severity name case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if token.eq_ignore_ascii_case("off") {
            Ok(Self::Off)
        } else if token.eq_ignore_ascii_case("error") {
            Ok(Self::Error)
        } else if token.eq_ignore_ascii_case("warning") {
            Ok(Self::Warning)
        } else if token.eq_ignore_ascii_case("info") {
            Ok(Self::Info)
        } else if token.eq_ignore_ascii_case("debug") {
            Ok(Self::Debug)
        } else if token.eq_ignore_ascii_case("verbose") {
            Ok(Self::Verbose)
        } else if token.eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            Err(ParseSeverityError {
                token: token.to_owned(),
            })
        }
    }
}

/// Error returned when a severity name cannot be parsed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseSeverityError {
    token: String,
}

impl ParseSeverityError {
    /// Returns the token that failed to parse.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl fmt::Display for ParseSeverityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown severity: {}", self.token)
    }
}

impl Error for ParseSeverityError {}
