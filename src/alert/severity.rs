//! Warning-count severity classification.
//!
//! The API reports how many parameters of an examination breached their
//! thresholds (`numberWarning.level`). That raw count is bucketed into a
//! small ordinal scale used for display and for alert subject lines.

use std::fmt;

/// Severity levels, in ascending order of severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SeverityLevel {
    Low,
    Moderate,
    High,
    Severe,
}

/// Inclusive upper bound of the Low bucket.
pub const LOW_MAX: u32 = 4;
/// Inclusive upper bound of the Moderate bucket.
pub const MODERATE_MAX: u32 = 8;
/// Inclusive upper bound of the High bucket. Anything above is Severe.
pub const HIGH_MAX: u32 = 13;

impl SeverityLevel {
    /// All levels, lowest first.
    pub const ALL: [SeverityLevel; 4] = [
        SeverityLevel::Low,
        SeverityLevel::Moderate,
        SeverityLevel::High,
        SeverityLevel::Severe,
    ];

    /// Label embedded in alert titles and descriptions.
    pub fn label(self) -> &'static str {
        match self {
            SeverityLevel::Low => "Low Level",
            SeverityLevel::Moderate => "Moderate Level",
            SeverityLevel::High => "High Level",
            SeverityLevel::Severe => "Severe Level",
        }
    }

    /// Parses a level name as typed on the command line ("low", "High", ...).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "low" => Some(SeverityLevel::Low),
            "moderate" => Some(SeverityLevel::Moderate),
            "high" => Some(SeverityLevel::High),
            "severe" => Some(SeverityLevel::Severe),
            _ => None,
        }
    }
}

impl fmt::Display for SeverityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Maps a warning count to its severity level.
///
///   level <= 4       → Low
///   5 ..= 8          → Moderate
///   9 ..= 13         → High
///   level >= 14      → Severe
pub fn classify_severity(level: u32) -> SeverityLevel {
    if level <= LOW_MAX {
        SeverityLevel::Low
    } else if level <= MODERATE_MAX {
        SeverityLevel::Moderate
    } else if level <= HIGH_MAX {
        SeverityLevel::High
    } else {
        SeverityLevel::Severe
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
