//! Patient entity and urgency colour coding.
//!
//! A patient is an immutable-after-creation value: a name, an urgency
//! level and the metadata assigned at construction (identity, timestamp).
//! The urgency level drives both the triage colour shown to callers and
//! the ordering used by the waiting queue.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::NonEmptyText;

/// Colour code assigned to each urgency level, following the standard
/// medical triage colour system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TriageColour {
    /// Level 1 - life-threatening emergency.
    Red,
    /// Level 2 - emergency.
    Orange,
    /// Level 3 - urgency.
    Yellow,
    /// Level 4 - minor urgency.
    Green,
    /// Level 5 - non-urgent.
    Blue,
    /// Any level outside 1-5. Should not occur for validated input.
    Unknown,
}

impl TriageColour {
    /// Maps a numeric urgency level to its colour.
    pub fn from_level(level: u8) -> Self {
        match level {
            1 => Self::Red,
            2 => Self::Orange,
            3 => Self::Yellow,
            4 => Self::Green,
            5 => Self::Blue,
            _ => Self::Unknown,
        }
    }

    /// Upper-case colour name as rendered in listings.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Red => "RED",
            Self::Orange => "ORANGE",
            Self::Yellow => "YELLOW",
            Self::Green => "GREEN",
            Self::Blue => "BLUE",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl std::fmt::Display for TriageColour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A patient awaiting or having received treatment.
///
/// Created by the caller before registration and never mutated afterwards.
/// The registry retains every patient forever, attended or not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    /// Unique identity for this registration. Distinguishes patients even
    /// when names and urgency levels collide.
    pub id: Uuid,
    /// The patient's full name.
    pub name: NonEmptyText,
    /// Urgency level, 1 (most critical) to 5 (least critical). The core
    /// trusts its caller to keep this in range; out-of-range values render
    /// as `TriageColour::Unknown` rather than failing construction.
    pub urgency_level: u8,
    /// Moment the record was created.
    pub registered_at: DateTime<Utc>,
}

impl Patient {
    /// Creates a new patient record.
    ///
    /// No range validation is performed on `urgency_level`; callers are
    /// expected to restrict it to 1-5 before construction.
    pub fn new(name: NonEmptyText, urgency_level: u8) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            urgency_level,
            registered_at: Utc::now(),
        }
    }

    /// The triage colour derived from the urgency level.
    pub fn colour(&self) -> TriageColour {
        TriageColour::from_level(self.urgency_level)
    }

    /// Whether this patient must be attended before `other`.
    ///
    /// A strict weak ordering on urgency level alone: patients on the same
    /// level do not precede one another.
    pub fn precedes(&self, other: &Patient) -> bool {
        self.urgency_level < other.urgency_level
    }
}

impl std::fmt::Display for Patient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}]", self.name, self.colour())
    }
}
