//! Staffing requirement model.
//!
//! A requirement is a demand for a number of workers with a given service
//! capability on one (date, day-part) slot.

use serde::{Deserialize, Serialize};

/// Demand for `required_count` workers on a (date, day-part, service) slot.
///
/// Requirements are not required to be unique per slot. When several
/// requirements target the same triple, later ones see the assignments
/// placed for earlier ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Requirement {
    /// Calendar date (`YYYY-MM-DD`).
    pub date: String,
    /// Day-part name (e.g. "ochtend", "middag", "avond", "nacht").
    #[serde(rename = "dagdeel")]
    pub day_part: String,
    /// Required service identifier.
    pub service_id: String,
    /// Number of workers needed.
    pub required_count: u32,
    /// Team filter. Empty = any team.
    #[serde(default)]
    pub team: String,
}

impl Requirement {
    /// Creates a requirement without a team filter.
    pub fn new(
        date: impl Into<String>,
        day_part: impl Into<String>,
        service_id: impl Into<String>,
        required_count: u32,
    ) -> Self {
        Self {
            date: date.into(),
            day_part: day_part.into(),
            service_id: service_id.into(),
            required_count,
            team: String::new(),
        }
    }

    /// Restricts candidates to one team.
    pub fn with_team(mut self, team: impl Into<String>) -> Self {
        self.team = team.into();
        self
    }

    /// The team filter, if one is set.
    pub fn team_filter(&self) -> Option<&str> {
        if self.team.is_empty() {
            None
        } else {
            Some(&self.team)
        }
    }
}
