//! Employee (worker) model.
//!
//! Employees are the resources a roster is built from. Each carries a
//! service capability map, an optional team, and contract metadata.
//!
//! Capability is explicit: a service missing from `capable_services`
//! counts as "not capable", the same as an explicit `false`.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// Default weekly shift cap.
pub const DEFAULT_MAX_SHIFTS_PER_WEEK: u32 = 40;

fn default_max_shifts_per_week() -> u32 {
    DEFAULT_MAX_SHIFTS_PER_WEEK
}

/// A worker and what they can do.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EmployeeCapability {
    /// Unique employee identifier.
    pub employee_id: String,
    /// Given name.
    #[serde(rename = "voornaam")]
    pub first_name: String,
    /// Family name.
    #[serde(rename = "achternaam")]
    pub last_name: String,
    /// Service ID → capable flag.
    #[serde(default)]
    pub capable_services: HashMap<String, bool>,
    /// Dates (`YYYY-MM-DD`) the employee declared available.
    #[serde(default)]
    pub available_dates: BTreeSet<String>,
    /// Team name. Empty = no team.
    #[serde(default)]
    pub team: String,
    /// Weekly shift cap from the contract.
    #[serde(default = "default_max_shifts_per_week")]
    pub max_shifts_per_week: u32,
    /// Shifts already held before this planning run.
    #[serde(default)]
    pub current_shifts: u32,
}

impl EmployeeCapability {
    /// Creates an employee with no capabilities.
    pub fn new(employee_id: impl Into<String>) -> Self {
        Self {
            employee_id: employee_id.into(),
            first_name: String::new(),
            last_name: String::new(),
            capable_services: HashMap::new(),
            available_dates: BTreeSet::new(),
            team: String::new(),
            max_shifts_per_week: DEFAULT_MAX_SHIFTS_PER_WEEK,
            current_shifts: 0,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, first: impl Into<String>, last: impl Into<String>) -> Self {
        self.first_name = first.into();
        self.last_name = last.into();
        self
    }

    /// Marks the employee capable of a service.
    pub fn with_service(self, service_id: impl Into<String>) -> Self {
        self.with_capability(service_id, true)
    }

    /// Sets the capability flag for a service.
    pub fn with_capability(mut self, service_id: impl Into<String>, capable: bool) -> Self {
        self.capable_services.insert(service_id.into(), capable);
        self
    }

    /// Sets the team.
    pub fn with_team(mut self, team: impl Into<String>) -> Self {
        self.team = team.into();
        self
    }

    /// Sets the weekly shift cap.
    pub fn with_max_shifts_per_week(mut self, max: u32) -> Self {
        self.max_shifts_per_week = max;
        self
    }

    /// Whether the employee can perform a service.
    pub fn is_capable_of(&self, service_id: &str) -> bool {
        self.capable_services
            .get(service_id)
            .copied()
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_builder() {
        let e = EmployeeCapability::new("E1")
            .with_name("Anna", "de Vries")
            .with_service("S1")
            .with_capability("S2", false)
            .with_team("blue")
            .with_max_shifts_per_week(20);

        assert_eq!(e.employee_id, "E1");
        assert_eq!(e.first_name, "Anna");
        assert_eq!(e.last_name, "de Vries");
        assert!(e.is_capable_of("S1"));
        assert!(!e.is_capable_of("S2"));
        assert!(!e.is_capable_of("S3"));
        assert_eq!(e.team, "blue");
        assert_eq!(e.max_shifts_per_week, 20);
    }

    #[test]
    fn test_containers_are_per_instance() {
        let a = EmployeeCapability::new("A").with_service("S1");
        let b = EmployeeCapability::new("B");
        assert!(a.is_capable_of("S1"));
        assert!(b.capable_services.is_empty());
        assert!(b.available_dates.is_empty());
    }

    #[test]
    fn test_json_defaults() {
        let e: EmployeeCapability = serde_json::from_value(serde_json::json!({
            "employee_id": "E1",
            "voornaam": "Jan",
            "achternaam": "Jansen"
        }))
        .unwrap();
        assert!(e.capable_services.is_empty());
        assert!(e.team.is_empty());
        assert_eq!(e.max_shifts_per_week, DEFAULT_MAX_SHIFTS_PER_WEEK);
        assert_eq!(e.current_shifts, 0);
    }

    #[test]
    fn test_missing_name_is_rejected() {
        let res: Result<EmployeeCapability, _> =
            serde_json::from_value(serde_json::json!({ "employee_id": "E1" }));
        assert!(res.is_err());
    }
}
