//! Unavailability index.

use std::collections::HashSet;

use crate::models::BlockedSlot;

/// Set of (employee, date, day-part) triples an employee cannot work.
///
/// Built once per planning run; lookups are O(1).
#[derive(Debug, Clone, Default)]
pub struct BlockedIndex {
    blocked: HashSet<(String, String, String)>,
}

impl BlockedIndex {
    /// Builds the index from blocked-slot records. Duplicates collapse.
    pub fn build(blocked_slots: &[BlockedSlot]) -> Self {
        let blocked = blocked_slots
            .iter()
            .map(|b| (b.employee_id.clone(), b.date.clone(), b.day_part.clone()))
            .collect();
        Self { blocked }
    }

    /// Whether the employee is unavailable on this date and day-part.
    pub fn is_blocked(&self, employee_id: &str, date: &str, day_part: &str) -> bool {
        self.blocked.contains(&(
            employee_id.to_string(),
            date.to_string(),
            day_part.to_string(),
        ))
    }

    /// Number of distinct blocked triples.
    pub(crate) fn len(&self) -> usize {
        self.blocked.len()
    }
}
