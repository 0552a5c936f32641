//! Coverage metrics.
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total slots | Number of requirement entries (not seats) |
//! | Assigned slots | Total slots - bottlenecks |
//! | Coverage rate | Assigned / total × 100, or 0 when there are no requirements |
//!
//! A requirement with any shortage counts as entirely unassigned, even if
//! some of its seats were filled.

use crate::models::Bottleneck;

/// Coverage statistics for a planning run.
#[derive(Debug, Clone, PartialEq)]
pub struct CoverageKpi {
    pub total_slots: usize,
    pub assigned_slots: usize,
    /// Percentage (0.0..=100.0).
    pub coverage_rate: f64,
}

impl CoverageKpi {
    /// Computes coverage from the requirement count and the bottleneck list.
    pub fn calculate(requirement_count: usize, bottlenecks: &[Bottleneck]) -> Self {
        let total_slots = requirement_count;
        let assigned_slots = total_slots.saturating_sub(bottlenecks.len());
        let coverage_rate = if total_slots > 0 {
            assigned_slots as f64 / total_slots as f64 * 100.0
        } else {
            0.0
        };
        Self {
            total_slots,
            assigned_slots,
            coverage_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn short() -> Bottleneck {
        Bottleneck::new("2024-01-01", "ochtend", "S1", 3, 2)
    }

    #[test]
    fn test_full_coverage() {
        let kpi = CoverageKpi::calculate(4, &[]);
        assert_eq!(kpi.total_slots, 4);
        assert_eq!(kpi.assigned_slots, 4);
        assert!((kpi.coverage_rate - 100.0).abs() < 1e-10);
    }

    #[test]
    fn test_partial_fill_counts_as_unassigned() {
        // 1 of 4 requirements short by one seat → 75%
        let kpi = CoverageKpi::calculate(4, &[short()]);
        assert_eq!(kpi.assigned_slots, 3);
        assert!((kpi.coverage_rate - 75.0).abs() < 1e-10);
    }

    #[test]
    fn test_no_requirements() {
        let kpi = CoverageKpi::calculate(0, &[]);
        assert_eq!(kpi.total_slots, 0);
        assert!((kpi.coverage_rate - 0.0).abs() < 1e-10);
    }
}
