//! Bottleneck (unfilled demand) model.

use serde::{Deserialize, Serialize};

/// Bottleneck severity.
///
/// Derived from shortage only: 1 → `High`, 2 or more → `Critical`.
/// `Medium` is the fallback and `Low` is part of the vocabulary but is
/// never produced; consumers rely on both existing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    /// Classifies a shortage.
    pub fn from_shortage(shortage: u32) -> Self {
        if shortage >= 2 {
            Severity::Critical
        } else if shortage == 1 {
            Severity::High
        } else {
            Severity::Medium
        }
    }
}

/// A slot whose demand could not be fully met.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bottleneck {
    pub date: String,
    #[serde(rename = "dagdeel")]
    pub day_part: String,
    pub service_id: String,
    /// Workers demanded.
    #[serde(rename = "required")]
    pub required_count: u32,
    /// Workers on the slot after allocation (locked and greedy).
    #[serde(rename = "placed")]
    pub placed_count: u32,
    /// `required_count - placed_count`.
    pub shortage: u32,
    pub severity: Severity,
    /// Diagnosed cause.
    pub reason: String,
    /// Remediation hints, most specific first.
    pub suggestions: Vec<String>,
}

impl Bottleneck {
    /// Creates a bottleneck, deriving shortage and severity.
    pub fn new(
        date: impl Into<String>,
        day_part: impl Into<String>,
        service_id: impl Into<String>,
        required_count: u32,
        placed_count: u32,
    ) -> Self {
        let shortage = required_count.saturating_sub(placed_count);
        Self {
            date: date.into(),
            day_part: day_part.into(),
            service_id: service_id.into(),
            required_count,
            placed_count,
            shortage,
            severity: Severity::from_shortage(shortage),
            reason: String::new(),
            suggestions: Vec::new(),
        }
    }

    /// Sets the diagnosed cause.
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = reason.into();
        self
    }

    /// Sets the remediation hints.
    pub fn with_suggestions(mut self, suggestions: Vec<String>) -> Self {
        self.suggestions = suggestions;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_mapping() {
        assert_eq!(Severity::from_shortage(1), Severity::High);
        assert_eq!(Severity::from_shortage(2), Severity::Critical);
        assert_eq!(Severity::from_shortage(7), Severity::Critical);
        // Unreachable for real bottlenecks (shortage is always >= 1)
        assert_eq!(Severity::from_shortage(0), Severity::Medium);
    }

    #[test]
    fn test_bottleneck_derives_shortage() {
        let b = Bottleneck::new("2024-01-01", "ochtend", "S1", 3, 1);
        assert_eq!(b.shortage, 2);
        assert_eq!(b.severity, Severity::Critical);

        let b = Bottleneck::new("2024-01-01", "ochtend", "S1", 3, 2);
        assert_eq!(b.shortage, 1);
        assert_eq!(b.severity, Severity::High);
    }

    #[test]
    fn test_bottleneck_json_shape() {
        let b = Bottleneck::new("2024-01-01", "ochtend", "S1", 2, 0)
            .with_reason("no employees capable of this service")
            .with_suggestions(vec!["Check for scheduling conflicts".into()]);
        let json = serde_json::to_value(&b).unwrap();
        assert_eq!(json["required"], 2);
        assert_eq!(json["placed"], 0);
        assert_eq!(json["shortage"], 2);
        assert_eq!(json["severity"], "CRITICAL");
        assert_eq!(json["dagdeel"], "ochtend");
        assert_eq!(json["suggestions"][0], "Check for scheduling conflicts");
    }

    #[test]
    fn test_low_severity_serializes() {
        assert_eq!(serde_json::to_value(Severity::Low).unwrap(), "LOW");
    }
}
