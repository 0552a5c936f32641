//! Request decoding.
//!
//! Turns a JSON request document into typed planning input. Records are
//! decoded one at a time so a failure names the list and index of the bad
//! record. A list that is absent from the document is treated as empty.
//!
//! The document and every record must be JSON objects. Positional (array)
//! forms are rejected, and records may not carry keys they do not define.
//!
//! # Document Shape
//!
//! ```text
//! {
//!   "requirements":      [{date, dagdeel, service_id, required_count, team?}],
//!   "employees":         [{employee_id, voornaam, achternaam, capable_services?, ...}],
//!   "fixed_assignments": [{employee_id, date, dagdeel, service_id, reason?}],
//!   "blocked_slots":     [{employee_id, date, dagdeel, reason?}]
//! }
//! ```

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::InputError;
use crate::models::{BlockedSlot, EmployeeCapability, FixedAssignment, Requirement};

/// Complete input for one planning run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SolveRequest {
    pub requirements: Vec<Requirement>,
    pub employees: Vec<EmployeeCapability>,
    pub fixed_assignments: Vec<FixedAssignment>,
    pub blocked_slots: Vec<BlockedSlot>,
}

#[derive(Deserialize)]
struct RawSolveRequest {
    #[serde(default)]
    requirements: Vec<Value>,
    #[serde(default)]
    employees: Vec<Value>,
    #[serde(default)]
    fixed_assignments: Vec<Value>,
    #[serde(default)]
    blocked_slots: Vec<Value>,
}

impl SolveRequest {
    /// Creates a request without commitments.
    pub fn new(requirements: Vec<Requirement>, employees: Vec<EmployeeCapability>) -> Self {
        Self {
            requirements,
            employees,
            fixed_assignments: Vec::new(),
            blocked_slots: Vec::new(),
        }
    }

    /// Sets the pre-planned assignments.
    pub fn with_fixed_assignments(mut self, fixed: Vec<FixedAssignment>) -> Self {
        self.fixed_assignments = fixed;
        self
    }

    /// Sets the unavailability records.
    pub fn with_blocked_slots(mut self, blocked: Vec<BlockedSlot>) -> Self {
        self.blocked_slots = blocked;
        self
    }

    /// Decodes a request from JSON text.
    pub fn from_json(body: &str) -> Result<Self, InputError> {
        let value: Value = serde_json::from_str(body).map_err(InputError::InvalidJson)?;
        Self::from_value(value)
    }

    /// Decodes a request from a parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self, InputError> {
        let raw: RawSolveRequest = from_object(value).map_err(InputError::InvalidJson)?;
        Ok(Self {
            requirements: decode_list("requirements", "requirement", raw.requirements)?,
            employees: decode_list("employees", "employee", raw.employees)?,
            fixed_assignments: decode_list(
                "fixed_assignments",
                "fixed assignment",
                raw.fixed_assignments,
            )?,
            blocked_slots: decode_list("blocked_slots", "blocked slot", raw.blocked_slots)?,
        })
    }
}

/// Decodes `T` from a JSON object only.
///
/// Derived struct impls also accept a sequence of fields in declaration
/// order, so the object shape is enforced before decoding.
fn from_object<T: DeserializeOwned>(value: Value) -> Result<T, serde_json::Error> {
    let map: Map<String, Value> = serde_json::from_value(value)?;
    serde_json::from_value(Value::Object(map))
}

fn decode_list<T: DeserializeOwned>(
    list: &'static str,
    record: &'static str,
    values: Vec<Value>,
) -> Result<Vec<T>, InputError> {
    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            from_object(value).map_err(|source| InputError::MalformedRecord {
                list,
                record,
                index,
                source,
            })
        })
        .collect()
}
