//! Rostering domain models.
//!
//! Inputs describe demand (`Requirement`), supply (`EmployeeCapability`)
//! and prior commitments (`FixedAssignment`, `BlockedSlot`). Outputs are
//! the `Roster` of `Assignment`s, any `Bottleneck`s, and the
//! `RosteringResult` report that wraps them.
//!
//! # Slot Model
//!
//! | Term | Key |
//! |------|-----|
//! | Slot | (date, day-part, service) |
//! | Occupancy | (employee, date, day-part) |
//!
//! An employee holds at most one slot per (date, day-part), whatever the
//! service.

mod bottleneck;
mod commitment;
mod employee;
mod requirement;
mod result;
mod roster;

pub use bottleneck::{Bottleneck, Severity};
pub use commitment::{BlockedSlot, FixedAssignment};
pub use employee::{EmployeeCapability, DEFAULT_MAX_SHIFTS_PER_WEEK};
pub use requirement::Requirement;
pub use result::{local_timestamp, RosteringResult, ENGINE_VERSION};
pub use roster::{Assignment, AssignmentSource, Roster};
