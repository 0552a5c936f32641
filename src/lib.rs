//! Shift rostering engine for the U-Engine ecosystem.
//!
//! Assigns employees to discrete shift slots (date, day-part, service)
//! subject to capability, unavailability, and pre-locked assignments, and
//! reports coverage plus a diagnosis for every slot left short.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Requirement`, `EmployeeCapability`,
//!   `FixedAssignment`, `BlockedSlot`, `Assignment`, `Roster`,
//!   `Bottleneck`, `RosteringResult`
//! - **`greedy`**: Workload-balanced greedy planner and its components
//! - **`solver`**: Strategy selection and the response envelope
//! - **`input`**: JSON request decoding
//! - **`server`** (feature `server`): HTTP service
//!
//! # Determinism
//!
//! Planning is synchronous and single-threaded. Requirement order and a
//! stable least-loaded sort fully determine the roster, so identical
//! inputs give identical results apart from `timestamp` and
//! `solve_time_seconds`.
//!
//! # Example
//!
//! ```
//! use u_roster::greedy::GreedyPlanner;
//! use u_roster::models::{BlockedSlot, EmployeeCapability, Requirement};
//!
//! let requirements = vec![Requirement::new("2024-01-01", "ochtend", "S1", 1)];
//! let employees = vec![EmployeeCapability::new("E1").with_service("S1")];
//! let blocked = vec![BlockedSlot::new("E1", "2024-01-01", "ochtend")];
//!
//! let result = GreedyPlanner::new().solve(&requirements, &employees, &[], &blocked);
//! assert_eq!(result.bottlenecks.len(), 1);
//! assert_eq!(result.bottlenecks[0].reason, "all capable employees are blocked/unavailable");
//! ```

pub mod error;
pub mod greedy;
pub mod input;
pub mod models;
pub mod solver;

#[cfg(feature = "server")]
pub mod server;

pub use error::{InputError, UnknownStrategy};
