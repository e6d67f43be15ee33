//! Task records, their status lifecycle, and query selectors.
//!
//! This module implements the single business entity of the system: a unit
//! of work with a status, a validated priority, and an optional due date.
//! The status machine is permissive by design; see
//! [`domain::Task::mark_completed`] and [`domain::Task::apply_update`] for
//! the exact semantics. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
