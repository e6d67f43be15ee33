//! Taskboard: a small task-tracking service.
//!
//! This crate manages a single business entity, the task: a unit of work
//! with a permissive status lifecycle, a validated priority, and an
//! optional due date. It exposes CRUD, status transitions, named selectors
//! (pending, completed, overdue), and aggregate statistics over a REST API.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory, database)
//!
//! # Modules
//!
//! - [`config`]: Typed application settings parsed from the environment
//! - [`task`]: Task records, status lifecycle, and query selectors
//! - [`http`]: REST surface over the task services

pub mod config;
pub mod http;
pub mod task;
