//! API endpoint handlers.
//!
//! Each module corresponds to one panel of the lookup tool.
//! Handlers delegate to `CoreState` and render through `reporting`.

pub mod dashboard;
pub mod health;
pub mod history;
pub mod patients;
pub mod search;
pub mod session;
