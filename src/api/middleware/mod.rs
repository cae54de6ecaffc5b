//! API middleware stack.
//!
//! Execution order (outermost → innermost):
//! 1. HTTP trace span (tower-http)
//! 2. Access logger

pub mod audit;
