//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors, events)
//! - `assessment` - Pure scoring pipeline for AI maturity assessments

pub mod assessment;
pub mod foundation;
