//! Domain layer - Core business logic.
//!
//! - `foundation` - Shared primitives (ids, timestamps, state machine contract)
//! - `screening` - Candidate intake conversation model

pub mod foundation;
pub mod screening;
