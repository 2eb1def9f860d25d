//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - Text completion providers (OpenAI, mock)

pub mod ai;
