//! TalentScout - Conversational candidate screening assistant
//!
//! This crate implements a scripted intake conversation: it greets a
//! candidate, collects and validates a fixed set of profile fields, asks a
//! short series of technical questions generated from the declared tech
//! stack, and closes the session.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
