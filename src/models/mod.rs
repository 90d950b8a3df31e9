//! Payload models for the contract analytics backend.

pub mod contract;
pub mod stats;
