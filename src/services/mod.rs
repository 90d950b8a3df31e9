//! View-model services: chart projection and the statistics source.

pub mod chart;
pub mod stats;
