//! Core data models for league history.

mod championship;
mod matchup;
mod power_ranking;
mod records;

pub use championship::*;
pub use matchup::*;
pub use power_ranking::*;
pub use records::*;
