//! # League History
//!
//! Fantasy football league history: championship results, head-to-head
//! records and weekly power rankings, served as a JSON API.
//!
//! ## Architecture
//!
//! - **models**: Core data structures (championships, matchups, rankings)
//! - **calculate**: Aggregations over the raw league data
//! - **data**: Built-in league datasets
//! - **storage**: JSONL dataset files and dataset validation
//! - **api**: REST API endpoints
//! - **config**: Configuration loading and validation

pub mod api;
pub mod calculate;
pub mod config;
pub mod data;
pub mod models;
pub mod storage;

pub use models::*;
