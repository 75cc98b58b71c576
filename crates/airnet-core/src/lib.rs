//! Airnet Core Library
//!
//! Graph store and route algorithms for the airnet network tool.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod records;
