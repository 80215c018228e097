//! Search crate for the FlipSniper marketplace watcher.
//!
//! This crate contains the orchestrator that coordinates listing supply,
//! ranking, and presentation decoration for one search.

pub mod orchestrator;

pub use orchestrator::{RankedListing, SearchOrchestrator};
