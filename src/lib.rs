//! Hashtag Statistics Library
//!
//! This library crate defines the core modules behind the `hashtag_stats` binary (`main.rs`).
//!
//! ## Architecture Modules
//! The system is split into a batch side and a streaming side:
//!
//! - **`analytics`**: Tag extraction, frequency counting and sentiment tallies, with
//!   sequential, partitioned and hybrid execution strategies whose results agree.
//! - **`benchmark`**: Runs the strategies over growing dataset portions and publishes
//!   the comparison table.
//! - **`window`**: The sliding-window session: polls a feed and keeps all-time and
//!   recent-window tag counts.
//! - **`feed`**: Pull/push record feed contracts, an in-memory stream service, its HTTP
//!   routes and the matching client.
//! - **`ingestion`**: Producer simulator replaying dataset rows into a feed.
//! - **`storage`**: Blob store contract, local implementation and tweet CSV decoding.
//! - **`config`** / **`error`**: Settings structs and typed failures shared by the above.

pub mod analytics;
pub mod benchmark;
pub mod config;
pub mod error;
pub mod feed;
pub mod ingestion;
pub mod storage;
pub mod window;
