//! Ingestion Module
//!
//! Turns dataset rows into live feed traffic.
//!
//! ## Workflow
//! 1. **Load**: Reads the tweet CSV from the blob store.
//! 2. **Filter**: Keeps rows that carry hashtags.
//! 3. **Publish**: Sends each row as a JSON `TweetPayload` to the push feed, paced by a fixed delay.

pub mod simulator;
pub mod types;

pub use simulator::{replay_rows, run_simulator};
pub use types::{HashtagField, TweetPayload};
