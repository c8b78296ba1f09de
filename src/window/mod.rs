//! Sliding Window Streaming Module
//!
//! Live hashtag statistics over a pull feed: an all-time tally plus a tally
//! restricted to the last `window_size` seconds of arrivals.
//!
//! ## Submodules
//! - **`sliding`**: The timestamp-ordered FIFO and its front-only eviction.
//! - **`aggregator`**: The poll loop driving one streaming session.
//! - **`types`**: Timed records, per-cycle reports and the session summary.

pub mod aggregator;
pub mod sliding;
pub mod types;

pub use aggregator::SlidingWindowAggregator;
pub use sliding::SlidingWindow;
pub use types::{SessionSummary, TimedRecord, WindowReport};
