//! Fixed-interval availability and latency probe
//!
//! - HTTP seam in `client`, one GET per probe
//! - Bounded loop and tally in `probe`
//! - Pause indicator between rounds in `pause`

pub mod client;
pub mod config;
pub mod pause;
pub mod probe;
