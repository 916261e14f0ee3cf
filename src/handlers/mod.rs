//! HTTP handlers for system probes, villages, claims and statistics.

pub mod claims;
pub mod stats;
pub mod system;
pub mod villages;

pub use claims::*;
pub use stats::*;
pub use system::*;
pub use villages::*;
