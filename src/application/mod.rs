//! Application layer driving the pay station.
//!
//! `StationSession` replays a stream of station events against a single
//! station. `SharedPayStation` wraps a station behind a `tokio` mutex for
//! callers that share one station between tasks.

pub mod session;
pub mod shared;
