//! Vigil Client - Async resource client
//!
//! Three layers:
//! - `transport`: pluggable request executor; every failure it can see
//!   is normalized into the [`vigil_core::ApiError`] envelope
//! - `client`: typed JSON calls with envelope-aware status handling
//! - `lifecycle`: per-call-site `idle -> loading -> settled` state with
//!   generation-guarded commits

pub mod transport;
pub mod client;
pub mod lifecycle;

pub use transport::*;
pub use client::*;
pub use lifecycle::*;
