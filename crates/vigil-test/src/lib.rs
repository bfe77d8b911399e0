//! Vigil Test Harness - scripted hosts and end-to-end scenarios
//!
//! This crate provides:
//! - A fully scripted host (clock, scroll, location, element boxes)
//! - A binding driver replaying deterministic event scripts
//! - The example echo endpoint served over axum
//! - End-to-end scenarios covering the binding and client contracts

pub mod host;
pub mod driver;
pub mod server;
pub mod integration;

pub use host::*;
pub use driver::*;
pub use server::*;
pub use integration::*;
