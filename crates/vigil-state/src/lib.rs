//! Vigil State - UI state trackers and the listener binding layer
//!
//! This crate implements the event-sourced half of the binding layer:
//! - Listener bindings: subscriptions with guaranteed release
//! - Scroll-driven chrome visibility
//! - Active-section resolution from the location surface
//! - Hover-intent tooltip timing and geometry
//! - Observed-element dimension tracking
//! - Click-outside dismissal
//!
//! Trackers are pure state machines fed by [`vigil_core::UiEvent`]s;
//! all host access goes through the injected [`Host`] trait.

pub mod host;
pub mod bind;
pub mod scroll;
pub mod section;
pub mod hover;
pub mod dimensions;
pub mod dismiss;

pub use host::*;
pub use bind::*;
pub use scroll::*;
pub use section::*;
pub use hover::*;
pub use dimensions::*;
pub use dismiss::*;

#[cfg(test)]
pub(crate) mod testutil;
