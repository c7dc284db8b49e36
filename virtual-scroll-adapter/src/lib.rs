//! Host-side helpers for the `virtual-scroll` crate.
//!
//! The `virtual-scroll` crate is UI-agnostic and only computes windows. This crate provides
//! small, framework-neutral pieces a host view needs around it:
//!
//! - Spacer geometry and per-row placements for absolutely positioned rendering
//! - Tween-based programmatic scrolling (optional; host-driven via `tick`)
//! - A `ListController` that owns a manager and ties user input, ticks and teardown together
//!
//! This crate is intentionally framework-agnostic (no DOM/ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod layout;
mod tween;

#[cfg(test)]
mod tests;

pub use controller::ListController;
pub use layout::{ItemPlacement, Spacer, placements, window_translate};
pub use tween::{Easing, ScrollTween};
