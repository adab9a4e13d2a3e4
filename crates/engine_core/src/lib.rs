//! Core types shared by the shooter UI crates.
//!
//! This crate provides the foundational pieces every UI panel depends on:
//! - The coarse game phase and the per-frame game-state snapshot
//! - The bridge traits through which the native game core is reached
//! - Frame timing for hosts that drive the UI themselves

pub mod bridge;
pub mod phase;
pub mod sim;
pub mod snapshot;
pub mod time;

pub use bridge::*;
pub use phase::*;
pub use sim::*;
pub use snapshot::*;
pub use time::*;

// Re-export commonly used types
pub use glam::Vec3;
