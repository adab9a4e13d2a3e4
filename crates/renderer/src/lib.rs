//! Screen-space drawing for the shooter UI.
//!
//! The UI only ever issues two primitives, text and filled rectangles, through
//! [`DrawSurface`]. [`OverlayTextBuilder`] turns them into overlay geometry for a
//! GPU backend; [`RecordingSurface`] keeps them as commands for headless runs.

pub mod surface;
pub mod vertex;

pub use surface::*;
pub use vertex::*;
