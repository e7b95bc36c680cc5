//! State management for the picture viewer.

pub mod navigation;
pub mod viewport;

pub use navigation::NavigationState;
pub use viewport::{CursorAffordance, Point, ViewportController};
