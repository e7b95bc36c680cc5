//! UI module for handling user interactions and UI updates.
//!
//! Threading model: everything runs on the Slint event loop.
//! - `slint::spawn_local`: the open dialog, which must be awaited on the main thread
//! - callbacks share the viewer through `Rc<RefCell<_>>`, no locking involved

pub mod handlers;
pub mod image_display;
mod state_helpers;

pub use handlers::{SharedViewer, setup_handlers};
pub use state_helpers::*;
