//! Application configuration constants.

use crate::file_utils::ChildOrder;

/// Supported image file extensions for the open dialog and directory walks.
pub const SUPPORTED_IMAGE_EXTENSIONS: [&str; 3] = ["jpg", "png", "gif"];

/// Description shown next to the extension filter in the open dialog.
pub const IMAGE_FILTER_DESCRIPTION: &str = "Pictures (jpg, png, gif)";

pub const OPEN_DIALOG_TITLE: &str = "Open pictures";

/// Order in which directory children are visited while collecting pictures.
pub const CHILD_ORDER: ChildOrder = ChildOrder::Native;

/// Status line text while no picture is selected.
pub const NO_PICTURE_STATUS: &str = "no picture loaded";

/// Zoom factor bounds.
pub const MIN_ZOOM: f32 = 0.1;
pub const MAX_ZOOM: f32 = 10.0;

/// Relative zoom changes for the Zoom-In / Zoom-Out commands.
/// One step in followed by one step out returns to the same factor.
pub const ZOOM_IN_STEP: f32 = 0.25;
pub const ZOOM_OUT_STEP: f32 = -0.2;

/// Number of decoded pictures kept around for quick back-and-forth stepping.
pub const IMAGE_CACHE_CAPACITY: usize = 8;
