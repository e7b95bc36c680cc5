//! Puts the picture held by the viewport on screen.

use crate::commands::CommandSpec;
use crate::image_loader::{self, ImageDecoder};
use crate::services::ViewerService;
use crate::ui::refresh_controls;
use slint::ComponentHandle;

/// Shows the current picture (or an empty viewport) and refreshes every control.
///
/// Call after the current picture changed. Pans and zooms only need
/// `set_viewport_info`, which does not copy pixel data.
pub fn show_current_picture<D: ImageDecoder>(
    ui: &crate::AppWindow,
    viewer: &ViewerService<D>,
    toolbar: &[CommandSpec],
) {
    let view_state = ui.global::<crate::ViewState>();
    match viewer.viewport().picture() {
        Some(picture) => {
            view_state.set_picture(image_loader::create_slint_image(picture));
            view_state.set_picture_loaded(true);
        }
        None => {
            view_state.set_picture(slint::Image::default());
            view_state.set_picture_loaded(false);
        }
    }

    refresh_controls(ui, viewer, toolbar);
}
