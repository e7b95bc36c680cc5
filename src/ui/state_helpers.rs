//! Helper functions to set multiple ViewState properties in a grouped manner.
//!
//! Instead of calling individual setters like set_status_text, set_view_x, etc.,
//! these functions group related properties together.

use crate::commands::{CommandAvailability, CommandSpec};
use crate::image_loader::ImageDecoder;
use crate::services::ViewerService;
use crate::state::{CursorAffordance, ViewportController};
use slint::ComponentHandle;

/// Sets the status line.
///
/// Groups: status-text, status-is-error
pub fn set_status_info(ui: &crate::AppWindow, status: &str, is_error: bool) {
    let view_state = ui.global::<crate::ViewState>();
    view_state.set_status_text(status.into());
    view_state.set_status_is_error(is_error);
}

/// Rebuilds the toolbar model from the command table and current availability.
pub fn set_command_info(
    ui: &crate::AppWindow,
    toolbar: &[CommandSpec],
    availability: &CommandAvailability,
) {
    let commands: Vec<crate::ToolbarCommand> = toolbar
        .iter()
        .map(|spec| crate::ToolbarCommand {
            label: spec.label.into(),
            icon: spec.icon.into(),
            enabled: (spec.enabled)(availability),
        })
        .collect();
    ui.global::<crate::ViewState>()
        .set_commands(slint::ModelRc::new(slint::VecModel::from(commands)));
}

/// Sets all viewport geometry properties at once.
///
/// Groups: picture-width, picture-height, view-x, view-y, panning
pub fn set_viewport_info(ui: &crate::AppWindow, viewport: &ViewportController) {
    let view_state = ui.global::<crate::ViewState>();
    let (width, height) = viewport.scaled_size();
    let region = viewport.visible_region();
    view_state.set_picture_width(width);
    view_state.set_picture_height(height);
    view_state.set_view_x(region.x);
    view_state.set_view_y(region.y);
    view_state.set_panning(viewport.cursor() == CursorAffordance::Move);
}

/// Pushes status, toolbar and viewport geometry for the current viewer state.
pub fn refresh_controls<D: ImageDecoder>(
    ui: &crate::AppWindow,
    viewer: &ViewerService<D>,
    toolbar: &[CommandSpec],
) {
    set_status_info(ui, &viewer.status_text(), viewer.has_load_error());
    set_command_info(ui, toolbar, &viewer.availability());
    set_viewport_info(ui, viewer.viewport());
}
