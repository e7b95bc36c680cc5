//! Opening pictures passed on the command line.

use crate::commands::CommandSpec;
use crate::file_utils::Selection;
use crate::ui::SharedViewer;
use std::ffi::OsString;
use std::path::PathBuf;

/// Builds a selection from command line arguments, ignoring flags.
///
/// Returns `None` when no path was given.
fn selection_from_args<I>(args: I) -> Option<Selection>
where
    I: IntoIterator<Item = OsString>,
{
    let selection = Selection::from_paths(
        args.into_iter()
            .filter(|arg| !arg.to_string_lossy().starts_with('-'))
            .map(PathBuf::from),
    );

    if selection.is_empty() {
        None
    } else {
        Some(selection)
    }
}

/// Opens the files and directories given as arguments, if any.
pub fn configure_startup_opening(
    app: &crate::AppWindow,
    viewer: &SharedViewer,
    toolbar: &'static [CommandSpec],
) {
    let Some(selection) = selection_from_args(std::env::args_os().skip(1)) else {
        return;
    };

    log::info!("Opening {} entries from the command line", selection.len());
    viewer.borrow_mut().open(Some(selection));
    crate::ui::image_display::show_current_picture(app, &viewer.borrow(), toolbar);
}
