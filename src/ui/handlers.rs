//! Event handlers for UI callbacks.
//!
//! Builds the command table for the toolbar and registers the Logic
//! callbacks (invoke_command, open_files, open_folders, drag_begin,
//! drag_move, drag_end, viewport_resized).

use crate::commands::{Command, CommandSpec, CommandTable};
use crate::config::OPEN_DIALOG_TITLE;
use crate::file_utils::Selection;
use crate::image_loader::FsImageDecoder;
use crate::services::ViewerService;
use crate::state::Point;
use crate::ui::image_display::show_current_picture;
use crate::ui::set_viewport_info;
use log::{error, info, warn};
use rfd::AsyncFileDialog;
use slint::ComponentHandle;
use std::cell::RefCell;
use std::rc::Rc;

/// Viewer shared by all callbacks on the UI thread.
pub type SharedViewer = Rc<RefCell<ViewerService<FsImageDecoder>>>;

/// What the open dialog lets the user pick.
#[derive(Debug, Clone, Copy)]
enum PickTarget {
    Files,
    Folders,
}

/// Sets up all UI event handlers for the application.
///
/// Takes the UI handle, the shared viewer and the toolbar layout, then
/// registers callbacks for toolbar commands and viewport dragging.
pub fn setup_handlers(ui: &crate::AppWindow, viewer: SharedViewer, toolbar: &'static [CommandSpec]) {
    let commands = build_command_table(ui, &viewer, toolbar);

    // Toolbar buttons report their index into `toolbar`
    ui.global::<crate::Logic>().on_invoke_command({
        let viewer = viewer.clone();
        move |index| {
            let Some(spec) = usize::try_from(index).ok().and_then(|i| toolbar.get(i)) else {
                warn!("Unknown toolbar index {}", index);
                return;
            };
            let availability = viewer.borrow().availability();
            commands.dispatch(spec.command, &availability);
        }
    });

    // Entries of the popup shown by the Open command
    ui.global::<crate::Logic>().on_open_files({
        let ui_handle = ui.as_weak();
        let viewer = viewer.clone();
        move || open_pictures(ui_handle.clone(), viewer.clone(), toolbar, PickTarget::Files)
    });

    ui.global::<crate::Logic>().on_open_folders({
        let ui_handle = ui.as_weak();
        let viewer = viewer.clone();
        move || open_pictures(ui_handle.clone(), viewer.clone(), toolbar, PickTarget::Folders)
    });

    ui.global::<crate::Logic>().on_drag_begin({
        let ui_handle = ui.as_weak();
        let viewer = viewer.clone();
        move |x, y| {
            viewer.borrow_mut().begin_drag(Point::new(x, y));
            if let Some(ui) = ui_handle.upgrade() {
                set_viewport_info(&ui, viewer.borrow().viewport());
            }
        }
    });

    ui.global::<crate::Logic>().on_drag_move({
        let ui_handle = ui.as_weak();
        let viewer = viewer.clone();
        move |x, y| {
            let moved = viewer.borrow_mut().drag_to(Point::new(x, y));
            if !moved {
                return;
            }
            if let Some(ui) = ui_handle.upgrade() {
                set_viewport_info(&ui, viewer.borrow().viewport());
            }
        }
    });

    ui.global::<crate::Logic>().on_drag_end({
        let ui_handle = ui.as_weak();
        let viewer = viewer.clone();
        move || {
            viewer.borrow_mut().end_drag();
            if let Some(ui) = ui_handle.upgrade() {
                set_viewport_info(&ui, viewer.borrow().viewport());
            }
        }
    });

    ui.global::<crate::Logic>().on_viewport_resized({
        let ui_handle = ui.as_weak();
        let viewer = viewer.clone();
        move |width, height| {
            viewer.borrow_mut().resize_viewport(width, height);
            if let Some(ui) = ui_handle.upgrade() {
                set_viewport_info(&ui, viewer.borrow().viewport());
            }
        }
    });

    show_current_picture(ui, &viewer.borrow(), toolbar);
}

fn build_command_table(
    ui: &crate::AppWindow,
    viewer: &SharedViewer,
    toolbar: &'static [CommandSpec],
) -> CommandTable {
    let mut table = CommandTable::new();

    table.register(Command::Open, {
        let ui_handle = ui.as_weak();
        move || {
            if let Some(ui) = ui_handle.upgrade() {
                ui.invoke_show_open_menu();
            }
        }
    });

    for (command, zoom_in) in [(Command::ZoomIn, true), (Command::ZoomOut, false)] {
        table.register(command, {
            let ui_handle = ui.as_weak();
            let viewer = viewer.clone();
            move || {
                {
                    let mut viewer = viewer.borrow_mut();
                    if zoom_in {
                        viewer.zoom_in();
                    } else {
                        viewer.zoom_out();
                    }
                }
                if let Some(ui) = ui_handle.upgrade() {
                    set_viewport_info(&ui, viewer.borrow().viewport());
                }
            }
        });
    }

    for (command, forward) in [(Command::Previous, false), (Command::Next, true)] {
        table.register(command, {
            let ui_handle = ui.as_weak();
            let viewer = viewer.clone();
            move || {
                let stepped = {
                    let mut viewer = viewer.borrow_mut();
                    if forward {
                        viewer.next()
                    } else {
                        viewer.previous()
                    }
                };
                if let Err(e) = stepped {
                    warn!("Navigation refused: {}", e);
                    return;
                }
                if let Some(ui) = ui_handle.upgrade() {
                    show_current_picture(&ui, &viewer.borrow(), toolbar);
                }
            }
        });
    }

    table.register(Command::Quit, || {
        info!("Quit requested");
        if let Err(e) = slint::quit_event_loop() {
            error!("Failed to quit event loop: {}", e);
        }
    });

    table
}

/// Shows the open dialog for `target` and loads whatever the user picked.
///
/// Picked folders are walked for pictures the same way as folders given
/// on the command line.
fn open_pictures(
    ui_handle: slint::Weak<crate::AppWindow>,
    viewer: SharedViewer,
    toolbar: &'static [CommandSpec],
    target: PickTarget,
) {
    let (description, extensions) = {
        let viewer = viewer.borrow();
        let filter = viewer.filter();
        (filter.description().to_string(), filter.extensions().to_vec())
    };

    // AsyncFileDialogはメインスレッドで実行する必要があるのでspawn_localで待つ。
    let spawned = slint::spawn_local(async move {
        let dialog = AsyncFileDialog::new().set_title(OPEN_DIALOG_TITLE);
        let picked = match target {
            PickTarget::Files => {
                dialog
                    .add_filter(description, extensions.as_slice())
                    .pick_files()
                    .await
            }
            PickTarget::Folders => dialog.pick_folders().await,
        };

        let selection = picked.map(|handles| {
            Selection::from_paths(handles.iter().map(|handle| handle.path().to_path_buf()))
        });

        let replaced = viewer.borrow_mut().open(selection);
        if !replaced {
            return;
        }

        if let Some(ui) = ui_handle.upgrade() {
            show_current_picture(&ui, &viewer.borrow(), toolbar);
        }
    });

    if let Err(e) = spawned {
        error!("Failed to show open dialog: {}", e);
    }
}
