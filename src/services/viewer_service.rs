//! Service coordinating picture collection, navigation and the viewport.
//!
//! The shell only talks to this service, so the picture list, the current
//! index and the displayed picture always change together.

use crate::commands::CommandAvailability;
use crate::config::{CHILD_ORDER, ZOOM_IN_STEP, ZOOM_OUT_STEP};
use crate::error::{self, NavigationError};
use crate::file_utils::{self, ChildOrder, PathFilter, Selection};
use crate::image_loader::ImageDecoder;
use crate::state::{NavigationState, Point, ViewportController};
use log::{error, info};

/// Owns the viewer state and applies user commands to it.
pub struct ViewerService<D: ImageDecoder> {
    navigation: NavigationState,
    viewport: ViewportController,
    decoder: D,
    filter: PathFilter,
    child_order: ChildOrder,
    /// Reason the current picture could not be shown, if it failed.
    load_error: Option<String>,
}

impl<D: ImageDecoder> ViewerService<D> {
    /// Creates a new service filtering for the configured picture formats.
    pub fn new(decoder: D) -> error::Result<Self> {
        Ok(Self::with_filter(decoder, PathFilter::supported_images()?, CHILD_ORDER))
    }

    pub fn with_filter(decoder: D, filter: PathFilter, child_order: ChildOrder) -> Self {
        Self {
            navigation: NavigationState::new(),
            viewport: ViewportController::new(),
            decoder,
            filter,
            child_order,
            load_error: None,
        }
    }

    pub fn filter(&self) -> &PathFilter {
        &self.filter
    }

    #[cfg(test)]
    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    pub fn viewport(&self) -> &ViewportController {
        &self.viewport
    }

    /// Applies the result of the selection dialog.
    ///
    /// `None` means the dialog was cancelled and nothing changes. Returns
    /// whether the picture list was replaced.
    pub fn open(&mut self, selection: Option<Selection>) -> bool {
        let Some(selection) = selection else {
            info!("Selection cancelled, keeping current pictures");
            return false;
        };

        let pictures = file_utils::collect_pictures(&selection, &self.filter, self.child_order);
        info!(
            "Opened {} pictures from {} selected entries",
            pictures.len(),
            selection.len()
        );
        self.navigation.load_list(pictures);
        self.show_current();
        true
    }

    pub fn previous(&mut self) -> Result<(), NavigationError> {
        self.navigation.step_previous()?;
        self.show_current();
        Ok(())
    }

    pub fn next(&mut self) -> Result<(), NavigationError> {
        self.navigation.step_next()?;
        self.show_current();
        Ok(())
    }

    pub fn zoom_in(&mut self) -> f32 {
        self.viewport.zoom(ZOOM_IN_STEP)
    }

    pub fn zoom_out(&mut self) -> f32 {
        self.viewport.zoom(ZOOM_OUT_STEP)
    }

    pub fn resize_viewport(&mut self, width: f32, height: f32) {
        self.viewport.resize(width, height);
    }

    pub fn begin_drag(&mut self, cursor: Point) {
        if self.viewport.picture().is_some() {
            self.viewport.begin_drag(cursor);
        }
    }

    pub fn drag_to(&mut self, cursor: Point) -> bool {
        self.viewport.is_dragging() && self.viewport.drag_to(cursor)
    }

    pub fn end_drag(&mut self) {
        self.viewport.end_drag();
    }

    pub fn availability(&self) -> CommandAvailability {
        self.navigation.availability()
    }

    /// Status line for the current state, including a decode failure if there was one.
    pub fn status_text(&self) -> String {
        match (&self.load_error, self.navigation.current_path()) {
            (Some(reason), Some(path)) => format!(
                "{} cannot display {}: {}",
                self.navigation.position_tag().unwrap_or_default(),
                path.display(),
                reason
            ),
            _ => self.navigation.status_text(),
        }
    }

    pub fn has_load_error(&self) -> bool {
        self.load_error.is_some()
    }

    fn show_current(&mut self) {
        self.load_error = None;

        let Some(path) = self.navigation.current_path() else {
            self.viewport.clear();
            return;
        };

        if let Err(e) = self.viewport.display(path, &mut self.decoder) {
            error!("Failed to display {}: {}", path.display(), e);
            self.viewport.clear();
            self.load_error = Some(e.to_string());
        }
    }
}
