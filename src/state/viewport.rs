//! Viewport over the displayed picture: zoom factor, visible region and drag-to-pan.

use crate::config::{MAX_ZOOM, MIN_ZOOM};
use crate::error::Result;
use crate::image_loader::{DecodedImage, ImageDecoder};
use log::{debug, warn};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Visible window over the scaled picture, in picture pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Mouse cursor the shell should show over the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorAffordance {
    Default,
    Move,
}

/// Only alive between `begin_drag` and `end_drag`.
#[derive(Debug, Clone, Copy)]
struct PanState {
    anchor: Point,
}

/// Shows one picture and moves the visible region over it.
#[derive(Debug)]
pub struct ViewportController {
    picture: Option<DecodedImage>,
    zoom: f32,
    visible: Rect,
    pan: Option<PanState>,
}

impl Default for ViewportController {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewportController {
    pub fn new() -> Self {
        Self {
            picture: None,
            zoom: 1.0,
            visible: Rect::default(),
            pan: None,
        }
    }

    /// Decodes `path` and shows it from the top-left corner at 100%.
    ///
    /// On failure the viewport is left empty and the error is returned.
    pub fn display<D: ImageDecoder>(&mut self, path: &Path, decoder: &mut D) -> Result<()> {
        self.pan = None;
        self.zoom = 1.0;
        self.visible.x = 0.0;
        self.visible.y = 0.0;

        match decoder.decode(path) {
            Ok(picture) => {
                debug!(
                    "Displaying {} ({}x{})",
                    path.display(),
                    picture.width,
                    picture.height
                );
                self.picture = Some(picture);
                Ok(())
            }
            Err(e) => {
                self.picture = None;
                Err(e)
            }
        }
    }

    /// Shows an empty viewport.
    pub fn clear(&mut self) {
        self.picture = None;
        self.pan = None;
        self.zoom = 1.0;
        self.visible.x = 0.0;
        self.visible.y = 0.0;
    }

    /// Scales the zoom factor by `1 + delta`, clamped to the allowed range.
    ///
    /// Returns the resulting factor. Does nothing without a picture.
    pub fn zoom(&mut self, delta: f32) -> f32 {
        if self.picture.is_none() {
            return self.zoom;
        }

        self.zoom = (self.zoom * (1.0 + delta)).clamp(MIN_ZOOM, MAX_ZOOM);
        self.clamp_visible();
        debug!("Zoom factor is now {}", self.zoom);
        self.zoom
    }

    /// Follows the size of the on-screen viewport.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.visible.width = width.max(0.0);
        self.visible.height = height.max(0.0);
        self.clamp_visible();
    }

    pub fn begin_drag(&mut self, cursor: Point) {
        if self.pan.is_some() {
            debug!("Drag restarted without being ended");
        }
        self.pan = Some(PanState { anchor: cursor });
    }

    /// Moves the visible region opposite to the cursor movement since the last call.
    ///
    /// Returns false if no drag is in progress.
    pub fn drag_to(&mut self, cursor: Point) -> bool {
        let Some(pan) = self.pan.as_mut() else {
            warn!("Ignoring drag movement outside of a drag");
            return false;
        };

        self.visible.x -= cursor.x - pan.anchor.x;
        self.visible.y -= cursor.y - pan.anchor.y;
        pan.anchor = cursor;
        self.clamp_visible();
        true
    }

    pub fn end_drag(&mut self) {
        self.pan = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.pan.is_some()
    }

    pub fn cursor(&self) -> CursorAffordance {
        if self.pan.is_some() {
            CursorAffordance::Move
        } else {
            CursorAffordance::Default
        }
    }

    pub fn picture(&self) -> Option<&DecodedImage> {
        self.picture.as_ref()
    }

    pub fn zoom_factor(&self) -> f32 {
        self.zoom
    }

    pub fn visible_region(&self) -> Rect {
        self.visible
    }

    /// Size of the picture at the current zoom factor.
    pub fn scaled_size(&self) -> (f32, f32) {
        self.picture
            .as_ref()
            .map(|picture| {
                (
                    picture.width as f32 * self.zoom,
                    picture.height as f32 * self.zoom,
                )
            })
            .unwrap_or((0.0, 0.0))
    }

    // Keeps the visible region inside the scaled picture.
    fn clamp_visible(&mut self) {
        let (width, height) = self.scaled_size();
        let max_x = (width - self.visible.width).max(0.0);
        let max_y = (height - self.visible.height).max(0.0);
        self.visible.x = self.visible.x.clamp(0.0, max_x);
        self.visible.y = self.visible.y.clamp(0.0, max_y);
    }
}
