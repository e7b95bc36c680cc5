//! Unified error types for the picture viewer application.

use std::fmt;

/// Application-specific errors.
#[derive(Debug)]
pub enum AppError {
    /// Error loading or decoding an image file
    ImageLoad(String),
    /// Error reading a directory while collecting pictures
    DirectoryScan(String),
    /// Extension filter without any usable extension
    InvalidFilter(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::ImageLoad(msg) => write!(f, "image load error: {}", msg),
            AppError::DirectoryScan(msg) => write!(f, "directory scan error: {}", msg),
            AppError::InvalidFilter(msg) => write!(f, "invalid extension filter: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<image::ImageError> for AppError {
    fn from(err: image::ImageError) -> Self {
        AppError::ImageLoad(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::DirectoryScan(err.to_string())
    }
}

/// Type alias for Results in this application.
pub type Result<T> = std::result::Result<T, AppError>;

/// Refused navigation steps. The state is left untouched when one of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationError {
    /// No picture list is loaded
    Empty,
    /// Already at the first picture
    AtFirst,
    /// Already at the last picture
    AtLast,
}

impl fmt::Display for NavigationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationError::Empty => write!(f, "no pictures loaded"),
            NavigationError::AtFirst => write!(f, "no previous picture available"),
            NavigationError::AtLast => write!(f, "no next picture available"),
        }
    }
}

impl std::error::Error for NavigationError {}
