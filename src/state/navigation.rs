//! Navigation state for the picture list and the current position.

use crate::commands::CommandAvailability;
use crate::config::NO_PICTURE_STATUS;
use crate::error::NavigationError;
use log::{debug, warn};
use std::path::{Path, PathBuf};

/// Direction for navigation through pictures.
#[derive(Debug, Clone, Copy)]
enum Direction {
    Next,
    Previous,
}

/// Owns the picture list and the index of the picture being shown.
///
/// `current` is either `None` (empty list) or a valid index into `pictures`.
#[derive(Debug, Default)]
pub struct NavigationState {
    pictures: Vec<PathBuf>,
    current: Option<usize>,
}

impl NavigationState {
    /// Creates a new empty navigation state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the picture list and positions on its first entry.
    pub fn load_list(&mut self, pictures: Vec<PathBuf>) {
        self.current = if pictures.is_empty() { None } else { Some(0) };
        self.pictures = pictures;
        debug!(
            "Loaded {} pictures, current index {:?}",
            self.pictures.len(),
            self.current
        );
    }

    fn step(&mut self, direction: Direction) -> Result<&Path, NavigationError> {
        let Some(index) = self.current else {
            warn!("No pictures available for navigation");
            return Err(NavigationError::Empty);
        };

        let new_index = match direction {
            Direction::Next if index + 1 < self.pictures.len() => index + 1,
            Direction::Next => {
                warn!("No next picture available");
                return Err(NavigationError::AtLast);
            }
            Direction::Previous if index > 0 => index - 1,
            Direction::Previous => {
                warn!("No previous picture available");
                return Err(NavigationError::AtFirst);
            }
        };

        self.current = Some(new_index);
        Ok(self.pictures[new_index].as_path())
    }

    /// Moves to the previous picture and returns its path.
    pub fn step_previous(&mut self) -> Result<&Path, NavigationError> {
        self.step(Direction::Previous)
    }

    /// Moves to the next picture and returns its path.
    pub fn step_next(&mut self) -> Result<&Path, NavigationError> {
        self.step(Direction::Next)
    }

    pub fn current_path(&self) -> Option<&Path> {
        self.current.map(|index| self.pictures[index].as_path())
    }

    #[cfg(test)]
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.pictures.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.pictures.is_empty()
    }

    pub fn has_previous(&self) -> bool {
        matches!(self.current, Some(index) if index > 0)
    }

    pub fn has_next(&self) -> bool {
        matches!(self.current, Some(index) if index + 1 < self.pictures.len())
    }

    /// Which commands make sense in the current state.
    pub fn availability(&self) -> CommandAvailability {
        let positioned = self.current.is_some();
        CommandAvailability {
            open: true,
            zoom_in: positioned,
            zoom_out: positioned,
            previous: self.has_previous(),
            next: self.has_next(),
            quit: true,
        }
    }

    /// 1-based `[i/n]` tag of the current picture.
    pub fn position_tag(&self) -> Option<String> {
        self.current
            .map(|index| format!("[{}/{}]", index + 1, self.pictures.len()))
    }

    /// Status line: position tag and absolute path, or the empty-state message.
    pub fn status_text(&self) -> String {
        match (self.position_tag(), self.current_path()) {
            (Some(tag), Some(path)) => format!("{} {}", tag, path.display()),
            _ => NO_PICTURE_STATUS.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pictures(count: usize) -> Vec<PathBuf> {
        (0..count)
            .map(|i| PathBuf::from(format!("/pictures/{}.jpg", i)))
            .collect()
    }

    #[test]
    fn new_state_is_empty() {
        let nav = NavigationState::new();
        assert!(nav.is_empty());
        assert_eq!(nav.current_index(), None);
        assert_eq!(nav.current_path(), None);
        assert_eq!(nav.status_text(), "no picture loaded");
    }

    #[test]
    fn load_list_positions_on_first_picture() {
        let list = pictures(3);
        let mut nav = NavigationState::new();
        nav.load_list(list.clone());

        assert_eq!(nav.current_index(), Some(0));
        assert_eq!(nav.current_path(), Some(list[0].as_path()));
        assert!(!nav.availability().previous);
    }

    #[test]
    fn load_empty_list_returns_to_empty_state() {
        let mut nav = NavigationState::new();
        nav.load_list(pictures(2));
        nav.load_list(Vec::new());

        assert_eq!(nav.current_index(), None);
        assert_eq!(nav.status_text(), "no picture loaded");
        assert_eq!(
            nav.availability(),
            CommandAvailability {
                open: true,
                zoom_in: false,
                zoom_out: false,
                previous: false,
                next: false,
                quit: true,
            }
        );
    }

    #[test]
    fn load_list_replaces_previous_list() {
        let mut nav = NavigationState::new();
        nav.load_list(pictures(3));
        nav.step_next().expect("next should be available");

        let replacement = vec![PathBuf::from("/other/only.png")];
        nav.load_list(replacement.clone());

        assert_eq!(nav.len(), 1);
        assert_eq!(nav.current_index(), Some(0));
        assert_eq!(nav.current_path(), Some(replacement[0].as_path()));
    }

    #[test]
    fn stepping_through_three_pictures_updates_availability() {
        let mut nav = NavigationState::new();
        nav.load_list(pictures(3));
        assert!(!nav.availability().previous);
        assert!(nav.availability().next);

        nav.step_next().expect("next should be available");
        nav.step_next().expect("next should be available");

        assert_eq!(nav.current_index(), Some(2));
        assert!(!nav.availability().next);
        assert!(nav.availability().previous);
    }

    #[test]
    fn stepping_next_until_unavailable_lands_on_last() {
        for count in 1..6 {
            let mut nav = NavigationState::new();
            nav.load_list(pictures(count));
            while nav.availability().next {
                nav.step_next().expect("next should be available");
            }
            assert_eq!(nav.current_index(), Some(count - 1));
        }
    }

    #[test]
    fn stepping_previous_until_unavailable_lands_on_first() {
        let mut nav = NavigationState::new();
        nav.load_list(pictures(4));
        while nav.availability().next {
            nav.step_next().expect("next should be available");
        }
        while nav.availability().previous {
            nav.step_previous().expect("previous should be available");
        }
        assert_eq!(nav.current_index(), Some(0));
    }

    #[test]
    fn step_returns_new_current_path() {
        let list = pictures(2);
        let mut nav = NavigationState::new();
        nav.load_list(list.clone());

        assert_eq!(nav.step_next(), Ok(list[1].as_path()));
        assert_eq!(nav.step_previous(), Ok(list[0].as_path()));
    }

    #[test]
    fn refused_steps_leave_state_untouched() {
        let mut nav = NavigationState::new();
        assert_eq!(nav.step_next(), Err(NavigationError::Empty));
        assert_eq!(nav.step_previous(), Err(NavigationError::Empty));
        assert_eq!(nav.current_index(), None);

        nav.load_list(pictures(2));
        assert_eq!(nav.step_previous(), Err(NavigationError::AtFirst));
        assert_eq!(nav.current_index(), Some(0));

        nav.step_next().expect("next should be available");
        assert_eq!(nav.step_next(), Err(NavigationError::AtLast));
        assert_eq!(nav.current_index(), Some(1));
    }

    #[test]
    fn status_text_shows_one_based_position_and_path() {
        let mut nav = NavigationState::new();
        nav.load_list(vec![
            PathBuf::from("/dirA/a.jpg"),
            PathBuf::from("/dirA/subdir/c.png"),
        ]);
        assert_eq!(nav.status_text(), "[1/2] /dirA/a.jpg");

        nav.step_next().expect("next should be available");
        assert_eq!(nav.status_text(), "[2/2] /dirA/subdir/c.png");
    }
}
