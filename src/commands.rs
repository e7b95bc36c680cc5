//! User commands: identifiers, derived availability, the toolbar
//! configuration and the dispatch table the shell routes clicks through.

use log::debug;
use std::collections::HashMap;

/// The six commands of the toolbar, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Open,
    ZoomIn,
    ZoomOut,
    Previous,
    Next,
    Quit,
}

#[cfg(test)]
impl Command {
    pub const ALL: [Command; 6] = [
        Command::Open,
        Command::ZoomIn,
        Command::ZoomOut,
        Command::Previous,
        Command::Next,
        Command::Quit,
    ];
}

/// Which commands can currently be executed.
///
/// Always derived from the navigation state, never stored on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandAvailability {
    pub open: bool,
    pub zoom_in: bool,
    pub zoom_out: bool,
    pub previous: bool,
    pub next: bool,
    pub quit: bool,
}

impl CommandAvailability {
    pub fn is_enabled(&self, command: Command) -> bool {
        match command {
            Command::Open => self.open,
            Command::ZoomIn => self.zoom_in,
            Command::ZoomOut => self.zoom_out,
            Command::Previous => self.previous,
            Command::Next => self.next,
            Command::Quit => self.quit,
        }
    }

    /// Flags in `Command::ALL` order.
    #[cfg(test)]
    pub fn as_array(&self) -> [bool; 6] {
        Command::ALL.map(|command| self.is_enabled(command))
    }
}

/// Static description of one toolbar button.
#[derive(Debug, Clone, Copy)]
pub struct CommandSpec {
    pub command: Command,
    pub label: &'static str,
    pub icon: &'static str,
    pub enabled: fn(&CommandAvailability) -> bool,
}

/// Toolbar layout handed to the shell at startup.
pub static TOOLBAR: [CommandSpec; 6] = [
    CommandSpec {
        command: Command::Open,
        label: "Open",
        icon: "📂",
        enabled: |availability| availability.open,
    },
    CommandSpec {
        command: Command::ZoomIn,
        label: "Zoom In",
        icon: "➕",
        enabled: |availability| availability.zoom_in,
    },
    CommandSpec {
        command: Command::ZoomOut,
        label: "Zoom Out",
        icon: "➖",
        enabled: |availability| availability.zoom_out,
    },
    CommandSpec {
        command: Command::Previous,
        label: "Previous",
        icon: "◀",
        enabled: |availability| availability.previous,
    },
    CommandSpec {
        command: Command::Next,
        label: "Next",
        icon: "▶",
        enabled: |availability| availability.next,
    },
    CommandSpec {
        command: Command::Quit,
        label: "Quit",
        icon: "✖",
        enabled: |availability| availability.quit,
    },
];

type Handler = Box<dyn Fn()>;

/// Maps each command to the closure that performs it.
#[derive(Default)]
pub struct CommandTable {
    handlers: HashMap<Command, Handler>,
}

impl CommandTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, command: Command, handler: impl Fn() + 'static) {
        self.handlers.insert(command, Box::new(handler));
    }

    /// Runs the handler for `command` if it is currently enabled.
    ///
    /// Returns whether a handler ran.
    pub fn dispatch(&self, command: Command, availability: &CommandAvailability) -> bool {
        if !availability.is_enabled(command) {
            debug!("Command {:?} is not available right now", command);
            return false;
        }

        match self.handlers.get(&command) {
            Some(handler) => {
                handler();
                true
            }
            None => {
                debug!("No handler registered for {:?}", command);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn only_open_and_quit() -> CommandAvailability {
        CommandAvailability {
            open: true,
            zoom_in: false,
            zoom_out: false,
            previous: false,
            next: false,
            quit: true,
        }
    }

    #[test]
    fn toolbar_lists_every_command_in_order() {
        let commands: Vec<Command> = TOOLBAR.iter().map(|spec| spec.command).collect();
        assert_eq!(commands, Command::ALL.to_vec());
    }

    #[test]
    fn toolbar_predicates_follow_availability() {
        let availability = CommandAvailability {
            previous: true,
            ..only_open_and_quit()
        };
        let enabled: Vec<bool> = TOOLBAR
            .iter()
            .map(|spec| (spec.enabled)(&availability))
            .collect();
        assert_eq!(enabled, availability.as_array().to_vec());
        assert_eq!(enabled, vec![true, false, false, true, false, true]);
    }

    #[test]
    fn dispatch_runs_registered_handler() {
        let calls = Rc::new(Cell::new(0));
        let mut table = CommandTable::new();
        table.register(Command::Open, {
            let calls = calls.clone();
            move || calls.set(calls.get() + 1)
        });

        assert!(table.dispatch(Command::Open, &only_open_and_quit()));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn dispatch_refuses_disabled_command() {
        let calls = Rc::new(Cell::new(0));
        let mut table = CommandTable::new();
        table.register(Command::Next, {
            let calls = calls.clone();
            move || calls.set(calls.get() + 1)
        });

        assert!(!table.dispatch(Command::Next, &only_open_and_quit()));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn dispatch_without_handler_is_a_no_op() {
        let table = CommandTable::new();
        assert!(!table.dispatch(Command::Quit, &only_open_and_quit()));
    }
}
