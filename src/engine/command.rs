//! The engine's navigation vocabulary.
//!
//! Every navigation, whether triggered by a key press, an on-screen button
//! or a programmatic call, is represented as a [`NavCommand`]. Consumers
//! construct commands and pass them to
//! [`Orrery::execute`](super::Orrery::execute).

use super::Orrery;
use crate::input::NavAction;

/// A navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    /// One step toward the overview.
    Previous,
    /// One step toward the last section.
    Next,
    /// Straight back to the overview.
    Overview,
    /// Jump to the section at this index.
    Section(usize),
}

impl From<NavAction> for NavCommand {
    fn from(action: NavAction) -> Self {
        match action {
            NavAction::Previous => Self::Previous,
            NavAction::Next => Self::Next,
            NavAction::Overview => Self::Overview,
        }
    }
}

impl Orrery {
    /// Execute a navigation command. Returns whether a transition started.
    ///
    /// Commands issued while a transition is in flight, or after
    /// [`teardown`](Self::teardown), are dropped.
    pub fn execute(&mut self, command: NavCommand) -> bool {
        if !self.running {
            log::debug!("{command:?} ignored: torn down");
            return false;
        }
        match command {
            NavCommand::Previous => self.navigator.request_previous(),
            NavCommand::Next => self.navigator.request_next(),
            NavCommand::Overview => self.navigator.enter_overview(false),
            NavCommand::Section(index) => {
                self.navigator.enter_section(index, false)
            }
        }
    }
}
