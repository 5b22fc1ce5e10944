//! Input dispatch for [`Orrery`].

use super::command::NavCommand;
use super::Orrery;
use crate::input::InputEvent;

impl Orrery {
    /// Process a platform-agnostic input event.
    ///
    /// Previous/next triggers go to the navigator; drags and scrolls go to
    /// the orbit controls, which ignore them while a transition is in
    /// flight. Returns `true` if a transition started.
    pub fn handle_input(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::Previous => self.execute(NavCommand::Previous),
            InputEvent::Next => self.execute(NavCommand::Next),
            InputEvent::Drag { delta } => {
                self.navigator.stage_mut().controls.rotate(delta);
                false
            }
            InputEvent::Scroll { delta } => {
                self.navigator.stage_mut().controls.zoom(delta);
                false
            }
        }
    }

    /// Look up `key` in the keybindings and execute the bound action.
    /// Unbound keys are ignored.
    pub fn handle_key(&mut self, key: &str) -> bool {
        match self.options.keybindings.lookup(key) {
            Some(action) => self.execute(NavCommand::from(action)),
            None => {
                log::trace!("unbound key {key:?}");
                false
            }
        }
    }
}
