use std::collections::HashSet;

use crate::coords::Point2;

use super::frame::InputFrame;
use super::types::{InputEvent, MouseButton, MouseButtonState, PointerButtonEvent};

/// Current input state for the window.
///
/// Holds the pointer position and which buttons are down. Every applied event
/// is also appended to an `InputFrame`.
#[derive(Debug, Default)]
pub struct InputState {
    /// Pointer position in logical pixels; `None` while outside the window.
    pub pointer_pos: Option<Point2>,

    pub buttons_down: HashSet<MouseButton>,
}

impl InputState {
    /// Applies an event to the current state and records it into `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match &ev {
            // Releases are not delivered while unfocused.
            InputEvent::Focused(false) => self.buttons_down.clear(),

            InputEvent::PointerMoved(pos) => {
                self.pointer_pos = Some(*pos);
            }

            InputEvent::PointerLeft => {
                self.pointer_pos = None;
            }

            InputEvent::PointerButton(PointerButtonEvent { button, state, pos }) => {
                if let Some(pos) = pos {
                    self.pointer_pos = Some(*pos);
                }

                match state {
                    MouseButtonState::Pressed => self.buttons_down.insert(*button),
                    MouseButtonState::Released => self.buttons_down.remove(button),
                };
            }

            InputEvent::Focused(true) | InputEvent::Key { .. } => {}
        }

        frame.push_event(ev);
    }

    pub fn button_down(&self, btn: MouseButton) -> bool {
        self.buttons_down.contains(&btn)
    }
}
