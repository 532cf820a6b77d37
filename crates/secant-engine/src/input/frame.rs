use super::types::InputEvent;

/// Input received since the last frame, in arrival order.
///
/// `InputState` holds what is currently down; `InputFrame` holds what happened.
#[derive(Debug, Default)]
pub struct InputFrame {
    pub events: Vec<InputEvent>,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn push_event(&mut self, ev: InputEvent) {
        self.events.push(ev);
    }
}
