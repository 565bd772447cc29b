mod router;

pub use router::InputRouter;

use macroquad::prelude::*;

/// Raw events handed to the simulation each frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// The window was asked to close
    Quit,
    /// Primary button pressed at a window position in pixels
    PointerDown { x: f32, y: f32 },
    /// Anything the router does not care about
    Unrecognized,
}

/// Buttons on the control strip
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Control {
    Start,
    Stop,
    Load,
    Save,
}

impl Control {
    /// Lower wins when regions overlap
    pub const fn priority(self) -> u8 {
        match self {
            Control::Start => 0,
            Control::Stop => 1,
            Control::Load => 2,
            Control::Save => 3,
        }
    }
}

/// What a click means once it has been resolved against the layout
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Control(Control),
    ToggleCell { x: usize, y: usize },
}

/// Gather this frame's input from macroquad.
///
/// Requires `prevent_quit()` to have been called, otherwise closing the window
/// exits before a `Quit` event can be observed.
pub fn collect_events() -> Vec<InputEvent> {
    let mut events = Vec::new();

    if is_mouse_button_pressed(MouseButton::Left) {
        let (x, y) = mouse_position();
        events.push(InputEvent::PointerDown { x, y });
    }
    if is_quit_requested() {
        events.push(InputEvent::Quit);
    }

    events
}
