//! Static screen layout: where the board and the control buttons sit.
//! Computed once, then shared by hit testing and drawing.

mod layout;
mod region;

pub use layout::GridLayout;
pub use region::InteractiveRegion;

use crate::input::Control;

pub const BUTTON_WIDTH: f32 = 120.0;
pub const BUTTON_HEIGHT: f32 = 50.0;
pub const BUTTON_ROW_Y: f32 = 540.0;

/// The four control buttons along the bottom of the window, left to right
pub fn control_layout() -> Vec<InteractiveRegion> {
    [
        (64.0, "Start", Control::Start),
        (248.0, "Stop", Control::Stop),
        (432.0, "Load", Control::Load),
        (616.0, "Save", Control::Save),
    ]
    .into_iter()
    .map(|(x, label, control)| {
        InteractiveRegion::new(x, BUTTON_ROW_Y, BUTTON_WIDTH, BUTTON_HEIGHT, label, control)
    })
    .collect()
}
