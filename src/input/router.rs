use log::trace;

use super::{Action, InputEvent};
use crate::ui::{GridLayout, InteractiveRegion};

/// Classifies pointer events against the control regions and the board.
///
/// Holds no simulation state and has no side effects; the caller applies the
/// returned [`Action`].
#[derive(Clone, Debug)]
pub struct InputRouter {
    regions: Vec<InteractiveRegion>,
    grid: GridLayout,
}

impl InputRouter {
    /// Regions are kept in control priority order regardless of how they were passed in
    pub fn new(mut regions: Vec<InteractiveRegion>, grid: GridLayout) -> Self {
        regions.sort_by_key(|region| region.control.priority());
        Self { regions, grid }
    }

    pub fn regions(&self) -> &[InteractiveRegion] {
        &self.regions
    }

    pub fn grid_layout(&self) -> &GridLayout {
        &self.grid
    }

    pub fn dispatch(&self, event: &InputEvent) -> Option<Action> {
        let InputEvent::PointerDown { x, y } = *event else {
            return None;
        };

        let action = self
            .regions
            .iter()
            .find(|region| region.contains((x, y)))
            .map(|region| Action::Control(region.control))
            .or_else(|| {
                self.grid
                    .cell_at((x, y))
                    .map(|(cx, cy)| Action::ToggleCell { x: cx, y: cy })
            });

        trace!("pointer at ({x}, {y}) resolved to {action:?}");
        action
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Control;
    use crate::ui::control_layout;

    fn router() -> InputRouter {
        InputRouter::new(control_layout(), GridLayout::new(800, 600, 40, 30))
    }

    fn click(x: f32, y: f32) -> InputEvent {
        InputEvent::PointerDown { x, y }
    }

    #[test]
    fn test_buttons_resolve_to_controls() {
        let router = router();
        assert_eq!(router.dispatch(&click(100.0, 560.0)), Some(Action::Control(Control::Start)));
        assert_eq!(router.dispatch(&click(300.0, 560.0)), Some(Action::Control(Control::Stop)));
        assert_eq!(router.dispatch(&click(500.0, 560.0)), Some(Action::Control(Control::Load)));
        assert_eq!(router.dispatch(&click(700.0, 560.0)), Some(Action::Control(Control::Save)));
    }

    #[test]
    fn test_button_edges_are_inclusive() {
        let router = router();
        assert_eq!(router.dispatch(&click(64.0, 540.0)), Some(Action::Control(Control::Start)));
        assert_eq!(router.dispatch(&click(184.0, 590.0)), Some(Action::Control(Control::Start)));
    }

    #[test]
    fn test_click_elsewhere_toggles_cell() {
        let router = router();
        assert_eq!(router.dispatch(&click(45.0, 10.0)), Some(Action::ToggleCell { x: 2, y: 0 }));
        // Gap between buttons still belongs to the board
        assert_eq!(router.dispatch(&click(200.0, 560.0)), Some(Action::ToggleCell { x: 10, y: 28 }));
        assert_eq!(router.dispatch(&click(799.0, 599.0)), Some(Action::ToggleCell { x: 39, y: 29 }));
    }

    #[test]
    fn test_click_outside_everything_is_ignored() {
        let router = router();
        assert_eq!(router.dispatch(&click(800.0, 100.0)), None);
        assert_eq!(router.dispatch(&click(100.0, 600.0)), None);
        assert_eq!(router.dispatch(&click(-5.0, 100.0)), None);
    }

    #[test]
    fn test_router_keeps_its_layout() {
        let router = router();
        assert_eq!(router.grid_layout(), &GridLayout::new(800, 600, 40, 30));
        assert_eq!(router.regions().len(), 4);
    }

    #[test]
    fn test_non_pointer_events_are_ignored() {
        let router = router();
        assert_eq!(router.dispatch(&InputEvent::Quit), None);
        assert_eq!(router.dispatch(&InputEvent::Unrecognized), None);
    }

    #[test]
    fn test_overlapping_regions_follow_priority() {
        let stacked = |control, label| InteractiveRegion::new(0.0, 0.0, 50.0, 50.0, label, control);
        // Deliberately listed lowest priority first
        let regions = vec![
            stacked(Control::Save, "Save"),
            stacked(Control::Load, "Load"),
            stacked(Control::Stop, "Stop"),
            stacked(Control::Start, "Start"),
        ];
        let layout = GridLayout::new(800, 600, 40, 30);

        let router = InputRouter::new(regions.clone(), layout);
        assert_eq!(router.dispatch(&click(10.0, 10.0)), Some(Action::Control(Control::Start)));

        let router = InputRouter::new(regions[..3].to_vec(), layout);
        assert_eq!(router.dispatch(&click(10.0, 10.0)), Some(Action::Control(Control::Stop)));

        let router = InputRouter::new(regions[..2].to_vec(), layout);
        assert_eq!(router.dispatch(&click(10.0, 10.0)), Some(Action::Control(Control::Load)));

        let router = InputRouter::new(regions[..1].to_vec(), layout);
        assert_eq!(router.dispatch(&click(10.0, 10.0)), Some(Action::Control(Control::Save)));

        let router = InputRouter::new(Vec::new(), layout);
        assert_eq!(router.dispatch(&click(10.0, 10.0)), Some(Action::ToggleCell { x: 0, y: 0 }));
    }

    #[test]
    fn test_router_never_emits_out_of_bounds_cells() {
        let router = router();
        for px in (-40..=840).step_by(7) {
            for py in (-40..=640).step_by(7) {
                if let Some(Action::ToggleCell { x, y }) = router.dispatch(&click(px as f32, py as f32)) {
                    assert!(x < 40 && y < 30, "({x}, {y}) from ({px}, {py})");
                }
            }
        }
    }
}
