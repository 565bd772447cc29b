use crate::input::Control;

/// A labelled, clickable rectangle in window pixels and the control it triggers
#[derive(Clone, Debug, PartialEq)]
pub struct InteractiveRegion {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub label: &'static str,
    pub control: Control,
}

impl InteractiveRegion {
    pub const fn new(x: f32, y: f32, width: f32, height: f32, label: &'static str, control: Control) -> Self {
        Self {
            x,
            y,
            width,
            height,
            label,
            control,
        }
    }

    /// Hit test with inclusive edges
    pub fn contains(&self, point: (f32, f32)) -> bool {
        point.0 >= self.x
            && point.0 <= self.x + self.width
            && point.1 >= self.y
            && point.1 <= self.y + self.height
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_inclusive() {
        let region = InteractiveRegion::new(64.0, 540.0, 120.0, 50.0, "Start", Control::Start);

        assert!(region.contains((64.0, 540.0)));
        assert!(region.contains((184.0, 590.0)));
        assert!(region.contains(region.center()));
        assert!(!region.contains((63.9, 560.0)));
        assert!(!region.contains((100.0, 590.5)));
    }
}
