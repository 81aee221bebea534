//! Drag-to-aim input mapping (slingshot convention)
//!
//! Pulling the pointer back from the weapon aims the opposite way: the aim
//! vector is anchor minus pointer.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::player::{Aim, PlayerId};
use crate::consts::*;

/// Map a pull vector (anchor - pointer) to an absolute aim
pub fn aim_from_drag(pull: Vec2) -> Aim {
    let distance = pull.length().clamp(0.0, MAX_DRAG_DISTANCE);
    let power = (distance / MAX_DRAG_DISTANCE * MAX_POWER).round().max(0.0);
    Aim {
        angle: pull.y.atan2(pull.x),
        power,
    }
}

/// What the host should do after a pointer release
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Release {
    /// No drag was in progress
    Ignored,
    /// Drag long enough to count as a shot
    Fire(Aim),
    /// Tap or too-short drag
    Cancel,
}

/// Pointer drag tracking
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AimController {
    drag: Option<Drag>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct Drag {
    /// Player whose weapon the drag started from
    owner: PlayerId,
    /// Weapon origin captured at press
    anchor: Vec2,
    /// Where the pointer went down
    press: Vec2,
    /// Latest pointer position
    pointer: Vec2,
}

impl AimController {
    pub fn is_aiming(&self) -> bool {
        self.drag.is_some()
    }

    pub fn anchor(&self) -> Option<Vec2> {
        self.drag.map(|d| d.anchor)
    }

    /// Player the drag in progress belongs to
    pub fn owner(&self) -> Option<PlayerId> {
        self.drag.map(|d| d.owner)
    }

    /// Current pointer position while dragging
    pub fn pointer(&self) -> Option<Vec2> {
        self.drag.map(|d| d.pointer)
    }

    /// Begin aiming from `owner`'s weapon at `anchor`. Presses over UI controls
    /// are ignored.
    pub fn press(
        &mut self,
        owner: PlayerId,
        pointer: Vec2,
        anchor: Vec2,
        over_control: bool,
    ) -> bool {
        if over_control {
            return false;
        }
        self.drag = Some(Drag {
            owner,
            anchor,
            press: pointer,
            pointer,
        });
        true
    }

    /// Track the pointer; returns the new aim while aiming
    pub fn drag_to(&mut self, pointer: Vec2) -> Option<Aim> {
        let drag = self.drag.as_mut()?;
        drag.pointer = pointer;
        Some(aim_from_drag(drag.anchor - pointer))
    }

    /// Finish the drag. Aiming mode always ends here.
    pub fn release(&mut self, pointer: Vec2) -> Release {
        let Some(drag) = self.drag.take() else {
            return Release::Ignored;
        };
        if drag.press.distance(pointer) > MIN_FIRE_DRAG_DISTANCE {
            Release::Fire(aim_from_drag(drag.anchor - pointer))
        } else {
            Release::Cancel
        }
    }

    /// Drop any drag in progress (restart/resize)
    pub fn cancel(&mut self) {
        self.drag = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_4, PI};

    #[test]
    fn test_full_pull_is_full_power() {
        let aim = aim_from_drag(Vec2::new(MAX_DRAG_DISTANCE, 0.0));
        assert_eq!(aim.power, 100.0);
        assert_eq!(aim.angle, 0.0);
    }

    #[test]
    fn test_power_saturates() {
        let aim = aim_from_drag(Vec2::new(-1000.0, 0.0));
        assert_eq!(aim.power, 100.0);
        assert!((aim.angle - PI).abs() < 1e-6);
    }

    #[test]
    fn test_power_rounds() {
        let aim = aim_from_drag(Vec2::new(0.0, MAX_DRAG_DISTANCE / 3.0));
        assert_eq!(aim.power, 33.0);
    }

    #[test]
    fn test_angle_is_atan2_of_pull() {
        // Pulled down-left, so aim up-right (y down)
        let aim = aim_from_drag(Vec2::new(50.0, -50.0));
        assert!((aim.angle - (-FRAC_PI_4)).abs() < 1e-6);
    }

    #[test]
    fn test_drag_updates_aim() {
        let mut c = AimController::default();
        let anchor = Vec2::new(100.0, 400.0);
        assert!(c.press(PlayerId::One, anchor, anchor, false));
        let aim = c.drag_to(Vec2::new(100.0 - MAX_DRAG_DISTANCE, 400.0)).unwrap();
        assert_eq!(aim.power, 100.0);
        assert_eq!(aim.angle, 0.0);
    }

    #[test]
    fn test_press_over_control_ignored() {
        let mut c = AimController::default();
        assert!(!c.press(PlayerId::One, Vec2::ZERO, Vec2::ZERO, true));
        assert!(!c.is_aiming());
        assert_eq!(c.drag_to(Vec2::ONE), None);
    }

    #[test]
    fn test_tap_cancels() {
        let mut c = AimController::default();
        let anchor = Vec2::new(100.0, 400.0);
        c.press(PlayerId::One, Vec2::new(90.0, 410.0), anchor, false);
        c.drag_to(Vec2::new(93.0, 412.0));
        assert_eq!(c.release(Vec2::new(93.0, 412.0)), Release::Cancel);
        assert!(!c.is_aiming());
    }

    #[test]
    fn test_release_fires() {
        let mut c = AimController::default();
        let anchor = Vec2::new(100.0, 400.0);
        c.press(PlayerId::One, anchor, anchor, false);
        let release = c.release(Vec2::new(40.0, 460.0));
        let Release::Fire(aim) = release else {
            panic!("expected fire, got {release:?}");
        };
        assert_eq!(aim.power, 57.0);
        assert!((aim.angle - (-FRAC_PI_4)).abs() < 1e-6);
        assert!(!c.is_aiming());
    }

    #[test]
    fn test_drag_remembers_owner() {
        let mut c = AimController::default();
        assert_eq!(c.owner(), None);
        c.press(PlayerId::Two, Vec2::ZERO, Vec2::ZERO, false);
        assert_eq!(c.owner(), Some(PlayerId::Two));
        c.cancel();
        assert_eq!(c.owner(), None);
    }

    #[test]
    fn test_release_without_press() {
        let mut c = AimController::default();
        assert_eq!(c.release(Vec2::ZERO), Release::Ignored);
    }
}
