use serde::{Deserialize, Serialize};

use crate::pose::ArmPose;
use crate::view::ViewState;

/// Step applied by every camera key press.
pub const CAMERA_STEP: f32 = 0.1;
/// Step applied by every joint key press, in degrees.
pub const JOINT_STEP: f32 = 2.0;
/// Step applied by the grip keys.
pub const GRIP_STEP: f32 = 0.05;

/// Identifier for a key on the control surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    /// Case-sensitive ASCII key; case selects the sign of the step.
    Character(char),
    /// Function key F1..F12.
    Function(u8),
    Named(NamedKey),
}

/// Non-character keys used by the control surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NamedKey {
    Up,
    Down,
}

/// Applies one key press to the viewing and pose state.
///
/// Every mutation is followed by the relevant clamp pass before control
/// returns, so the state the next redraw observes always satisfies the
/// invariants. Returns whether anything changed (the caller requests a
/// redraw when it did).
pub fn handle_key(key: KeyCode, view: &mut ViewState, pose: &mut ArmPose) -> bool {
    match key {
        KeyCode::Character(ch) => handle_camera_key(ch, view),
        KeyCode::Function(index) => handle_joint_key(index, pose),
        KeyCode::Named(NamedKey::Up) => {
            pose.grip += GRIP_STEP;
            pose.clamp_grip();
            true
        }
        KeyCode::Named(NamedKey::Down) => {
            pose.grip -= GRIP_STEP;
            pose.clamp_grip();
            true
        }
    }
}

/// Lowercase decreases, uppercase increases.
fn handle_camera_key(ch: char, view: &mut ViewState) -> bool {
    match ch {
        'x' => view.eye.x -= CAMERA_STEP,
        'X' => view.eye.x += CAMERA_STEP,
        'y' => view.eye.y -= CAMERA_STEP,
        'Y' => view.eye.y += CAMERA_STEP,
        'z' => view.eye.z -= CAMERA_STEP,
        'Z' => view.eye.z += CAMERA_STEP,
        'v' => view.fov_y -= CAMERA_STEP,
        'V' => view.fov_y += CAMERA_STEP,
        'a' => view.aspect -= CAMERA_STEP,
        'A' => view.aspect += CAMERA_STEP,
        'n' => view.near -= CAMERA_STEP,
        'N' => view.near += CAMERA_STEP,
        'f' => view.far -= CAMERA_STEP,
        'F' => view.far += CAMERA_STEP,
        _ => return false,
    }
    // Full clamp pass, including fields this key did not touch.
    view.clamp();
    true
}

/// Odd function keys step a joint forward, even ones step it back.
fn handle_joint_key(index: u8, pose: &mut ArmPose) -> bool {
    let delta = if index % 2 == 1 {
        JOINT_STEP
    } else {
        -JOINT_STEP
    };
    match index {
        1 | 2 => pose.shoulder_pitch += delta,
        3 | 4 => pose.shoulder_yaw += delta,
        5 | 6 => pose.shoulder_roll += delta,
        7 | 8 => pose.elbow_pitch += delta,
        9 | 10 => pose.elbow_yaw += delta,
        11 | 12 => pose.elbow_roll += delta,
        _ => return false,
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(key: KeyCode, view: &mut ViewState, pose: &mut ArmPose) -> bool {
        handle_key(key, view, pose)
    }

    #[test]
    fn eye_keys_step_by_camera_step() {
        let mut view = ViewState::default();
        let mut pose = ArmPose::new();
        let x0 = view.eye.x;
        assert!(press(KeyCode::Character('X'), &mut view, &mut pose));
        assert!(press(KeyCode::Character('X'), &mut view, &mut pose));
        assert!(press(KeyCode::Character('x'), &mut view, &mut pose));
        assert!((view.eye.x - (x0 + CAMERA_STEP)).abs() < 1e-6);
    }

    #[test]
    fn fov_key_respects_the_floor() {
        let mut view = ViewState::default();
        let mut pose = ArmPose::new();
        view.fov_y = 15.05;
        assert!(press(KeyCode::Character('v'), &mut view, &mut pose));
        assert_eq!(view.fov_y, 15.0);
        // Repeated presses stay pinned at the floor.
        assert!(press(KeyCode::Character('v'), &mut view, &mut pose));
        assert_eq!(view.fov_y, 15.0);
    }

    #[test]
    fn camera_keys_clamp_untouched_fields_too() {
        let mut view = ViewState::default();
        let mut pose = ArmPose::new();
        // Leave the far plane invalid, then press an eye key.
        view.far = 0.5;
        assert!(press(KeyCode::Character('y'), &mut view, &mut pose));
        assert_eq!(view.far, view.near * crate::view::FAR_NEAR_RATIO);
    }

    #[test]
    fn function_keys_drive_the_six_joints() {
        let mut view = ViewState::default();
        let mut pose = ArmPose::new();
        for index in 1..=12 {
            assert!(press(KeyCode::Function(index), &mut view, &mut pose));
        }
        // Each pair steps once forward and once back.
        assert_eq!(pose, ArmPose::new());

        assert!(press(KeyCode::Function(3), &mut view, &mut pose));
        assert_eq!(pose.shoulder_yaw, JOINT_STEP);
        assert!(press(KeyCode::Function(12), &mut view, &mut pose));
        assert_eq!(pose.elbow_roll, -JOINT_STEP);
    }

    #[test]
    fn joint_angles_are_unbounded() {
        let mut view = ViewState::default();
        let mut pose = ArmPose::new();
        for _ in 0..200 {
            press(KeyCode::Function(1), &mut view, &mut pose);
        }
        assert_eq!(pose.shoulder_pitch, 400.0);
    }

    #[test]
    fn grip_keys_step_and_clamp() {
        let mut view = ViewState::default();
        let mut pose = ArmPose::new();
        assert!(press(KeyCode::Named(NamedKey::Down), &mut view, &mut pose));
        assert_eq!(pose.grip, 0.0);
        for _ in 0..30 {
            press(KeyCode::Named(NamedKey::Up), &mut view, &mut pose);
        }
        assert_eq!(pose.grip, 1.0);
    }

    #[test]
    fn unmapped_keys_do_nothing() {
        let mut view = ViewState::default();
        let mut pose = ArmPose::new();
        assert!(!press(KeyCode::Character('q'), &mut view, &mut pose));
        assert!(!press(KeyCode::Function(0), &mut view, &mut pose));
        assert!(!press(KeyCode::Function(13), &mut view, &mut pose));
        assert_eq!(view, ViewState::default());
        assert_eq!(pose, ArmPose::new());
    }
}
