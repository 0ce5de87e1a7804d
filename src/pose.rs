use serde::{Deserialize, Serialize};

/// Number of fingers on the gripper.
pub const FINGER_COUNT: usize = 3;

/// Bend and twist angles for one finger, in degrees.
///
/// `base_z` and `joint_z` are knuckle bends about the local Z axis;
/// `tip_y` is a twist about Y applied after the digit is reoriented
/// onto the limb axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FingerAngles {
    pub base_z: f32,
    pub joint_z: f32,
    pub tip_y: f32,
}

impl FingerAngles {
    pub const fn new(base_z: f32, joint_z: f32, tip_y: f32) -> Self {
        Self {
            base_z,
            joint_z,
            tip_y,
        }
    }

    /// Componentwise linear interpolation between two poses.
    pub fn blend(open: &Self, closed: &Self, t: f32) -> Self {
        Self {
            base_z: lerp(open.base_z, closed.base_z, t),
            joint_z: lerp(open.joint_z, closed.joint_z, t),
            tip_y: lerp(open.tip_y, closed.tip_y, t),
        }
    }
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + t * (b - a)
}

/// Fully opened finger poses, indexed by finger.
pub const OPEN: [FingerAngles; FINGER_COUNT] = [
    FingerAngles::new(-60.0, 60.0, -35.0),
    FingerAngles::new(60.0, -60.0, 35.0),
    FingerAngles::new(60.0, -60.0, 35.0),
];

/// Pinched finger poses: stronger curl, zero tip twist.
pub const CLOSED: [FingerAngles; FINGER_COUNT] = [
    FingerAngles::new(-150.0, 120.0, 0.0),
    FingerAngles::new(150.0, -120.0, 0.0),
    FingerAngles::new(150.0, -120.0, 0.0),
];

/// Joint angles of the arm plus the gripper state.
///
/// Joint angles are in degrees and unbounded; rotations wrap through
/// trigonometric periodicity. `grip` is kept in `[0, 1]` where 0 is open
/// and 1 is closed.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ArmPose {
    pub shoulder_pitch: f32,
    pub shoulder_yaw: f32,
    pub shoulder_roll: f32,
    pub elbow_pitch: f32,
    pub elbow_yaw: f32,
    pub elbow_roll: f32,
    pub grip: f32,
}

impl ArmPose {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores the grip invariant after a mutation.
    pub fn clamp_grip(&mut self) {
        self.grip = self.grip.clamp(0.0, 1.0);
    }

    /// Blended finger angles for the current grip value.
    ///
    /// The blend parameter is the negated grip, matching the reference
    /// implementation: grip 0 yields the open pose exactly, while grip 1
    /// evaluates the lerp at t = -1 and extrapolates past the closed
    /// pose on the far side of open. See DESIGN.md before "fixing" this.
    pub fn finger_poses(&self) -> [FingerAngles; FINGER_COUNT] {
        let t = -self.grip;
        std::array::from_fn(|index| FingerAngles::blend(&OPEN[index], &CLOSED[index], t))
    }
}
