use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use crate::material::Material;
use crate::pose::{ArmPose, FingerAngles, FINGER_COUNT};
use crate::stack::TransformStack;

/// Rotation that aims the cylinder's +Z authoring axis along local +Y.
///
/// Cylinders are generated along +Z; every limb is modeled along +Y, so
/// each link draw is wrapped in this fixed -90 degree X rotation.
pub const ROT_Z_TO_Y: f32 = -90.0;

/// Fraction of the smaller of link/joint radius that links sink into
/// their joints, hiding the seam at the boundary.
const OVERLAP_FRACTION: f32 = 0.25;

/// Finger root X offset as a fraction of the joint radius.
const FINGER_OFFSET_X_FRACTION: f32 = 0.23;
/// Outer finger Z offset as a fraction of the joint radius.
const FINGER_OFFSET_Z_FRACTION: f32 = 0.30;

/// Primitive solid emitted by the kinematic walk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SolidShape {
    Cube { size: f32 },
    Sphere { radius: f32 },
    Cylinder { radius: f32, length: f32 },
}

/// One draw call, recorded with its world transform and material.
///
/// Material selection travels with each command rather than being hoisted
/// to the top of the walk; the backend's material state is per-draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand {
    pub shape: SolidShape,
    pub material: Material,
    pub transform: Mat4,
}

/// Physical dimensions and materials of the arm.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArmRig {
    pub base_position: Vec3,
    pub base_size: f32,
    pub base_scale: Vec3,
    pub joint_radius: f32,
    pub link_radius: f32,
    pub link_length: f32,
    pub palm_size: f32,
    pub finger_joint_radius: f32,
    pub finger_digit_radius: f32,
    pub finger_digit_length: f32,
    pub joint_material: Material,
    pub link_material: Material,
}

impl Default for ArmRig {
    fn default() -> Self {
        Self {
            base_position: Vec3::ZERO,
            base_size: 1.0,
            base_scale: Vec3::new(5.0, 0.5, 5.0),
            joint_radius: 1.0,
            link_radius: 0.5,
            link_length: 2.0,
            palm_size: 1.0,
            finger_joint_radius: 0.15,
            finger_digit_radius: 0.1,
            finger_digit_length: 0.5,
            joint_material: Material::Chrome,
            link_material: Material::Pearl,
        }
    }
}

impl ArmRig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Signed translation inserted between a joint and the next link.
    ///
    /// Negative: the link starts slightly inside the joint sphere so no
    /// gap shows at the boundary.
    pub fn link_gap(&self) -> f32 {
        -OVERLAP_FRACTION * self.link_radius.min(self.joint_radius)
    }

    /// Palm-relative finger root offsets, indexed by finger.
    ///
    /// Finger 0 sits centered on +X; the outer pair mirror it on -X at
    /// +/- the Z offset.
    pub fn finger_offsets(&self) -> [Vec3; FINGER_COUNT] {
        let x = FINGER_OFFSET_X_FRACTION * self.joint_radius;
        let y = 0.5 * self.palm_size;
        let z = FINGER_OFFSET_Z_FRACTION * self.joint_radius;
        [
            Vec3::new(x, y, 0.0),
            Vec3::new(-x, y, z),
            Vec3::new(-x, y, -z),
        ]
    }

    /// Walks the arm hierarchy for `pose` and records one draw command
    /// per solid, in parent-before-child order.
    pub fn draw(&self, pose: &ArmPose) -> Vec<DrawCommand> {
        let mut out = Vec::with_capacity(6 + 4 * FINGER_COUNT);
        let mut stack = TransformStack::new();
        let gap = self.link_gap();

        // Base slab, independent of every joint angle.
        stack.scoped(|s| {
            s.translate(self.base_position);
            s.scale(self.base_scale);
            emit(
                &mut out,
                s,
                SolidShape::Cube {
                    size: self.base_size,
                },
                self.link_material,
            );
        });

        stack.scoped(|s| {
            // Pitch, yaw, roll: X then Y then Z. The order is load-bearing.
            s.rotate_x(pose.shoulder_pitch);
            s.rotate_y(pose.shoulder_yaw);
            s.rotate_z(pose.shoulder_roll);
            emit(
                &mut out,
                s,
                SolidShape::Sphere {
                    radius: self.joint_radius,
                },
                self.joint_material,
            );

            s.scoped(|s| {
                // Upper arm grows from the shoulder along local +Y.
                s.translate(Vec3::new(0.0, self.joint_radius + gap, 0.0));
                s.scoped(|s| {
                    s.rotate_x(ROT_Z_TO_Y);
                    emit(
                        &mut out,
                        s,
                        SolidShape::Cylinder {
                            radius: self.link_radius,
                            length: self.link_length,
                        },
                        self.link_material,
                    );
                });

                s.translate(Vec3::new(0.0, self.link_length - gap, 0.0));
                s.rotate_x(pose.elbow_pitch);
                s.rotate_y(pose.elbow_yaw);
                s.rotate_z(pose.elbow_roll);
                emit(
                    &mut out,
                    s,
                    SolidShape::Sphere {
                        radius: self.joint_radius,
                    },
                    self.joint_material,
                );

                s.translate(Vec3::new(0.0, self.joint_radius + gap, 0.0));
                s.scoped(|s| {
                    s.rotate_x(ROT_Z_TO_Y);
                    emit(
                        &mut out,
                        s,
                        SolidShape::Cylinder {
                            radius: self.link_radius,
                            length: self.link_length,
                        },
                        self.link_material,
                    );
                });

                // Palm sits at the top of the forearm plus half its own size.
                s.translate(Vec3::new(0.0, self.link_length + 0.5 * self.palm_size, 0.0));
                emit(
                    &mut out,
                    s,
                    SolidShape::Cube {
                        size: self.palm_size,
                    },
                    self.link_material,
                );

                let poses = pose.finger_poses();
                for (offset, angles) in self.finger_offsets().iter().zip(poses.iter()) {
                    self.finger(s, &mut out, *offset, *angles);
                }
            });
        });

        out
    }

    /// Draws one finger: root joint, first digit, mid joint, second digit.
    ///
    /// The tip angle is a twist about Y applied after the Z-to-Y
    /// reorientation, unlike the two knuckle bends about Z.
    fn finger(
        &self,
        stack: &mut TransformStack,
        out: &mut Vec<DrawCommand>,
        offset: Vec3,
        angles: FingerAngles,
    ) {
        stack.scoped(|s| {
            s.translate(offset);
            emit(
                out,
                s,
                SolidShape::Sphere {
                    radius: self.finger_joint_radius,
                },
                self.joint_material,
            );

            s.rotate_z(angles.base_z);
            s.scoped(|s| {
                s.rotate_x(ROT_Z_TO_Y);
                emit(
                    out,
                    s,
                    SolidShape::Cylinder {
                        radius: self.finger_digit_radius,
                        length: self.finger_digit_length,
                    },
                    self.link_material,
                );
            });

            s.scoped(|s| {
                s.translate(Vec3::new(0.0, self.finger_digit_length, 0.0));
                s.rotate_z(angles.joint_z);
                emit(
                    out,
                    s,
                    SolidShape::Sphere {
                        radius: self.finger_joint_radius,
                    },
                    self.joint_material,
                );

                s.scoped(|s| {
                    s.rotate_x(ROT_Z_TO_Y);
                    s.rotate_y(angles.tip_y);
                    emit(
                        out,
                        s,
                        SolidShape::Cylinder {
                            radius: self.finger_digit_radius,
                            length: self.finger_digit_length,
                        },
                        self.link_material,
                    );
                });
            });
        });
    }
}

fn emit(out: &mut Vec<DrawCommand>, stack: &TransformStack, shape: SolidShape, material: Material) {
    out.push(DrawCommand {
        shape,
        material,
        transform: stack.current(),
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn origin_of(command: &DrawCommand) -> Vec3 {
        command.transform.transform_point3(Vec3::ZERO)
    }

    #[test]
    fn zero_pose_emits_all_parts() {
        let rig = ArmRig::default();
        let commands = rig.draw(&ArmPose::new());
        assert_eq!(commands.len(), 18);

        // Six arm parts, then four commands per finger.
        assert!(matches!(commands[0].shape, SolidShape::Cube { .. }));
        assert!(matches!(commands[1].shape, SolidShape::Sphere { .. }));
        assert!(matches!(commands[2].shape, SolidShape::Cylinder { .. }));
        assert!(matches!(commands[3].shape, SolidShape::Sphere { .. }));
        assert!(matches!(commands[4].shape, SolidShape::Cylinder { .. }));
        assert!(matches!(commands[5].shape, SolidShape::Cube { .. }));
        for finger in 0..3 {
            let base = 6 + 4 * finger;
            assert!(matches!(commands[base].shape, SolidShape::Sphere { .. }));
            assert!(matches!(commands[base + 1].shape, SolidShape::Cylinder { .. }));
            assert!(matches!(commands[base + 2].shape, SolidShape::Sphere { .. }));
            assert!(matches!(commands[base + 3].shape, SolidShape::Cylinder { .. }));
        }
    }

    #[test]
    fn joints_and_links_pick_their_materials() {
        let rig = ArmRig::default();
        let commands = rig.draw(&ArmPose::new());
        for command in &commands {
            let expected = match command.shape {
                SolidShape::Sphere { .. } => rig.joint_material,
                SolidShape::Cube { .. } | SolidShape::Cylinder { .. } => rig.link_material,
            };
            assert_eq!(command.material, expected);
        }
    }

    #[test]
    fn zero_pose_joint_positions() {
        let rig = ArmRig::default();
        let commands = rig.draw(&ArmPose::new());

        // Shoulder joint at the origin.
        assert!(origin_of(&commands[1]).length() < 1e-6);
        // Elbow lands exactly one joint radius plus one link up: the two
        // link-gap offsets cancel.
        let elbow = origin_of(&commands[3]);
        assert!((elbow - Vec3::new(0.0, 3.0, 0.0)).length() < 1e-5);
        // Palm center: elbow + (joint_r + gap) + link + half palm.
        let palm = origin_of(&commands[5]);
        assert!((palm - Vec3::new(0.0, 6.375, 0.0)).length() < 1e-5);
        // Center finger root sits on the palm top at its X offset.
        let finger0 = origin_of(&commands[6]);
        assert!((finger0 - Vec3::new(0.23, 6.875, 0.0)).length() < 1e-5);
    }

    #[test]
    fn link_gap_is_a_quarter_of_the_smaller_radius() {
        let rig = ArmRig::default();
        assert_eq!(rig.link_gap(), -0.125);

        let chunky = ArmRig {
            link_radius: 3.0,
            ..rig
        };
        assert_eq!(chunky.link_gap(), -0.25);
    }

    #[test]
    fn grip_only_moves_finger_commands() {
        let rig = ArmRig::default();
        let open = rig.draw(&ArmPose::new());
        let mut pinched_pose = ArmPose::new();
        pinched_pose.grip = 1.0;
        let pinched = rig.draw(&pinched_pose);

        assert_eq!(open[..6], pinched[..6]);
        // The finger root joints stay put; the digits after the first
        // bend do not.
        assert_eq!(open[6], pinched[6]);
        assert_ne!(open[7].transform, pinched[7].transform);
    }

    #[test]
    fn shoulder_rotations_move_the_whole_chain() {
        let rig = ArmRig::default();

        // Yaw alone spins the arm about its own axis; the elbow stays on Y.
        let mut yawed = ArmPose::new();
        yawed.shoulder_yaw = 90.0;
        let elbow = origin_of(&rig.draw(&yawed)[3]);
        assert!((elbow - Vec3::new(0.0, 3.0, 0.0)).length() < 1e-5);

        // Pitch tips the chain toward +Z (right-handed rotation about X).
        let mut pitched = ArmPose::new();
        pitched.shoulder_pitch = 90.0;
        let elbow = origin_of(&rig.draw(&pitched)[3]);
        assert!((elbow - Vec3::new(0.0, 0.0, 3.0)).length() < 1e-5);
    }

    #[test]
    fn elbow_pitch_bends_only_the_forearm() {
        let rig = ArmRig::default();
        let mut pose = ArmPose::new();
        pose.elbow_pitch = 90.0;
        let commands = rig.draw(&pose);

        let elbow = origin_of(&commands[3]);
        assert!((elbow - Vec3::new(0.0, 3.0, 0.0)).length() < 1e-5);
        // With the elbow folded flat the palm moves off the Y axis.
        let palm = origin_of(&commands[5]);
        assert!((palm.y - 3.0).abs() < 1e-5);
        assert!((palm.z - 3.375).abs() < 1e-5);
    }
}
