use crate::arm::{ArmRig, SolidShape};
use crate::pose::ArmPose;
use crate::view::ViewState;

/// Prints the rig, viewing state and pose to stdout.
///
/// Used by the `--summary-only` mode and on interactive shutdown, and
/// asserted on by the CLI integration test.
pub fn print_summary(rig: &ArmRig, view: &ViewState, pose: &ArmPose) {
    let commands = rig.draw(pose);
    let spheres = commands
        .iter()
        .filter(|c| matches!(c.shape, SolidShape::Sphere { .. }))
        .count();
    println!(
        "Robotic arm: {} parts ({} joints, {} links and plates)",
        commands.len(),
        spheres,
        commands.len() - spheres
    );
    println!(
        "View: eye=({:.2}, {:.2}, {:.2}) fov={:.1} aspect={:.2} near={:.4} far={:.1}",
        view.eye.x, view.eye.y, view.eye.z, view.fov_y, view.aspect, view.near, view.far
    );
    println!(
        "Pose: shoulder=({:.1}, {:.1}, {:.1}) elbow=({:.1}, {:.1}, {:.1}) grip={:.2}",
        pose.shoulder_pitch,
        pose.shoulder_yaw,
        pose.shoulder_roll,
        pose.elbow_pitch,
        pose.elbow_yaw,
        pose.elbow_roll,
        pose.grip
    );
    for (index, angles) in pose.finger_poses().iter().enumerate() {
        println!(
            " - finger {index}: base={:.1} joint={:.1} tip={:.1}",
            angles.base_z, angles.joint_z, angles.tip_y
        );
    }
}

/// Key bindings, printed once at interactive startup.
pub fn controls_help() -> &'static str {
    "Controls:\n\
     \x20 x/X y/Y z/Z    move the eye along each axis\n\
     \x20 v/V a/A n/N f/F  field of view / aspect / near / far\n\
     \x20 F1-F6          shoulder pitch / yaw / roll\n\
     \x20 F7-F12         elbow pitch / yaw / roll\n\
     \x20 Up/Down        close / open the grip\n\
     \x20 Esc            quit"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_mentions_every_surface() {
        let help = controls_help();
        assert!(help.contains("F1-F6"));
        assert!(help.contains("F7-F12"));
        assert!(help.contains("Up/Down"));
        assert!(help.contains("x/X"));
    }
}
