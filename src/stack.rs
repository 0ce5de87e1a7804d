use glam::{Mat4, Vec3};

/// Push/pop-scoped composition of rigid-body transforms.
///
/// The current matrix maps local coordinates to world space. `scoped`
/// saves it, runs the body, and restores it on return, so a scope can
/// never leave the stack unbalanced regardless of how the body exits.
#[derive(Debug, Clone, Default)]
pub struct TransformStack {
    saved: Vec<Mat4>,
    current: Mat4,
}

impl TransformStack {
    pub fn new() -> Self {
        Self {
            saved: Vec::new(),
            current: Mat4::IDENTITY,
        }
    }

    /// The composed local-to-world matrix at this point of the walk.
    pub fn current(&self) -> Mat4 {
        self.current
    }

    /// Number of enclosing scopes.
    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    /// Composes a translation onto the current matrix.
    pub fn translate(&mut self, offset: Vec3) {
        self.current *= Mat4::from_translation(offset);
    }

    /// Composes a rotation about the local X axis, in degrees.
    pub fn rotate_x(&mut self, degrees: f32) {
        self.current *= Mat4::from_rotation_x(degrees.to_radians());
    }

    /// Composes a rotation about the local Y axis, in degrees.
    pub fn rotate_y(&mut self, degrees: f32) {
        self.current *= Mat4::from_rotation_y(degrees.to_radians());
    }

    /// Composes a rotation about the local Z axis, in degrees.
    pub fn rotate_z(&mut self, degrees: f32) {
        self.current *= Mat4::from_rotation_z(degrees.to_radians());
    }

    /// Composes a non-uniform scale onto the current matrix.
    pub fn scale(&mut self, factors: Vec3) {
        self.current *= Mat4::from_scale(factors);
    }

    /// Runs `body` in a nested scope and restores the prior matrix.
    pub fn scoped<R>(&mut self, body: impl FnOnce(&mut Self) -> R) -> R {
        self.saved.push(self.current);
        let result = body(self);
        if let Some(previous) = self.saved.pop() {
            self.current = previous;
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scope_round_trips_to_identity() {
        let mut stack = TransformStack::new();
        stack.scoped(|s| {
            s.translate(Vec3::new(1.0, 2.0, 3.0));
            s.rotate_y(42.0);
            s.scoped(|s| {
                s.rotate_x(-90.0);
                s.scale(Vec3::splat(5.0));
                s.scoped(|s| {
                    s.translate(Vec3::Y);
                });
            });
        });
        assert_eq!(stack.current(), Mat4::IDENTITY);
        assert_eq!(stack.depth(), 0);
    }

    #[test]
    fn scope_restores_arbitrary_parent_transform() {
        let mut stack = TransformStack::new();
        stack.translate(Vec3::new(0.5, -1.5, 2.0));
        stack.rotate_z(30.0);
        let before = stack.current();
        stack.scoped(|s| {
            s.translate(Vec3::X * 10.0);
            s.rotate_y(180.0);
            assert_ne!(s.current(), before);
        });
        assert_eq!(stack.current(), before);
    }

    #[test]
    fn transforms_compose_in_local_space() {
        // Translating then rotating must differ from rotating then
        // translating, matching the modelview semantics the walk relies on.
        let mut a = TransformStack::new();
        a.translate(Vec3::X);
        a.rotate_z(90.0);
        let mut b = TransformStack::new();
        b.rotate_z(90.0);
        b.translate(Vec3::X);

        let pa = a.current().transform_point3(Vec3::ZERO);
        let pb = b.current().transform_point3(Vec3::ZERO);
        assert!((pa - Vec3::X).length() < 1e-6);
        assert!((pb - Vec3::Y).length() < 1e-6);
    }

    #[test]
    fn rotation_order_is_not_commutative() {
        let angles = (30.0, 45.0, 60.0);

        let mut pitch_yaw_roll = TransformStack::new();
        pitch_yaw_roll.rotate_x(angles.0);
        pitch_yaw_roll.rotate_y(angles.1);
        pitch_yaw_roll.rotate_z(angles.2);

        let mut yaw_pitch_roll = TransformStack::new();
        yaw_pitch_roll.rotate_y(angles.1);
        yaw_pitch_roll.rotate_x(angles.0);
        yaw_pitch_roll.rotate_z(angles.2);

        let probe = Vec3::new(1.0, 2.0, 3.0);
        let a = pitch_yaw_roll.current().transform_point3(probe);
        let b = yaw_pitch_roll.current().transform_point3(probe);
        assert!((a - b).length() > 1e-3);
    }
}
