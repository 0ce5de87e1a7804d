use serde::{Deserialize, Serialize};

/// The fixed key light illuminating the rig.
///
/// Positional light (w = 1) parked above and in front of the arm. The
/// renderer folds these constants into its global uniform once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeyLight {
    pub ambient: [f32; 4],
    pub diffuse: [f32; 4],
    pub specular: [f32; 4],
    pub position: [f32; 4],
}

impl Default for KeyLight {
    fn default() -> Self {
        Self {
            ambient: [0.5, 0.5, 0.5, 0.5],
            diffuse: [1.0, 1.0, 1.0, 1.0],
            specular: [1.0, 1.0, 1.0, 1.0],
            position: [4.0, 6.0, 3.0, 1.0],
        }
    }
}
