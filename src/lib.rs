//! Core modules for the robotic arm viewer.
//!
//! The crate exposes the kinematic model, the viewing state and the
//! input controller as plain data types so they can be exercised
//! headlessly; the wgpu renderer and the winit event loop sit at the
//! edges and consume the draw commands the model records.

pub mod app;
pub mod arm;
pub mod input;
pub mod light;
pub mod material;
pub mod pose;
pub mod render;
pub mod solids;
pub mod stack;
pub mod view;

pub use arm::{ArmRig, DrawCommand, SolidShape};
pub use input::{handle_key, KeyCode, NamedKey};
pub use light::KeyLight;
pub use material::{Material, MaterialParams};
pub use pose::{ArmPose, FingerAngles};
pub use render::Renderer;
pub use solids::SolidMesh;
pub use stack::TransformStack;
pub use view::ViewState;
