mod shared;

pub mod native;

pub use native::Renderer;
