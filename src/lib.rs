//! Core modules for the cube-and-teapot demo.
//!
//! The crate separates the interactive logic (scene state, input
//! bindings, view transforms, procedural geometry and texture) from the
//! windowing shell so that everything except the GPU surface itself is
//! testable headlessly. The binary in `main.rs` wires these pieces to a
//! winit event loop.

pub mod camera;
pub mod clock;
pub mod input;
pub mod menu;
pub mod primitives;
pub mod render;
pub mod scene;
pub mod texture;

pub use camera::{camera_params, CameraParams, LightParams};
pub use clock::{Clock, FrameTimer, SystemClock};
pub use input::{apply_key, select_from_menu, DemoKey, Directive, MenuCommand};
pub use menu::ContextMenu;
pub use primitives::{Mesh, Vertex};
pub use render::Renderer;
pub use scene::{SceneState, VIEW_DISTANCE_MIN};
pub use texture::{checkerboard, CheckerTexture};
