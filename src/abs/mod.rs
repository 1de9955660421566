//! Thin owning wrappers around the SDL2 window and the OpenGL resources the
//! sandbox touches: shader programs, textures and meshes. Each wrapper owns
//! its GPU handle exclusively and releases it on drop.

pub mod app;
pub mod mesh;
pub mod shader;
pub mod texture;

pub use app::*;
pub use mesh::*;
pub use shader::*;
pub use texture::*;
