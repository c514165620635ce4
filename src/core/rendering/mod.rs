pub mod buffer;
pub mod mesh;
pub mod render_api;
