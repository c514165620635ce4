pub mod opengl_buffer;
pub mod opengl_render_backend;
pub mod opengl_vertex_array;
