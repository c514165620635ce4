use thiserror::Error;

use crate::core::rendering::buffer::AttributeType;
use crate::core::utils::handle::Handle;

pub type VertexArrayHandle = Handle;
pub type AttributeBufferHandle = Handle;
pub type IndexBufferHandle = Handle;

#[derive(Debug, Error)]
pub enum RenderError {
    /// The driver refused to create a buffer object
    #[error("could not create buffer: {0}")]
    BufferCreation(String),
    /// The driver refused to create a vertex array object
    #[error("could not create vertex array: {0}")]
    VertexArrayCreation(String),
}

/// This is the behaviour a graphics backend should implement, translating the
/// platform-specific details of the API to this trait.
///
/// The backend doubles as the explicit graphics context: every mesh operation
/// receives it as an argument instead of reaching for an implicit global
/// "current context". Calls must come from the thread that owns the
/// underlying context.
///
/// Buffer creation and the draw calls assume the owning vertex array has been
/// bound right before, which `Mesh` takes care of.
pub trait RenderBackend {
    fn create_vertex_array(&mut self) -> Result<VertexArrayHandle, RenderError>;
    fn destroy_vertex_array(&mut self, handle: VertexArrayHandle);
    fn bind_vertex_array(&mut self, handle: VertexArrayHandle);

    /// Create a buffer for attribute slot `attribute_index`, upload `data`
    /// with static-draw usage and point the slot at it
    fn create_attribute_buffer(
        &mut self,
        attribute_index: u32,
        attribute_type: AttributeType,
        data: &[f32],
    ) -> Result<AttributeBufferHandle, RenderError>;
    fn destroy_attribute_buffer(&mut self, handle: AttributeBufferHandle);
    fn set_attribute_enabled(&mut self, attribute_index: u32, enabled: bool);

    /// Create an index buffer and attach it as the element array of the
    /// currently bound vertex array
    fn create_index_buffer(&mut self) -> Result<IndexBufferHandle, RenderError>;
    fn destroy_index_buffer(&mut self, handle: IndexBufferHandle);

    fn draw_triangle_strip(&mut self, vertex_count: u32);
    fn draw_triangle_strip_instanced(&mut self, vertex_count: u32, instances: u32);

    /// Re-upload `indices` into the index buffer with stream-draw usage and
    /// issue a triangles draw over all of them, 16-bit width
    fn draw_indexed_triangles(&mut self, handle: IndexBufferHandle, indices: &[u16]);
}
