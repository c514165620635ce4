//! A mesh of vertices and their attributes, stored in attribute buffers
//! attached to a single vertex array object. Meshes can be used for many
//! purposes: tile maps, sprites, full models.

use thiserror::Error;
use tracing::debug;

use crate::core::rendering::buffer::VertexAttribute;
use crate::core::rendering::render_api::{
    AttributeBufferHandle, IndexBufferHandle, RenderBackend, RenderError, VertexArrayHandle,
};

#[derive(Debug, Error)]
pub enum MeshError {
    /// Drawing requires a buffer added with `is_position = true` first
    #[error("mesh has no vertex position buffer, so its vertex count is unknown")]
    MissingVertexBuffer,
    /// Indexed drawing requires `add_index_buffer` first
    #[error("mesh has no index buffer")]
    MissingIndexBuffer,
    /// The attribute index was never returned by `add_attribute_buffer`
    #[error("attribute index {index} was never assigned")]
    UnknownAttribute { index: u32 },
    #[error(transparent)]
    Backend(#[from] RenderError),
}

/// One drawable unit: a set of typed per-vertex attribute buffers, an
/// optional index buffer, and the vertex array object tying them together.
///
/// The mesh exclusively owns every handle it allocates. Attribute indices are
/// assigned densely in insertion order: the Nth added buffer gets index N-1,
/// stable for the life of the mesh. All operations bind this mesh's vertex
/// array before touching buffer or draw state, so interleaving operations on
/// several meshes is fine.
pub struct Mesh {
    vertex_array: VertexArrayHandle,
    attribute_buffers: Vec<AttributeBufferHandle>,
    index_buffer: Option<IndexBufferHandle>,
    vertex_count: Option<u32>,
}

impl Mesh {
    /// Allocates the vertex array object and leaves it bound
    pub fn new(backend: &mut dyn RenderBackend) -> Result<Self, MeshError> {
        let vertex_array = backend.create_vertex_array()?;
        backend.bind_vertex_array(vertex_array);
        Ok(Mesh {
            vertex_array,
            attribute_buffers: Vec::new(),
            index_buffer: None,
            vertex_count: None,
        })
    }

    /// Uploads `data` as a new attribute buffer and enables its slot.
    ///
    /// Returns the assigned attribute index, usable with
    /// [`Mesh::set_attribute_enabled`]. When `is_position` is true the length
    /// of `data` becomes the vertex count used by the non-indexed draws;
    /// later non-position buffers leave that count untouched.
    pub fn add_attribute_buffer<T: VertexAttribute>(
        &mut self,
        backend: &mut dyn RenderBackend,
        data: &[T],
        is_position: bool,
    ) -> Result<u32, MeshError> {
        let attribute_index = self.attribute_buffers.len() as u32;

        backend.bind_vertex_array(self.vertex_array);
        let buffer = backend.create_attribute_buffer(
            attribute_index,
            T::ATTRIBUTE_TYPE,
            bytemuck::cast_slice(data),
        )?;
        backend.set_attribute_enabled(attribute_index, true);

        if is_position {
            self.vertex_count = Some(data.len() as u32);
        }
        self.attribute_buffers.push(buffer);

        Ok(attribute_index)
    }

    /// Toggles whether an attribute slot participates in subsequent draws
    pub fn set_attribute_enabled(
        &self,
        backend: &mut dyn RenderBackend,
        index: u32,
        enabled: bool,
    ) -> Result<(), MeshError> {
        if index as usize >= self.attribute_buffers.len() {
            return Err(MeshError::UnknownAttribute { index });
        }

        backend.bind_vertex_array(self.vertex_array);
        backend.set_attribute_enabled(index, enabled);
        Ok(())
    }

    /// Allocates an index buffer and attaches it as this mesh's element
    /// array. Adding a second index buffer releases the first.
    pub fn add_index_buffer(&mut self, backend: &mut dyn RenderBackend) -> Result<(), MeshError> {
        backend.bind_vertex_array(self.vertex_array);
        let index_buffer = backend.create_index_buffer()?;

        if let Some(old) = self.index_buffer.replace(index_buffer) {
            backend.destroy_index_buffer(old);
        }
        Ok(())
    }

    /// Triangle-strip draw over `[0, vertex_count)`
    pub fn draw(&self, backend: &mut dyn RenderBackend) -> Result<(), MeshError> {
        let vertex_count = self.vertex_count.ok_or(MeshError::MissingVertexBuffer)?;

        backend.bind_vertex_array(self.vertex_array);
        backend.draw_triangle_strip(vertex_count);
        Ok(())
    }

    /// Same geometry as [`Mesh::draw`], repeated `instances` times
    pub fn draw_instanced(
        &self,
        backend: &mut dyn RenderBackend,
        instances: u32,
    ) -> Result<(), MeshError> {
        let vertex_count = self.vertex_count.ok_or(MeshError::MissingVertexBuffer)?;

        backend.bind_vertex_array(self.vertex_array);
        backend.draw_triangle_strip_instanced(vertex_count, instances);
        Ok(())
    }

    /// Re-uploads `indices` into this mesh's index buffer and draws them as
    /// triangles with 16-bit indices
    pub fn draw_indexed(
        &self,
        backend: &mut dyn RenderBackend,
        indices: &[u16],
    ) -> Result<(), MeshError> {
        let index_buffer = self.index_buffer.ok_or(MeshError::MissingIndexBuffer)?;

        backend.bind_vertex_array(self.vertex_array);
        backend.draw_indexed_triangles(index_buffer, indices);
        Ok(())
    }

    /// Releases every handle this mesh allocated, vertex array included
    pub fn destroy(self, backend: &mut dyn RenderBackend) {
        debug!(
            attribute_buffers = self.attribute_buffers.len(),
            has_index_buffer = self.index_buffer.is_some(),
            "destroying mesh"
        );

        for buffer in self.attribute_buffers {
            backend.destroy_attribute_buffer(buffer);
        }
        if let Some(index_buffer) = self.index_buffer {
            backend.destroy_index_buffer(index_buffer);
        }
        backend.destroy_vertex_array(self.vertex_array);
    }

    /// The vertex array handle is this mesh's identity
    #[inline(always)]
    pub fn vertex_array(&self) -> VertexArrayHandle {
        self.vertex_array
    }

    /// Vertex count recorded by the position buffer, if one was added
    #[inline(always)]
    pub fn vertex_count(&self) -> Option<u32> {
        self.vertex_count
    }

    #[inline(always)]
    pub fn attribute_count(&self) -> u32 {
        self.attribute_buffers.len() as u32
    }

    #[inline(always)]
    pub fn has_index_buffer(&self) -> bool {
        self.index_buffer.is_some()
    }
}
