use glow::{Context, HasContext};
use tracing::{debug, info};

use crate::core::platform::opengl::opengl_buffer::{OpenGLAttributeBuffer, OpenGLIndexBuffer};
use crate::core::platform::opengl::opengl_vertex_array::OpenGLVertexArray;
use crate::core::rendering::buffer::AttributeType;
use crate::core::rendering::render_api::{
    AttributeBufferHandle, IndexBufferHandle, RenderBackend, RenderError, VertexArrayHandle,
};
use crate::core::utils::handle::HandleAllocator;

/// OpenGL implementation of [`RenderBackend`] on top of glow.
///
/// The caller creates the `glow::Context` (and keeps it current on this
/// thread); the backend only owns the resources it allocates through it.
pub struct OpenGLRenderBackend {
    gl: Context,
    vertex_array_allocator: HandleAllocator<OpenGLVertexArray>,
    attribute_buffer_allocator: HandleAllocator<OpenGLAttributeBuffer>,
    index_buffer_allocator: HandleAllocator<OpenGLIndexBuffer>,
}

impl OpenGLRenderBackend {
    pub fn new(gl: Context) -> Self {
        let backend = OpenGLRenderBackend {
            gl,
            vertex_array_allocator: HandleAllocator::new(),
            attribute_buffer_allocator: HandleAllocator::new(),
            index_buffer_allocator: HandleAllocator::new(),
        };

        info!(
            version = %backend.get_string(glow::VERSION),
            renderer = %backend.get_string(glow::RENDERER),
            vendor = %backend.get_string(glow::VENDOR),
            "OpenGL backend initialized"
        );
        backend
    }

    #[inline(always)]
    fn get_string(&self, variant: u32) -> String {
        unsafe { self.gl.get_parameter_string(variant) }
    }
}

impl RenderBackend for OpenGLRenderBackend {
    fn create_vertex_array(&mut self) -> Result<VertexArrayHandle, RenderError> {
        let native_array =
            unsafe { self.gl.create_vertex_array() }.map_err(RenderError::VertexArrayCreation)?;

        Ok(self
            .vertex_array_allocator
            .allocate(OpenGLVertexArray { native_array }))
    }

    fn destroy_vertex_array(&mut self, handle: VertexArrayHandle) {
        let vertex_array = self.vertex_array_allocator.free(handle);
        unsafe {
            self.gl.delete_vertex_array(vertex_array.native_array);
        }
    }

    fn bind_vertex_array(&mut self, handle: VertexArrayHandle) {
        let vertex_array = self.vertex_array_allocator.get(handle);
        unsafe {
            self.gl.bind_vertex_array(Some(vertex_array.native_array));
        }
    }

    fn create_attribute_buffer(
        &mut self,
        attribute_index: u32,
        attribute_type: AttributeType,
        data: &[f32],
    ) -> Result<AttributeBufferHandle, RenderError> {
        let native_buffer =
            unsafe { self.gl.create_buffer() }.map_err(RenderError::BufferCreation)?;

        unsafe {
            self.gl.bind_buffer(glow::ARRAY_BUFFER, Some(native_buffer));
            self.gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                bytemuck::cast_slice(data),
                glow::STATIC_DRAW,
            );
            self.gl.vertex_attrib_pointer_f32(
                attribute_index,
                attribute_type.component_count() as i32,
                glow::FLOAT,
                false,
                0,
                0,
            );
        }

        debug!(
            index = attribute_index,
            ?attribute_type,
            floats = data.len(),
            "created attribute buffer"
        );
        Ok(self.attribute_buffer_allocator.allocate(OpenGLAttributeBuffer {
            native_buffer,
            attribute_index,
            attribute_type,
        }))
    }

    fn destroy_attribute_buffer(&mut self, handle: AttributeBufferHandle) {
        let buffer = self.attribute_buffer_allocator.free(handle);
        unsafe {
            self.gl.delete_buffer(buffer.native_buffer);
        }
        debug!(
            index = buffer.attribute_index,
            attribute_type = ?buffer.attribute_type,
            "destroyed attribute buffer"
        );
    }

    fn set_attribute_enabled(&mut self, attribute_index: u32, enabled: bool) {
        unsafe {
            if enabled {
                self.gl.enable_vertex_attrib_array(attribute_index);
            } else {
                self.gl.disable_vertex_attrib_array(attribute_index);
            }
        }
    }

    fn create_index_buffer(&mut self) -> Result<IndexBufferHandle, RenderError> {
        let native_buffer =
            unsafe { self.gl.create_buffer() }.map_err(RenderError::BufferCreation)?;

        // Binding to the element array target attaches the buffer to the
        // currently bound vertex array
        unsafe {
            self.gl
                .bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(native_buffer));
        }

        Ok(self
            .index_buffer_allocator
            .allocate(OpenGLIndexBuffer { native_buffer }))
    }

    fn destroy_index_buffer(&mut self, handle: IndexBufferHandle) {
        let index_buffer = self.index_buffer_allocator.free(handle);
        unsafe {
            self.gl.delete_buffer(index_buffer.native_buffer);
        }
    }

    fn draw_triangle_strip(&mut self, vertex_count: u32) {
        unsafe {
            self.gl
                .draw_arrays(glow::TRIANGLE_STRIP, 0, vertex_count as i32);
        }
    }

    fn draw_triangle_strip_instanced(&mut self, vertex_count: u32, instances: u32) {
        unsafe {
            self.gl.draw_arrays_instanced(
                glow::TRIANGLE_STRIP,
                0,
                vertex_count as i32,
                instances as i32,
            );
        }
    }

    fn draw_indexed_triangles(&mut self, handle: IndexBufferHandle, indices: &[u16]) {
        let index_buffer = self.index_buffer_allocator.get(handle);
        let bytes: &[u8] = bytemuck::cast_slice(indices);

        unsafe {
            self.gl
                .bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(index_buffer.native_buffer));
            // Orphan the previous contents first so the driver knows they are
            // discardable, then upload for real
            self.gl.buffer_data_size(
                glow::ELEMENT_ARRAY_BUFFER,
                bytes.len() as i32,
                glow::STREAM_DRAW,
            );
            self.gl
                .buffer_data_u8_slice(glow::ELEMENT_ARRAY_BUFFER, bytes, glow::STREAM_DRAW);
            self.gl.draw_elements(
                glow::TRIANGLES,
                indices.len() as i32,
                glow::UNSIGNED_SHORT,
                0,
            );
        }
    }
}
