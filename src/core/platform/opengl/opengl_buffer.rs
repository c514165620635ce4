use glow::NativeBuffer;

use crate::core::rendering::buffer::AttributeType;

pub struct OpenGLAttributeBuffer {
    pub(super) native_buffer: NativeBuffer,
    pub(super) attribute_index: u32,
    pub(super) attribute_type: AttributeType,
}

pub struct OpenGLIndexBuffer {
    pub(super) native_buffer: NativeBuffer,
}
