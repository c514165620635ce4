use glow::NativeVertexArray;

pub struct OpenGLVertexArray {
    pub(super) native_array: NativeVertexArray,
}
