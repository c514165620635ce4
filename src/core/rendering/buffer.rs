/// Element types an attribute buffer can hold. The set is closed: every
/// attribute is 1 to 4 tightly packed f32 components per vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeType {
    Float,
    Float2,
    Float3,
    Float4,
}

impl AttributeType {
    pub fn component_count(&self) -> u32 {
        match self {
            AttributeType::Float => 1,
            AttributeType::Float2 => 2,
            AttributeType::Float3 => 3,
            AttributeType::Float4 => 4,
        }
    }

    /// Size in bytes of one element of this type
    pub fn size(&self) -> u32 {
        self.component_count() * std::mem::size_of::<f32>() as u32
    }
}

/// Types usable as per-vertex attribute data.
///
/// Implementations exist only for the scalar and the 2/3/4-component f32
/// vector types; anything else is rejected at compile time. The `Pod` bound
/// is what lets the upload path reinterpret a slice of these as raw floats.
pub trait VertexAttribute: bytemuck::Pod {
    const ATTRIBUTE_TYPE: AttributeType;
}

impl VertexAttribute for f32 {
    const ATTRIBUTE_TYPE: AttributeType = AttributeType::Float;
}

impl VertexAttribute for [f32; 2] {
    const ATTRIBUTE_TYPE: AttributeType = AttributeType::Float2;
}

impl VertexAttribute for [f32; 3] {
    const ATTRIBUTE_TYPE: AttributeType = AttributeType::Float3;
}

impl VertexAttribute for [f32; 4] {
    const ATTRIBUTE_TYPE: AttributeType = AttributeType::Float4;
}

impl VertexAttribute for glam::Vec2 {
    const ATTRIBUTE_TYPE: AttributeType = AttributeType::Float2;
}

impl VertexAttribute for glam::Vec3 {
    const ATTRIBUTE_TYPE: AttributeType = AttributeType::Float3;
}

impl VertexAttribute for glam::Vec4 {
    const ATTRIBUTE_TYPE: AttributeType = AttributeType::Float4;
}
