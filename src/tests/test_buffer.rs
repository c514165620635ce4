// -- < Testing attribute element typing > ---------------------------
#[cfg(test)]
pub mod buffer_test {
    use glam::{Vec2, Vec3, Vec4};

    use crate::core::rendering::buffer::{AttributeType, VertexAttribute};

    #[test]
    fn component_counts() {
        assert_eq!(AttributeType::Float.component_count(), 1);
        assert_eq!(AttributeType::Float2.component_count(), 2);
        assert_eq!(AttributeType::Float3.component_count(), 3);
        assert_eq!(AttributeType::Float4.component_count(), 4);
    }

    #[test]
    fn byte_sizes() {
        assert_eq!(AttributeType::Float.size(), 4);
        assert_eq!(AttributeType::Float2.size(), 8);
        assert_eq!(AttributeType::Float3.size(), 12);
        assert_eq!(AttributeType::Float4.size(), 16);
    }

    #[test]
    fn element_types_map_to_their_component_counts() {
        assert_eq!(f32::ATTRIBUTE_TYPE, AttributeType::Float);
        assert_eq!(<[f32; 2]>::ATTRIBUTE_TYPE, AttributeType::Float2);
        assert_eq!(<[f32; 3]>::ATTRIBUTE_TYPE, AttributeType::Float3);
        assert_eq!(<[f32; 4]>::ATTRIBUTE_TYPE, AttributeType::Float4);
        assert_eq!(Vec2::ATTRIBUTE_TYPE, AttributeType::Float2);
        assert_eq!(Vec3::ATTRIBUTE_TYPE, AttributeType::Float3);
        assert_eq!(Vec4::ATTRIBUTE_TYPE, AttributeType::Float4);
    }

    #[test]
    fn vector_slices_flatten_to_contiguous_floats() {
        let positions = [Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, 5.0, 6.0)];
        let floats: &[f32] = bytemuck::cast_slice(&positions);

        assert_eq!(floats, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }
}
