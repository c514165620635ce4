// -- < Testing the handle allocator > ---------------------------
#[cfg(test)]
pub mod handle_test {
    use crate::core::utils::handle::HandleAllocator;

    #[test]
    fn allocate_and_get() {
        let mut allocator = HandleAllocator::new();

        let first = allocator.allocate("vao");
        let second = allocator.allocate("vbo");

        assert_eq!(*allocator.get(first), "vao");
        assert_eq!(*allocator.get(second), "vbo");
        assert_ne!(first, second);
        assert_eq!(allocator.live_count(), 2);
    }

    #[test]
    fn freeing_invalidates_the_handle() {
        let mut allocator = HandleAllocator::new();

        let handle = allocator.allocate(42u32);
        assert!(allocator.is_live(handle));

        let value = allocator.free(handle);
        assert_eq!(value, 42);
        assert!(!allocator.is_live(handle));
        assert_eq!(allocator.live_count(), 0);
    }

    #[test]
    fn freed_slots_are_reused_with_a_new_generation() {
        let mut allocator = HandleAllocator::new();

        let old = allocator.allocate(1u32);
        allocator.free(old);
        let new = allocator.allocate(2u32);

        assert_eq!(new.index(), old.index());
        assert_ne!(new.generation(), old.generation());
        assert!(!allocator.is_live(old));
        assert!(allocator.is_live(new));
        assert_eq!(*allocator.get(new), 2);
    }

    #[test]
    fn handles_from_other_allocators_are_not_live() {
        let mut first: HandleAllocator<u32> = HandleAllocator::new();
        let second: HandleAllocator<u32> = HandleAllocator::new();

        let handle = first.allocate(1);
        assert!(!second.is_live(handle));
    }
}
