/// Handles for GPU resources like buffers and vertex arrays.
/// We use a concrete type to ensure that resource handles are always of the
/// same type no matter the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle {
    index: u32,
    generation: u32,
}

impl Handle {
    #[inline(always)]
    pub fn index(&self) -> u32 {
        self.index
    }

    #[inline(always)]
    pub fn generation(&self) -> u32 {
        self.generation
    }

    #[inline(always)]
    fn array_index(&self) -> usize {
        self.index as usize
    }
}

/// Generational index allocator backing the handles a render backend gives out.
///
/// All rendering in this crate happens from the thread that owns the graphics
/// context, so there is no locking here.
pub struct HandleAllocator<V> {
    free: Vec<u32>,
    entries: Vec<AllocatorEntry<V>>,
}

struct AllocatorEntry<V> {
    value: Option<V>,
    generation: u32,
}

impl<V> Default for HandleAllocator<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> HandleAllocator<V> {
    pub fn new() -> Self {
        HandleAllocator {
            free: Vec::new(),
            entries: Vec::new(),
        }
    }

    pub fn allocate(&mut self, value: V) -> Handle {
        if let Some(index) = self.free.pop() {
            let entry = &mut self.entries[index as usize];
            entry.value = Some(value);
            return Handle {
                index,
                generation: entry.generation,
            };
        }

        let index = self.entries.len() as u32;
        self.entries.push(AllocatorEntry {
            value: Some(value),
            generation: 0,
        });
        Handle {
            index,
            generation: 0,
        }
    }

    #[inline(always)]
    pub fn is_live(&self, key: Handle) -> bool {
        match self.entries.get(key.array_index()) {
            Some(entry) => entry.generation == key.generation && entry.value.is_some(),
            None => false,
        }
    }

    /// Number of currently live entries
    pub fn live_count(&self) -> usize {
        self.entries.len() - self.free.len()
    }

    pub fn free(&mut self, key: Handle) -> V {
        debug_assert!(self.is_live(key), "Trying to free dead handle");

        let entry = &mut self.entries[key.array_index()];
        let value = entry.value.take().unwrap();
        entry.generation += 1;
        self.free.push(key.index);

        value
    }

    pub fn get(&self, key: Handle) -> &V {
        debug_assert!(self.is_live(key), "Trying to access dead handle");
        self.entries[key.array_index()].value.as_ref().unwrap()
    }

    pub fn get_mut(&mut self, key: Handle) -> &mut V {
        debug_assert!(self.is_live(key), "Trying to access dead handle");
        self.entries[key.array_index()].value.as_mut().unwrap()
    }
}
