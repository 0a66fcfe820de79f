use std::{
    fmt::{Display, Formatter},
    ops::{Index, IndexMut},
};

/// An opaque, copyable handle to a node stored in an [`AvlTree`].
///
/// A handle pairs a slot index with the generation of the slot at the time the
/// node was allocated. Once the node is freed the slot generation advances, and
/// the handle is reported as stale rather than resolving to whatever node
/// reuses the slot.
///
/// [`AvlTree`]: crate::AvlTree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeRef {
    index: u32,
    generation: u32,
}

impl NodeRef {
    fn index(self) -> usize {
        self.index as usize
    }
}

impl Display for NodeRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}v{}", self.index, self.generation)
    }
}

#[derive(Debug, Clone)]
struct Slot<T> {
    generation: u32,
    value: Option<T>,
}

/// Contiguous storage for tree nodes, addressed by [`NodeRef`].
///
/// Freed slots are pushed onto a free list and reused by later allocations.
#[derive(Debug, Clone)]
pub(crate) struct Arena<T> {
    slots: Vec<Slot<T>>,
    free: Vec<u32>,
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}

impl<T> Arena<T> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
        }
    }

    /// The number of occupied slots.
    pub(crate) fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub(crate) fn alloc(&mut self, value: T) -> NodeRef {
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            debug_assert!(slot.value.is_none());
            slot.value = Some(value);
            return NodeRef {
                index,
                generation: slot.generation,
            };
        }

        let index = u32::try_from(self.slots.len()).expect("arena exceeds u32::MAX slots");
        self.slots.push(Slot {
            generation: 0,
            value: Some(value),
        });

        NodeRef {
            index,
            generation: 0,
        }
    }

    /// Resolve `handle`, returning [`None`] if the slot has been freed since
    /// the handle was issued.
    pub(crate) fn get(&self, handle: NodeRef) -> Option<&T> {
        self.slots
            .get(handle.index())
            .filter(|v| v.generation == handle.generation)
            .and_then(|v| v.value.as_ref())
    }

    pub(crate) fn contains(&self, handle: NodeRef) -> bool {
        self.get(handle).is_some()
    }

    /// Remove the value held in `handle`, returning the slot to the free list.
    ///
    /// # Panics
    ///
    /// Panics if `handle` is stale.
    pub(crate) fn take(&mut self, handle: NodeRef) -> T {
        let slot = &mut self.slots[handle.index()];
        assert_eq!(slot.generation, handle.generation, "stale handle {handle}");

        let value = slot.value.take().expect("take of a free slot");
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(handle.index);

        value
    }

    /// Free every slot.
    ///
    /// Slot generations are preserved so handles issued before the clear stay
    /// stale.
    pub(crate) fn clear(&mut self) {
        self.free.clear();
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if slot.value.take().is_some() {
                slot.generation = slot.generation.wrapping_add(1);
            }
            self.free.push(index as u32);
        }
        // Reuse the lowest slots first.
        self.free.reverse();
    }
}

impl<T> Index<NodeRef> for Arena<T> {
    type Output = T;

    fn index(&self, handle: NodeRef) -> &Self::Output {
        self.get(handle)
            .unwrap_or_else(|| panic!("stale handle {handle}"))
    }
}

impl<T> IndexMut<NodeRef> for Arena<T> {
    fn index_mut(&mut self, handle: NodeRef) -> &mut Self::Output {
        self.slots
            .get_mut(handle.index())
            .filter(|v| v.generation == handle.generation)
            .and_then(|v| v.value.as_mut())
            .unwrap_or_else(|| panic!("stale handle {handle}"))
    }
}
