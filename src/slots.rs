//! The slot table behind queue handles.
//!
//! Every element in a queue owns one slot. The slot records where the element
//! currently sits in the heap array, so a handle can find its element without
//! scanning. Slots are addressed by a key that never changes while the element
//! is queued; when the element leaves, the slot is released and its generation
//! is bumped, which retires every `SlotId` that still names the old generation.
//! Released keys are reused by later insertions.

/// Position recorded for a slot that holds no element.
const VACANT: usize = !0usize;

/// Names one occupancy of one slot.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct SlotId {
    key: usize,
    generation: u64,
}

impl SlotId {
    pub(crate) fn key(self) -> usize {
        self.key
    }
}

#[derive(Clone, Debug)]
struct Slot {
    generation: u64,
    // index into the heap array, or VACANT
    position: usize,
}

#[derive(Clone, Debug, Default)]
pub(crate) struct SlotTable {
    slots: Vec<Slot>,
    free: Vec<usize>,
}

impl SlotTable {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
        }
    }

    /// Claims a slot for an element stored at `position`.
    pub(crate) fn insert(&mut self, position: usize) -> SlotId {
        debug_assert_ne!(position, VACANT);
        if let Some(key) = self.free.pop() {
            let slot = &mut self.slots[key];
            debug_assert_eq!(slot.position, VACANT);
            slot.position = position;
            SlotId {
                key,
                generation: slot.generation,
            }
        } else {
            let key = self.slots.len();
            self.slots.push(Slot {
                generation: 0,
                position,
            });
            SlotId { key, generation: 0 }
        }
    }

    /// Returns the heap position of `id`, or `None` if `id` has been released.
    pub(crate) fn position(&self, id: SlotId) -> Option<usize> {
        match self.slots.get(id.key) {
            Some(slot) if slot.generation == id.generation && slot.position != VACANT => {
                Some(slot.position)
            }
            _ => None,
        }
    }

    /// Heap position of an occupied slot, by key.
    pub(crate) fn position_of_key(&self, key: usize) -> usize {
        let position = self.slots[key].position;
        debug_assert_ne!(position, VACANT);
        position
    }

    pub(crate) fn set_position(&mut self, key: usize, position: usize) {
        let slot = &mut self.slots[key];
        debug_assert_ne!(slot.position, VACANT);
        slot.position = position;
    }

    /// Returns the current `SlotId` for an occupied key.
    pub(crate) fn id_of_key(&self, key: usize) -> SlotId {
        let slot = &self.slots[key];
        debug_assert_ne!(slot.position, VACANT);
        SlotId {
            key,
            generation: slot.generation,
        }
    }

    /// Releases an occupied slot. Every `SlotId` naming it becomes stale.
    pub(crate) fn release(&mut self, key: usize) {
        let slot = &mut self.slots[key];
        debug_assert_ne!(slot.position, VACANT);
        slot.position = VACANT;
        slot.generation += 1;
        self.free.push(key);
    }

    /// Releases every occupied slot.
    pub(crate) fn release_all(&mut self) {
        self.free.clear();
        for (key, slot) in self.slots.iter_mut().enumerate() {
            if slot.position != VACANT {
                slot.position = VACANT;
                slot.generation += 1;
            }
            self.free.push(key);
        }
    }

    /// Number of occupied slots.
    pub(crate) fn num_occupied(&self) -> usize {
        self.slots.len() - self.free.len()
    }
}
