//! Binary min-heap with a reverse index from element identity to heap slot.
//!
//! Every element carries a stable identity in `0..capacity` (see [`Indexed`]). The heap keeps
//! `position[identity]` in sync with every swap, so a caller that changed the key of a queued
//! element can find it in O(1) and reposition it (decrease-key).

use crate::error::{Error, Result};

/// An element with a stable identity in `0..capacity`.
pub trait Indexed {
    fn index(&self) -> usize;
}

impl Indexed for usize {
    fn index(&self) -> usize {
        *self
    }
}

/// A total preorder over heap elements.
///
/// The heap owns its order, which lets the order carry the key material itself (for example a
/// distance table) while callers mutate it through [`IndexedHeap::order_mut`].
pub trait HeapOrder<T> {
    fn is_less(&self, a: &T, b: &T) -> bool;
}

impl<T, F> HeapOrder<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    fn is_less(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

#[derive(Debug, Clone)]
pub struct IndexedHeap<T, O> {
    elements: Vec<T>,
    /// `position[identity]` is the slot of that element, `None` while it is not queued.
    position: Vec<Option<usize>>,
    order: O,
}

impl<T, O> IndexedHeap<T, O>
where
    T: Indexed,
    O: HeapOrder<T>,
{
    /// Creates an empty heap accepting identities in `0..capacity`.
    pub fn with_capacity(capacity: usize, order: O) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
            position: vec![None; capacity],
            order,
        }
    }

    pub fn capacity(&self) -> usize {
        self.position.len()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn order(&self) -> &O {
        &self.order
    }

    /// Mutable access to the ordering state.
    ///
    /// Changing the key of a queued element breaks the heap property until the element is
    /// repositioned with [`sift_up`](Self::sift_up) or [`update`](Self::update).
    pub fn order_mut(&mut self) -> &mut O {
        &mut self.order
    }

    pub fn into_order(self) -> O {
        self.order
    }

    pub fn position_of(&self, index: usize) -> Option<usize> {
        self.position.get(index).copied().flatten()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.position_of(index).is_some()
    }

    pub fn peek_min(&self) -> Option<&T> {
        self.elements.first()
    }

    /// Elements in slot order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    pub fn clear(&mut self) {
        for e in self.elements.drain(..) {
            self.position[e.index()] = None;
        }
    }

    pub fn push(&mut self, element: T) -> Result<()> {
        let capacity = self.capacity();
        if self.elements.len() >= capacity {
            return Err(Error::HeapFull { capacity });
        }
        let index = element.index();
        if index >= capacity {
            return Err(Error::IndexOutOfRange { index, capacity });
        }
        if self.position[index].is_some() {
            return Err(Error::AlreadyQueued { index });
        }

        let slot = self.elements.len();
        self.elements.push(element);
        self.position[index] = Some(slot);
        self.sift_up_from(slot);
        Ok(())
    }

    /// Pushes every element, stopping at the first rejected one.
    pub fn extend<I>(&mut self, elements: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
    {
        for e in elements {
            self.push(e)?;
        }
        Ok(())
    }

    pub fn pop_min(&mut self) -> Option<T> {
        let last = self.elements.len().checked_sub(1)?;
        self.swap(0, last);
        let min = self.elements.pop()?;
        self.position[min.index()] = None;
        if !self.elements.is_empty() {
            self.sift_down_from(0);
        }
        Some(min)
    }

    /// Pops up to `n` elements, smallest first.
    pub fn pop_n(&mut self, n: usize) -> Vec<T> {
        let mut out = Vec::with_capacity(n.min(self.len()));
        while out.len() < n {
            let Some(e) = self.pop_min() else {
                break;
            };
            out.push(e);
        }
        out
    }

    /// Restores the heap property after the key of `index` decreased.
    ///
    /// Returns `false` when the element is not queued.
    pub fn sift_up(&mut self, index: usize) -> bool {
        let Some(slot) = self.position_of(index) else {
            return false;
        };
        self.sift_up_from(slot);
        true
    }

    /// Restores the heap property after the key of `index` changed in either direction.
    pub fn update(&mut self, index: usize) -> bool {
        let Some(slot) = self.position_of(index) else {
            return false;
        };
        let slot = self.sift_up_from(slot);
        self.sift_down_from(slot);
        true
    }

    fn sift_up_from(&mut self, mut slot: usize) -> usize {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if !self.less(slot, parent) {
                break;
            }
            self.swap(slot, parent);
            slot = parent;
        }
        slot
    }

    fn sift_down_from(&mut self, mut slot: usize) -> usize {
        let len = self.elements.len();
        loop {
            let left = 2 * slot + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let child = if right < len && self.less(right, left) {
                right
            } else {
                left
            };
            if !self.less(child, slot) {
                break;
            }
            self.swap(slot, child);
            slot = child;
        }
        slot
    }

    fn less(&self, i: usize, j: usize) -> bool {
        self.order.is_less(&self.elements[i], &self.elements[j])
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.elements.swap(i, j);
        self.position[self.elements[i].index()] = Some(i);
        self.position[self.elements[j].index()] = Some(j);
    }
}
