use std::fmt;
use std::iter::FusedIterator;

use log::{debug, trace};

use crate::error::{ListError, Result};

struct Node<T> {
    value: T,
    next: Option<usize>,
}

/// Backing storage cell. Vacant slots form an intrusive free list.
enum Slot<T> {
    Occupied(Node<T>),
    Vacant(Option<usize>),
}

/// Singly linked sequence with O(1) insertion at both ends.
///
/// Nodes live in a slot arena owned by the list and link to each other by
/// slot index, so no node is ever reachable from outside the list. Removed
/// slots are recycled by later insertions.
pub struct LinkedList<T> {
    slots: Vec<Slot<T>>,
    free: Option<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    size: usize,
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        LinkedList {
            slots: Vec::new(),
            free: None,
            head: None,
            tail: None,
            size: 0,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn push_front(&mut self, value: T) {
        let slot = self.alloc(Node {
            value,
            next: self.head,
        });

        if self.tail.is_none() {
            self.tail = Some(slot);
        }

        self.head = Some(slot);
        self.size += 1;
        trace!("push_front: size={}", self.size);
    }

    pub fn push_back(&mut self, value: T) {
        let slot = self.alloc(Node { value, next: None });

        match self.tail {
            Some(tail) => self.node_mut(tail).next = Some(slot),
            None => self.head = Some(slot),
        }

        self.tail = Some(slot);
        self.size += 1;
        trace!("push_back: size={}", self.size);
    }

    /// Inserts `value` so that it ends up at position `index`.
    ///
    /// `index == size()` appends. Interior positions cost a walk to the
    /// predecessor.
    pub fn insert_at(&mut self, index: usize, value: T) -> Result<()> {
        if index > self.size {
            return Err(self.out_of_range(index));
        }

        if index == 0 {
            self.push_front(value);
            return Ok(());
        }

        if index == self.size {
            self.push_back(value);
            return Ok(());
        }

        let prev = self.slot_at(index - 1);
        let next = self.node(prev).next;
        let slot = self.alloc(Node { value, next });
        self.node_mut(prev).next = Some(slot);
        self.size += 1;
        trace!("insert_at({}): size={}", index, self.size);
        Ok(())
    }

    pub fn pop_front(&mut self) -> Result<T> {
        let head = self.head.ok_or_else(|| self.empty())?;
        let node = self.release(head);

        self.head = node.next;
        if self.head.is_none() {
            self.tail = None;
        }

        self.size -= 1;
        trace!("pop_front: size={}", self.size);
        Ok(node.value)
    }

    /// Removes the last element. O(n): the new tail is found by walking
    /// from the head.
    pub fn pop_back(&mut self) -> Result<T> {
        let tail = self.tail.ok_or_else(|| self.empty())?;

        if self.size == 1 {
            return self.pop_front();
        }

        let prev = self.slot_at(self.size - 2);
        self.node_mut(prev).next = None;
        self.tail = Some(prev);

        let node = self.release(tail);
        self.size -= 1;
        trace!("pop_back: size={}", self.size);
        Ok(node.value)
    }

    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        if index >= self.size {
            return Err(self.out_of_range(index));
        }

        if index == 0 {
            return self.pop_front();
        }

        if index == self.size - 1 {
            return self.pop_back();
        }

        let prev = self.slot_at(index - 1);
        let target = match self.node(prev).next {
            Some(target) => target,
            None => unreachable!("interior node {} has no successor", index - 1),
        };

        let node = self.release(target);
        self.node_mut(prev).next = node.next;
        self.size -= 1;
        trace!("remove_at({}): size={}", index, self.size);
        Ok(node.value)
    }

    pub fn front(&self) -> Option<&T> {
        self.head.map(|slot| &self.node(slot).value)
    }

    pub fn back(&self) -> Option<&T> {
        self.tail.map(|slot| &self.node(slot).value)
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.iter().nth(index)
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.free = None;
        self.head = None;
        self.tail = None;
        self.size = 0;
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            slots: &self.slots,
            current: self.head,
            remaining: self.size,
        }
    }

    fn alloc(&mut self, node: Node<T>) -> usize {
        match self.free {
            Some(slot) => {
                self.free = match self.slots[slot] {
                    Slot::Vacant(next_free) => next_free,
                    Slot::Occupied(_) => unreachable!("free list points at occupied slot {}", slot),
                };
                self.slots[slot] = Slot::Occupied(node);
                slot
            }
            None => {
                self.slots.push(Slot::Occupied(node));
                self.slots.len() - 1
            }
        }
    }

    fn release(&mut self, slot: usize) -> Node<T> {
        let vacant = Slot::Vacant(self.free);
        match std::mem::replace(&mut self.slots[slot], vacant) {
            Slot::Occupied(node) => {
                self.free = Some(slot);
                node
            }
            Slot::Vacant(_) => unreachable!("released vacant slot {}", slot),
        }
    }

    fn node(&self, slot: usize) -> &Node<T> {
        match &self.slots[slot] {
            Slot::Occupied(node) => node,
            Slot::Vacant(_) => unreachable!("link to vacant slot {}", slot),
        }
    }

    fn node_mut(&mut self, slot: usize) -> &mut Node<T> {
        match &mut self.slots[slot] {
            Slot::Occupied(node) => node,
            Slot::Vacant(_) => unreachable!("link to vacant slot {}", slot),
        }
    }

    /// Slot holding the element at `index`. Caller guarantees `index < size`.
    fn slot_at(&self, index: usize) -> usize {
        let mut current = self.head;
        for _ in 0..index {
            current = current.and_then(|slot| self.node(slot).next);
        }

        match current {
            Some(slot) => slot,
            None => unreachable!("position {} past end of list of size {}", index, self.size),
        }
    }

    fn out_of_range(&self, index: usize) -> ListError {
        debug!("index {} rejected, size={}", index, self.size);
        ListError::IndexOutOfRange {
            index,
            size: self.size,
        }
    }

    fn empty(&self) -> ListError {
        debug!("removal from empty list rejected");
        ListError::Empty
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Position of the first element equal to `value`.
    pub fn find(&self, value: &T) -> Option<usize> {
        self.iter().position(|item| item == value)
    }

    /// Unlinks the first element equal to `value`. Later duplicates stay.
    pub fn remove(&mut self, value: &T) -> bool {
        let mut prev: Option<usize> = None;
        let mut current = self.head;

        while let Some(slot) = current {
            if self.node(slot).value == *value {
                break;
            }
            prev = Some(slot);
            current = self.node(slot).next;
        }

        let Some(target) = current else {
            return false;
        };

        let Some(prev) = prev else {
            return self.pop_front().is_ok();
        };

        let node = self.release(target);
        self.node_mut(prev).next = node.next;
        if self.tail == Some(target) {
            self.tail = Some(prev);
        }

        self.size -= 1;
        trace!("remove: size={}", self.size);
        true
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "]")
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

pub struct Iter<'a, T> {
    slots: &'a [Slot<T>],
    current: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let slot = self.current?;
        match &self.slots[slot] {
            Slot::Occupied(node) => {
                self.current = node.next;
                self.remaining -= 1;
                Some(&node.value)
            }
            Slot::Vacant(_) => unreachable!("link to vacant slot {}", slot),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

pub struct IntoIter<T> {
    list: LinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.size, Some(self.list.size))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
