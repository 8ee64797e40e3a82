//! Recency list backing the LRU cache
//!
//! A doubly-linked list stored in a slab: nodes live in a `Vec` and link to
//! each other by slot index, so there is no shared ownership and no unsafe
//! code. Vacated slots go on a free list and are reused by the next insert.

/// Node in the recency list
struct Node<T> {
    key: String,
    value: T,
    prev: Option<usize>,
    next: Option<usize>,
}

/// Entries ordered by last touch, head = most recent, tail = least recent
pub(crate) struct RecencyList<T> {
    nodes: Vec<Option<Node<T>>>,
    head: Option<usize>,
    tail: Option<usize>,
    free_list: Vec<usize>,
    len: usize,
}

impl<T> RecencyList<T> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            head: None,
            tail: None,
            free_list: Vec::new(),
            len: 0,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Slot of the least recently used node
    pub(crate) fn back(&self) -> Option<usize> {
        self.tail
    }

    pub(crate) fn entry(&self, idx: usize) -> Option<(&str, &T)> {
        self.nodes
            .get(idx)?
            .as_ref()
            .map(|node| (node.key.as_str(), &node.value))
    }

    pub(crate) fn value(&self, idx: usize) -> Option<&T> {
        self.entry(idx).map(|(_, value)| value)
    }

    pub(crate) fn value_mut(&mut self, idx: usize) -> Option<&mut T> {
        self.nodes
            .get_mut(idx)?
            .as_mut()
            .map(|node| &mut node.value)
    }

    /// Replace the value stored at `idx`, returning the old one
    pub(crate) fn replace(&mut self, idx: usize, value: T) -> Option<T> {
        self.value_mut(idx).map(|slot| std::mem::replace(slot, value))
    }

    /// Link a new node at the head and return its slot
    pub(crate) fn push_front(&mut self, key: String, value: T) -> usize {
        let idx = self.alloc_node();
        self.nodes[idx] = Some(Node {
            key,
            value,
            prev: None,
            next: self.head,
        });

        if let Some(head_idx) = self.head {
            if let Some(head) = &mut self.nodes[head_idx] {
                head.prev = Some(idx);
            }
        }

        self.head = Some(idx);
        if self.tail.is_none() {
            self.tail = Some(idx);
        }

        self.len += 1;
        idx
    }

    pub(crate) fn move_to_front(&mut self, idx: usize) {
        if self.head == Some(idx) {
            return;
        }

        self.unlink(idx);

        if let Some(node) = &mut self.nodes[idx] {
            node.prev = None;
            node.next = self.head;
        }

        if let Some(head_idx) = self.head {
            if let Some(head) = &mut self.nodes[head_idx] {
                head.prev = Some(idx);
            }
        }

        self.head = Some(idx);
    }

    /// Unlink the node at `idx` and hand back its key and value
    pub(crate) fn remove(&mut self, idx: usize) -> Option<(String, T)> {
        self.nodes.get(idx)?.as_ref()?;

        self.unlink(idx);
        let node = self.nodes[idx].take()?;
        self.free_list.push(idx);
        self.len -= 1;

        Some((node.key, node.value))
    }

    pub(crate) fn pop_back(&mut self) -> Option<(String, T)> {
        self.tail.and_then(|idx| self.remove(idx))
    }

    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.free_list.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Walk from most to least recently used
    pub(crate) fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cursor: self.head,
            remaining: self.len,
        }
    }

    fn unlink(&mut self, idx: usize) {
        let (prev, next) = match &self.nodes[idx] {
            Some(node) => (node.prev, node.next),
            None => return,
        };

        match prev {
            Some(prev_idx) => {
                if let Some(prev_node) = &mut self.nodes[prev_idx] {
                    prev_node.next = next;
                }
            }
            None => self.head = next,
        }

        match next {
            Some(next_idx) => {
                if let Some(next_node) = &mut self.nodes[next_idx] {
                    next_node.prev = prev;
                }
            }
            None => self.tail = prev,
        }
    }

    fn alloc_node(&mut self) -> usize {
        if let Some(idx) = self.free_list.pop() {
            idx
        } else {
            self.nodes.push(None);
            self.nodes.len() - 1
        }
    }
}

/// Iterator over `(key, value)` pairs, most recently used first
pub struct Iter<'a, T> {
    list: &'a RecencyList<T>,
    cursor: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (&'a str, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.cursor?;
        let node = self.list.nodes[idx].as_ref()?;
        self.cursor = node.next;
        self.remaining -= 1;
        Some((node.key.as_str(), &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
