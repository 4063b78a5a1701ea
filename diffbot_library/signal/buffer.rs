//! Fixed-capacity ring buffer for recent samples

/// A fixed-capacity circular buffer holding the most recent samples
///
/// Pushing into a full buffer overwrites the oldest element. Logical index 0
/// is always the oldest sample still held.
#[derive(Debug, Clone)]
pub struct CircularBuffer<T> {
    /// Ring buffer storage
    data: Vec<T>,
    /// Maximum capacity
    capacity: usize,
    /// Index of the oldest element once the buffer has wrapped
    head: usize,
}

impl<T> CircularBuffer<T> {
    /// Create a new circular buffer with the given capacity
    pub fn new(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            capacity,
            head: 0,
        }
    }

    /// Push a new element into the buffer
    ///
    /// If the buffer is full, the oldest element is overwritten and returned.
    pub fn push(&mut self, item: T) -> Option<T> {
        if self.capacity == 0 {
            return Some(item);
        }

        if self.data.len() < self.capacity {
            self.data.push(item);
            None
        } else {
            let evicted = std::mem::replace(&mut self.data[self.head], item);
            self.head = (self.head + 1) % self.capacity;
            Some(evicted)
        }
    }

    /// Get the number of elements in the buffer
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the buffer is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Check if the buffer is full
    pub fn is_full(&self) -> bool {
        self.data.len() >= self.capacity
    }

    /// Get the capacity of the buffer
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Clear all elements from the buffer
    pub fn clear(&mut self) {
        self.data.clear();
        self.head = 0;
    }

    /// Get element at logical index (0 = oldest, len-1 = newest)
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.data.len() {
            return None;
        }
        self.data.get((self.head + index) % self.data.len())
    }

    /// Get the oldest element
    pub fn get_oldest(&self) -> Option<&T> {
        self.get(0)
    }

    /// Get the newest element
    pub fn get_newest(&self) -> Option<&T> {
        self.len().checked_sub(1).and_then(|last| self.get(last))
    }

    /// Iterate over elements from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        let (newer, older) = self.data.split_at(self.head);
        older.iter().chain(newer.iter())
    }
}
