use std::{
    collections::VecDeque,
    mem,
    sync::{Arc, Mutex},
};

/// An unbounded concurrent FIFO queue decoupling the ingestion thread from
/// the apply thread.
///
/// Producers only ever `enqueue`; the single consumer `drain`s to empty once
/// per tick. `reset` discards the backlog, which is the intended disable
/// semantics: a producer racing a reset may lose its item, and that is
/// accepted as benign because disable means "discard anything unprocessed".
pub struct RecordQueue<T> {
    inner: Arc<Mutex<VecDeque<T>>>,
}

// Manual impl so T: Clone is not required
impl<T> Clone for RecordQueue<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T> Default for RecordQueue<T> {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(VecDeque::new())),
        }
    }
}

impl<T> RecordQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Never blocks beyond the short critical section, never fails
    pub fn enqueue(&self, item: T) {
        if let Ok(mut queue) = self.inner.lock() {
            queue.push_back(item);
        }
    }

    /// Non-blocking single dequeue, safe to call from a different thread
    /// than `enqueue`
    pub fn try_dequeue(&self) -> Option<T> {
        match self.inner.lock() {
            Ok(mut queue) => queue.pop_front(),
            Err(_) => None,
        }
    }

    /// Takes the whole backlog in one swap, preserving FIFO order. Items
    /// enqueued after the swap wait for the next drain.
    pub fn drain(&self) -> VecDeque<T> {
        match self.inner.lock() {
            Ok(mut queue) => mem::take(&mut *queue),
            Err(_) => VecDeque::new(),
        }
    }

    /// Discards the backlog
    pub fn reset(&self) {
        if let Ok(mut queue) = self.inner.lock() {
            queue.clear();
        }
    }

    pub fn len(&self) -> usize {
        match self.inner.lock() {
            Ok(queue) => queue.len(),
            Err(_) => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
