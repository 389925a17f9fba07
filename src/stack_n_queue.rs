use crate::guard::Guard;
use crate::list::{IntoIter, List};
use std::cell::UnsafeCell;
use std::fmt;

/// A linked container that can be used as a stack and/or a queue
///
/// Both views share one chain of nodes:
/// - stack view: [`push`](Self::push) / [`pop`](Self::pop) / [`peek`](Self::peek), all at the front
/// - queue view: [`queue`](Self::queue) appends at the back, [`pop`](Self::pop) takes from the front
///
/// [`dequeue`](Self::dequeue) removes from the *back*, the same end `queue` inserts into,
/// so `queue` followed by `dequeue` behaves like a stack. Use `pop` to drain in FIFO order.
///
/// When constructed with `thread_safe = true`, every operation runs under a single lock
/// and the container can be shared across threads (e.g. behind an `Arc`). Otherwise no
/// lock exists and the caller must not use the container from two threads at once;
/// overlapping calls panic instead of corrupting the chain.
pub struct StackNQueue<T> {
    list: UnsafeCell<List<T>>,
    guard: Guard,
}

// Every access to `list` goes through `guard.acquire()`, which grants exclusive access
// for the duration of the call in both modes.
unsafe impl<T: Send> Sync for StackNQueue<T> {}

impl<T> StackNQueue<T> {
    /// Creates a new empty container
    /// `thread_safe` decides whether operations are serialized by a lock
    pub fn new(thread_safe: bool) -> Self {
        StackNQueue {
            list: UnsafeCell::new(List::new()),
            guard: Guard::new(thread_safe),
        }
    }

    /// Returns true if this container was built in thread-safe mode
    pub fn is_thread_safe(&self) -> bool {
        self.guard.is_locked()
    }

    /// Runs `f` with exclusive access to the chain
    fn with_list<R>(&self, f: impl FnOnce(&mut List<T>) -> R) -> R {
        let _access = self.guard.acquire();
        // SAFETY: `_access` is the only live grant to `list` until it drops at the end
        // of this scope, and no reference into `list` escapes `f`.
        let list = unsafe { &mut *self.list.get() };
        f(list)
    }

    /// Returns the number of elements in the container
    pub fn len(&self) -> usize {
        self.with_list(|list| list.len())
    }

    /// Inserts the value at the front
    pub fn push(&self, item: T) {
        self.with_list(|list| list.push_front(item))
    }

    /// Removes and returns the value at the front
    pub fn pop(&self) -> Option<T> {
        self.with_list(|list| list.pop_front())
    }

    /// Adds an item to the back
    /// Draining with [`pop`](Self::pop) afterwards yields FIFO order.
    pub fn queue(&self, item: T) {
        self.with_list(|list| list.push_back(item))
    }

    /// Removes and returns the last item, the one most recently [`queue`](Self::queue)d
    ///
    /// Note this is not the conventional queue removal: it takes from the same end
    /// `queue` inserts into, so repeated calls return queued items in reverse order.
    pub fn dequeue(&self) -> Option<T> {
        self.with_list(|list| list.pop_back())
    }

    /// Returns a clone of the value at the front without removing it
    pub fn peek(&self) -> Option<T>
    where
        T: Clone,
    {
        self.peek_with(T::clone)
    }

    /// Calls `f` on the value at the front without removing it
    /// `f` runs while the container is held, so it must not call back into it.
    pub fn peek_with<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        self.with_list(|list| list.front().map(f))
    }

    /// Removes every element
    ///
    /// The chain is detached in constant time while the container is held; the
    /// detached nodes are released afterwards, outside the critical section.
    pub fn empty(&self) {
        let detached = self.with_list(List::take);
        drop(detached);
    }

    /// Returns true if the container holds no elements
    pub fn is_empty(&self) -> bool {
        self.with_list(|list| list.is_empty())
    }
}

impl<T> Default for StackNQueue<T> {
    fn default() -> Self {
        Self::new(false)
    }
}

impl<T> fmt::Debug for StackNQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StackNQueue")
            .field("len", &self.len())
            .field("thread_safe", &self.is_thread_safe())
            .finish()
    }
}

impl<T> IntoIterator for StackNQueue<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Consumes the container, yielding values front to back
    fn into_iter(self) -> Self::IntoIter {
        self.list.into_inner().into_iter()
    }
}
