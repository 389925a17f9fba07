use parking_lot::{Mutex, MutexGuard};
use std::sync::atomic::{AtomicBool, Ordering};

/// The synchronization applied around every container operation
/// The variant is picked once at construction and never changes
pub(crate) enum Guard {
    /// Thread-safe mode: one lock held for the whole operation
    Locked(Mutex<()>),
    /// Unsynchronized mode: nobody waits, overlapping access is reported
    Unsynchronized(AtomicBool),
}

/// Proof that the caller currently has exclusive access to the container
/// Access ends when the token is dropped
pub(crate) enum Access<'a> {
    Locked(#[allow(dead_code)] MutexGuard<'a, ()>),
    Unsynchronized(&'a AtomicBool),
}

impl Guard {
    pub(crate) fn new(thread_safe: bool) -> Self {
        if thread_safe {
            Guard::Locked(Mutex::new(()))
        } else {
            Guard::Unsynchronized(AtomicBool::new(false))
        }
    }

    pub(crate) fn is_locked(&self) -> bool {
        matches!(self, Guard::Locked(_))
    }

    /// Enters the critical section of one operation
    ///
    /// In thread-safe mode this blocks until the lock is free, with no timeout
    /// and no fairness. In unsynchronized mode it never blocks; a second
    /// caller arriving while another operation is still running panics.
    pub(crate) fn acquire(&self) -> Access<'_> {
        match self {
            Guard::Locked(lock) => Access::Locked(lock.lock()),
            Guard::Unsynchronized(busy) => {
                if busy
                    .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
                    .is_err()
                {
                    panic!("concurrent access to an unsynchronized StackNQueue");
                }
                Access::Unsynchronized(busy)
            }
        }
    }
}

impl Drop for Access<'_> {
    fn drop(&mut self) {
        if let Access::Unsynchronized(busy) = self {
            busy.store(false, Ordering::Release);
        }
    }
}
