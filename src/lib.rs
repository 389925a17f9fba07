//! A doubly linked container usable as a stack and/or a queue.
//!
//! ```
//! use stacknqueue::StackNQueue;
//!
//! let q = StackNQueue::new(false);
//! q.push(1);
//! q.push(2);
//! assert_eq!(q.pop(), Some(2));
//!
//! q.queue(3);
//! q.queue(4);
//! assert_eq!(q.pop(), Some(1));
//! assert_eq!(q.pop(), Some(3));
//! assert_eq!(q.dequeue(), Some(4));
//! assert!(q.is_empty());
//! ```

mod guard;
pub mod list;
pub mod stack_n_queue;

pub use stack_n_queue::StackNQueue;
