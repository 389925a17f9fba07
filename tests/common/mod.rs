#![allow(dead_code)]

use stacknqueue::StackNQueue;

/// Queues `0..size` onto the container
pub fn fill(q: &StackNQueue<usize>, size: usize) {
    for i in 0..size {
        q.queue(i);
    }
}

/// Pops until the container reports empty, returning how many values came out
pub fn drain(q: &StackNQueue<usize>) -> usize {
    let mut drained = 0;
    while !q.is_empty() {
        if q.pop().is_some() {
            drained += 1;
        }
    }
    drained
}
