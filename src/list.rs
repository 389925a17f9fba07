use std::marker::PhantomData;
use std::ptr;

/// A node in the doubly linked list
/// `next` owns the following node, `prev` only points back at the previous one
struct Node<T> {
    data: T,
    prev: *mut Node<T>,
    next: *mut Node<T>,
}

impl<T> Node<T> {
    fn new(data: T) -> Box<Self> {
        Box::new(Node {
            data,
            prev: ptr::null_mut(),
            next: ptr::null_mut(),
        })
    }
}

/// A doubly linked list implementation using unsafe raw pointers
pub struct List<T> {
    head: *mut Node<T>,
    tail: *mut Node<T>,
    length: usize,
}

// The list exclusively owns its nodes, so it can move between threads
// whenever the payload can.
unsafe impl<T: Send> Send for List<T> {}

impl<T> List<T> {
    /// Creates a new empty doubly linked list
    pub fn new() -> Self {
        List {
            head: ptr::null_mut(),
            tail: ptr::null_mut(),
            length: 0,
        }
    }

    /// Returns the length of the list
    pub fn len(&self) -> usize {
        self.length
    }

    /// Returns true if the list is empty
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Adds an element to the front of the list
    pub fn push_front(&mut self, data: T) {
        let new_node = Box::into_raw(Node::new(data));

        unsafe {
            if self.head.is_null() {
                self.tail = new_node;
            } else {
                (*self.head).prev = new_node;
                (*new_node).next = self.head;
            }
            self.head = new_node;
        }

        self.length += 1;
    }

    /// Adds an element to the back of the list
    pub fn push_back(&mut self, data: T) {
        let new_node = Box::into_raw(Node::new(data));

        unsafe {
            if self.tail.is_null() {
                self.head = new_node;
            } else {
                (*self.tail).next = new_node;
                (*new_node).prev = self.tail;
            }
            self.tail = new_node;
        }

        self.length += 1;
    }

    /// Removes and returns the element from the front of the list
    pub fn pop_front(&mut self) -> Option<T> {
        if self.head.is_null() {
            return None;
        }

        unsafe {
            let old_head = self.head;
            self.head = (*old_head).next;

            if self.head.is_null() {
                // This was the only node
                self.tail = ptr::null_mut();
            } else {
                (*self.head).prev = ptr::null_mut();
            }

            self.length -= 1;
            let boxed_node = Box::from_raw(old_head);
            Some(boxed_node.data)
        }
    }

    /// Removes and returns the element from the back of the list
    pub fn pop_back(&mut self) -> Option<T> {
        if self.tail.is_null() {
            return None;
        }

        unsafe {
            let old_tail = self.tail;
            self.tail = (*old_tail).prev;

            if self.tail.is_null() {
                // This was the only node
                self.head = ptr::null_mut();
            } else {
                (*self.tail).next = ptr::null_mut();
            }

            self.length -= 1;
            let boxed_node = Box::from_raw(old_tail);
            Some(boxed_node.data)
        }
    }

    /// Returns a reference to the front element without removing it
    pub fn front(&self) -> Option<&T> {
        if self.head.is_null() {
            None
        } else {
            unsafe { Some(&(*self.head).data) }
        }
    }

    /// Returns a reference to the back element without removing it
    pub fn back(&self) -> Option<&T> {
        if self.tail.is_null() {
            None
        } else {
            unsafe { Some(&(*self.tail).data) }
        }
    }

    /// Detaches the whole chain in O(1), leaving this list empty
    /// The nodes are released when the returned list is dropped
    pub fn take(&mut self) -> List<T> {
        std::mem::take(self)
    }

    /// Returns an iterator over the list, front to back
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            current: self.head,
            _marker: PhantomData,
        }
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        while self.pop_front().is_some() {}
    }
}

/// An iterator over the doubly linked list that consumes the list
pub struct IntoIter<T>(List<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len(), Some(self.0.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

/// An iterator over the doubly linked list that borrows the list
pub struct Iter<'a, T> {
    current: *mut Node<T>,
    _marker: PhantomData<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current.is_null() {
            return None;
        }

        unsafe {
            let data = &(*self.current).data;
            self.current = (*self.current).next;
            Some(data)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Walks the chain both ways and checks every link invariant
    fn assert_links<T>(list: &List<T>) {
        if list.is_empty() {
            assert!(list.head.is_null());
            assert!(list.tail.is_null());
            return;
        }

        unsafe {
            assert!((*list.head).prev.is_null());
            assert!((*list.tail).next.is_null());
            if list.len() == 1 {
                assert_eq!(list.head, list.tail);
            }

            let mut forward = 0;
            let mut node = list.head;
            while !node.is_null() {
                let next = (*node).next;
                if !next.is_null() {
                    assert_eq!((*next).prev, node);
                }
                forward += 1;
                node = next;
            }

            let mut backward = 0;
            let mut node = list.tail;
            while !node.is_null() {
                backward += 1;
                node = (*node).prev;
            }

            assert_eq!(forward, list.len());
            assert_eq!(backward, list.len());
        }
    }

    #[test]
    fn test_new_and_default() {
        let list: List<i32> = List::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_links(&list);

        let list: List<i32> = List::default();
        assert!(list.is_empty());
    }

    #[test]
    fn test_push_front() {
        let mut list = List::new();
        list.push_front(1);
        list.push_front(2);
        list.push_front(3);

        assert_eq!(list.len(), 3);
        assert_eq!(list.front(), Some(&3));
        assert_eq!(list.back(), Some(&1));
        assert_links(&list);
    }

    #[test]
    fn test_push_back() {
        let mut list = List::new();
        list.push_back(1);
        list.push_back(2);
        list.push_back(3);

        assert_eq!(list.len(), 3);
        assert_eq!(list.front(), Some(&1));
        assert_eq!(list.back(), Some(&3));
        assert_links(&list);
    }

    #[test]
    fn test_pop_back_clears_new_tail() {
        let mut list = List::new();
        list.push_back(1);
        list.push_back(2);
        list.push_back(3);

        assert_eq!(list.pop_back(), Some(3));
        assert_links(&list);
        assert_eq!(list.pop_back(), Some(2));
        assert_links(&list);
        assert_eq!(list.pop_back(), Some(1));
        assert_eq!(list.pop_back(), None);
        assert_links(&list);
    }

    #[test]
    fn test_mixed_operations() {
        let mut list = List::new();
        list.push_front(1);
        list.push_back(2);
        list.push_front(0);
        list.push_back(3);
        assert_links(&list);

        assert_eq!(list.iter().collect::<Vec<_>>(), vec![&0, &1, &2, &3]);
        assert_eq!(list.pop_front(), Some(0));
        assert_eq!(list.pop_back(), Some(3));
        assert_links(&list);
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.pop_back(), Some(2));
        assert_links(&list);
    }

    #[test]
    fn test_take() {
        let mut list = List::new();
        for i in 0..10 {
            list.push_back(i);
        }

        let detached = list.take();
        assert!(list.is_empty());
        assert_links(&list);
        assert_eq!(detached.len(), 10);
        assert_eq!(detached.into_iter().collect::<Vec<_>>(), (0..10).collect::<Vec<_>>());

        // The emptied list is still usable
        list.push_front(42);
        assert_eq!(list.pop_back(), Some(42));
    }

    #[test]
    fn test_into_iter_both_ends() {
        let mut list = List::new();
        list.push_back(1);
        list.push_back(2);
        list.push_back(3);

        let mut iter = list.into_iter();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.next_back(), Some(3));
        assert_eq!(iter.next(), Some(2));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_drop_releases_payloads() {
        use std::rc::Rc;

        let tracker = Rc::new(());
        let mut list = List::new();
        for _ in 0..100 {
            list.push_back(Rc::clone(&tracker));
        }
        assert_eq!(Rc::strong_count(&tracker), 101);

        drop(list);
        assert_eq!(Rc::strong_count(&tracker), 1);
    }
}
