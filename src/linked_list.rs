use std::error::Error;
use std::fmt;
use std::fmt::Display;
use std::option::Option;

/// A single storage cell: one value plus exclusive ownership of the rest of
/// the chain. The `Box` makes suffix sharing and cycles unrepresentable.
#[derive(Debug)]
struct Node<T> {
    value: T,
    next: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    fn new(value: T, next: Option<Box<Node<T>>>) -> Node<T> {
        Node { value, next }
    }
}

impl<T: Clone> Clone for Node<T> {
    fn clone(&self) -> Self {
        Node::new(self.value.clone(), self.next.clone())
    }
}

/// Returned by `get_item` and `insert` when the requested position is outside
/// the valid bounds for the operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfRange {
    pub index: usize,
    pub size: usize,
}

impl fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "index {} out of range for list of size {}",
            self.index, self.size
        )
    }
}

impl Error for OutOfRange {}

/// A singly linked list owning its chain of nodes, implementing the
/// UnorderedList ADT: front insertion, length, membership search, equality,
/// indexed read and indexed insertion.
#[derive(Debug)]
pub struct LinkedList<T> {
    head: Option<Box<Node<T>>>,
}

impl<T> LinkedList<T> {
    pub fn new() -> LinkedList<T> {
        LinkedList { head: None }
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Adds a new node containing `value` to the front of the list. O(1).
    pub fn add(&mut self, value: T) {
        let new_node: Box<Node<T>> = Box::new(Node::new(value, self.head.take()));
        self.head = Some(new_node);
    }

    /// Returns the length of the list by walking the chain. O(n).
    pub fn size(&self) -> usize {
        self.iter().count()
    }

    pub fn iter(&self) -> Iter<T> {
        Iter {
            current: &self.head,
        }
    }

    /// Returns a reference to the value at position `index` in this list, or
    /// `OutOfRange` if `index >= size()`.
    pub fn get_item(&self, index: usize) -> Result<&T, OutOfRange> {
        match self.iter().nth(index) {
            Some(value) => Ok(value),
            None => Err(OutOfRange {
                index,
                size: self.size(),
            }),
        }
    }

    /// Inserts `value` so that it becomes the element at position `index`,
    /// shifting later elements back by one. Inserting at `size()` appends.
    ///
    /// The bounds check happens before any relinking, so the list is left
    /// unchanged on `Err`.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), OutOfRange> {
        let size = self.size();
        if index > size {
            return Err(OutOfRange { index, size });
        }
        if index == 0 {
            self.add(value);
            return Ok(());
        }

        // Walk to the node preceding the target position and relink.
        let mut current = self.head.as_mut();
        for _ in 0..index - 1 {
            current = current.and_then(|node| node.next.as_mut());
        }
        match current {
            Some(node) => {
                node.next = Some(Box::new(Node::new(value, node.next.take())));
                Ok(())
            }
            None => Err(OutOfRange { index, size }),
        }
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Returns true if `value` is located anywhere in this list. O(n).
    pub fn search(&self, value: &T) -> bool {
        for candidate in self {
            if candidate == value {
                return true;
            }
        }
        false
    }
}

impl<T: Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut result = String::new();
        for value in self {
            if result.is_empty() {
                result = format!("{}", value);
            } else {
                result = format!("{}, {}", result, value);
            }
        }
        write!(f, "[{}]", result)
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        // Lock-step traversal; unequal lengths show up as one side ending
        // before the other.
        let mut ours = self.iter();
        let mut theirs = other.iter();
        loop {
            match (ours.next(), theirs.next()) {
                (Some(a), Some(b)) => {
                    if a != b {
                        return false;
                    }
                }
                (None, None) => return true,
                _ => return false,
            }
        }
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        let mut list = LinkedList::new();
        list.head = self.head.clone();
        list
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        // Unlink iteratively so dropping a long list cannot overflow the
        // stack through recursive Box drops.
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
    }
}

pub struct Iter<'a, T> {
    current: &'a Option<Box<Node<T>>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        match self.current {
            Some(node) => {
                self.current = &node.next;
                Some(&node.value)
            }
            None => None,
        }
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        Iter {
            current: &self.head,
        }
    }
}
