use std::fmt;
use std::iter::FusedIterator;

use tracing::debug;

use crate::error::ListError;
use crate::value::NodeValue;

type Link<T> = Option<Box<Node<T>>>;

/// A single element of the chain. Owned exclusively by its predecessor,
/// or by the list head for the first node.
struct Node<T> {
    value: T,
    next: Link<T>,
}

/// A singly linked list of values in insertion order.
///
/// The list is the only thing that can touch node links, so the chain is
/// always finite and acyclic.
pub struct LinkedList<T> {
    head: Link<T>,
    len: usize,
}

impl<T> LinkedList<T> {
    /// Create an empty list.
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Number of nodes in the chain.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the list has no nodes.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// The value stored in the first node, if any.
    pub fn head(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.value)
    }

    /// Iterate over every value from head to tail.
    ///
    /// The iterator borrows the list, so it can be run to completion any
    /// number of times but never alongside a mutation.
    pub fn values(&self) -> Values<'_, T> {
        Values {
            next: self.head.as_deref(),
            remaining: self.len,
        }
    }

    /// Drop every node.
    pub fn clear(&mut self) {
        // Unlink one node at a time; letting the head drop would recurse
        // through the whole chain.
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
        if self.len > 0 {
            debug!(dropped = self.len, "cleared list");
        }
        self.len = 0;
    }

    /// Link a value after the current tail without validating it.
    fn link_back(&mut self, value: T) {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        *cursor = Some(Box::new(Node { value, next: None }));
        self.len += 1;
    }
}

impl<T: NodeValue> LinkedList<T> {
    /// Append a value after the current tail.
    ///
    /// Blank values are refused and leave the list untouched.
    pub fn append(&mut self, value: T) -> Result<(), ListError> {
        if value.is_blank() {
            return Err(ListError::BlankValue);
        }
        self.link_back(value);
        debug!(len = self.len, "appended node");
        Ok(())
    }

    /// Remove the first node whose value equals `value` and return its value.
    ///
    /// Returns `Ok(None)` when nothing matches. Later duplicates are kept.
    pub fn delete(&mut self, value: &T) -> Result<Option<T>, ListError> {
        if value.is_blank() {
            return Err(ListError::BlankValue);
        }

        let mut cursor = &mut self.head;
        while cursor.as_ref().is_some_and(|node| node.value != *value) {
            let Some(node) = cursor else { break };
            cursor = &mut node.next;
        }

        let Some(node) = cursor.take() else {
            return Ok(None);
        };
        let Node { value: removed, next } = *node;
        *cursor = next;
        self.len -= 1;
        debug!(len = self.len, "deleted node");
        Ok(Some(removed))
    }

    /// Whether any node holds `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.values().any(|v| v == value)
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        let mut copy = Self::new();
        for value in self.values() {
            copy.link_back(value.clone());
        }
        copy
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.values().eq(other.values())
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.values()).finish()
    }
}

/// Appends every item, skipping blank ones the same way [`LinkedList::append`] does.
impl<T: NodeValue> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            if self.append(value).is_err() {
                debug!("skipped blank value");
            }
        }
    }
}

impl<T: NodeValue> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Values<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values()
    }
}

/// Borrowing iterator over a list's values, head to tail.
pub struct Values<'a, T> {
    next: Option<&'a Node<T>>,
    remaining: usize,
}

impl<T> Clone for Values<'_, T> {
    fn clone(&self) -> Self {
        Self {
            next: self.next,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for Values<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_deref();
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Values<'_, T> {}

impl<T> FusedIterator for Values<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_of(values: &[&str]) -> LinkedList<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn collect(list: &LinkedList<String>) -> Vec<&str> {
        list.values().map(String::as_str).collect()
    }

    #[test]
    fn test_append_preserves_order() {
        let mut list = LinkedList::new();
        list.append("0".to_string()).unwrap();
        list.append("1".to_string()).unwrap();
        list.append("2".to_string()).unwrap();
        assert_eq!(collect(&list), ["0", "1", "2"]);
        assert_eq!(list.len(), 3);
        assert_eq!(list.head().map(String::as_str), Some("0"));
    }

    #[test]
    fn test_delete_removes_first_occurrence_only() {
        let mut list = list_of(&["a", "b", "a"]);
        let removed = list.delete(&"a".to_string()).unwrap();
        assert_eq!(removed.as_deref(), Some("a"));
        assert_eq!(collect(&list), ["b", "a"]);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_delete_head_updates_head() {
        let mut list = list_of(&["x", "y"]);
        list.delete(&"x".to_string()).unwrap();
        assert_eq!(collect(&list), ["y"]);
        list.append("z".to_string()).unwrap();
        assert_eq!(collect(&list), ["y", "z"]);
    }

    #[test]
    fn test_delete_tail_then_append() {
        let mut list = list_of(&["a", "b", "c"]);
        list.delete(&"c".to_string()).unwrap();
        list.append("d".to_string()).unwrap();
        assert_eq!(collect(&list), ["a", "b", "d"]);
    }

    #[test]
    fn test_delete_missing_value_is_noop() {
        let mut list = list_of(&["a"]);
        assert_eq!(list.delete(&"q".to_string()), Ok(None));
        assert_eq!(collect(&list), ["a"]);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_delete_on_empty_list() {
        let mut list: LinkedList<String> = LinkedList::new();
        assert_eq!(list.delete(&"a".to_string()), Ok(None));
        assert!(list.is_empty());
    }

    #[test]
    fn test_clear_empties_list() {
        let mut list = list_of(&["a", "b", "c"]);
        list.clear();
        assert_eq!(list.values().count(), 0);
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        list.append("m".to_string()).unwrap();
        assert_eq!(collect(&list), ["m"]);
    }

    #[test]
    fn test_blank_values_are_rejected() {
        let mut list = list_of(&["a"]);
        assert_eq!(list.append(String::new()), Err(ListError::BlankValue));
        assert_eq!(list.append("   ".to_string()), Err(ListError::BlankValue));
        assert_eq!(list.delete(&String::new()), Err(ListError::BlankValue));
        assert_eq!(collect(&list), ["a"]);
    }

    #[test]
    fn test_missing_option_is_rejected() {
        let mut list: LinkedList<Option<String>> = LinkedList::new();
        list.append(Some("a".to_string())).unwrap();
        assert_eq!(list.append(None), Err(ListError::BlankValue));
        assert_eq!(list.delete(&None), Err(ListError::BlankValue));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_zero_is_a_value() {
        let mut list = LinkedList::new();
        for i in 0..5 {
            list.append(i).unwrap();
        }
        assert_eq!(list.values().copied().collect::<Vec<_>>(), [0, 1, 2, 3, 4]);
        assert_eq!(list.delete(&0), Ok(Some(0)));
        assert_eq!(list.head(), Some(&1));
    }

    #[test]
    fn test_values_is_restartable() {
        let list = list_of(&["a", "b"]);
        let first: Vec<_> = list.values().collect();
        let second: Vec<_> = list.values().collect();
        assert_eq!(first, second);

        let iter = list.values();
        assert_eq!(iter.len(), 2);
        assert_eq!(iter.clone().count(), 2);
        assert_eq!(iter.count(), 2);
    }

    #[test]
    fn test_collect_skips_blank_items() {
        let list = list_of(&["a", "", "b", " "]);
        assert_eq!(collect(&list), ["a", "b"]);
    }

    #[test]
    fn test_contains_and_eq() {
        let list = list_of(&["a", "b"]);
        assert!(list.contains(&"b".to_string()));
        assert!(!list.contains(&"c".to_string()));
        assert_eq!(list.clone(), list);
        assert_ne!(list, list_of(&["a"]));
        assert_eq!(format!("{list:?}"), r#"["a", "b"]"#);
    }

    #[test]
    fn test_long_list_drops_without_recursing() {
        let mut list = LinkedList::new();
        // Build from the front so the test stays linear.
        for i in 0..200_000u32 {
            let next = list.head.take();
            list.head = Some(Box::new(Node { value: i, next }));
            list.len += 1;
        }
        assert_eq!(list.values().count(), 200_000);
        drop(list);
    }
}
