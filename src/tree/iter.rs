use std::iter::FusedIterator;

use super::{Link, Node};

/// An iterator over the entries of a tree, sorted by key.
///
/// This `struct` is created by the [`iter`] method on [`Tree`].
///
/// [`Tree`]: struct.Tree.html
/// [`iter`]: struct.Tree.html#method.iter
pub struct Iter<'a, K, V> {
    // Nodes whose left subtree has been visited but which have not been yielded yet.
    stack: Vec<&'a Node<K, V>>,
    remaining: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(super) fn new(root: &'a Link<K, V>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.descend_left(root.as_deref());
        iter
    }

    fn descend_left(&mut self, mut current: Option<&'a Node<K, V>>) {
        while let Some(node) = current {
            self.stack.push(node);
            current = node.left.as_deref();
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.descend_left(node.right.as_deref());
        self.remaining -= 1;
        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::Tree;

    #[test]
    fn test_empty() {
        let tree = Tree::<i32, ()>::new();
        let mut iter = tree.iter();
        assert_eq!(iter.len(), 0);
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_len_counts_down() {
        let tree: Tree<_, _> = (0..10).rev().map(|key| (key, key * 2)).collect();
        let mut iter = tree.iter();
        for expected_len in (0..10).rev() {
            assert!(iter.next().is_some());
            assert_eq!(iter.len(), expected_len);
        }
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_matches_traverse() {
        let tree: Tree<_, _> = [5, 3, 8, 1, 4, 7, 9, 2, 6]
            .into_iter()
            .map(|key| (key, key.to_string()))
            .collect();

        let mut visited = Vec::new();
        tree.traverse(|key, value| visited.push((*key, value.clone())));

        let iterated: Vec<_> = tree.iter().map(|(key, value)| (*key, value.clone())).collect();
        assert_eq!(iterated, visited);

        let keys: Vec<_> = tree.keys().copied().collect();
        assert_eq!(keys, (1..=9).collect::<Vec<_>>());
    }
}
