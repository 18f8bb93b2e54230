use std::borrow::Borrow;
use std::cmp::{self, Ordering};
use std::fmt;
use std::mem;
use std::ops::ControlFlow;

use tracing::{debug, trace};

pub mod dump;
pub mod iter;

use dump::{Dump, Pretty};
use iter::Iter;

/// An ordered map from keys to values, kept balanced as an AVL tree.
///
/// ```
/// use avltree::Tree;
/// let mut tree = Tree::new();
/// tree.insert(7, "golang");
/// tree.insert(7, "golf");
/// assert_eq!(tree.get(&7), Some(&"golf"));
/// assert_eq!(tree.len(), 1);
/// ```
#[derive(Clone)]
pub struct Tree<K, V> {
    root: Link<K, V>,
    num_nodes: usize,
}

type Link<K, V> = Option<Box<Node<K, V>>>;

#[derive(Clone)]
struct Node<K, V> {
    key: K,
    value: V,
    left: Link<K, V>,
    right: Link<K, V>,
    height: usize,
}

impl<K, V> Tree<K, V> {
    /// Creates an empty tree.
    /// No memory is allocated until the first item is inserted.
    pub fn new() -> Self {
        Self {
            root: None,
            num_nodes: 0,
        }
    }

    /// Returns true if the tree contains no elements.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the number of elements in the tree.
    pub fn len(&self) -> usize {
        self.num_nodes
    }

    /// Returns the height of the tree: 0 when empty, 1 for a single node.
    pub fn height(&self) -> usize {
        Node::height(&self.root)
    }

    /// Clears the tree, deallocating all memory.
    pub fn clear(&mut self) {
        debug!(num_nodes = self.num_nodes, "clearing tree");
        self.root = None;
        self.num_nodes = 0;
    }

    /// Visits every key-value pair in ascending key order.
    pub fn traverse<F>(&self, mut visit: F)
    where
        F: FnMut(&K, &V),
    {
        let _ = self.try_traverse(|key, value| -> ControlFlow<()> {
            visit(key, value);
            ControlFlow::Continue(())
        });
    }

    /// Visits key-value pairs in ascending key order until the visitor breaks.
    /// Returns the break value, or `Continue` if every pair was visited.
    ///
    /// ```
    /// use std::ops::ControlFlow;
    /// use avltree::Tree;
    ///
    /// let tree: Tree<_, _> = (1..=10).map(|key| (key, key * key)).collect();
    /// let found = tree.try_traverse(|key, square| {
    ///     if *square > 20 {
    ///         ControlFlow::Break(*key)
    ///     } else {
    ///         ControlFlow::Continue(())
    ///     }
    /// });
    /// assert_eq!(found, ControlFlow::Break(5));
    /// ```
    pub fn try_traverse<B, F>(&self, mut visit: F) -> ControlFlow<B>
    where
        F: FnMut(&K, &V) -> ControlFlow<B>,
    {
        Node::walk_in_order(&self.root, &mut visit)
    }

    /// Gets an iterator over the entries of the tree, sorted by key.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.root, self.num_nodes)
    }

    /// Gets an iterator over the keys of the tree, in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.iter().map(|(key, _)| key)
    }

    /// Gets an iterator over the values of the tree, in order by key.
    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.iter().map(|(_, value)| value)
    }

    /// Renders the tree in pre-order, one node per line, annotated with
    /// balance and height. Meant for debugging; the format is not stable.
    pub fn dump(&self) -> Dump<'_, K, V> {
        Dump::new(self)
    }

    /// Renders the tree turned 90° anti-clockwise, largest key on top.
    /// The alternate flag (`{:#}`) adds balance and height to every key.
    pub fn pretty(&self) -> Pretty<'_, K, V> {
        Pretty::new(self)
    }
}

impl<K: Ord, V> Tree<K, V> {
    /// Returns a reference to the value corresponding to the key.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(key).map(|node| &node.value)
    }

    /// Returns references to the key-value pair corresponding to the key.
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(key).map(|node| (&node.key, &node.value))
    }

    /// Returns a mutable reference to the value corresponding to the key.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self.root.as_deref_mut();
        while let Some(node) = current {
            match key.cmp(node.key.borrow()) {
                Ordering::Equal => return Some(&mut node.value),
                Ordering::Less => current = node.left.as_deref_mut(),
                Ordering::Greater => current = node.right.as_deref_mut(),
            }
        }
        None
    }

    /// Returns true if the tree contains a value for the given key.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(key).is_some()
    }

    /// Inserts a key-value pair into the tree.
    ///
    /// If the key was already present, its value is replaced in place and the
    /// old value is returned. The shape of the tree does not change in that case.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let (root, previous) = Node::insert_into(self.root.take(), key, value);

        // Root re-check. Every level has already been rebalanced on the way up,
        // so this only fires if that invariant was broken.
        let root = if root.balance().abs() > 1 {
            Node::rebalance(root)
        } else {
            root
        };
        self.root = Some(root);

        if previous.is_none() {
            self.num_nodes += 1;
        }
        previous
    }

    /// Asserts ordering, balance, cached heights and node count of the whole tree.
    #[cfg(any(test, feature = "consistency_check"))]
    pub fn check_consistency(&self) {
        let (height, num_nodes) = Node::check_subtree(&self.root, None, None);
        assert_eq!(height, self.height());
        assert_eq!(num_nodes, self.num_nodes);
    }

    fn find<Q>(&self, key: &Q) -> Option<&Node<K, V>>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match key.cmp(node.key.borrow()) {
                Ordering::Equal => break,
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
            };
        }
        current
    }
}

impl<K, V> Default for Tree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Tree<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for Tree<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord, V> Extend<(K, V)> for Tree<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<'a, K, V> IntoIterator for &'a Tree<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V> Node<K, V> {
    fn create(key: K, value: V) -> Box<Self> {
        Box::new(Node {
            key,
            value,
            left: None,
            right: None,
            height: 1,
        })
    }

    fn height(link: &Link<K, V>) -> usize {
        link.as_ref().map_or(0, |node| node.height)
    }

    /// Height of the right subtree minus height of the left subtree.
    fn balance(&self) -> isize {
        Self::height(&self.right) as isize - Self::height(&self.left) as isize
    }

    fn adjust_height(&mut self) {
        self.height = 1 + cmp::max(Self::height(&self.left), Self::height(&self.right));
    }

    fn rotate_left(mut node: Box<Self>) -> Box<Self> {
        let mut right = match node.right.take() {
            Some(right) => right,
            None => return node,
        };
        node.right = right.left.take();
        node.adjust_height();
        right.left = Some(node);
        right.adjust_height();

        trace!(height = right.height, "rotated left");
        #[cfg(test)]
        rotations::record_left();
        right
    }

    fn rotate_right(mut node: Box<Self>) -> Box<Self> {
        let mut left = match node.left.take() {
            Some(left) => left,
            None => return node,
        };
        node.left = left.right.take();
        node.adjust_height();
        left.right = Some(node);
        left.adjust_height();

        trace!(height = left.height, "rotated right");
        #[cfg(test)]
        rotations::record_right();
        left
    }

    /// Restores the AVL condition at the given node, whose subtrees must already
    /// be balanced and whose balance must lie within -2..=2, which holds after a
    /// single insertion. Returns the (possibly new) root of the subtree.
    fn rebalance(mut node: Box<Self>) -> Box<Self> {
        let balance = node.balance();
        if balance < -1 {
            match node.left.as_ref().map(|left| left.balance()) {
                Some(-1) => {
                    trace!("left-left imbalance");
                    Self::rotate_right(node)
                }
                Some(1) => {
                    trace!("left-right imbalance");
                    node.left = node.left.take().map(Self::rotate_left);
                    Self::rotate_right(node)
                }
                _ => node,
            }
        } else if balance > 1 {
            match node.right.as_ref().map(|right| right.balance()) {
                Some(1) => {
                    trace!("right-right imbalance");
                    Self::rotate_left(node)
                }
                Some(-1) => {
                    trace!("right-left imbalance");
                    node.right = node.right.take().map(Self::rotate_right);
                    Self::rotate_left(node)
                }
                _ => node,
            }
        } else {
            node
        }
    }

    fn walk_in_order<B, F>(link: &Link<K, V>, visit: &mut F) -> ControlFlow<B>
    where
        F: FnMut(&K, &V) -> ControlFlow<B>,
    {
        if let Some(node) = link {
            Self::walk_in_order(&node.left, visit)?;
            visit(&node.key, &node.value)?;
            Self::walk_in_order(&node.right, visit)?;
        }
        ControlFlow::Continue(())
    }
}

impl<K: Ord, V> Node<K, V> {
    /// Inserts into the subtree behind `link` and returns its new root along
    /// with the replaced value, if the key was already present.
    fn insert_into(link: Link<K, V>, key: K, value: V) -> (Box<Self>, Option<V>) {
        match link {
            None => (Self::create(key, value), None),
            Some(node) => Self::insert(node, key, value),
        }
    }

    fn insert(mut node: Box<Self>, key: K, value: V) -> (Box<Self>, Option<V>) {
        match key.cmp(&node.key) {
            Ordering::Equal => {
                let previous = mem::replace(&mut node.value, value);
                return (node, Some(previous));
            }
            Ordering::Less => {
                let (left, previous) = Self::insert_into(node.left.take(), key, value);
                node.left = Some(left);
                if previous.is_some() {
                    return (node, previous);
                }
            }
            Ordering::Greater => {
                let (right, previous) = Self::insert_into(node.right.take(), key, value);
                node.right = Some(right);
                if previous.is_some() {
                    return (node, previous);
                }
            }
        }

        node.adjust_height();
        (Self::rebalance(node), None)
    }

    /// Returns height and number of nodes of the subtree behind `link`.
    #[cfg(any(test, feature = "consistency_check"))]
    fn check_subtree<'a>(
        link: &'a Link<K, V>,
        lower: Option<&'a K>,
        upper: Option<&'a K>,
    ) -> (usize, usize) {
        match link {
            None => (0, 0),
            Some(node) => {
                // Check key order against all ancestors
                if let Some(lower) = lower {
                    assert!(node.key > *lower);
                }
                if let Some(upper) = upper {
                    assert!(node.key < *upper);
                }

                let (left_height, left_nodes) =
                    Self::check_subtree(&node.left, lower, Some(&node.key));
                let (right_height, right_nodes) =
                    Self::check_subtree(&node.right, Some(&node.key), upper);

                // Check height
                assert_eq!(node.height, 1 + cmp::max(left_height, right_height));

                // Check AVL condition (nearly balance)
                assert!(left_height <= right_height + 1);
                assert!(right_height <= left_height + 1);

                (node.height, left_nodes + right_nodes + 1)
            }
        }
    }
}
