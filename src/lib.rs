//! An ordered key-value tree implemented as an AVL tree.
//!
//! Every node owns its two subtrees. Insertion recurses down to the new leaf and
//! rebuilds the path on the way back up, rotating wherever a subtree became
//! unbalanced, so the height stays logarithmic in the number of keys.
//!
//! ```
//! use avltree::Tree;
//!
//! let mut tree = Tree::new();
//! tree.insert(2, "two");
//! tree.insert(1, "one");
//! tree.insert(3, "three");
//! assert_eq!(tree.get(&1), Some(&"one"));
//! assert!(tree.get(&4).is_none());
//!
//! let mut values = Vec::new();
//! tree.traverse(|_, value| values.push(*value));
//! assert_eq!(values, ["one", "two", "three"]);
//! ```

mod tree;
pub use tree::dump::{Dump, Pretty};
pub use tree::iter::Iter;
pub use tree::Tree;
