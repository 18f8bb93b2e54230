//! Diagnostic renderings of a tree's shape.

use std::fmt;

use super::{Link, Tree};

/// Pre-order listing of a tree, created by [`Tree::dump`].
///
/// Each node is rendered as `key[balance,height]`. Nodes below the root are
/// prefixed with an indent and `+L--` or `+R--` telling which child they are.
pub struct Dump<'a, K, V> {
    tree: &'a Tree<K, V>,
}

/// Sideways rendering of a tree, created by [`Tree::pretty`].
///
/// Reading the output with the head tilted to the left shows the tree with its
/// root at the top. Use `{:#}` to annotate every key with balance and height.
pub struct Pretty<'a, K, V> {
    tree: &'a Tree<K, V>,
}

impl<'a, K, V> Dump<'a, K, V> {
    pub(super) fn new(tree: &'a Tree<K, V>) -> Self {
        Self { tree }
    }
}

impl<'a, K, V> Pretty<'a, K, V> {
    pub(super) fn new(tree: &'a Tree<K, V>) -> Self {
        Self { tree }
    }
}

impl<K: fmt::Display, V> fmt::Display for Dump<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_preorder(f, &self.tree.root, 0, 'L')
    }
}

impl<K: fmt::Display, V> fmt::Display for Pretty<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let annotate = f.alternate();
        write_sideways(f, &self.tree.root, 0, annotate)
    }
}

fn write_preorder<K: fmt::Display, V>(
    f: &mut fmt::Formatter<'_>,
    link: &Link<K, V>,
    depth: usize,
    side: char,
) -> fmt::Result {
    if let Some(node) = link {
        if depth > 0 {
            write!(f, "{:indent$}+{}--", "", side, indent = (depth - 1) * 4)?;
        }
        writeln!(f, "{}[{},{}]", node.key, node.balance(), node.height)?;
        write_preorder(f, &node.left, depth + 1, 'L')?;
        write_preorder(f, &node.right, depth + 1, 'R')?;
    }
    Ok(())
}

// Right subtree first, so larger keys end up above smaller ones.
fn write_sideways<K: fmt::Display, V>(
    f: &mut fmt::Formatter<'_>,
    link: &Link<K, V>,
    depth: usize,
    annotate: bool,
) -> fmt::Result {
    if let Some(node) = link {
        write_sideways(f, &node.right, depth + 1, annotate)?;
        write!(f, "{:indent$}{}", "", node.key, indent = depth * 2)?;
        if annotate {
            write!(f, "[{},{}]", node.balance(), node.height)?;
        }
        writeln!(f)?;
        write_sideways(f, &node.left, depth + 1, annotate)?;
    }
    Ok(())
}
