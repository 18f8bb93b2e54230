use std::ops::ControlFlow;

use avltree::Tree;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut tree = Tree::new();
    tree.insert(0, "zero");
    tree.insert(1, "one");
    tree.insert(2, "two");
    tree.insert(2, "two");
    tree.insert(3, "three");
    tree.insert(4, "four");
    tree.insert(5, "five");
    assert_eq!(tree.get(&1), Some(&"one"));
    assert!(tree.get(&6).is_none());

    tree.traverse(|k, v| println!("{k} => {v}"));

    let first_long = tree.try_traverse(|k, v| {
        if v.len() > 4 {
            ControlFlow::Break(*k)
        } else {
            ControlFlow::Continue(())
        }
    });
    println!("first key with a long name: {first_long:?}");
}
