use avltree::Tree;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let keys = ["d", "b", "g", "g", "c", "e", "a", "h", "f", "i", "j", "l", "k"];
    let values = [
        "delta", "bravo", "golang", "golf", "charlie", "echo", "alpha", "hotel", "foxtrot",
        "india", "juliett", "lima", "kilo",
    ];

    let mut tree = Tree::new();
    for (key, value) in keys.into_iter().zip(values) {
        tree.insert(key, value);
    }

    print!("Sorted keys: | ");
    tree.traverse(|key, value| print!("{key}: {value} | "));
    println!();

    println!("Pretty print (turned 90° anti-clockwise):");
    print!("{}", tree.pretty());
    println!("With balance and height:");
    print!("{:#}", tree.pretty());
    println!("Dump:");
    print!("{}", tree.dump());
}
