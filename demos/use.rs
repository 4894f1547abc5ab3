use std::cmp::Ordering;

use avl_compare::{AvlTree, BinarySearchTree};

// Records are ordered by title only, the rest is payload.
#[derive(Debug)]
struct Movie {
    title: String,
    year: u16,
}

impl Movie {
    fn new(title: &str, year: u16) -> Self {
        Self {
            title: title.to_string(),
            year,
        }
    }

    fn lookup(title: &str) -> Self {
        Self::new(title, 0)
    }
}

impl PartialEq for Movie {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title
    }
}

impl Eq for Movie {}

impl PartialOrd for Movie {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Movie {
    fn cmp(&self, other: &Self) -> Ordering {
        self.title.cmp(&other.title)
    }
}

fn main() {
    let mut avl = AvlTree::new();
    avl.insert(Movie::new("Metropolis", 1927));
    avl.insert(Movie::new("Alien", 1979));
    avl.insert(Movie::new("Vertigo", 1958));
    avl.insert(Movie::new("Alien", 1986));
    assert_eq!(avl.len(), 3);

    let found = avl.get(&Movie::lookup("Alien"));
    assert_eq!(found.map(|movie| movie.year), Some(1979));
    avl.remove(&Movie::lookup("Alien"));
    assert!(!avl.contains(&Movie::lookup("Alien")));

    for movie in &avl {
        println!("{} ({})", movie.title, movie.year);
    }

    let mut bst: BinarySearchTree<i32> = (0..5).collect();
    assert!(bst.contains(&1));
    bst.remove(&1);
    assert!(!bst.contains(&1));
    println!("{:?} has height {}", bst, bst.height());

    match AvlTree::<i32>::new().find_min() {
        Ok(min) => println!("smallest: {min}"),
        Err(err) => println!("no smallest value: {err}"),
    }
}
