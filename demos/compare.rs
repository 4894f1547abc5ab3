//! Feeds the same keys, once sorted and once shuffled, into both trees and
//! reports heights and timings.
//!
//! Usage: `cargo run --example compare -- [N] [SEED]`, log level via `RUST_LOG`.

use std::env;
use std::time::{Duration, Instant};

use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

use avl_compare::{AvlTree, BinarySearchTree, SearchTree};

const DEFAULT_N: u32 = 10_000;
const DEFAULT_SEED: u64 = 42;

struct Timing {
    insert: Duration,
    search: Duration,
    height: isize,
}

fn measure<S: SearchTree<u32>>(values: &[u32]) -> Timing {
    let mut tree = S::default();

    let start = Instant::now();
    for value in values {
        tree.insert(*value);
    }
    let insert = start.elapsed();

    let start = Instant::now();
    let found = values.iter().filter(|value| tree.contains(value)).count();
    let search = start.elapsed();
    debug_assert_eq!(found, values.len());

    Timing {
        insert,
        search,
        height: tree.height(),
    }
}

fn report(label: &str, timing: &Timing, n: usize) {
    let per_node = |total: Duration| total.as_secs_f64() / n.max(1) as f64;
    log::info!(
        "{label:<14} height={:<6} insert={:.6}s ({:.9}s/node) search={:.6}s ({:.9}s/node)",
        timing.height,
        timing.insert.as_secs_f64(),
        per_node(timing.insert),
        timing.search.as_secs_f64(),
        per_node(timing.search),
    );
}

fn parse_arg<T: std::str::FromStr>(arg: Option<String>, default: T, name: &str) -> T {
    match arg.map(|value| value.parse::<T>()) {
        None => default,
        Some(Ok(value)) => value,
        Some(Err(_)) => {
            log::warn!("ignoring invalid {name}, using default");
            default
        }
    }
}

fn main() {
    if env::var_os("RUST_LOG").is_none() {
        env::set_var("RUST_LOG", "info");
    }
    pretty_env_logger::init();

    let mut args = env::args().skip(1);
    let n = parse_arg(args.next(), DEFAULT_N, "N");
    let seed = parse_arg(args.next(), DEFAULT_SEED, "SEED");
    log::info!("comparing trees with N={n}, seed={seed}");

    let sorted: Vec<u32> = (0..n).collect();
    let mut shuffled = sorted.clone();
    shuffled.shuffle(&mut StdRng::seed_from_u64(seed));

    for (order, values) in [("sorted", &sorted), ("random", &shuffled)] {
        report(&format!("AVL ({order})"), &measure::<AvlTree<u32>>(values), values.len());
        report(&format!("BST ({order})"), &measure::<BinarySearchTree<u32>>(values), values.len());
    }
}
