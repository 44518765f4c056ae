//! Checks that tearing a tree down gives back every allocation building it made.

use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;

use search_trees::avl::build_avl_tree;
use search_trees::balanced::build_perfectly_balanced_tree;
use search_trees::btree::build_db_tree;
use search_trees::generator::KeyGenerator;
use search_trees::properties::{calculate_node_count_db, TreeProperties};
use search_trees::random::build_random_search_tree;

/// Forwards to [`System`] and tracks live allocations per thread, so tests running in parallel
/// do not see each other's allocations.
struct CountingAllocator;

thread_local! {
    static LIVE: Cell<isize> = const { Cell::new(0) };
}

unsafe impl GlobalAlloc for CountingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = System.alloc(layout);
        if !ptr.is_null() {
            let _ = LIVE.try_with(|live| live.set(live.get() + 1));
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        let _ = LIVE.try_with(|live| live.set(live.get() - 1));
        System.dealloc(ptr, layout)
    }
}

#[global_allocator]
static ALLOCATOR: CountingAllocator = CountingAllocator;

fn live_allocations() -> isize {
    LIVE.with(Cell::get)
}

fn keys(count: usize) -> Vec<i32> {
    KeyGenerator::with_seed(42).unique_keys(count, 1, 10 * count as i32)
}

/// Builds and releases one tree of each kind so lazily initialised statics are in place before
/// anything is counted.
fn warm_up() {
    let keys = [2, 1, 3];
    build_perfectly_balanced_tree(&[1, 2, 3]).teardown();
    build_random_search_tree(&keys).teardown();
    build_avl_tree(&keys).teardown();
    build_db_tree(&keys, 2).unwrap().teardown();
}

#[test]
fn binary_teardown_releases_every_node() {
    warm_up();
    let keys = keys(1_000);
    let mut sorted = keys.clone();
    sorted.sort_unstable();

    let before = live_allocations();

    let balanced = build_perfectly_balanced_tree(&sorted);
    assert_eq!(live_allocations() - before, 1_000);
    assert_eq!(balanced.teardown(), 1_000);
    assert_eq!(live_allocations(), before);

    let random = build_random_search_tree(&keys);
    assert_eq!(random.teardown(), 1_000);
    assert_eq!(live_allocations(), before);

    let avl = build_avl_tree(&keys);
    assert_eq!(avl.size(), 1_000);
    assert_eq!(avl.teardown(), 1_000);
    assert_eq!(live_allocations(), before);
}

#[test]
fn b_tree_teardown_releases_every_node() {
    warm_up();
    let keys = keys(1_000);

    for min_degree in [2, 3, 5] {
        let before = live_allocations();

        let tree = build_db_tree(&keys, min_degree).unwrap();
        let nodes = calculate_node_count_db(tree.root());
        assert!(live_allocations() > before);
        assert_eq!(tree.teardown(), nodes);
        assert_eq!(live_allocations(), before);
    }
}

#[test]
fn dropping_a_tree_releases_it_too() {
    warm_up();
    let keys = keys(500);
    let before = live_allocations();

    drop(build_avl_tree(&keys));
    drop(build_db_tree(&keys, 4).unwrap());

    assert_eq!(live_allocations(), before);
}
