use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::linked_list::LinkedList;

/// Seed used when the caller does not supply one, so classroom runs are
/// reproducible by default.
pub const DEFAULT_SEED: u64 = 42;

/// Creates a linked list containing `size` random integers between -100000
/// and 100000 (both ends inclusive), seeded with [`DEFAULT_SEED`].
pub fn create_random_linked_list(size: usize) -> LinkedList<i32> {
    create_random_linked_list_seeded(size, DEFAULT_SEED)
}

/// Like [`create_random_linked_list`], but seeded with `seed_val`. Two calls
/// with the same size and seed produce equal lists.
pub fn create_random_linked_list_seeded(size: usize, seed_val: u64) -> LinkedList<i32> {
    let mut rng = StdRng::seed_from_u64(seed_val);

    // Draw the values first, then shuffle them with the same generator, so
    // the final order is a seeded permutation of generation order.
    let mut values: Vec<i32> = (0..size).map(|_| rng.gen_range(-100_000, 100_001)).collect();
    values.shuffle(&mut rng);
    log::debug!("drew {} values with seed {}", size, seed_val);

    // Link back to front so the first shuffled value ends up at the head.
    let mut list = LinkedList::new();
    for value in values.into_iter().rev() {
        list.add(value);
    }
    list
}
