use rand::seq::SliceRandom;
use rand::Rng;

use crate::source::RandomUser;

/// Default cut-off: people born in 2000 or earlier.
pub const DEFAULT_MAX_BIRTH_YEAR: i32 = 2000;

/// Keep users born in or before `max_birth_year`. Unknown birth years are dropped.
pub fn filter_born_on_or_before(users: &[RandomUser], max_birth_year: i32) -> Vec<RandomUser> {
    users
        .iter()
        .filter(|u| u.birth_year.is_some_and(|y| y <= max_birth_year))
        .cloned()
        .collect()
}

/// Sample up to `count` items without replacement.
pub fn select_random<T: Clone, R: Rng + ?Sized>(items: &[T], count: usize, rng: &mut R) -> Vec<T> {
    items.choose_multiple(rng, count).cloned().collect()
}
