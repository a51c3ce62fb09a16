//! Procedural generators for every collection in a [`Dataset`](crate::Dataset).
//!
//! Each generator takes the random source explicitly, and the time-dependent ones
//! take `now` as well, so a seeded `StdRng` and a fixed clock reproduce a dataset
//! exactly.

mod audience;
mod buzz;
mod campaigns;
mod performance;
mod profiles;

pub use audience::generate_audience;
pub use buzz::generate_buzz_trends;
pub use campaigns::generate_campaigns;
pub use performance::{generate_performance, DAILY_SERIES_DAYS};
pub use profiles::{generate_profiles, profile_name};

use rand::Rng;

/// Uniformly pick one entry of a non-empty pool.
fn pick<'a, T, R>(rng: &mut R, items: &'a [T]) -> &'a T
where
    R: Rng + ?Sized,
{
    &items[rng.random_range(0..items.len())]
}
