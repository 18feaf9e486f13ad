//! Uniform rolls for the simulated outcomes (biometric success, realtime
//! notifications, usage activity).

#[cfg(test)]
#[path = "dice_test.rs"]
mod dice_test;

use std::cell::RefCell;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use uuid::Uuid;

thread_local! {
    static RNG: RefCell<SmallRng> = RefCell::new(SmallRng::seed_from_u64(fresh_seed()));
}

/// Seed from a v4 UUID so the browser build needs no extra entropy source.
fn fresh_seed() -> u64 {
    Uuid::new_v4().as_u64_pair().0
}

/// A roll in `[0, 1)`.
pub fn roll() -> f64 {
    RNG.with(|rng| rng.borrow_mut().random::<f64>())
}
