use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::position::GamePosition;
use crate::board::types::Color;

use super::Evaluator;

/// Seed used by the stock `Casual` strategy
pub const DEFAULT_NOISE_SEED: u64 = 0x00C0_FFEE;

/// Perturbation bound used by the stock `Casual` strategy, in centipawns
pub const DEFAULT_NOISE_AMPLITUDE: i32 = 10;

/// Adds a pseudo-random perturbation in `-amplitude..=amplitude` to `inner`.
///
/// Breaks ties between equal moves and makes looping lines less attractive.
/// The generator is seeded explicitly; the sequence of values still depends
/// on the order evaluations happen in.
#[derive(Debug)]
pub struct Noisy<E> {
    inner: E,
    amplitude: i32,
    rng: Mutex<StdRng>,
}

impl<E: Evaluator> Noisy<E> {
    pub fn new(inner: E, amplitude: i32, seed: u64) -> Self {
        Noisy {
            inner,
            amplitude: amplitude.abs(),
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn amplitude(&self) -> i32 {
        self.amplitude
    }
}

impl<E: Evaluator> Evaluator for Noisy<E> {
    fn evaluate(&self, position: &GamePosition, perspective: Color) -> i32 {
        let base = self.inner.evaluate(position, perspective);
        if self.amplitude == 0 {
            return base;
        }
        let noise = self.rng.lock().gen_range(-self.amplitude..=self.amplitude);
        base + noise
    }
}
