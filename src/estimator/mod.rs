//! Distinct-element estimation with the CVM algorithm.
//!
//! Knuth's formulation: every arriving element gets a fresh random
//! priority, the buffer keeps the elements with the smallest priorities
//! below the current threshold `p`, and `|B| / p` estimates the number of
//! distinct elements seen. Memory stays bounded by the buffer capacity.

use ahash::AHashMap;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::BTreeSet;

/// Buffer size used when none is given
pub const DEFAULT_BUFFER_SIZE: usize = 128;

/// Priorities are uniform `u64` values; the threshold is kept as a `u128`
/// so that "accept everything" (p = 1) is representable.
const ONE: u128 = 1 << 64;

#[derive(Debug)]
pub struct Cvm {
    capacity: usize,
    /// Elements are kept only if their priority is below this
    threshold: u128,
    /// Buffered element -> priority
    priorities: AHashMap<u32, u64>,
    /// Buffered (priority, element), ordered so the maximum is last
    by_priority: BTreeSet<(u64, u32)>,
    seen: u64,
    rng: ChaCha8Rng,
}

impl Cvm {
    pub fn new(capacity: usize, seed: u64) -> anyhow::Result<Self> {
        if capacity == 0 {
            anyhow::bail!("buffer size must be greater than 0");
        }
        Ok(Self {
            capacity,
            threshold: ONE,
            priorities: AHashMap::with_capacity(capacity + 1),
            by_priority: BTreeSet::new(),
            seen: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        })
    }

    /// Feed one element of the stream.
    pub fn insert(&mut self, value: u32) {
        self.seen += 1;

        if let Some(old) = self.priorities.remove(&value) {
            self.by_priority.remove(&(old, value));
        }

        let u: u64 = self.rng.random();
        if u as u128 >= self.threshold {
            return;
        }

        if self.priorities.len() < self.capacity {
            self.store(value, u);
            return;
        }

        let Some(&(max_u, max_value)) = self.by_priority.iter().next_back() else {
            return;
        };

        if u > max_u {
            self.threshold = u as u128;
        } else {
            self.by_priority.remove(&(max_u, max_value));
            self.priorities.remove(&max_value);
            self.store(value, u);
            self.threshold = max_u as u128;
        }
    }

    fn store(&mut self, value: u32, priority: u64) {
        self.priorities.insert(value, priority);
        self.by_priority.insert((priority, value));
    }

    /// Current estimate of the number of distinct elements.
    pub fn estimate(&self) -> f64 {
        self.priorities.len() as f64 / self.probability()
    }

    /// Current sampling probability `p`, in `(0, 1]`.
    pub fn probability(&self) -> f64 {
        self.threshold as f64 / ONE as f64
    }

    /// Number of buffered elements
    pub fn len(&self) -> usize {
        self.priorities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.priorities.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Total number of elements fed, duplicates included
    pub fn total_seen(&self) -> u64 {
        self.seen
    }
}
