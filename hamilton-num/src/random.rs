// hamilton-num - Random number source
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Thread-local random source backing the `random` operations.

use std::cell::Cell;

// LCG constants (same as used in glibc)
const LCG_MULTIPLIER: u64 = 6364136223846793005;
const LCG_INCREMENT: u64 = 1442695040888963407;

thread_local! {
    /// Persistent RNG state, seeded lazily from system time.
    static RNG_STATE: Cell<u64> = const { Cell::new(0) };
    static RNG_SEEDED: Cell<bool> = const { Cell::new(false) };
}

/// Get the next random u64, advancing the RNG state.
fn next_u64() -> u64 {
    RNG_STATE.with(|state| {
        RNG_SEEDED.with(|seeded| {
            if !seeded.get() {
                // Seed lazily from system time
                use std::time::{SystemTime, UNIX_EPOCH};
                let seed = SystemTime::now()
                    .duration_since(UNIX_EPOCH)
                    .map(|d| d.as_nanos() as u64)
                    .unwrap_or(0x9e3779b97f4a7c15);
                state.set(seed);
                seeded.set(true);
            }
        });
        let current = state.get();
        let next = current
            .wrapping_mul(LCG_MULTIPLIER)
            .wrapping_add(LCG_INCREMENT);
        state.set(next);
        next
    })
}

/// Get a random f64 in [0, 1).
pub(crate) fn next_f64() -> f64 {
    // 53 high bits give a uniform dyadic in [0, 1)
    ((next_u64() >> 11) as f64) / ((1u64 << 53) as f64)
}
