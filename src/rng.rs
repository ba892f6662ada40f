//! Random capability injected into everything that needs chance.
//!
//! Logic modules never touch platform entropy directly; they take a
//! `RandomSource` so tests can drive them with a seeded generator and assert
//! exact outcomes.

/// Uniform random primitives. Implementors supply `next_u32`; the index and
/// unit-interval views are derived.
pub trait RandomSource {
    fn next_u32(&mut self) -> u32;

    /// Uniform index in `0..len`. A zero `len` yields 0 rather than dividing
    /// by zero, matching how empty datasets are handled elsewhere.
    fn next_index(&mut self, len: usize) -> usize {
        (self.next_u32() as usize) % len.max(1)
    }

    /// Uniform float in `[0, 1)`.
    fn next_unit(&mut self) -> f64 {
        f64::from(self.next_u32()) / (f64::from(u32::MAX) + 1.0)
    }
}

/// Linear congruential generator. Small, deterministic and plenty for
/// picking glyphs and button positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    pub fn new(seed: u32) -> Self {
        Lcg { state: seed }
    }
}

impl RandomSource for Lcg {
    fn next_u32(&mut self) -> u32 {
        // LCG constants
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }
}

/// Generator seeded from platform entropy (the browser's crypto source on
/// wasm). Falls back to a fixed seed if entropy is unavailable; the widget
/// still works, just predictably.
pub fn entropy_seeded() -> Lcg {
    let mut buf = [0u8; 4];
    let seed = match getrandom::getrandom(&mut buf) {
        Ok(()) => u32::from_le_bytes(buf),
        Err(_) => 0x5EED_CAFE,
    };
    Lcg::new(seed)
}
