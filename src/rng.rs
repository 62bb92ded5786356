/// Multiplier of the 32-bit linear congruential generator.
const LCG_MULTIPLIER: u32 = 1_664_525;

/// Increment of the 32-bit linear congruential generator.
const LCG_INCREMENT: u32 = 1_013_904_223;

/// 2^32 as a float divisor for mapping states into `[0, 1)`.
const LCG_MODULUS: f64 = 4_294_967_296.0;

/// Source of uniform samples in `[0, 1)` consumed by the engine.
///
/// Implemented by [`Lcg`] and by any `FnMut() -> f64` closure, so tests can
/// pass `|| 0.0` to pin every draw.
pub trait RandomSource {
    /// Advances the source and returns the next sample.
    fn next_unit(&mut self) -> f64;
}

impl<F> RandomSource for F
where
    F: FnMut() -> f64,
{
    fn next_unit(&mut self) -> f64 {
        self()
    }
}

/// Deterministic 32-bit linear congruential generator.
///
/// Each instance owns its counter; two games never share a stream unless the
/// caller hands them the same generator.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    /// Creates a generator whose sequence is fully determined by `seed`.
    #[must_use]
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Advances the generator and returns the raw 32-bit state.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(LCG_MULTIPLIER)
            .wrapping_add(LCG_INCREMENT);
        self.state
    }
}

impl RandomSource for Lcg {
    fn next_unit(&mut self) -> f64 {
        f64::from(self.next_u32()) / LCG_MODULUS
    }
}
