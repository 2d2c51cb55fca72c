//! Seeded normal variate generation for Monte Carlo simulations.
//!
//! [`NormalSampler`] draws standard normal variates via the Box-Muller
//! transform: each pair of uniform draws yields two independent normals,
//! and the second (the "spare") is cached for the next call, halving the
//! number of uniform draws.
//!
//! The spare makes the sampler **stateful**: two interleaved consumers
//! sharing one instance would see correlated streams. Use one sampler per
//! independent simulation run, constructed from its own seed, when
//! reproducibility matters. The type is deliberately not `Sync`; sharing
//! across threads requires one instance per thread.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded standard normal sampler (Box-Muller with spare caching).
///
/// # Examples
///
/// ```rust
/// use quantix_pricing::rng::NormalSampler;
///
/// let mut a = NormalSampler::from_seed(42);
/// let mut b = NormalSampler::from_seed(42);
///
/// // Same seed, same stream
/// assert_eq!(a.next_standard_normal(), b.next_standard_normal());
///
/// // Batch generation (zero allocation)
/// let mut buffer = vec![0.0; 128];
/// a.fill_standard_normal(&mut buffer);
/// ```
pub struct NormalSampler {
    /// The underlying uniform PRNG.
    inner: StdRng,
    /// The seed used for initialisation (kept for diagnostics).
    seed: u64,
    /// Second Box-Muller variate cached from the previous draw.
    spare: Option<f64>,
}

impl NormalSampler {
    /// Creates a sampler initialised with the given seed.
    ///
    /// The same seed always produces the same variate stream.
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
            spare: None,
        }
    }

    /// Returns the seed used for initialisation.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draws one standard normal variate.
    ///
    /// Every second call is served from the cached spare and consumes no
    /// uniform draws.
    #[inline]
    pub fn next_standard_normal(&mut self) -> f64 {
        if let Some(z) = self.spare.take() {
            return z;
        }

        // u1 in (0, 1]: the complement keeps ln(u1) finite.
        let u1: f64 = 1.0 - self.inner.gen::<f64>();
        let u2: f64 = self.inner.gen();

        let radius = (-2.0 * u1.ln()).sqrt();
        let angle = 2.0 * std::f64::consts::PI * u2;

        self.spare = Some(radius * angle.sin());
        radius * angle.cos()
    }

    /// Fills the buffer with standard normal variates.
    ///
    /// Zero-allocation: the buffer is pre-allocated by the caller. Empty
    /// buffers are a no-op.
    #[inline]
    pub fn fill_standard_normal(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = self.next_standard_normal();
        }
    }
}
