//! Cox-Ross-Rubinstein binomial lattice for American options.
//!
//! A recombining tree with `u = e^(σ√dt)`, `d = 1/u` and risk-neutral
//! up-probability `p = (e^((r-q)dt) - d) / (u - d)`. Terminal payoffs are
//! rolled back through the tree; at every interior node the American value
//! takes `max(discounted expectation, intrinsic)` — that max is what
//! captures early exercise.
//!
//! # European comparison price
//!
//! The European leg is rolled back on the *same* tree without the
//! early-exercise max. The `american >= european` no-arbitrage bound then
//! holds node-by-node at any step count, and the early-exercise premium
//! isolates exercise value from discretisation error. The closed-form
//! European price remains available from
//! [`analytical::price`](crate::analytical::price) for convergence checks.
//!
//! # Cost
//!
//! O(steps²) time, O(steps) space. `steps` is the accuracy/cost knob: the
//! lattice price converges to the continuous-time price at roughly O(1/steps).

use quantix_core::types::{DomainError, OptionContract};

/// Default number of lattice steps.
pub const DEFAULT_STEPS: u32 = 100;

/// Premium above which early exercise is flagged as valuable.
const EXERCISE_EPS: f64 = 1e-10;

/// Lattice geometry actually used for a pricing run.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TreeParams {
    /// Number of time steps.
    pub steps: u32,
    /// Up-move factor u = e^(σ√dt).
    pub up_move: f64,
    /// Down-move factor d = 1/u.
    pub down_move: f64,
    /// Risk-neutral up-probability.
    pub risk_neutral_prob: f64,
}

/// Result of a binomial lattice pricing run.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BinomialTreeResult {
    /// American option price (with early exercise).
    pub american_price: f64,
    /// European price on the same lattice (no early exercise).
    pub european_price: f64,
    /// `american_price - european_price`, non-negative.
    pub early_exercise_premium: f64,
    /// Whether early exercise carries measurable value.
    pub early_exercise_value: bool,
    /// The lattice geometry used.
    pub tree_params: TreeParams,
}

/// Cox-Ross-Rubinstein binomial lattice pricer.
///
/// # Examples
/// ```
/// use quantix_core::types::{OptionContract, OptionType};
/// use quantix_models::lattice::BinomialLattice;
///
/// // Deep ITM American put: early exercise is worth paying for
/// let put = OptionContract::new(OptionType::Put, 100.0, 110.0, 1.0, 0.05, 0.25).unwrap();
/// let result = BinomialLattice::new(200).unwrap().price(&put);
///
/// assert!(result.early_exercise_value);
/// assert!(result.early_exercise_premium > 0.0);
/// assert!(result.american_price >= result.european_price);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BinomialLattice {
    steps: u32,
}

impl Default for BinomialLattice {
    fn default() -> Self {
        Self {
            steps: DEFAULT_STEPS,
        }
    }
}

impl BinomialLattice {
    /// Creates a lattice with the given number of steps.
    ///
    /// # Errors
    /// Returns [`DomainError::InvalidSteps`] if `steps == 0`.
    pub fn new(steps: u32) -> Result<Self, DomainError> {
        if steps == 0 {
            return Err(DomainError::InvalidSteps { steps });
        }
        Ok(Self { steps })
    }

    /// Returns the configured step count.
    #[inline]
    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Prices an American option, returning the European leg and the
    /// early-exercise premium alongside it.
    ///
    /// Domain validation happens at [`OptionContract`] construction, so
    /// this method is infallible. For extreme parameter/step combinations
    /// the risk-neutral probability can leave [0, 1] (the discrete tree
    /// stops being arbitrage-free at that resolution); increasing `steps`
    /// restores it.
    pub fn price(&self, contract: &OptionContract) -> BinomialTreeResult {
        let steps = self.steps as usize;
        let spot = contract.spot();
        let strike = contract.strike();
        let option_type = contract.option_type();

        let dt = contract.expiry() / steps as f64;
        let up = (contract.volatility() * dt.sqrt()).exp();
        let down = 1.0 / up;
        let growth = ((contract.rate() - contract.dividend_yield()) * dt).exp();
        let prob_up = (growth - down) / (up - down);
        let prob_down = 1.0 - prob_up;
        let discount = (-contract.rate() * dt).exp();

        // Terminal payoffs at the steps + 1 leaves; index i counts up-moves.
        let mut american: Vec<f64> = (0..=steps)
            .map(|i| {
                let terminal_spot = spot * up.powi(i as i32) * down.powi((steps - i) as i32);
                option_type.payoff(terminal_spot, strike)
            })
            .collect();
        let mut european = american.clone();

        // Backward induction; node (step, i) has children (step+1, i+1)
        // and (step+1, i).
        for step in (0..steps).rev() {
            for i in 0..=step {
                let continuation =
                    discount * (prob_up * american[i + 1] + prob_down * american[i]);
                let node_spot = spot * up.powi(i as i32) * down.powi((step - i) as i32);
                american[i] = continuation.max(option_type.payoff(node_spot, strike));

                european[i] = discount * (prob_up * european[i + 1] + prob_down * european[i]);
            }
        }

        let american_price = american[0];
        let european_price = european[0];
        let early_exercise_premium = american_price - european_price;

        BinomialTreeResult {
            american_price,
            european_price,
            early_exercise_premium,
            early_exercise_value: early_exercise_premium > EXERCISE_EPS,
            tree_params: TreeParams {
                steps: self.steps,
                up_move: up,
                down_move: down,
                risk_neutral_prob: prob_up,
            },
        }
    }
}
