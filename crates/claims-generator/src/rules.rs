//! Consistency rules tying generated fields together.

use crate::config::MoneyRange;
use crate::error::GeneratorError;
use crate::model::{ClaimStatus, PolicyStatus, PolicyType};
use crate::providers::{random_money, truncate_cents};
use chrono::NaiveDate;
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use rust_decimal::Decimal;

/// Selection weights for claim statuses, in [`ClaimStatus::ALL`] order.
pub const CLAIM_STATUS_WEIGHTS: [(ClaimStatus, f64); 4] = [
    (ClaimStatus::Submitted, 0.35),
    (ClaimStatus::Approved, 0.25),
    (ClaimStatus::Rejected, 0.15),
    (ClaimStatus::Paid, 0.25),
];

/// Smallest approved amount for a payable claim: 0.01.
pub fn min_approved_amount() -> Decimal {
    Decimal::new(1, 2)
}

/// Premium for a policy: coverage times the plan rate, truncated to cents and
/// raised to `bounds.min`, then capped at `bounds.max`. An inverted range
/// yields `bounds.max`.
pub fn derive_premium(policy_type: PolicyType, coverage: Decimal, bounds: MoneyRange) -> Decimal {
    let premium = truncate_cents(coverage * policy_type.coverage_rate());
    premium.max(bounds.min).min(bounds.max)
}

/// `Active` when the policy is open-ended, otherwise a coin flip between
/// `Lapsed` and `Terminated`.
pub fn choose_policy_status<R: Rng>(rng: &mut R, end_date: Option<NaiveDate>) -> PolicyStatus {
    match end_date {
        None => PolicyStatus::Active,
        Some(_) if rng.gen_bool(0.5) => PolicyStatus::Lapsed,
        Some(_) => PolicyStatus::Terminated,
    }
}

/// Draws claim statuses by weight and derives the matching approved amount.
#[derive(Debug, Clone)]
pub struct ClaimOutcomeSampler {
    index: WeightedIndex<f64>,
}

impl ClaimOutcomeSampler {
    pub fn new() -> Result<Self, GeneratorError> {
        let index = WeightedIndex::new(CLAIM_STATUS_WEIGHTS.iter().map(|(_, w)| *w))?;
        Ok(Self { index })
    }

    /// Draw a status alone.
    pub fn status<R: Rng>(&self, rng: &mut R) -> ClaimStatus {
        CLAIM_STATUS_WEIGHTS[self.index.sample(rng)].0
    }

    /// Draw a status and the approved amount for a claim of `claim_amount`.
    ///
    /// Submitted and rejected claims approve nothing; approved and paid
    /// claims approve an amount in `[0.01, claim_amount]`.
    pub fn sample<R: Rng>(&self, rng: &mut R, claim_amount: Decimal) -> (ClaimStatus, Decimal) {
        let status = self.status(rng);
        if !status.is_payable() {
            return (status, Decimal::new(0, 2));
        }
        let floor = min_approved_amount();
        let approved = random_money(rng, floor, claim_amount.max(floor));
        (status, approved)
    }
}
