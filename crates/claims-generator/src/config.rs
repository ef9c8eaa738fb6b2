//! Generation settings with the demo defaults.

use crate::error::GeneratorError;
use crate::rules::min_approved_amount;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A closed currency range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoneyRange {
    pub min: Decimal,
    pub max: Decimal,
}

impl MoneyRange {
    pub fn new(min: Decimal, max: Decimal) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: Decimal) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Counts and bounds for one generation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Members inserted per pass
    pub members: u32,
    /// Policies inserted for each member
    pub policies_per_member: u32,
    /// Claims inserted per pass, spread randomly across the pass's policies
    pub claims: u32,
    pub coverage: MoneyRange,
    /// Bounds the derived premium is clamped into
    pub premium: MoneyRange,
    /// Claim amounts; the upper bound is further capped by the policy's coverage
    pub claim: MoneyRange,
    pub min_member_age: u32,
    pub max_member_age: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            members: 10,
            policies_per_member: 1,
            claims: 50,
            coverage: MoneyRange::new(Decimal::new(500000, 2), Decimal::new(20000000, 2)),
            premium: MoneyRange::new(Decimal::new(5000, 2), Decimal::new(120000, 2)),
            claim: MoneyRange::new(Decimal::new(1000, 2), Decimal::new(500000, 2)),
            min_member_age: 0,
            max_member_age: 85,
        }
    }
}

impl GenerationConfig {
    /// Check that every range is ordered, holds whole cents, and that claims
    /// always fit under coverage.
    pub fn validate(&self) -> Result<(), GeneratorError> {
        for (name, range) in [
            ("coverage", self.coverage),
            ("premium", self.premium),
            ("claim", self.claim),
        ] {
            if range.min > range.max {
                return Err(GeneratorError::InvalidConfig(format!(
                    "{name} range is inverted: {} > {}",
                    range.min, range.max
                )));
            }
            if range.min.is_sign_negative() {
                return Err(GeneratorError::InvalidConfig(format!(
                    "{name} minimum must not be negative: {}",
                    range.min
                )));
            }
            for bound in [range.min, range.max] {
                if bound.normalize().scale() > 2 {
                    return Err(GeneratorError::InvalidConfig(format!(
                        "{name} bound {bound} has more than two decimal places"
                    )));
                }
            }
        }

        // A zero claim would leave no room for the 0.01 approved floor.
        if self.claim.min < min_approved_amount() {
            return Err(GeneratorError::InvalidConfig(format!(
                "claim minimum {} is below {}",
                self.claim.min,
                min_approved_amount()
            )));
        }

        if self.min_member_age > self.max_member_age {
            return Err(GeneratorError::InvalidConfig(format!(
                "member age range is inverted: {} > {}",
                self.min_member_age, self.max_member_age
            )));
        }

        if self.claim.min > self.coverage.min {
            return Err(GeneratorError::InvalidConfig(format!(
                "claim minimum {} exceeds coverage minimum {}",
                self.claim.min, self.coverage.min
            )));
        }

        Ok(())
    }

    /// Policies a full pass inserts.
    pub fn policies_per_pass(&self) -> u64 {
        u64::from(self.members) * u64::from(self.policies_per_member)
    }
}
