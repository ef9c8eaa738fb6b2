//! Builds individual member, policy and claim records.

use crate::config::GenerationConfig;
use crate::error::GeneratorError;
use crate::identity::{first_name, last_name, UniqueEmails};
use crate::model::{ClaimType, MemberId, NewClaim, NewMember, NewPolicy, PolicyRef, PolicyType};
use crate::providers::{
    random_date_of_birth, random_money, random_policy_dates, random_service_date,
};
use crate::rules::{choose_policy_status, derive_premium, ClaimOutcomeSampler};
use chrono::NaiveDate;
use rand::seq::SliceRandom;
use rand::Rng;

/// Produces internally consistent records from a single RNG stream.
pub struct EntitySynthesizer<R: Rng> {
    rng: R,
    config: GenerationConfig,
    emails: UniqueEmails,
    outcomes: ClaimOutcomeSampler,
}

impl<R: Rng> EntitySynthesizer<R> {
    /// Create a synthesizer after validating `config`.
    pub fn new(config: GenerationConfig, rng: R) -> Result<Self, GeneratorError> {
        config.validate()?;
        Ok(Self {
            rng,
            config,
            emails: UniqueEmails::new(),
            outcomes: ClaimOutcomeSampler::new()?,
        })
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Email registry shared by every member this synthesizer produces.
    pub fn emails_mut(&mut self) -> &mut UniqueEmails {
        &mut self.emails
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    pub fn member(&mut self, today: NaiveDate) -> Result<NewMember, GeneratorError> {
        let first = first_name(&mut self.rng);
        let last = last_name(&mut self.rng);
        let email = self.emails.next(&mut self.rng, first, last)?;
        let date_of_birth = random_date_of_birth(
            &mut self.rng,
            today,
            self.config.min_member_age,
            self.config.max_member_age,
        );

        Ok(NewMember {
            first_name: first.to_string(),
            last_name: last.to_string(),
            email,
            date_of_birth,
        })
    }

    pub fn policy(&mut self, member_id: MemberId, today: NaiveDate) -> NewPolicy {
        let policy_type = *PolicyType::ALL
            .choose(&mut self.rng)
            .unwrap_or(&PolicyType::Hmo);
        let coverage_amount =
            random_money(&mut self.rng, self.config.coverage.min, self.config.coverage.max);
        let premium_amount = derive_premium(policy_type, coverage_amount, self.config.premium);
        let (start_date, end_date) = random_policy_dates(&mut self.rng, today);
        let policy_status = choose_policy_status(&mut self.rng, end_date);

        NewPolicy {
            member_id,
            policy_type,
            coverage_amount,
            premium_amount,
            policy_status,
            start_date,
            end_date,
        }
    }

    pub fn claim(&mut self, policy: &PolicyRef, today: NaiveDate) -> NewClaim {
        let claim_type = *ClaimType::ALL
            .choose(&mut self.rng)
            .unwrap_or(&ClaimType::Medical);
        let service_date =
            random_service_date(&mut self.rng, policy.start_date, policy.end_date, today);

        let max_claim = self.config.claim.max.min(policy.coverage_amount);
        let claim_amount = random_money(&mut self.rng, self.config.claim.min, max_claim);
        let (claim_status, approved_amount) = self.outcomes.sample(&mut self.rng, claim_amount);

        NewClaim {
            policy_id: policy.id,
            claim_type,
            claim_amount,
            approved_amount,
            claim_status,
            service_date,
        }
    }
}
