//! One generation pass: members, then their policies, then claims.

use crate::config::GenerationConfig;
use crate::error::GeneratorError;
use crate::gateway::PersistenceGateway;
use crate::model::{MemberId, PolicyRef};
use crate::synthesizer::EntitySynthesizer;
use chrono::NaiveDate;
use rand::seq::SliceRandom;
use rand::Rng;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Counts from a completed pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PassReport {
    pub members: u64,
    pub policies: u64,
    pub claims: u64,
    /// Wall time of the pass, including persistence.
    pub duration: Duration,
}

impl PassReport {
    pub fn total_rows(&self) -> u64 {
        self.members + self.policies + self.claims
    }

    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.duration.as_secs_f64() > 0.0 {
            self.total_rows() as f64 / self.duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Runs generation passes against a [`PersistenceGateway`].
///
/// The driver keeps its RNG and email registry across passes, so successive
/// passes produce different data and never reuse an address.
pub struct IterationDriver<R: Rng> {
    synthesizer: EntitySynthesizer<R>,
}

impl<R: Rng + Send> IterationDriver<R> {
    pub fn new(config: GenerationConfig, rng: R) -> Result<Self, GeneratorError> {
        Ok(Self {
            synthesizer: EntitySynthesizer::new(config, rng)?,
        })
    }

    pub fn config(&self) -> &GenerationConfig {
        self.synthesizer.config()
    }

    pub fn synthesizer_mut(&mut self) -> &mut EntitySynthesizer<R> {
        &mut self.synthesizer
    }

    /// Generate and insert one full pass. The first persistence error aborts the pass.
    pub async fn run_pass<G>(
        &mut self,
        gateway: &mut G,
        today: NaiveDate,
    ) -> Result<PassReport, GeneratorError>
    where
        G: PersistenceGateway + ?Sized,
    {
        let start = Instant::now();
        let config = self.synthesizer.config().clone();
        let mut report = PassReport::default();

        let mut members: Vec<MemberId> = Vec::with_capacity(config.members as usize);
        for _ in 0..config.members {
            let member = self.synthesizer.member(today)?;
            let id = gateway.insert_member(&member).await?;
            members.push(id);
        }
        report.members = members.len() as u64;
        debug!("Inserted {} members", report.members);

        let mut policies: Vec<PolicyRef> = Vec::with_capacity(config.policies_per_pass() as usize);
        for member_id in &members {
            for _ in 0..config.policies_per_member {
                let policy = self.synthesizer.policy(*member_id, today);
                let id = gateway.insert_policy(&policy).await?;
                policies.push(PolicyRef::new(id, &policy));
            }
        }
        report.policies = policies.len() as u64;
        debug!("Inserted {} policies", report.policies);

        if policies.is_empty() && config.claims > 0 {
            warn!(
                "No policies generated in this pass; skipping {} claims",
                config.claims
            );
        } else {
            for _ in 0..config.claims {
                let Some(policy) = policies.choose(self.synthesizer.rng_mut()) else {
                    break;
                };
                let claim = self.synthesizer.claim(policy, today);
                gateway.insert_claim(&claim).await?;
                report.claims += 1;
            }
            debug!("Inserted {} claims", report.claims);
        }

        report.duration = start.elapsed();
        info!(
            "Generated {} members, {} policies, {} claims in {:?}",
            report.members, report.policies, report.claims, report.duration
        );

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::InMemoryGateway;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 31).unwrap()
    }

    #[test]
    fn test_report_rates() {
        let report = PassReport {
            members: 10,
            policies: 10,
            claims: 80,
            duration: Duration::from_secs(2),
        };
        assert_eq!(report.total_rows(), 100);
        assert_eq!(report.rows_per_second(), 50.0);
        assert_eq!(PassReport::default().rows_per_second(), 0.0);
    }

    #[tokio::test]
    async fn test_multiple_policies_per_member() {
        let config = GenerationConfig {
            members: 4,
            policies_per_member: 3,
            claims: 20,
            ..Default::default()
        };
        let mut driver = IterationDriver::new(config, StdRng::seed_from_u64(42)).unwrap();
        let mut gateway = InMemoryGateway::new();

        let report = driver.run_pass(&mut gateway, today()).await.unwrap();

        assert_eq!(report.members, 4);
        assert_eq!(report.policies, 12);
        assert_eq!(report.claims, 20);
        for (id, _) in &gateway.members {
            let owned = gateway
                .policies
                .iter()
                .filter(|(_, p)| p.member_id == *id)
                .count();
            assert_eq!(owned, 3);
        }
    }

    #[tokio::test]
    async fn test_no_policies_skips_claims() {
        let config = GenerationConfig {
            members: 2,
            policies_per_member: 0,
            claims: 5,
            ..Default::default()
        };
        let mut driver = IterationDriver::new(config, StdRng::seed_from_u64(42)).unwrap();
        let mut gateway = InMemoryGateway::new();

        let report = driver.run_pass(&mut gateway, today()).await.unwrap();
        assert_eq!(report.members, 2);
        assert_eq!(report.policies, 0);
        assert_eq!(report.claims, 0);
        assert!(gateway.claims.is_empty());
    }

    #[tokio::test]
    async fn test_persistence_error_aborts_pass() {
        let mut driver =
            IterationDriver::new(GenerationConfig::default(), StdRng::seed_from_u64(42)).unwrap();
        // 10 members + 10 policies succeed, the first claim fails
        let mut gateway = InMemoryGateway::failing_after(20);

        let err = driver.run_pass(&mut gateway, today()).await.unwrap_err();
        match err {
            GeneratorError::Persistence(e) => assert_eq!(e.entity, "claim"),
            other => panic!("Expected persistence error, got {other:?}"),
        }
        // Rows written before the failure stay written
        assert_eq!(gateway.members.len(), 10);
        assert_eq!(gateway.policies.len(), 10);
        assert!(gateway.claims.is_empty());
    }
}
