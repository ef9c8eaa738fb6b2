//! Storage boundary for generated records.

use crate::error::PersistenceError;
use crate::model::{MemberId, NewClaim, NewMember, NewPolicy, PolicyId};
use async_trait::async_trait;

/// A store that accepts generated rows one at a time.
///
/// Implementations own transactional behaviour; the driver never retries and
/// stops the pass on the first error.
#[async_trait]
pub trait PersistenceGateway: Send {
    async fn insert_member(&mut self, member: &NewMember) -> Result<MemberId, PersistenceError>;

    async fn insert_policy(&mut self, policy: &NewPolicy) -> Result<PolicyId, PersistenceError>;

    async fn insert_claim(&mut self, claim: &NewClaim) -> Result<(), PersistenceError>;
}

/// Raised by [`InMemoryGateway`] once its insert budget is used up.
#[derive(Debug, thiserror::Error)]
#[error("insert limit of {0} reached")]
pub struct InsertLimitReached(pub usize);

/// Gateway that keeps rows in memory and hands out sequential identifiers.
#[derive(Debug, Default)]
pub struct InMemoryGateway {
    pub members: Vec<(MemberId, NewMember)>,
    pub policies: Vec<(PolicyId, NewPolicy)>,
    pub claims: Vec<NewClaim>,
    fail_after: Option<usize>,
}

impl InMemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail every insert after the first `inserts` succeed.
    pub fn failing_after(inserts: usize) -> Self {
        Self {
            fail_after: Some(inserts),
            ..Self::default()
        }
    }

    /// Total rows stored across all three tables.
    pub fn row_count(&self) -> usize {
        self.members.len() + self.policies.len() + self.claims.len()
    }

    fn check_budget(&self, entity: &'static str) -> Result<(), PersistenceError> {
        match self.fail_after {
            Some(limit) if self.row_count() >= limit => {
                Err(PersistenceError::new(entity, InsertLimitReached(limit)))
            }
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl PersistenceGateway for InMemoryGateway {
    async fn insert_member(&mut self, member: &NewMember) -> Result<MemberId, PersistenceError> {
        self.check_budget("member")?;
        let id = MemberId(self.members.len() as i64 + 1);
        self.members.push((id, member.clone()));
        Ok(id)
    }

    async fn insert_policy(&mut self, policy: &NewPolicy) -> Result<PolicyId, PersistenceError> {
        self.check_budget("policy")?;
        let id = PolicyId(self.policies.len() as i64 + 1);
        self.policies.push((id, policy.clone()));
        Ok(id)
    }

    async fn insert_claim(&mut self, claim: &NewClaim) -> Result<(), PersistenceError> {
        self.check_budget("claim")?;
        self.claims.push(claim.clone());
        Ok(())
    }
}
