//! Dry-run gateway that prints generated rows instead of storing them.

use async_trait::async_trait;
use claims_generator::{
    InMemoryGateway, MemberId, NewClaim, NewMember, NewPolicy, PersistenceError,
    PersistenceGateway, PolicyId,
};
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct JsonLine<'a, T: Serialize> {
    table: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<i64>,
    row: &'a T,
}

/// Wraps an [`InMemoryGateway`] and writes each inserted row as one JSON line.
pub struct JsonLinesGateway<W: Write + Send> {
    inner: InMemoryGateway,
    out: W,
}

impl<W: Write + Send> JsonLinesGateway<W> {
    pub fn new(out: W) -> Self {
        Self {
            inner: InMemoryGateway::new(),
            out,
        }
    }

    pub fn inner(&self) -> &InMemoryGateway {
        &self.inner
    }

    pub fn into_writer(self) -> W {
        self.out
    }

    fn write_line<T: Serialize>(
        &mut self,
        table: &'static str,
        id: Option<i64>,
        row: &T,
    ) -> Result<(), PersistenceError> {
        let line = JsonLine { table, id, row };
        serde_json::to_writer(&mut self.out, &line)
            .map_err(|e| PersistenceError::new(table, e))?;
        self.out
            .write_all(b"\n")
            .map_err(|e| PersistenceError::new(table, e))
    }
}

#[async_trait]
impl<W: Write + Send> PersistenceGateway for JsonLinesGateway<W> {
    async fn insert_member(&mut self, member: &NewMember) -> Result<MemberId, PersistenceError> {
        let id = self.inner.insert_member(member).await?;
        self.write_line("members", Some(id.0), member)?;
        Ok(id)
    }

    async fn insert_policy(&mut self, policy: &NewPolicy) -> Result<PolicyId, PersistenceError> {
        let id = self.inner.insert_policy(policy).await?;
        self.write_line("policies", Some(id.0), policy)?;
        Ok(id)
    }

    async fn insert_claim(&mut self, claim: &NewClaim) -> Result<(), PersistenceError> {
        self.inner.insert_claim(claim).await?;
        self.write_line("claims", None, claim)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use claims_generator::{GenerationConfig, IterationDriver};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[tokio::test]
    async fn test_writes_one_line_per_row() {
        let config = GenerationConfig {
            members: 2,
            claims: 3,
            ..Default::default()
        };
        let mut driver = IterationDriver::new(config, StdRng::seed_from_u64(42)).unwrap();
        let mut gateway = JsonLinesGateway::new(Vec::new());
        let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();

        driver.run_pass(&mut gateway, today).await.unwrap();
        assert_eq!(gateway.inner().row_count(), 7);

        let output = String::from_utf8(gateway.into_writer()).unwrap();
        let lines: Vec<serde_json::Value> = output
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();

        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0]["table"], "members");
        assert_eq!(lines[0]["id"], 1);
        assert_eq!(lines[2]["table"], "policies");
        assert_eq!(lines[2]["row"]["member_id"], 1);
        assert_eq!(lines[6]["table"], "claims");
        assert!(lines[6].get("id").is_none());
        // Money is serialized as an exact string
        assert!(lines[2]["row"]["coverage_amount"].is_string());
    }
}
