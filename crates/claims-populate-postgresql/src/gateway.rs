//! PostgreSQL-backed persistence gateway.

use crate::ddl::{create_tables_sql, generate_drop_table, TABLES};
use crate::error::PostgreSQLPopulatorError;
use async_trait::async_trait;
use claims_generator::{
    MemberId, NewClaim, NewMember, NewPolicy, PersistenceError, PersistenceGateway, PolicyId,
};
use tokio::task::JoinHandle;
use tokio_postgres::{Client, NoTls, Row, Statement};
use tracing::{debug, info};

const INSERT_MEMBER: &str = r#"INSERT INTO "members" ("first_name", "last_name", "email", "date_of_birth")
VALUES ($1, $2, $3, $4::date)
RETURNING "id"::bigint"#;

const INSERT_POLICY: &str = r#"INSERT INTO "policies"
    ("member_id", "policy_type", "coverage_amount", "premium_amount", "policy_status", "start_date", "end_date")
VALUES ($1::bigint, $2, $3::numeric, $4::numeric, $5, $6::date, $7::date)
RETURNING "id"::bigint"#;

const INSERT_CLAIM: &str = r#"INSERT INTO "claims"
    ("policy_id", "claim_type", "claim_amount", "approved_amount", "claim_status", "service_date")
VALUES ($1::bigint, $2, $3::numeric, $4::numeric, $5, $6::date)"#;

/// Insert statements prepared once per connection.
struct InsertStatements {
    member: Statement,
    policy: Statement,
    claim: Statement,
}

impl InsertStatements {
    async fn prepare(client: &Client) -> Result<Self, tokio_postgres::Error> {
        Ok(Self {
            member: client.prepare(INSERT_MEMBER).await?,
            policy: client.prepare(INSERT_POLICY).await?,
            claim: client.prepare(INSERT_CLAIM).await?,
        })
    }
}

/// Gateway holding a single PostgreSQL connection for the life of the process.
pub struct PostgreSQLGateway {
    client: Client,
    connection: JoinHandle<()>,
    statements: Option<InsertStatements>,
}

impl PostgreSQLGateway {
    /// Connect, spawn the connection task and verify the server answers.
    ///
    /// The insert statements are prepared on the first insert, after any
    /// `create_tables` call, and reused for every row after that.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let config: tokio_postgres::Config = "host=localhost user=postgres dbname=healthcare".parse()?;
    /// let mut gateway = PostgreSQLGateway::connect(&config).await?;
    /// ```
    pub async fn connect(config: &tokio_postgres::Config) -> Result<Self, PostgreSQLPopulatorError> {
        let (client, connection) = config.connect(NoTls).await.map_err(|e| {
            PostgreSQLPopulatorError::Connection(format!("Failed to connect to PostgreSQL: {e}"))
        })?;

        // Spawn the connection task
        let connection = tokio::spawn(async move {
            if let Err(e) = connection.await {
                tracing::error!("PostgreSQL connection error: {}", e);
            }
        });

        // Test connection
        client.simple_query("SELECT 1").await?;
        debug!("PostgreSQL connection established");

        Ok(Self {
            client,
            connection,
            statements: None,
        })
    }

    /// Whether the insert statements are currently prepared.
    pub fn statements_prepared(&self) -> bool {
        self.statements.is_some()
    }

    /// Create the three tables if they are missing.
    pub async fn create_tables(&mut self) -> Result<(), PostgreSQLPopulatorError> {
        self.statements = None;
        for (table_name, sql) in TABLES.iter().zip(create_tables_sql()) {
            info!("Creating table if missing: {}", table_name);
            debug!("DDL: {}", sql);
            self.client.execute(sql, &[]).await?;
        }
        Ok(())
    }

    /// Drop the three tables, children first.
    pub async fn drop_tables(&mut self) -> Result<(), PostgreSQLPopulatorError> {
        self.statements = None;
        for table_name in TABLES.iter().rev() {
            info!("Dropping table: {}", table_name);
            self.client
                .execute(&generate_drop_table(table_name), &[])
                .await?;
        }
        Ok(())
    }

    /// Get the row count for a table.
    pub async fn row_count(&self, table_name: &str) -> Result<u64, PostgreSQLPopulatorError> {
        let sql = format!("SELECT COUNT(*) FROM \"{table_name}\"");
        let row = self.client.query_one(&sql, &[]).await?;
        let count: i64 = row.get(0);
        Ok(count as u64)
    }

    /// Drop the client and wait for the connection task to finish.
    pub async fn close(self) {
        let Self {
            client,
            connection,
            statements,
        } = self;
        drop(statements);
        drop(client);
        if let Err(e) = connection.await {
            tracing::warn!("PostgreSQL connection task ended abnormally: {}", e);
        }
        debug!("PostgreSQL connection closed");
    }
}

/// Prepare the insert statements on first use and hand back the cached set.
async fn prepared<'a>(
    client: &Client,
    slot: &'a mut Option<InsertStatements>,
) -> Result<&'a InsertStatements, tokio_postgres::Error> {
    let statements = match slot.take() {
        Some(statements) => statements,
        None => {
            let statements = InsertStatements::prepare(client).await?;
            debug!("Prepared insert statements");
            statements
        }
    };
    Ok(slot.insert(statements))
}

fn returned_id(row: &Row) -> Result<i64, tokio_postgres::Error> {
    row.try_get::<_, i64>(0)
}

#[async_trait]
impl PersistenceGateway for PostgreSQLGateway {
    async fn insert_member(&mut self, member: &NewMember) -> Result<MemberId, PersistenceError> {
        let statements = prepared(&self.client, &mut self.statements)
            .await
            .map_err(|e| PersistenceError::new("member", e))?;
        let row = self
            .client
            .query_one(
                &statements.member,
                &[
                    &member.first_name,
                    &member.last_name,
                    &member.email,
                    &member.date_of_birth,
                ],
            )
            .await
            .map_err(|e| PersistenceError::new("member", e))?;

        returned_id(&row)
            .map(MemberId)
            .map_err(|e| PersistenceError::new("member", e))
    }

    async fn insert_policy(&mut self, policy: &NewPolicy) -> Result<PolicyId, PersistenceError> {
        let member_id = policy.member_id.0;
        let policy_type = policy.policy_type.as_str();
        let policy_status = policy.policy_status.as_str();
        let statements = prepared(&self.client, &mut self.statements)
            .await
            .map_err(|e| PersistenceError::new("policy", e))?;

        let row = self
            .client
            .query_one(
                &statements.policy,
                &[
                    &member_id,
                    &policy_type,
                    &policy.coverage_amount,
                    &policy.premium_amount,
                    &policy_status,
                    &policy.start_date,
                    &policy.end_date,
                ],
            )
            .await
            .map_err(|e| PersistenceError::new("policy", e))?;

        returned_id(&row)
            .map(PolicyId)
            .map_err(|e| PersistenceError::new("policy", e))
    }

    async fn insert_claim(&mut self, claim: &NewClaim) -> Result<(), PersistenceError> {
        let policy_id = claim.policy_id.0;
        let claim_type = claim.claim_type.as_str();
        let claim_status = claim.claim_status.as_str();
        let statements = prepared(&self.client, &mut self.statements)
            .await
            .map_err(|e| PersistenceError::new("claim", e))?;

        self.client
            .execute(
                &statements.claim,
                &[
                    &policy_id,
                    &claim_type,
                    &claim.claim_amount,
                    &claim.approved_amount,
                    &claim_status,
                    &claim.service_date,
                ],
            )
            .await
            .map_err(|e| PersistenceError::new("claim", e))?;

        Ok(())
    }
}
