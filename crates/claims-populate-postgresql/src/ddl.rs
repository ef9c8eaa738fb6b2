//! Table definitions for the three generated tables.

/// Tables in dependency order.
pub const TABLES: [&str; 3] = ["members", "policies", "claims"];

const CREATE_MEMBERS: &str = r#"CREATE TABLE IF NOT EXISTS "members" (
    "id" BIGSERIAL PRIMARY KEY,
    "first_name" VARCHAR(100) NOT NULL,
    "last_name" VARCHAR(100) NOT NULL,
    "email" VARCHAR(255) NOT NULL UNIQUE,
    "date_of_birth" DATE NOT NULL,
    "created_at" TIMESTAMPTZ NOT NULL DEFAULT NOW()
)"#;

const CREATE_POLICIES: &str = r#"CREATE TABLE IF NOT EXISTS "policies" (
    "id" BIGSERIAL PRIMARY KEY,
    "member_id" BIGINT NOT NULL REFERENCES "members" ("id"),
    "policy_type" VARCHAR(20) NOT NULL CHECK ("policy_type" IN ('HMO', 'PPO', 'EPO', 'Medicare', 'Medicaid')),
    "coverage_amount" NUMERIC(12, 2) NOT NULL,
    "premium_amount" NUMERIC(12, 2) NOT NULL,
    "policy_status" VARCHAR(20) NOT NULL CHECK ("policy_status" IN ('ACTIVE', 'LAPSED', 'TERMINATED')),
    "start_date" DATE NOT NULL,
    "end_date" DATE,
    "created_at" TIMESTAMPTZ NOT NULL DEFAULT NOW()
)"#;

const CREATE_CLAIMS: &str = r#"CREATE TABLE IF NOT EXISTS "claims" (
    "id" BIGSERIAL PRIMARY KEY,
    "policy_id" BIGINT NOT NULL REFERENCES "policies" ("id"),
    "claim_type" VARCHAR(20) NOT NULL CHECK ("claim_type" IN ('MEDICAL', 'DENTAL', 'PHARMACY')),
    "claim_amount" NUMERIC(12, 2) NOT NULL,
    "approved_amount" NUMERIC(12, 2) NOT NULL DEFAULT 0,
    "claim_status" VARCHAR(20) NOT NULL CHECK ("claim_status" IN ('SUBMITTED', 'APPROVED', 'REJECTED', 'PAID')),
    "service_date" DATE NOT NULL,
    "created_at" TIMESTAMPTZ NOT NULL DEFAULT NOW()
)"#;

/// `CREATE TABLE IF NOT EXISTS` statements, parents before children.
pub fn create_tables_sql() -> [&'static str; 3] {
    [CREATE_MEMBERS, CREATE_POLICIES, CREATE_CLAIMS]
}

/// Generate DROP TABLE statement.
pub fn generate_drop_table(table_name: &str) -> String {
    format!("DROP TABLE IF EXISTS \"{table_name}\" CASCADE")
}
