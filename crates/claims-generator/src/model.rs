//! Record types and fixed enumerations for the three generated tables.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Database identifier of an inserted member row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MemberId(pub i64);

/// Database identifier of an inserted policy row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PolicyId(pub i64);

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for PolicyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind of health plan a policy belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PolicyType {
    #[serde(rename = "HMO")]
    Hmo,
    #[serde(rename = "PPO")]
    Ppo,
    #[serde(rename = "EPO")]
    Epo,
    Medicare,
    Medicaid,
}

impl PolicyType {
    pub const ALL: [PolicyType; 5] = [
        PolicyType::Hmo,
        PolicyType::Ppo,
        PolicyType::Epo,
        PolicyType::Medicare,
        PolicyType::Medicaid,
    ];

    /// Text stored in the `policy_type` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyType::Hmo => "HMO",
            PolicyType::Ppo => "PPO",
            PolicyType::Epo => "EPO",
            PolicyType::Medicare => "Medicare",
            PolicyType::Medicaid => "Medicaid",
        }
    }

    /// Fraction of the coverage amount charged as premium.
    pub fn coverage_rate(&self) -> Decimal {
        match self {
            PolicyType::Hmo => Decimal::new(30, 4),
            PolicyType::Ppo => Decimal::new(40, 4),
            PolicyType::Epo => Decimal::new(35, 4),
            PolicyType::Medicare => Decimal::new(20, 4),
            PolicyType::Medicaid => Decimal::new(15, 4),
        }
    }
}

/// Lifecycle state of a policy. `Active` exactly when there is no end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PolicyStatus {
    Active,
    Lapsed,
    Terminated,
}

impl PolicyStatus {
    pub const ALL: [PolicyStatus; 3] = [
        PolicyStatus::Active,
        PolicyStatus::Lapsed,
        PolicyStatus::Terminated,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyStatus::Active => "ACTIVE",
            PolicyStatus::Lapsed => "LAPSED",
            PolicyStatus::Terminated => "TERMINATED",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClaimType {
    Medical,
    Dental,
    Pharmacy,
}

impl ClaimType {
    pub const ALL: [ClaimType; 3] = [ClaimType::Medical, ClaimType::Dental, ClaimType::Pharmacy];

    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimType::Medical => "MEDICAL",
            ClaimType::Dental => "DENTAL",
            ClaimType::Pharmacy => "PHARMACY",
        }
    }
}

/// Processing state of a claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClaimStatus {
    Submitted,
    Approved,
    Rejected,
    Paid,
}

impl ClaimStatus {
    pub const ALL: [ClaimStatus; 4] = [
        ClaimStatus::Submitted,
        ClaimStatus::Approved,
        ClaimStatus::Rejected,
        ClaimStatus::Paid,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimStatus::Submitted => "SUBMITTED",
            ClaimStatus::Approved => "APPROVED",
            ClaimStatus::Rejected => "REJECTED",
            ClaimStatus::Paid => "PAID",
        }
    }

    /// Whether a claim in this state carries a non-zero approved amount.
    pub fn is_payable(&self) -> bool {
        matches!(self, ClaimStatus::Approved | ClaimStatus::Paid)
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

display_as_str!(PolicyType, PolicyStatus, ClaimType, ClaimStatus);

/// A member row ready for insertion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMember {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub date_of_birth: NaiveDate,
}

/// A policy row ready for insertion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPolicy {
    pub member_id: MemberId,
    pub policy_type: PolicyType,
    pub coverage_amount: Decimal,
    pub premium_amount: Decimal,
    pub policy_status: PolicyStatus,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
}

/// A claim row ready for insertion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewClaim {
    pub policy_id: PolicyId,
    pub claim_type: ClaimType,
    pub claim_amount: Decimal,
    pub approved_amount: Decimal,
    pub claim_status: ClaimStatus,
    pub service_date: NaiveDate,
}

/// What the driver remembers about an inserted policy while generating claims.
#[derive(Debug, Clone, PartialEq)]
pub struct PolicyRef {
    pub id: PolicyId,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub coverage_amount: Decimal,
}

impl PolicyRef {
    pub fn new(id: PolicyId, policy: &NewPolicy) -> Self {
        Self {
            id,
            start_date: policy.start_date,
            end_date: policy.end_date,
            coverage_amount: policy.coverage_amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_text() {
        assert_eq!(PolicyType::Medicare.as_str(), "Medicare");
        assert_eq!(PolicyType::Hmo.to_string(), "HMO");
        assert_eq!(PolicyStatus::Terminated.to_string(), "TERMINATED");
        assert_eq!(ClaimType::Pharmacy.as_str(), "PHARMACY");
        assert_eq!(ClaimStatus::Submitted.as_str(), "SUBMITTED");
    }

    #[test]
    fn test_serde_matches_database_text() {
        for policy_type in PolicyType::ALL {
            let json = serde_json::to_string(&policy_type).unwrap();
            assert_eq!(json, format!("\"{}\"", policy_type.as_str()));
        }
        for status in ClaimStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
        }
    }

    #[test]
    fn test_coverage_rates() {
        assert_eq!(PolicyType::Hmo.coverage_rate().to_string(), "0.0030");
        assert_eq!(PolicyType::Ppo.coverage_rate().to_string(), "0.0040");
        assert_eq!(PolicyType::Epo.coverage_rate().to_string(), "0.0035");
        assert_eq!(PolicyType::Medicare.coverage_rate().to_string(), "0.0020");
        assert_eq!(PolicyType::Medicaid.coverage_rate().to_string(), "0.0015");
    }

    #[test]
    fn test_payable_statuses() {
        assert!(ClaimStatus::Approved.is_payable());
        assert!(ClaimStatus::Paid.is_payable());
        assert!(!ClaimStatus::Submitted.is_payable());
        assert!(!ClaimStatus::Rejected.is_payable());
    }
}
