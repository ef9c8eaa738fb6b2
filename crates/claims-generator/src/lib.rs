//! Synthetic data generator for the healthcare insurance CDC demo.
//!
//! This crate produces members, policies and claims whose fields agree with
//! each other (premiums follow coverage, claim amounts stay under coverage,
//! service dates fall inside the policy window) and hands them to a
//! [`PersistenceGateway`] one row at a time.
//!
//! # Architecture
//!
//! ```text
//!  GenerationConfig
//!        │
//!        ▼
//! ┌──────────────────┐      ┌───────────────────┐
//! │ IterationDriver  │─────▶│ EntitySynthesizer │──▶ providers / rules
//! │                  │      │  - rng (StdRng)   │
//! │  members         │      │  - UniqueEmails   │
//! │   → policies     │      └───────────────────┘
//! │   → claims       │
//! └────────┬─────────┘
//!          │ insert_member / insert_policy / insert_claim
//!          ▼
//!  PersistenceGateway (PostgreSQL, in-memory)
//! ```
//!
//! # Example
//!
//! ```rust
//! use claims_generator::{GenerationConfig, InMemoryGateway, IterationDriver};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! # tokio_test_block_on(async {
//! let mut driver = IterationDriver::new(GenerationConfig::default(), StdRng::seed_from_u64(42))?;
//! let mut gateway = InMemoryGateway::new();
//! let today = chrono::NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
//!
//! let report = driver.run_pass(&mut gateway, today).await?;
//! assert_eq!(report.members, 10);
//! assert_eq!(report.claims, 50);
//! # Ok::<(), claims_generator::GeneratorError>(())
//! # }).unwrap();
//! # fn tokio_test_block_on<F: std::future::Future>(f: F) -> F::Output {
//! #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
//! # }
//! ```

pub mod config;
pub mod driver;
pub mod error;
pub mod gateway;
pub mod identity;
pub mod model;
pub mod providers;
pub mod rules;
pub mod synthesizer;

// Re-exports for convenience
pub use config::{GenerationConfig, MoneyRange};
pub use driver::{IterationDriver, PassReport};
pub use error::{GeneratorError, PersistenceError};
pub use gateway::{InMemoryGateway, PersistenceGateway};
pub use identity::UniqueEmails;
pub use model::{
    ClaimStatus, ClaimType, MemberId, NewClaim, NewMember, NewPolicy, PolicyId, PolicyRef,
    PolicyStatus, PolicyType,
};
pub use synthesizer::EntitySynthesizer;
