//! Error types for generation and persistence.

use thiserror::Error;

/// A failed insert reported by a [`PersistenceGateway`](crate::PersistenceGateway).
#[derive(Error, Debug)]
#[error("Failed to insert {entity}: {source}")]
pub struct PersistenceError {
    /// Table or entity the insert targeted.
    pub entity: &'static str,
    #[source]
    pub source: Box<dyn std::error::Error + Send + Sync>,
}

impl PersistenceError {
    pub fn new(
        entity: &'static str,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self {
            entity,
            source: source.into(),
        }
    }
}

/// Errors that can occur while generating data.
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// The generation settings are inconsistent.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The claim status weights could not be turned into a distribution.
    #[error("Invalid claim status weights: {0}")]
    InvalidWeights(#[from] rand::distributions::WeightedError),

    /// No unused email address could be found.
    #[error("Could not find an unused email address after {attempts} attempts")]
    EmailSpaceExhausted { attempts: usize },

    /// The persistence gateway rejected an insert.
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}
