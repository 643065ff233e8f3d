//! Trait abstraction over the directory service to enable mocking in tests

use async_trait::async_trait;

use crate::error::DirectoryError;
use crate::models::{CityName, StateName};

/// Source of the state and city lists
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DirectoryService: Send + Sync {
    /// All states, in the order the service returns them
    async fn fetch_states(&self) -> Result<Vec<StateName>, DirectoryError>;

    /// All cities of `state`, in the order the service returns them
    async fn fetch_cities(&self, state: &StateName) -> Result<Vec<CityName>, DirectoryError>;
}
