//! User store trait

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use super::entity::{NewUser, User, UserId};
use crate::domain::DomainError;

/// Store trait for user records
///
/// Implementations own id assignment and keep names unique. A missing record
/// is reported as `None` or `false`, never as an error, except where the
/// operation cannot proceed without it (`update`).
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Snapshot of every user in insertion order
    async fn get_all(&self) -> Result<Vec<User>, DomainError>;

    /// Find a user by id
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError>;

    /// Find a user by exact name
    async fn find_by_name(&self, name: &str) -> Result<Option<User>, DomainError>;

    /// Assign the next id to a new user and store it
    async fn create(&self, user: NewUser) -> Result<User, DomainError>;

    /// Replace the stored user with the same id, keeping its position
    async fn update(&self, user: User) -> Result<User, DomainError>;

    /// Remove a user, returning whether one was removed
    async fn delete(&self, id: UserId) -> Result<bool, DomainError>;

    /// Number of stored users
    async fn count(&self) -> Result<usize, DomainError>;

    /// Check if a user with this name exists
    async fn exists(&self, name: &str) -> Result<bool, DomainError> {
        Ok(self.find_by_name(name).await?.is_some())
    }
}
