//! In-memory user store implementation

use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::user::{validate_user_name, NewUser, User, UserId, UserStore};
use crate::domain::DomainError;

/// Records and the name index, guarded together so they never disagree
#[derive(Debug, Default)]
struct UserTable {
    users: BTreeMap<UserId, User>,
    name_index: HashMap<String, UserId>,
}

impl UserTable {
    fn insert(&mut self, user: User) {
        self.name_index.insert(user.name().to_string(), user.id());
        self.users.insert(user.id(), user);
    }
}

/// In-memory implementation of UserStore
///
/// Ids come from a monotonic counter and are never handed out twice, even
/// after the user holding one is deleted. Since ids only grow, iterating the
/// id-ordered map yields users in insertion order.
#[derive(Debug)]
pub struct InMemoryUserStore {
    table: RwLock<UserTable>,
    /// Last id handed out
    last_id: AtomicU64,
}

impl InMemoryUserStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            table: RwLock::new(UserTable::default()),
            last_id: AtomicU64::new(0),
        }
    }

    /// Create a store seeded with the given users, assigning ids 1, 2, ...
    pub fn with_users(users: Vec<NewUser>) -> Result<Self, DomainError> {
        let mut table = UserTable::default();
        let mut last_id = 0;

        for new_user in users {
            validate_user_name(new_user.name())
                .map_err(|e| DomainError::validation(e.to_string()))?;

            if table.name_index.contains_key(new_user.name()) {
                return Err(DomainError::conflict(format!(
                    "User name '{}' already exists",
                    new_user.name()
                )));
            }

            last_id += 1;
            table.insert(new_user.into_user(UserId::new(last_id)));
        }

        Ok(Self {
            table: RwLock::new(table),
            last_id: AtomicU64::new(last_id),
        })
    }

    fn next_id(&self) -> UserId {
        UserId::new(self.last_id.fetch_add(1, Ordering::SeqCst) + 1)
    }
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn get_all(&self) -> Result<Vec<User>, DomainError> {
        let table = self.table.read().await;
        Ok(table.users.values().cloned().collect())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError> {
        let table = self.table.read().await;
        Ok(table.users.get(&id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<User>, DomainError> {
        let table = self.table.read().await;

        Ok(table
            .name_index
            .get(name)
            .and_then(|id| table.users.get(id))
            .cloned())
    }

    async fn create(&self, user: NewUser) -> Result<User, DomainError> {
        validate_user_name(user.name()).map_err(|e| DomainError::validation(e.to_string()))?;

        let mut table = self.table.write().await;

        if table.name_index.contains_key(user.name()) {
            return Err(DomainError::conflict(format!(
                "User name '{}' already exists",
                user.name()
            )));
        }

        // Allocated under the write lock so a rejected create burns no id
        let user = user.into_user(self.next_id());
        table.insert(user.clone());

        debug!(id = %user.id(), name = %user.name(), "User created");
        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        validate_user_name(user.name()).map_err(|e| DomainError::validation(e.to_string()))?;

        let mut table = self.table.write().await;
        let id = user.id();

        let old_name = table
            .users
            .get(&id)
            .map(|existing| existing.name().to_string())
            .ok_or_else(|| DomainError::not_found(format!("User '{}' not found", id)))?;

        if old_name != user.name() {
            if table.name_index.contains_key(user.name()) {
                return Err(DomainError::conflict(format!(
                    "User name '{}' already exists",
                    user.name()
                )));
            }

            table.name_index.remove(&old_name);
        }

        table.insert(user.clone());

        debug!(id = %id, name = %user.name(), "User updated");
        Ok(user)
    }

    async fn delete(&self, id: UserId) -> Result<bool, DomainError> {
        let mut table = self.table.write().await;

        match table.users.remove(&id) {
            Some(user) => {
                table.name_index.remove(user.name());
                debug!(id = %id, "User deleted");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn count(&self) -> Result<usize, DomainError> {
        let table = self.table.read().await;
        Ok(table.users.len())
    }
}
